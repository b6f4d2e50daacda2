use crate::model::card_set::CardSet;
use crate::scoring::context::ScoringContext;
use crate::scoring::rules::MonthRules;
use crate::scoring::yaku::{self, YakuResult};

/// Month yaku: tsuki-fuda for all four cards of the context month. With
/// `allow_multiple_months`, every other fully-collected month scores once
/// as well.
pub fn check_month(
    rules: &MonthRules,
    cards: &CardSet,
    ctx: &ScoringContext<'_>,
) -> Vec<YakuResult> {
    let mut completed = Vec::new();

    if !(1..=12).contains(&ctx.current_month) {
        return completed;
    }

    let counts = cards.month_counts();

    if counts[(ctx.current_month - 1) as usize] == 4 {
        completed.push(YakuResult {
            name: yaku::TSUKI_FUDA.name,
            points: yaku::TSUKI_FUDA.points,
        });
    }

    if rules.allow_multiple_months {
        for (index, &count) in counts.iter().enumerate() {
            let month = index as u8 + 1;
            if month != ctx.current_month && count == 4 {
                completed.push(YakuResult {
                    name: yaku::TSUKI_FUDA.name,
                    points: yaku::TSUKI_FUDA.points,
                });
            }
        }
    }

    completed
}
