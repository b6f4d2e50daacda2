use crate::model::card_set::CardSet;
use crate::scoring::context::ScoringContext;
use crate::scoring::yaku::{self, YakuResult};

/// Hand yaku (teyaku), recognized only in an undrawn 8-card starting hand:
/// teshi (four of a month), then kuttsuki (four pairs). An 8-card hand can
/// never hold both, but the order is fixed regardless.
pub fn check_hand(cards: &CardSet, ctx: &ScoringContext<'_>) -> Vec<YakuResult> {
    if !ctx.check_teyaku || cards.len() != 8 {
        return Vec::new();
    }

    let counts = cards.month_counts();

    if counts.iter().any(|&count| count == 4) {
        return vec![YakuResult {
            name: yaku::TESHI.name,
            points: yaku::TESHI.points,
        }];
    }

    if counts.iter().all(|&count| count == 0 || count == 2) {
        return vec![YakuResult {
            name: yaku::KUTTSUKI.name,
            points: yaku::KUTTSUKI.points,
        }];
    }

    Vec::new()
}
