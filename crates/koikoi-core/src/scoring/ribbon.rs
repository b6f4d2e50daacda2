use crate::model::card::CardKind;
use crate::model::card_set::CardSet;
use crate::scoring::rules::RibbonRules;
use crate::scoring::yaku::{self, YakuResult};

/// Ribbon yaku: aka-tan, ao-tan, tan-zaku, in that order.
pub fn check_ribbon(rules: &RibbonRules, cards: &CardSet) -> Vec<YakuResult> {
    let mut completed = Vec::new();

    let points = yaku::AKA_TAN.check(cards);
    if points > 0 {
        completed.push(YakuResult {
            name: yaku::AKA_TAN.name,
            points,
        });
        if !rules.allow_multiple {
            return completed;
        }
    }

    let points = yaku::AO_TAN.check(cards);
    if points > 0 {
        completed.push(YakuResult {
            name: yaku::AO_TAN.name,
            points,
        });
        if !rules.allow_multiple {
            return completed;
        }
    }

    let base = yaku::TAN_ZAKU.check(cards);
    if base > 0 {
        let ribbon_count = cards.count_of_kind(CardKind::Ribbon);
        let extra = ribbon_count.saturating_sub(5) as u32 * rules.extra_points;
        completed.push(YakuResult {
            name: yaku::TAN_ZAKU.name,
            points: base + extra,
        });
    }

    completed
}

#[cfg(test)]
mod tests {
    use super::check_ribbon;
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;
    use crate::scoring::rules::RibbonRules;
    use crate::scoring::yaku::YakuName;

    fn id(index: u8) -> CardId {
        CardId::new(index).unwrap()
    }

    #[test]
    fn scores_poetry_ribbons() {
        let cards = CardSet::with_cards([id(1), id(5), id(9)]);
        let results = check_ribbon(&RibbonRules::default(), &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::AkaTan);
        assert_eq!(results[0].points, 5);
    }

    #[test]
    fn scores_blue_ribbons() {
        let cards = CardSet::with_cards([id(21), id(33), id(37)]);
        let results = check_ribbon(&RibbonRules::default(), &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::AoTan);
    }

    #[test]
    fn five_plain_ribbons_score_tan_zaku_with_extras() {
        let cards = CardSet::with_cards([id(13), id(17), id(25), id(42), id(1), id(5)]);
        let results = check_ribbon(&RibbonRules::default(), &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::TanZaku);
        assert_eq!(results[0].points, 1 + 1);
    }

    #[test]
    fn all_three_patterns_score_independently() {
        // both ribbon trios plus one red ribbon: 7 ribbons total
        let cards = CardSet::with_cards([id(1), id(5), id(9), id(21), id(33), id(37), id(13)]);
        let results = check_ribbon(&RibbonRules::default(), &cards);
        let names: Vec<YakuName> = results.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![YakuName::AkaTan, YakuName::AoTan, YakuName::TanZaku]
        );
        assert_eq!(results[2].points, 1 + 2);
    }

    #[test]
    fn allow_multiple_false_stops_at_first_hit() {
        let cards = CardSet::with_cards([id(1), id(5), id(9), id(21), id(33), id(37), id(13)]);
        let rules = RibbonRules {
            allow_multiple: false,
            ..RibbonRules::default()
        };
        let results = check_ribbon(&rules, &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::AkaTan);
    }
}
