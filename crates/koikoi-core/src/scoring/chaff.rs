use crate::model::card::{CardId, CardKind};
use crate::model::card_set::CardSet;
use crate::scoring::rules::ChaffRules;
use crate::scoring::yaku::{self, YakuResult};

/// Chaff yaku: kasu at ten or more chaff cards. A counted sake cup
/// contributes to both the threshold and the overage.
pub fn check_chaff(rules: &ChaffRules, cards: &CardSet) -> Vec<YakuResult> {
    let mut count = cards.count_of_kind(CardKind::Chaff);
    if rules.count_wildcard && cards.contains(CardId::SAKE_CUP) {
        count += 1;
    }

    if count < 10 {
        return Vec::new();
    }

    let extra = (count - 10) as u32 * rules.extra_points;
    vec![YakuResult {
        name: yaku::KASU.name,
        points: yaku::KASU.points + extra,
    }]
}

#[cfg(test)]
mod tests {
    use super::check_chaff;
    use crate::model::card::{CardId, CardKind};
    use crate::model::card_set::CardSet;
    use crate::scoring::rules::ChaffRules;
    use crate::scoring::yaku::YakuName;

    fn chaff_cards(count: usize) -> CardSet {
        CardId::all()
            .filter(|c| c.kind() == CardKind::Chaff)
            .take(count)
            .collect()
    }

    #[test]
    fn ten_chaff_score_kasu() {
        let results = check_chaff(&ChaffRules::default(), &chaff_cards(10));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::Kasu);
        assert_eq!(results[0].points, 1);
    }

    #[test]
    fn nine_chaff_score_nothing() {
        assert!(check_chaff(&ChaffRules::default(), &chaff_cards(9)).is_empty());
    }

    #[test]
    fn extras_add_points_per_card() {
        let results = check_chaff(&ChaffRules::default(), &chaff_cards(12));
        assert_eq!(results[0].points, 3);

        let rules = ChaffRules {
            extra_points: 0,
            ..ChaffRules::default()
        };
        let results = check_chaff(&rules, &chaff_cards(12));
        assert_eq!(results[0].points, 1);
    }

    #[test]
    fn counted_sake_cup_fills_the_threshold() {
        let mut cards = chaff_cards(9);
        cards.add(CardId::SAKE_CUP);
        assert!(check_chaff(&ChaffRules::default(), &cards).is_empty());

        let rules = ChaffRules {
            count_wildcard: true,
            ..ChaffRules::default()
        };
        let results = check_chaff(&rules, &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].points, 1);
    }

    #[test]
    fn counted_sake_cup_adds_to_the_overage() {
        let mut cards = chaff_cards(10);
        cards.add(CardId::SAKE_CUP);
        let rules = ChaffRules {
            count_wildcard: true,
            ..ChaffRules::default()
        };
        let results = check_chaff(&rules, &cards);
        assert_eq!(results[0].points, 2);
    }
}
