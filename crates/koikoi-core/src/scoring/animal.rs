use crate::model::card::{CardId, CardKind};
use crate::model::card_set::CardSet;
use crate::scoring::rules::AnimalRules;
use crate::scoring::yaku::{self, YakuResult};

/// Animal yaku: ino-shika-chou, then tane-zaku. When the sake cup is not
/// counted it is excluded from both the qualifying set and the animal tally.
pub fn check_animal(rules: &AnimalRules, cards: &CardSet) -> Vec<YakuResult> {
    let mut completed = Vec::new();

    let effective;
    let cards = if !rules.count_wildcard && cards.contains(CardId::SAKE_CUP) {
        let mut copy = cards.clone();
        copy.remove(CardId::SAKE_CUP);
        effective = copy;
        &effective
    } else {
        cards
    };

    let animal_count = cards.count_of_kind(CardKind::Animal);

    let base = yaku::INO_SHIKA_CHOU.check(cards);
    if base > 0 {
        let extra = animal_count.saturating_sub(3) as u32 * rules.extra_points;
        completed.push(YakuResult {
            name: yaku::INO_SHIKA_CHOU.name,
            points: base + extra,
        });
        if !rules.allow_multiple {
            return completed;
        }
    }

    let base = yaku::TANE_ZAKU.check(cards);
    if base > 0 {
        let extra = animal_count.saturating_sub(5) as u32 * rules.extra_points;
        completed.push(YakuResult {
            name: yaku::TANE_ZAKU.name,
            points: base + extra,
        });
    }

    completed
}

#[cfg(test)]
mod tests {
    use super::check_animal;
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;
    use crate::scoring::rules::AnimalRules;
    use crate::scoring::yaku::YakuName;

    fn id(index: u8) -> CardId {
        CardId::new(index).unwrap()
    }

    fn trio() -> CardSet {
        CardSet::with_cards([CardId::BOAR, CardId::DEER, CardId::BUTTERFLY])
    }

    #[test]
    fn scores_ino_shika_chou() {
        let results = check_animal(&AnimalRules::default(), &trio());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::InoShikaChou);
        assert_eq!(results[0].points, 5);
    }

    #[test]
    fn counted_sake_cup_adds_an_extra_point() {
        let mut cards = trio();
        cards.add(CardId::SAKE_CUP);
        let results = check_animal(&AnimalRules::default(), &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].points, 6);
    }

    #[test]
    fn uncounted_sake_cup_is_invisible() {
        let mut cards = trio();
        cards.add(CardId::SAKE_CUP);
        let rules = AnimalRules {
            count_wildcard: false,
            ..AnimalRules::default()
        };
        let results = check_animal(&rules, &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].points, 5);
    }

    #[test]
    fn five_animals_score_tane_zaku() {
        // bush-warbler, cuckoo, bridge, geese, swallow
        let cards = CardSet::with_cards([id(4), id(12), id(16), id(29), id(41)]);
        let results = check_animal(&AnimalRules::default(), &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::TaneZaku);
        assert_eq!(results[0].points, 1);
    }

    #[test]
    fn uncounted_sake_cup_can_break_tane_zaku() {
        // four plain animals plus the sake cup
        let cards = CardSet::with_cards([id(4), id(12), id(16), id(29), CardId::SAKE_CUP]);
        assert_eq!(check_animal(&AnimalRules::default(), &cards).len(), 1);
        let rules = AnimalRules {
            count_wildcard: false,
            ..AnimalRules::default()
        };
        assert!(check_animal(&rules, &cards).is_empty());
    }

    #[test]
    fn both_patterns_score_together_with_extras() {
        // trio plus bush-warbler, cuckoo, bridge: 6 animals
        let cards = CardSet::with_cards([
            CardId::BOAR,
            CardId::DEER,
            CardId::BUTTERFLY,
            id(4),
            id(12),
            id(16),
        ]);
        let results = check_animal(&AnimalRules::default(), &cards);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, YakuName::InoShikaChou);
        assert_eq!(results[0].points, 5 + 3);
        assert_eq!(results[1].name, YakuName::TaneZaku);
        assert_eq!(results[1].points, 1 + 1);
    }

    #[test]
    fn allow_multiple_false_stops_after_ino_shika_chou() {
        let cards = CardSet::with_cards([
            CardId::BOAR,
            CardId::DEER,
            CardId::BUTTERFLY,
            id(4),
            id(12),
            id(16),
        ]);
        let rules = AnimalRules {
            allow_multiple: false,
            ..AnimalRules::default()
        };
        let results = check_animal(&rules, &cards);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, YakuName::InoShikaChou);
    }
}
