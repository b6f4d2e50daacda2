use crate::model::card::CardId;
use crate::model::card_set::CardSet;

/// Two cards match when they share a month.
pub fn is_match(a: CardId, b: CardId) -> bool {
    a.month() == b.month()
}

/// All cards in `set` sharing the source card's month, in set order.
pub fn matches_in(set: &CardSet, source: CardId) -> Vec<CardId> {
    set.of_month(source.month())
}

#[cfg(test)]
mod tests {
    use super::{is_match, matches_in};
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;

    fn id(index: u8) -> CardId {
        CardId::new(index).unwrap()
    }

    #[test]
    fn cards_of_the_same_month_match() {
        assert!(is_match(id(0), id(3)));
        assert!(!is_match(id(0), id(4)));
    }

    #[test]
    fn matches_in_finds_all_month_mates() {
        let field = CardSet::with_cards([id(1), id(2), id(5), id(44)]);
        assert_eq!(matches_in(&field, id(0)), vec![id(1), id(2)]);
        assert_eq!(matches_in(&field, id(8)), Vec::<CardId>::new());
    }
}
