use crate::model::card::{CardId, CardKind};

/// A set of distinct cards, kept sorted by card index so that iteration and
/// serialization order are canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<CardId>,
}

impl CardSet {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut set = Self::new();
        for card in cards {
            set.add(card);
        }
        set
    }

    /// Adds a card, returning whether it was newly inserted.
    pub fn add(&mut self, card: CardId) -> bool {
        match self.cards.binary_search(&card) {
            Ok(_) => false,
            Err(index) => {
                self.cards.insert(index, card);
                true
            }
        }
    }

    pub fn remove(&mut self, card: CardId) -> bool {
        match self.cards.binary_search(&card) {
            Ok(index) => {
                self.cards.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn of_kind(&self, kind: CardKind) -> Vec<CardId> {
        self.iter().filter(|c| c.kind() == kind).collect()
    }

    pub fn count_of_kind(&self, kind: CardKind) -> usize {
        self.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn of_month(&self, month: u8) -> Vec<CardId> {
        self.iter().filter(|c| c.month() == month).collect()
    }

    /// Per-month membership counts, indexed by `month - 1`.
    pub fn month_counts(&self) -> [u8; 12] {
        let mut counts = [0u8; 12];
        for card in self.iter() {
            counts[(card.month() - 1) as usize] += 1;
        }
        counts
    }
}

impl FromIterator<CardId> for CardSet {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self::with_cards(iter)
    }
}
