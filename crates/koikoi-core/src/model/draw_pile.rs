use crate::model::card::CardId;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Ordered pile of face-down cards. The top of the pile is the end of the
/// backing vector, so drawing pops from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPile {
    cards: Vec<CardId>,
}

impl DrawPile {
    /// All 48 cards in table order, bottom to top.
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().collect(),
        }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pile = Self::standard();
        pile.cards.shuffle(rng);
        pile
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Rebuilds a pile from an explicit bottom-to-top ordering.
    pub fn from_cards(cards: Vec<CardId>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    pub fn draw_many(&mut self, count: usize) -> Vec<CardId> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.cards.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
