use core::fmt;
use serde::{Deserialize, Serialize};

pub const CARD_COUNT: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Chaff,
    Animal,
    Ribbon,
    Bright,
}

impl CardKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Chaff => "chaff",
            CardKind::Animal => "animal",
            CardKind::Ribbon => "ribbon",
            CardKind::Bright => "bright",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flower {
    Pine,
    Plum,
    Cherry,
    Wisteria,
    Iris,
    Peony,
    BushClover,
    Susuki,
    Chrysanthemum,
    Maple,
    Willow,
    Paulownia,
}

impl Flower {
    pub const fn as_str(self) -> &'static str {
        match self {
            Flower::Pine => "pine",
            Flower::Plum => "plum",
            Flower::Cherry => "cherry",
            Flower::Wisteria => "wisteria",
            Flower::Iris => "iris",
            Flower::Peony => "peony",
            Flower::BushClover => "bush-clover",
            Flower::Susuki => "susuki",
            Flower::Chrysanthemum => "chrysanthemum",
            Flower::Maple => "maple",
            Flower::Willow => "willow",
            Flower::Paulownia => "paulownia",
        }
    }
}

impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index into the fixed 48-card table. Four cards per month, in month order,
/// so the month of a card is derivable from its index alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    pub name: &'static str,
    pub kind: CardKind,
    pub flower: Flower,
    pub month: u8,
}

impl CardId {
    pub const CRANE: CardId = CardId(0);
    pub const PINE_POETRY_RIBBON: CardId = CardId(1);
    pub const PLUM_POETRY_RIBBON: CardId = CardId(5);
    pub const CURTAIN: CardId = CardId(8);
    pub const CHERRY_POETRY_RIBBON: CardId = CardId(9);
    pub const PEONY_BLUE_RIBBON: CardId = CardId(21);
    pub const BUTTERFLY: CardId = CardId(20);
    pub const BOAR: CardId = CardId(24);
    pub const MOON: CardId = CardId(28);
    pub const SAKE_CUP: CardId = CardId(32);
    pub const CHRYSANTHEMUM_BLUE_RIBBON: CardId = CardId(33);
    pub const DEER: CardId = CardId(36);
    pub const MAPLE_BLUE_RIBBON: CardId = CardId(37);
    pub const RAIN_MAN: CardId = CardId(40);
    pub const PHOENIX: CardId = CardId(44);

    pub const fn new(index: u8) -> Option<CardId> {
        if index < CARD_COUNT as u8 {
            Some(CardId(index))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = CardId> {
        (0..CARD_COUNT as u8).map(CardId)
    }

    pub fn info(self) -> &'static CardInfo {
        &CARD_TABLE[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn kind(self) -> CardKind {
        self.info().kind
    }

    pub fn flower(self) -> Flower {
        self.info().flower
    }

    pub const fn month(self) -> u8 {
        self.0 / 4 + 1
    }
}

impl TryFrom<u8> for CardId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CardId::new(value).ok_or_else(|| format!("invalid card index: {value}"))
    }
}

impl From<CardId> for u8 {
    fn from(card: CardId) -> u8 {
        card.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.flower(), self.name())
    }
}

const fn card(name: &'static str, kind: CardKind, flower: Flower, month: u8) -> CardInfo {
    CardInfo {
        name,
        kind,
        flower,
        month,
    }
}

static CARD_TABLE: [CardInfo; CARD_COUNT] = [
    // January - Pine
    card("crane", CardKind::Bright, Flower::Pine, 1),
    card("poetry-ribbon", CardKind::Ribbon, Flower::Pine, 1),
    card("chaff-1", CardKind::Chaff, Flower::Pine, 1),
    card("chaff-2", CardKind::Chaff, Flower::Pine, 1),
    // February - Plum
    card("bush-warbler", CardKind::Animal, Flower::Plum, 2),
    card("poetry-ribbon", CardKind::Ribbon, Flower::Plum, 2),
    card("chaff-1", CardKind::Chaff, Flower::Plum, 2),
    card("chaff-2", CardKind::Chaff, Flower::Plum, 2),
    // March - Cherry
    card("curtain", CardKind::Bright, Flower::Cherry, 3),
    card("poetry-ribbon", CardKind::Ribbon, Flower::Cherry, 3),
    card("chaff-1", CardKind::Chaff, Flower::Cherry, 3),
    card("chaff-2", CardKind::Chaff, Flower::Cherry, 3),
    // April - Wisteria
    card("cuckoo", CardKind::Animal, Flower::Wisteria, 4),
    card("red-ribbon", CardKind::Ribbon, Flower::Wisteria, 4),
    card("chaff-1", CardKind::Chaff, Flower::Wisteria, 4),
    card("chaff-2", CardKind::Chaff, Flower::Wisteria, 4),
    // May - Iris
    card("bridge", CardKind::Animal, Flower::Iris, 5),
    card("red-ribbon", CardKind::Ribbon, Flower::Iris, 5),
    card("chaff-1", CardKind::Chaff, Flower::Iris, 5),
    card("chaff-2", CardKind::Chaff, Flower::Iris, 5),
    // June - Peony
    card("butterfly", CardKind::Animal, Flower::Peony, 6),
    card("blue-ribbon", CardKind::Ribbon, Flower::Peony, 6),
    card("chaff-1", CardKind::Chaff, Flower::Peony, 6),
    card("chaff-2", CardKind::Chaff, Flower::Peony, 6),
    // July - Bush Clover
    card("boar", CardKind::Animal, Flower::BushClover, 7),
    card("red-ribbon", CardKind::Ribbon, Flower::BushClover, 7),
    card("chaff-1", CardKind::Chaff, Flower::BushClover, 7),
    card("chaff-2", CardKind::Chaff, Flower::BushClover, 7),
    // August - Susuki
    card("moon", CardKind::Bright, Flower::Susuki, 8),
    card("geese", CardKind::Animal, Flower::Susuki, 8),
    card("chaff-1", CardKind::Chaff, Flower::Susuki, 8),
    card("chaff-2", CardKind::Chaff, Flower::Susuki, 8),
    // September - Chrysanthemum
    card("sake-cup", CardKind::Animal, Flower::Chrysanthemum, 9),
    card("blue-ribbon", CardKind::Ribbon, Flower::Chrysanthemum, 9),
    card("chaff-1", CardKind::Chaff, Flower::Chrysanthemum, 9),
    card("chaff-2", CardKind::Chaff, Flower::Chrysanthemum, 9),
    // October - Maple
    card("deer", CardKind::Animal, Flower::Maple, 10),
    card("blue-ribbon", CardKind::Ribbon, Flower::Maple, 10),
    card("chaff-1", CardKind::Chaff, Flower::Maple, 10),
    card("chaff-2", CardKind::Chaff, Flower::Maple, 10),
    // November - Willow
    card("rain-man", CardKind::Bright, Flower::Willow, 11),
    card("swallow", CardKind::Animal, Flower::Willow, 11),
    card("red-ribbon", CardKind::Ribbon, Flower::Willow, 11),
    card("chaff", CardKind::Chaff, Flower::Willow, 11),
    // December - Paulownia
    card("phoenix", CardKind::Bright, Flower::Paulownia, 12),
    card("chaff-1", CardKind::Chaff, Flower::Paulownia, 12),
    card("chaff-2", CardKind::Chaff, Flower::Paulownia, 12),
    card("chaff-3", CardKind::Chaff, Flower::Paulownia, 12),
];
