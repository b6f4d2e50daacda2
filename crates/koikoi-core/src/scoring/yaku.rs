use core::fmt;
use serde::{Deserialize, Serialize};

use crate::model::card::{CardId, CardKind};
use crate::model::card_set::CardSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YakuName {
    Gokou,
    Shikou,
    AmeShikou,
    Sankou,
    HanamiZake,
    TsukimiZake,
    InoShikaChou,
    AkaTan,
    AoTan,
    TanZaku,
    TaneZaku,
    Kasu,
    TsukiFuda,
    Teshi,
    Kuttsuki,
}

impl YakuName {
    pub const fn as_str(self) -> &'static str {
        match self {
            YakuName::Gokou => "gokou",
            YakuName::Shikou => "shikou",
            YakuName::AmeShikou => "ame-shikou",
            YakuName::Sankou => "sankou",
            YakuName::HanamiZake => "hanami-zake",
            YakuName::TsukimiZake => "tsukimi-zake",
            YakuName::InoShikaChou => "ino-shika-chou",
            YakuName::AkaTan => "aka-tan",
            YakuName::AoTan => "ao-tan",
            YakuName::TanZaku => "tan-zaku",
            YakuName::TaneZaku => "tane-zaku",
            YakuName::Kasu => "kasu",
            YakuName::TsukiFuda => "tsuki-fuda",
            YakuName::Teshi => "teshi",
            YakuName::Kuttsuki => "kuttsuki",
        }
    }

    /// Whether the yaku belongs to the viewing category.
    pub const fn is_viewing(self) -> bool {
        matches!(self, YakuName::HanamiZake | YakuName::TsukimiZake)
    }
}

impl fmt::Display for YakuName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed yaku with the points it scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YakuResult {
    pub name: YakuName,
    pub points: u32,
}

/// One clause of a yaku pattern: either a specific card, or a minimum count
/// of cards of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Card(CardId),
    KindCount(CardKind, usize),
}

impl Clause {
    const fn required(self) -> usize {
        match self {
            Clause::Card(_) => 1,
            Clause::KindCount(_, count) => count,
        }
    }
}

/// Static definition of a scoring pattern. Clauses are evaluated
/// independently against the whole set: satisfaction is existence-only, and
/// a card may satisfy more than one clause (the rain-man counts toward
/// ame-shikou's bright tally as well as its own clause).
#[derive(Debug)]
pub struct YakuDef {
    pub name: YakuName,
    pub description: &'static str,
    pub points: u32,
    pub clauses: &'static [Clause],
}

impl YakuDef {
    /// Base points when every clause is satisfied, else 0.
    pub fn check(&self, cards: &CardSet) -> u32 {
        let min_required: usize = self.clauses.iter().map(|c| c.required()).sum();
        if cards.len() < min_required {
            return 0;
        }
        for clause in self.clauses {
            let satisfied = match *clause {
                Clause::Card(id) => cards.contains(id),
                Clause::KindCount(kind, count) => cards.count_of_kind(kind) >= count,
            };
            if !satisfied {
                return 0;
            }
        }
        self.points
    }
}

pub static GOKOU: YakuDef = YakuDef {
    name: YakuName::Gokou,
    description: "Five Brights",
    points: 15,
    clauses: &[Clause::KindCount(CardKind::Bright, 5)],
};

pub static SHIKOU: YakuDef = YakuDef {
    name: YakuName::Shikou,
    description: "Four Brights",
    points: 8,
    clauses: &[Clause::KindCount(CardKind::Bright, 4)],
};

pub static AME_SHIKOU: YakuDef = YakuDef {
    name: YakuName::AmeShikou,
    description: "Rain-man Four",
    points: 7,
    clauses: &[
        Clause::Card(CardId::RAIN_MAN),
        Clause::KindCount(CardKind::Bright, 3),
    ],
};

pub static SANKOU: YakuDef = YakuDef {
    name: YakuName::Sankou,
    description: "Three Brights",
    points: 6,
    clauses: &[Clause::KindCount(CardKind::Bright, 3)],
};

pub static HANAMI_ZAKE: YakuDef = YakuDef {
    name: YakuName::HanamiZake,
    description: "Flower Viewing",
    points: 3,
    clauses: &[Clause::Card(CardId::CURTAIN), Clause::Card(CardId::SAKE_CUP)],
};

pub static TSUKIMI_ZAKE: YakuDef = YakuDef {
    name: YakuName::TsukimiZake,
    description: "Moon Viewing",
    points: 3,
    clauses: &[Clause::Card(CardId::MOON), Clause::Card(CardId::SAKE_CUP)],
};

pub static INO_SHIKA_CHOU: YakuDef = YakuDef {
    name: YakuName::InoShikaChou,
    description: "Boar, Deer, and Butterfly",
    points: 5,
    clauses: &[
        Clause::Card(CardId::BOAR),
        Clause::Card(CardId::DEER),
        Clause::Card(CardId::BUTTERFLY),
    ],
};

pub static AKA_TAN: YakuDef = YakuDef {
    name: YakuName::AkaTan,
    description: "Poetry Ribbons",
    points: 5,
    clauses: &[
        Clause::Card(CardId::PINE_POETRY_RIBBON),
        Clause::Card(CardId::PLUM_POETRY_RIBBON),
        Clause::Card(CardId::CHERRY_POETRY_RIBBON),
    ],
};

pub static AO_TAN: YakuDef = YakuDef {
    name: YakuName::AoTan,
    description: "Blue Ribbons",
    points: 5,
    clauses: &[
        Clause::Card(CardId::PEONY_BLUE_RIBBON),
        Clause::Card(CardId::CHRYSANTHEMUM_BLUE_RIBBON),
        Clause::Card(CardId::MAPLE_BLUE_RIBBON),
    ],
};

pub static TAN_ZAKU: YakuDef = YakuDef {
    name: YakuName::TanZaku,
    description: "Five Ribbons",
    points: 1,
    clauses: &[Clause::KindCount(CardKind::Ribbon, 5)],
};

pub static TANE_ZAKU: YakuDef = YakuDef {
    name: YakuName::TaneZaku,
    description: "Five Animals",
    points: 1,
    clauses: &[Clause::KindCount(CardKind::Animal, 5)],
};

pub static KASU: YakuDef = YakuDef {
    name: YakuName::Kasu,
    description: "Ten Chaff Cards",
    points: 1,
    clauses: &[Clause::KindCount(CardKind::Chaff, 10)],
};

// The month-dependent patterns have no static clauses; their checkers
// resolve the month from context or from the hand itself.

pub static TSUKI_FUDA: YakuDef = YakuDef {
    name: YakuName::TsukiFuda,
    description: "Four Cards of the Same Month",
    points: 4,
    clauses: &[],
};

pub static TESHI: YakuDef = YakuDef {
    name: YakuName::Teshi,
    description: "Four Cards of the Same Month in Initial Hand",
    points: 6,
    clauses: &[],
};

pub static KUTTSUKI: YakuDef = YakuDef {
    name: YakuName::Kuttsuki,
    description: "Four Pairs in Initial Hand",
    points: 6,
    clauses: &[],
};
