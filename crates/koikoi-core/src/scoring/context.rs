use core::fmt;
use serde::{Deserialize, Serialize};

use crate::scoring::yaku::YakuResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Rainy,
    Foggy,
}

impl Weather {
    pub const fn as_str(self) -> &'static str {
        match self {
            Weather::Rainy => "rainy",
            Weather::Foggy => "foggy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call scoring input. `completed_yaku` is caller-supplied history, used
/// only by the viewing category's limited mode.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub current_month: u8,
    pub weather: Option<Weather>,
    pub check_teyaku: bool,
    pub completed_yaku: &'a [YakuResult],
}

impl ScoringContext<'_> {
    pub const fn new(current_month: u8) -> Self {
        Self {
            current_month,
            weather: None,
            check_teyaku: false,
            completed_yaku: &[],
        }
    }

    pub const fn teyaku() -> Self {
        Self {
            current_month: 0,
            weather: None,
            check_teyaku: true,
            completed_yaku: &[],
        }
    }
}
