use core::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Player::One => "player1",
            Player::Two => "player2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "player1" => Ok(Player::One),
            "player2" => Ok(Player::Two),
            other => Err(format!("unknown player id: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn opponent_flips_both_ways() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn id_round_trip() {
        for player in Player::BOTH {
            assert_eq!(player.as_str().parse::<Player>(), Ok(player));
        }
        assert!("player3".parse::<Player>().is_err());
    }
}
