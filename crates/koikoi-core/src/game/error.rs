use core::fmt;

use crate::game::round::GamePhase;
use crate::model::card::CardId;

/// Why a hand/field selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NoSourceCard,
    CardNotInHand(CardId),
    CardNotOnField(CardId),
    MonthMismatch { source: CardId, field: CardId },
    WrongCount { required: usize, selected: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoSourceCard => write!(f, "no source card selected"),
            SelectionError::CardNotInHand(card) => {
                write!(f, "card {card} is not in the active player's hand")
            }
            SelectionError::CardNotOnField(card) => {
                write!(f, "card {card} is not on the field")
            }
            SelectionError::MonthMismatch { source, field } => {
                write!(f, "{field} does not share a month with {source}")
            }
            SelectionError::WrongCount { required, selected } => {
                write!(f, "capture requires {required} field card(s), got {selected}")
            }
        }
    }
}

/// Why a loaded snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateDataError {
    DuplicateCard(CardId),
    WrongCardTotal(usize),
    UnknownPlayer(String),
    InvalidMonth(u8),
}

impl fmt::Display for StateDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateDataError::DuplicateCard(card) => {
                write!(f, "card {card} appears in more than one collection")
            }
            StateDataError::WrongCardTotal(total) => {
                write!(f, "collections hold {total} cards, expected 48")
            }
            StateDataError::UnknownPlayer(id) => write!(f, "unknown player id: {id}"),
            StateDataError::InvalidMonth(month) => write!(f, "invalid month: {month}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidCardIndex(u8),
    DuplicateCard(CardId),
    InvalidPhaseAction {
        action: &'static str,
        phase: GamePhase,
    },
    InvalidSelection(SelectionError),
    InvalidStateData(StateDataError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCardIndex(index) => write!(f, "invalid card index: {index}"),
            GameError::DuplicateCard(card) => {
                write!(f, "card {card} already present in target collection")
            }
            GameError::InvalidPhaseAction { action, phase } => {
                write!(f, "{action} is not valid in the {phase} phase")
            }
            GameError::InvalidSelection(cause) => write!(f, "invalid selection: {cause}"),
            GameError::InvalidStateData(cause) => write!(f, "invalid state data: {cause}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<SelectionError> for GameError {
    fn from(cause: SelectionError) -> Self {
        GameError::InvalidSelection(cause)
    }
}

impl From<StateDataError> for GameError {
    fn from(cause: StateDataError) -> Self {
        GameError::InvalidStateData(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameError, SelectionError};
    use crate::game::round::GamePhase;
    use crate::model::card::CardId;

    #[test]
    fn errors_render_usable_messages() {
        let err = GameError::InvalidPhaseAction {
            action: "capture_cards",
            phase: GamePhase::ChoosingKoi,
        };
        assert_eq!(
            err.to_string(),
            "capture_cards is not valid in the CHOOSING_KOI phase"
        );

        let err: GameError = SelectionError::WrongCount {
            required: 1,
            selected: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid selection: capture requires 1 field card(s), got 2"
        );

        let err = GameError::DuplicateCard(CardId::MOON);
        assert!(err.to_string().contains("susuki-moon"));
    }
}
