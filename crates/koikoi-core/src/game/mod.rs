pub mod error;
pub mod match_state;
pub mod player;
pub mod round;
pub mod serialization;
