pub mod animal;
pub mod bright;
pub mod chaff;
pub mod context;
pub mod hand;
pub mod manager;
pub mod month;
pub mod ribbon;
pub mod rules;
pub mod viewing;
pub mod yaku;
