pub mod achievements;
pub mod collection;
pub mod diagnoses;
pub mod health;
pub mod stats;
