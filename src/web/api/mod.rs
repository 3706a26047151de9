pub mod alerts;
pub mod body;
pub mod conjunctions;
pub mod error;
pub mod health;
pub mod risk;
pub mod satellites;
pub mod statistics;
