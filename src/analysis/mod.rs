mod alerts;
mod conjunction;
mod risk;
mod statistics;
mod utils;

pub use alerts::{generate_alerts, Alert, AlertType, Severity};
pub use conjunction::{analyze_conjunctions, ConjunctionEvent};
pub use risk::{predict_risk, ContributingFactor, Impact, RiskPrediction};
pub use statistics::{summarize, Statistics};
pub use utils::round_to;
