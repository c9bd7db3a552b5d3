//! Menstrual cycle predictor: next period, ovulation day and fertile window
//! from the last period start and the average cycle length.

#[cfg(feature = "desktop")]
pub mod commands;
pub mod format;
pub mod logging;
pub mod models;
pub mod prediction;
pub mod predictor;
pub mod settings;
pub mod state;

pub use models::{CycleInput, CyclePrediction, FertileWindow, Phase, PredictorView};
pub use prediction::PredictError;
pub use predictor::CyclePredictor;
pub use settings::AppSettings;
pub use state::AppState;
