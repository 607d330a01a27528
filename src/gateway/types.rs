use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body served for a classify request answered in simulation mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub classification: String,
    pub score: f64,
    pub file_name: String,
    pub analysis_time: DateTime<Utc>,
}

/// Before/after robustness report for a defense technique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefendResult {
    pub standard_robustness: u32,
    pub enhanced_robustness: u32,
    pub original_prediction: String,
    pub enhanced_prediction: String,
    pub defense_type: String,
    pub is_active: bool,
}

/// Simulated perturbation imagery and the prediction under attack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeResult {
    pub perturbed_image: String,
    pub noise_pattern: String,
    pub prediction: String,
    pub epsilon: f64,
    pub analysis_time: DateTime<Utc>,
}
