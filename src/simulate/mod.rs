//! Deterministic stand-in responses served when the upstream inference
//! service cannot be reached. These reproduce the shape and the constants of
//! real inference output without touching a model: same inputs, same
//! answer, every time. The only field that varies between calls is the
//! advisory `analysis_time` timestamp.

use crate::Result;
use crate::gateway::{ClassifyResult, DefendResult, InferenceRequest, VisualizeResult};
use chrono::Utc;
use serde_json::Value;

/// Robustness of the undefended model, as a percentage.
const STANDARD_ROBUSTNESS: u32 = 25;
/// What the undefended model predicts on the demo input.
const ORIGINAL_PREDICTION: &str = "Dog (67% confidence)";
/// Score attached to the neutral classify placeholder.
const PLACEHOLDER_SCORE: f64 = 0.95;

/// Runs the simulator matching the request's kind and serializes the result
/// for the wire.
pub fn response_for(request: &InferenceRequest) -> Result<Value> {
    let value = match request {
        InferenceRequest::Classify { file_name, .. } => serde_json::to_value(classify(file_name))?,
        InferenceRequest::Defend { defense, active } => serde_json::to_value(defend(defense, active))?,
        InferenceRequest::Visualize { epsilon, .. } => serde_json::to_value(visualize(*epsilon))?,
    };
    Ok(value)
}

/// Fixed neutral classification. No content inspection happens here; the
/// point is to keep the contract shape, not to approximate a model.
pub fn classify(file_name: &str) -> ClassifyResult {
    ClassifyResult {
        classification: "Clean".to_string(),
        score: PLACEHOLDER_SCORE,
        file_name: file_name.to_string(),
        analysis_time: Utc::now(),
    }
}

/// Before/after robustness for a defense technique. An inactive defense is a
/// no-op: enhanced values equal the baseline. Technique names outside the
/// lookup keep the baseline too.
pub fn defend(defense: &str, active: &str) -> DefendResult {
    let is_active = active == "true";

    let mut result = DefendResult {
        standard_robustness: STANDARD_ROBUSTNESS,
        enhanced_robustness: STANDARD_ROBUSTNESS,
        original_prediction: ORIGINAL_PREDICTION.to_string(),
        enhanced_prediction: ORIGINAL_PREDICTION.to_string(),
        defense_type: defense.to_string(),
        is_active,
    };

    if is_active {
        match defense {
            "adversarial" => {
                result.enhanced_robustness = 78;
                result.enhanced_prediction = "Cat (89% confidence)".to_string();
            }
            "randomization" => {
                result.enhanced_robustness = 65;
                result.enhanced_prediction = "Cat (72% confidence)".to_string();
            }
            "detection" => {
                result.enhanced_robustness = 92;
                result.enhanced_prediction = "Adversarial Example Detected".to_string();
            }
            _ => {}
        }
    }

    result
}

/// Perturbation outcome for an attack of strength `epsilon`. Confidence
/// decays linearly inside four half-open epsilon bands (lower bound
/// inclusive, upper exclusive); past 0.8 the prediction flips from Cat to
/// Dog. The image references are placeholder identifiers derived from the
/// clamped noise level, not real pixel data.
pub fn visualize(epsilon: f64) -> VisualizeResult {
    let noise_level = (epsilon * 10.0).min(100.0);

    let prediction = if epsilon < 0.3 {
        format!("Cat ({}% confidence)", (98.0 - epsilon * 100.0).round() as i64)
    } else if epsilon < 0.6 {
        format!(
            "Cat ({}% confidence)",
            (75.0 - (epsilon - 0.3) * 100.0).round() as i64
        )
    } else if epsilon < 0.8 {
        format!(
            "Cat ({}% confidence)",
            (45.0 - (epsilon - 0.6) * 100.0).round() as i64
        )
    } else {
        format!(
            "Dog ({}% confidence)",
            (50.0 + (epsilon - 0.8) * 100.0).round() as i64
        )
    };

    let noise = noise_level.round() as i64;

    VisualizeResult {
        perturbed_image: format!(
            "/placeholder.svg?height=300&width=300&text=Perturbed+Image:{}%",
            noise
        ),
        noise_pattern: format!("/placeholder.svg?height=300&width=300&text=Noise:{}%", noise),
        prediction,
        epsilon,
        analysis_time: Utc::now(),
    }
}
