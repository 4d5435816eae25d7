//! Tension/relaxation scoring from the emotion vector.
//!
//! ```text
//! tension = clamp(fear·1.5 + angry·0.8 + sad·0.5 + (1 − neutral)·0.3, 0, 1)
//! relax   = clamp(neutral·0.7 + happy·0.3, 0, 1)
//! ```
//! with every score first divided by 100.

use crate::{
    constants::{EMOTION_SCALE, HIGH_RELAX, HIGH_TENSION, MODERATE_RELAX, MODERATE_TENSION},
    types::{Emotion, EmotionVector},
    utils::{clamp_unit, round_to},
};
use serde::{Deserialize, Serialize};

/// Tone of the feedback shown to the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    /// Encouraging
    Positive,
    /// Mild
    Neutral,
    /// Calls out tension
    Negative,
}

/// Emotional state read for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionResult {
    /// In [0, 1], three decimals
    pub tension_level: f64,
    /// In [0, 1], three decimals
    pub relax_level: f64,
    /// Highest-scoring emotion
    pub dominant_emotion: Emotion,
    /// Candidate-facing message
    pub feedback_message: String,
    /// Tone of `feedback_message`
    pub feedback_type: FeedbackType,
}

/// Unrounded tension and relaxation levels
#[must_use]
pub fn levels(emotions: &EmotionVector) -> (f64, f64) {
    let fear = emotions.fear / EMOTION_SCALE;
    let neutral = emotions.neutral / EMOTION_SCALE;
    let happy = emotions.happy / EMOTION_SCALE;
    let angry = emotions.angry / EMOTION_SCALE;
    let sad = emotions.sad / EMOTION_SCALE;

    let tension = clamp_unit(fear * 1.5 + angry * 0.8 + sad * 0.5 + (1.0 - neutral) * 0.3);
    let relax = clamp_unit(neutral * 0.7 + happy * 0.3);
    (tension, relax)
}

/// First matching rule wins; tension rules come before relaxation rules
#[must_use]
pub fn classify_feedback(tension: f64, relax: f64) -> (&'static str, FeedbackType) {
    if tension > HIGH_TENSION {
        ("You seem tense. Take a deep breath and relax.", FeedbackType::Negative)
    } else if tension > MODERATE_TENSION {
        (
            "You seem a little tense. Try relaxing your shoulders.",
            FeedbackType::Neutral,
        )
    } else if relax > HIGH_RELAX {
        ("You are speaking in a relaxed manner.", FeedbackType::Positive)
    } else if relax > MODERATE_RELAX {
        ("You are speaking calmly.", FeedbackType::Positive)
    } else {
        ("Just be yourself, you are doing fine.", FeedbackType::Neutral)
    }
}

/// Score an emotion vector. Pure and total.
#[must_use]
pub fn score(emotions: &EmotionVector) -> TensionResult {
    let (tension, relax) = levels(emotions);
    let (message, feedback_type) = classify_feedback(tension, relax);

    TensionResult {
        tension_level: round_to(tension, 3),
        relax_level: round_to(relax, 3),
        dominant_emotion: emotions.dominant(),
        feedback_message: message.to_string(),
        feedback_type,
    }
}
