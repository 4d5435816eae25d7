//! Lighting gate: mean luminance of the frame and a dark/bright verdict.

use crate::constants::{BRIGHT_THRESHOLD, DARK_THRESHOLD, DEFAULT_BRIGHTNESS};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Lighting classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessStatus {
    /// Usable lighting
    Ok,
    /// Underexposed
    TooDark,
    /// Overexposed or backlit
    TooBright,
    /// Brightness could not be measured
    Unknown,
}

impl BrightnessStatus {
    /// Classify a mean luminance; both bounds are strict
    #[must_use]
    pub fn classify(average_brightness: f64) -> Self {
        if average_brightness < f64::from(DARK_THRESHOLD) {
            Self::TooDark
        } else if average_brightness > f64::from(BRIGHT_THRESHOLD) {
            Self::TooBright
        } else {
            Self::Ok
        }
    }
}

/// Lighting verdict for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityResult {
    /// Mean luminance in [0, 255]
    pub average_brightness: f64,
    /// Classification of `average_brightness`
    pub brightness_status: BrightnessStatus,
    /// Mirrors `brightness_status == TooDark`
    pub is_too_dark: bool,
    /// Mirrors `brightness_status == TooBright`
    pub is_too_bright: bool,
}

impl QualityResult {
    /// Build a verdict from a measured mean luminance
    #[must_use]
    pub fn from_brightness(average_brightness: f64) -> Self {
        let brightness_status = BrightnessStatus::classify(average_brightness);
        Self {
            average_brightness,
            brightness_status,
            is_too_dark: brightness_status == BrightnessStatus::TooDark,
            is_too_bright: brightness_status == BrightnessStatus::TooBright,
        }
    }

    /// Result used when the frame cannot be measured
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            average_brightness: DEFAULT_BRIGHTNESS,
            brightness_status: BrightnessStatus::Unknown,
            is_too_dark: false,
            is_too_bright: false,
        }
    }
}

impl Default for QualityResult {
    fn default() -> Self {
        Self::unknown()
    }
}

/// ITU-R 601-2 luma in 16-bit fixed point
fn luma(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16
}

/// Mean luminance of a frame, `None` when it has no pixels
#[must_use]
pub fn mean_luminance(frame: &DynamicImage) -> Option<f64> {
    let rgb = frame.to_rgb8();
    let count = u64::from(rgb.width()) * u64::from(rgb.height());
    if count == 0 {
        return None;
    }

    let total: u64 = rgb.pixels().map(|p| u64::from(luma(p[0], p[1], p[2]))).sum();

    #[allow(clippy::cast_precision_loss)] // pixel counts stay far below 2^52
    let mean = total as f64 / count as f64;
    mean.is_finite().then_some(mean)
}

/// Assess the lighting of a frame. Never fails; unmeasurable frames get
/// [`QualityResult::unknown`].
#[must_use]
pub fn assess(frame: &DynamicImage) -> QualityResult {
    match mean_luminance(frame) {
        Some(mean) => QualityResult::from_brightness(mean),
        None => {
            log::warn!(
                "Failed to analyze image brightness: empty {}x{} frame",
                frame.width(),
                frame.height()
            );
            QualityResult::unknown()
        }
    }
}
