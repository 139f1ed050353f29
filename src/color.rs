use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::classify::{Bucket, BUCKET_COUNT};

// ---------------------------------------------------------------------------
// Bucket gradient
// ---------------------------------------------------------------------------

/// Generates the 10-step grading ramp: bucket 1 renders red (hue 0°),
/// bucket 10 green (hue 120°), with evenly spaced hues in between.
pub fn gradient_ramp() -> Vec<Color32> {
    (0..BUCKET_COUNT)
        .map(|i| {
            let hue = i as f32 / (BUCKET_COUNT - 1) as f32 * 120.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Maps buckets to their gradient colour; unclassified values fall back
/// to a neutral colour.
#[derive(Debug, Clone)]
pub struct BucketColors {
    ramp: Vec<Color32>,
    default_color: Color32,
}

impl Default for BucketColors {
    fn default() -> Self {
        BucketColors {
            ramp: gradient_ramp(),
            default_color: Color32::GRAY,
        }
    }
}

impl BucketColors {
    /// Colour for a classification result; `None` takes the neutral colour.
    pub fn color_for(&self, bucket: Option<Bucket>) -> Color32 {
        match bucket {
            Some(b) => self.ramp[(b.index() - 1) as usize],
            None => self.default_color,
        }
    }

    /// Legend entries (bucket label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.ramp
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("gradient-{}", i + 1), *c))
            .collect()
    }
}
