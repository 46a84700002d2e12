//! Candidate records and duplicate suppression.

pub mod nms;

use crate::geom::{ModelPixel, Rect};

/// Decoded per-anchor detection candidate in model-input pixel units.
///
/// Candidates are ephemeral: produced by decode, consumed by [`nms::select`]
/// and the coordinate mapper within the same call.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Index into the anchor dimension this candidate was decoded from.
    pub anchor: usize,
    /// Bounding box with a top-left origin, in model-input pixels.
    pub bbox: Rect<ModelPixel>,
    /// Objectness score from channel 4, as emitted by the network.
    pub confidence: f32,
    /// Raw keypoint payload: `(x, y, confidence)` triplets from channels `5..`.
    pub features: Vec<f32>,
}

impl Candidate {
    /// Number of keypoint triplets in the feature payload.
    pub fn keypoint_count(&self) -> usize {
        self.features.len() / 3
    }
}
