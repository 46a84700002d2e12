//! Per-anchor tensor decoding.
//!
//! Decoding reads channels `0..4` as box center-x, center-y, width, height in
//! model-input pixels, converts the center to a top-left origin, takes channel
//! `4` as the confidence, and copies the keypoint payload from channels `5..`
//! verbatim. No filtering happens here: every anchor yields exactly one
//! candidate, so anchor indices stay valid through suppression.

use crate::candidate::Candidate;
use crate::geom::Rect;
use crate::tensor::{TensorView, HEAD_CHANNELS};

#[cfg(feature = "rayon")]
pub mod rayon;

/// Decodes one candidate per anchor, in anchor order.
pub fn decode_candidates(tensor: &TensorView<'_>) -> Vec<Candidate> {
    (0..tensor.anchors())
        .map(|j| decode_anchor(tensor, j))
        .collect()
}

/// Decodes the candidate at anchor `j`.
pub(crate) fn decode_anchor(tensor: &TensorView<'_>, j: usize) -> Candidate {
    let cx = tensor.at(0, j);
    let cy = tensor.at(1, j);
    let w = tensor.at(2, j);
    let h = tensor.at(3, j);
    let confidence = tensor.at(4, j);

    let feature_len = tensor.channels() - HEAD_CHANNELS;
    let mut features = Vec::with_capacity(feature_len);
    for k in 0..feature_len {
        features.push(tensor.at(HEAD_CHANNELS + k, j));
    }

    Candidate {
        anchor: j,
        bbox: Rect::new(cx - w / 2.0, cy - h / 2.0, w, h),
        confidence,
        features,
    }
}
