//! Rayon-parallel decoding (feature-gated).
//!
//! The anchor range is partitioned into contiguous chunks; each worker decodes
//! its chunk into a local vector and the results are concatenated in chunk
//! order. There is no shared accumulator in the hot loop, and the output is
//! identical to the sequential path.

use super::decode_anchor;
use crate::candidate::Candidate;
use crate::tensor::TensorView;
use rayon::prelude::*;

/// Minimum anchors per chunk; below this the scheduling overhead dominates
/// the per-anchor decode cost.
const MIN_CHUNK: usize = 256;

/// Parallel equivalent of [`decode_candidates`](super::decode_candidates).
pub fn decode_candidates_par(tensor: &TensorView<'_>) -> Vec<Candidate> {
    (0..tensor.anchors())
        .into_par_iter()
        .with_min_len(MIN_CHUNK)
        .map(|j| decode_anchor(tensor, j))
        .collect()
}
