//! Error types for posepost.

use thiserror::Error;

/// Result alias for posepost operations.
pub type PosePostResult<T> = std::result::Result<T, PosePostError>;

/// Errors that can occur while post-processing a detection tensor.
///
/// Both kinds are local-input contract violations: they are surfaced to the
/// caller immediately and never retried, since the engine performs no I/O.
#[derive(Debug, Error, PartialEq)]
pub enum PosePostError {
    /// The tensor metadata is inconsistent with the expected `[1, C, A]`
    /// anchor-minor layout.
    #[error("shape error: {reason} (channels={channels}, anchors={anchors}, len={len})")]
    Shape {
        reason: &'static str,
        channels: usize,
        anchors: usize,
        len: usize,
    },
    /// A size used as a divisor or scale factor has a zero dimension.
    #[error("degenerate size: {context} is {width}x{height}")]
    DegenerateSize {
        context: &'static str,
        width: f32,
        height: f32,
    },
}
