//! Coordinate mapping from model-input pixels to output spaces.
//!
//! Two chained affine transforms, applied the same way to the box and to every
//! keypoint: divide by the model input size to reach normalized coordinates,
//! then multiply by the target frame size to reach frame pixels. Values are
//! not clamped; out-of-range network outputs pass through so callers see the
//! raw geometry. Keypoint confidence is carried over unchanged.

use crate::candidate::Candidate;
use crate::geom::{FramePixel, ModelPixel, Normalized, Point, Rect, Size};
use crate::util::{PosePostError, PosePostResult};

/// Bounding box in both output coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Box in normalized `[0, 1]` coordinates (unclamped).
    pub model_norm: Rect<Normalized>,
    /// Box in target frame pixels.
    pub frame_px: Rect<FramePixel>,
}

/// Keypoint in both output coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    /// Position in normalized `[0, 1]` coordinates (unclamped).
    pub model_norm: Point<Normalized>,
    /// Position in target frame pixels.
    pub frame_px: Point<FramePixel>,
    /// Per-point confidence, passed through from the feature vector.
    pub confidence: f32,
}

/// Final detection record handed to the caller.
///
/// Both coordinate spaces are carried so the caller can pick normalized or
/// frame-pixel values without recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub confidence: f32,
    pub keypoints: Vec<Keypoint>,
}

/// Rejects sizes with a zero dimension before any division happens.
pub(crate) fn check_sizes(model_input_size: Size, target_frame_size: Size) -> PosePostResult<()> {
    if model_input_size.has_zero_dim() {
        return Err(PosePostError::DegenerateSize {
            context: "model_input_size",
            width: model_input_size.width,
            height: model_input_size.height,
        });
    }
    if target_frame_size.has_zero_dim() {
        return Err(PosePostError::DegenerateSize {
            context: "target_frame_size",
            width: target_frame_size.width,
            height: target_frame_size.height,
        });
    }
    Ok(())
}

/// Maps one candidate into normalized and target-frame coordinates.
pub fn map_candidate(
    candidate: &Candidate,
    model_input_size: Size,
    target_frame_size: Size,
) -> PosePostResult<Detection> {
    check_sizes(model_input_size, target_frame_size)?;

    let model_norm = normalize_rect(candidate.bbox, model_input_size);
    let frame_px = scale_rect(model_norm, target_frame_size);

    let mut keypoints = Vec::with_capacity(candidate.keypoint_count());
    for triplet in candidate.features.chunks_exact(3) {
        let norm = Point::new(
            triplet[0] / model_input_size.width,
            triplet[1] / model_input_size.height,
        );
        let frame = Point::new(
            norm.x * target_frame_size.width,
            norm.y * target_frame_size.height,
        );
        keypoints.push(Keypoint {
            model_norm: norm,
            frame_px: frame,
            confidence: triplet[2],
        });
    }

    Ok(Detection {
        bbox: BoundingBox {
            model_norm,
            frame_px,
        },
        confidence: candidate.confidence,
        keypoints,
    })
}

fn normalize_rect(rect: Rect<ModelPixel>, size: Size) -> Rect<Normalized> {
    Rect::new(
        rect.x / size.width,
        rect.y / size.height,
        rect.w / size.width,
        rect.h / size.height,
    )
}

fn scale_rect(rect: Rect<Normalized>, size: Size) -> Rect<FramePixel> {
    Rect::new(
        rect.x * size.width,
        rect.y * size.height,
        rect.w * size.width,
        rect.h * size.height,
    )
}
