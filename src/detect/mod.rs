//! The one-shot detection pipeline: decode, select, map.

use crate::candidate::nms::select;
use crate::candidate::Candidate;
use crate::decode::decode_candidates;
use crate::geom::Size;
use crate::mapping::{check_sizes, map_candidate, Detection};
use crate::tensor::TensorView;
use crate::trace::{trace_event, trace_scope};
use crate::util::PosePostResult;

/// Per-call pipeline configuration.
///
/// Defaults follow the reference camera application: 0.35 confidence gate,
/// 0.5 suppression threshold, 640x640 model input mapped onto a 640x640
/// frame. The struct is plain data passed by value per call; the engine keeps
/// no other state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectConfig {
    /// Candidates at or below this score are discarded (strict gate).
    pub confidence_threshold: f32,
    /// Area-ratio overlap above which the lower-ranked box is suppressed.
    pub iou_threshold: f32,
    /// Pixel grid the network consumes.
    pub model_input_size: Size,
    /// Frame (e.g. the camera buffer) the detections are mapped into.
    pub target_frame_size: Size,
    /// Decode anchors in parallel; requires the `rayon` feature.
    pub parallel: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.35,
            iou_threshold: 0.5,
            model_input_size: Size::new(640.0, 640.0),
            target_frame_size: Size::new(640.0, 640.0),
            parallel: false,
        }
    }
}

/// Stateless detection post-processor; holds only its configuration.
#[derive(Clone, Debug, Default)]
pub struct Detector {
    config: DetectConfig,
}

impl Detector {
    /// Creates a detector with the given configuration.
    pub fn new(config: DetectConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Runs decode, suppression, and mapping over one output tensor.
    ///
    /// `shape` is the `[1, C, A]` metadata for the flat `data` buffer. An
    /// empty vector is the valid "nothing detected" result and should clear
    /// any previously drawn overlay.
    pub fn detect(&self, data: &[f32], shape: [usize; 3]) -> PosePostResult<Vec<Detection>> {
        let tensor = TensorView::from_shape(data, shape)?;
        check_sizes(self.config.model_input_size, self.config.target_frame_size)?;
        let _span = trace_scope!(
            "detect",
            anchors = tensor.anchors(),
            keypoints = tensor.keypoint_count()
        );

        let candidates = self.decode(&tensor);
        let selected = select(
            &candidates,
            self.config.confidence_threshold,
            self.config.iou_threshold,
        );
        trace_event!(
            "selected",
            candidates = candidates.len(),
            survivors = selected.len()
        );

        let mut detections = Vec::with_capacity(selected.len());
        for idx in selected {
            detections.push(map_candidate(
                &candidates[idx],
                self.config.model_input_size,
                self.config.target_frame_size,
            )?);
        }
        Ok(detections)
    }

    #[cfg(feature = "rayon")]
    fn decode(&self, tensor: &TensorView<'_>) -> Vec<Candidate> {
        if self.config.parallel {
            crate::decode::rayon::decode_candidates_par(tensor)
        } else {
            decode_candidates(tensor)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn decode(&self, tensor: &TensorView<'_>) -> Vec<Candidate> {
        decode_candidates(tensor)
    }
}

/// One-shot convenience wrapper around [`Detector::detect`].
pub fn detect(
    data: &[f32],
    shape: [usize; 3],
    config: &DetectConfig,
) -> PosePostResult<Vec<Detection>> {
    Detector::new(*config).detect(data, shape)
}
