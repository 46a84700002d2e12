//! PosePost is a stateless post-processing engine for anchor-based pose
//! detection networks.
//!
//! It decodes the raw `[1, C, A]` output tensor into per-anchor candidates,
//! gates and deduplicates them with a greedy area-ratio suppression, and maps
//! the survivors into model-normalized and target-frame coordinates. The whole
//! pipeline is a pure function of one tensor plus a [`DetectConfig`]; there is
//! no cross-call state. Parallel decoding is available via the `rayon`
//! feature.

pub mod candidate;
pub mod decode;
pub mod detect;
pub mod geom;
pub mod mapping;
pub mod tensor;
pub mod util;

pub(crate) mod trace;

pub use candidate::nms::select;
pub use candidate::Candidate;
pub use decode::decode_candidates;
#[cfg(feature = "rayon")]
pub use decode::rayon::decode_candidates_par;
pub use detect::{detect, DetectConfig, Detector};
pub use geom::{FramePixel, ModelPixel, Normalized, Point, Rect, Size};
pub use mapping::{map_candidate, BoundingBox, Detection, Keypoint};
pub use tensor::TensorView;
pub use util::{PosePostError, PosePostResult};
