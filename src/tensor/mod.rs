//! Validated views over raw network output tensors.
//!
//! `TensorView` borrows a flat `f32` buffer together with its `[1, C, A]`
//! shape metadata. The layout is anchor-minor: the scalar for channel `c` of
//! anchor `j` lives at flat offset `c * A + j`. Channels `0..4` are box
//! center-x, center-y, width, height in model-input pixels, channel `4` is
//! objectness, and channels `5..` hold `K = (C - 5) / 3` keypoint triplets.

use crate::util::{PosePostError, PosePostResult};

/// Channels occupied by box geometry plus objectness.
pub(crate) const HEAD_CHANNELS: usize = 5;

/// Borrowed rank-3 `[1, C, A]` tensor view.
#[derive(Clone, Copy)]
pub struct TensorView<'a> {
    data: &'a [f32],
    channels: usize,
    anchors: usize,
}

impl<'a> TensorView<'a> {
    /// Creates a view, validating the shape metadata against the buffer.
    ///
    /// Fails if the batch dimension is not 1, if there are fewer than 5
    /// channels, if the keypoint channels are not a multiple of 3, or if the
    /// buffer length does not equal `C * A`.
    pub fn from_shape(data: &'a [f32], shape: [usize; 3]) -> PosePostResult<Self> {
        let [batch, channels, anchors] = shape;
        let shape_err = |reason: &'static str| PosePostError::Shape {
            reason,
            channels,
            anchors,
            len: data.len(),
        };

        if batch != 1 {
            return Err(shape_err("batch dimension must be 1"));
        }
        if channels < HEAD_CHANNELS {
            return Err(shape_err("fewer than 5 channels"));
        }
        if (channels - HEAD_CHANNELS) % 3 != 0 {
            return Err(shape_err("keypoint channels are not a multiple of 3"));
        }
        let needed = channels
            .checked_mul(anchors)
            .ok_or_else(|| shape_err("channel * anchor count overflows"))?;
        if data.len() != needed {
            return Err(shape_err("buffer length does not match shape"));
        }

        Ok(Self {
            data,
            channels,
            anchors,
        })
    }

    /// Returns the channel count `C`.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the anchor count `A`.
    pub fn anchors(&self) -> usize {
        self.anchors
    }

    /// Returns `K = (C - 5) / 3`, the keypoint triplets per anchor.
    pub fn keypoint_count(&self) -> usize {
        (self.channels - HEAD_CHANNELS) / 3
    }

    /// Returns the scalar for channel `c` of anchor `j`.
    ///
    /// Callers stay within `c < C`, `j < A`; construction guarantees the
    /// backing buffer covers that range.
    #[inline]
    pub(crate) fn at(&self, c: usize, j: usize) -> f32 {
        self.data[c * self.anchors + j]
    }
}

#[cfg(test)]
mod tests {
    use super::TensorView;
    use crate::util::PosePostError;

    #[test]
    fn rejects_nonunit_batch() {
        let data = vec![0.0f32; 10];
        let err = TensorView::from_shape(&data, [2, 5, 1]).err().unwrap();
        assert_eq!(
            err,
            PosePostError::Shape {
                reason: "batch dimension must be 1",
                channels: 5,
                anchors: 1,
                len: 10,
            }
        );
    }

    #[test]
    fn rejects_too_few_channels() {
        let data = vec![0.0f32; 8];
        assert!(TensorView::from_shape(&data, [1, 4, 2]).is_err());
    }

    #[test]
    fn rejects_partial_keypoint_triplet() {
        // C = 7 leaves 2 keypoint channels, not a multiple of 3.
        let data = vec![0.0f32; 14];
        assert!(TensorView::from_shape(&data, [1, 7, 2]).is_err());
    }

    #[test]
    fn rejects_buffer_length_mismatch() {
        let data = vec![0.0f32; 9];
        assert!(TensorView::from_shape(&data, [1, 5, 2]).is_err());
    }

    #[test]
    fn computes_keypoint_count() {
        let data = vec![0.0f32; 21 * 4];
        let view = TensorView::from_shape(&data, [1, 21, 4]).unwrap();
        assert_eq!(view.keypoint_count(), 5);
        assert_eq!(view.channels(), 21);
        assert_eq!(view.anchors(), 4);
    }

    #[test]
    fn accepts_box_only_tensor() {
        // C = 5 means zero keypoints, which is a valid detector head.
        let data = vec![0.0f32; 15];
        let view = TensorView::from_shape(&data, [1, 5, 3]).unwrap();
        assert_eq!(view.keypoint_count(), 0);
    }
}
