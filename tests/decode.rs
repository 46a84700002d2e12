use posepost::{decode_candidates, TensorView};

/// Lays out per-channel rows into the flat anchor-minor `[1, C, A]` buffer.
fn flatten_channels(channels: &[Vec<f32>]) -> (Vec<f32>, [usize; 3]) {
    let anchors = channels[0].len();
    assert!(channels.iter().all(|c| c.len() == anchors));
    let mut data = Vec::with_capacity(channels.len() * anchors);
    for channel in channels {
        data.extend_from_slice(channel);
    }
    (data, [1, channels.len(), anchors])
}

#[test]
fn decode_yields_one_candidate_per_anchor() {
    // Confidence values straddle any plausible gate; decode must not filter.
    let (data, shape) = flatten_channels(&[
        vec![10.0, 20.0, 30.0],
        vec![10.0, 20.0, 30.0],
        vec![4.0, 4.0, 4.0],
        vec![4.0, 4.0, 4.0],
        vec![0.0, 0.5, 1.0],
    ]);
    let tensor = TensorView::from_shape(&data, shape).unwrap();

    let candidates = decode_candidates(&tensor);
    assert_eq!(candidates.len(), 3);
    for (j, cand) in candidates.iter().enumerate() {
        assert_eq!(cand.anchor, j);
    }
    assert_eq!(candidates[0].confidence, 0.0);
    assert_eq!(candidates[2].confidence, 1.0);
}

#[test]
fn decode_converts_center_to_top_left_origin() {
    let (data, shape) = flatten_channels(&[
        vec![100.0],
        vec![60.0],
        vec![40.0],
        vec![20.0],
        vec![0.9],
    ]);
    let tensor = TensorView::from_shape(&data, shape).unwrap();

    let cand = &decode_candidates(&tensor)[0];
    assert!((cand.bbox.x - 80.0).abs() < 1e-6);
    assert!((cand.bbox.y - 50.0).abs() < 1e-6);
    assert!((cand.bbox.w - 40.0).abs() < 1e-6);
    assert!((cand.bbox.h - 20.0).abs() < 1e-6);
}

#[test]
fn decode_extracts_keypoint_features_per_anchor() {
    // C = 8 gives one keypoint triplet per anchor.
    let (data, shape) = flatten_channels(&[
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![0.5, 0.6],
        vec![11.0, 21.0],
        vec![12.0, 22.0],
        vec![0.7, 0.8],
    ]);
    let tensor = TensorView::from_shape(&data, shape).unwrap();
    assert_eq!(tensor.keypoint_count(), 1);

    let candidates = decode_candidates(&tensor);
    assert_eq!(candidates[0].features, vec![11.0, 12.0, 0.7]);
    assert_eq!(candidates[1].features, vec![21.0, 22.0, 0.8]);
    assert_eq!(candidates[0].keypoint_count(), 1);
}

#[test]
fn decode_of_empty_anchor_dimension_is_empty() {
    let data: Vec<f32> = Vec::new();
    let tensor = TensorView::from_shape(&data, [1, 5, 0]).unwrap();
    assert!(decode_candidates(&tensor).is_empty());
}
