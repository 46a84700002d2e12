//! Confidence gating and greedy area-ratio suppression.

use super::Candidate;

/// Gates candidates by confidence and greedily suppresses duplicates.
///
/// Only candidates with `confidence > confidence_threshold` (strict) are
/// admitted; the boundary value is excluded so zero-signal anchors never pass
/// a zero threshold. Admitted candidates are sorted by descending confidence,
/// ties broken by ascending anchor index, and walked greedily: each
/// still-active candidate is kept, and every later candidate whose
/// intersection with it satisfies
/// `intersection_area > iou_threshold * min(area_a, area_b)` is deactivated.
///
/// The overlap rule is an area-ratio test, not classic IoU: a box is dropped
/// once the shared area covers more than `iou_threshold` of the smaller of
/// the two boxes. This suppresses nested boxes of very different scale more
/// aggressively than IoU would.
///
/// Returns indices into `candidates` in selection order, i.e. by descending
/// confidence. A zero-area box has `min(area) = 0`, so once admitted it
/// neither suppresses nor is suppressed.
pub fn select(
    candidates: &[Candidate],
    confidence_threshold: f32,
    iou_threshold: f32,
) -> Vec<usize> {
    let mut admitted: Vec<usize> = (0..candidates.len())
        .filter(|&i| candidates[i].confidence > confidence_threshold)
        .collect();
    admitted.sort_by(|&a, &b| {
        candidates[b]
            .confidence
            .total_cmp(&candidates[a].confidence)
            .then_with(|| candidates[a].anchor.cmp(&candidates[b].anchor))
    });

    let mut selected = Vec::new();
    let mut active = vec![true; admitted.len()];
    for i in 0..admitted.len() {
        if !active[i] {
            continue;
        }
        let idx = admitted[i];
        selected.push(idx);

        let kept = &candidates[idx].bbox;
        let kept_area = kept.area();
        for j in (i + 1)..admitted.len() {
            if !active[j] {
                continue;
            }
            let other = &candidates[admitted[j]].bbox;
            let overlap = kept.intersection_area(other);
            if overlap > iou_threshold * kept_area.min(other.area()) {
                active[j] = false;
            }
        }
    }
    selected
}
