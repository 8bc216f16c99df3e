//! 치아별 대표 곡선 선택과 평가 구간 절단

use std::ops::Range;

use crate::core::geometry::spread_length;
use crate::core::types::{CurveKind, CurvesByPosition, EvaluationRange};

/// 이 길이 이하의 곡선은 치아째로 건너뛴다
pub const MIN_TOOTH_SAMPLES: usize = 5;

/// 절단 후 이 길이 이하가 되면 절단하지 않는다
pub const MIN_SLICE_SAMPLES: usize = 10;

/// `target` 에 가장 가까운 위치의 곡선을 고른다. 거리가 같으면 작은 위치가 우선.
pub fn select_representative(curves: &CurvesByPosition, target: f64) -> Option<(f64, &[f64])> {
    let mut best: Option<(f64, &[f64])> = None;
    for (position, samples) in curves {
        let distance = (position.0 - target).abs();
        let closer = match best {
            None => true,
            Some((best_pos, _)) => distance < (best_pos - target).abs(),
        };
        if closer {
            best = Some((position.0, samples.as_slice()));
        }
    }
    best
}

/// 측정 구간 대비 평가 구간의 샘플 인덱스 범위
///
/// 치형은 지름을 전개 길이로 바꾼 뒤 비율을 구하고, 치향은 치폭 위치 비율을 그대로 쓴다.
/// 결과 구간이 `MIN_SLICE_SAMPLES` 이하이거나 측정 구간 길이가 0 이하이면 `None`.
pub fn evaluation_window(
    kind: CurveKind,
    range: &EvaluationRange,
    base_radius: f64,
    sample_count: usize,
) -> Option<Range<usize>> {
    let (meas_low, meas_high) = range.meas_bounds();
    let (eval_low, eval_high) = range.eval_bounds();

    let (meas_low, meas_high, eval_low, eval_high) = match kind {
        CurveKind::Profile => (
            spread_length(meas_low, base_radius),
            spread_length(meas_high, base_radius),
            spread_length(eval_low, base_radius),
            spread_length(eval_high, base_radius),
        ),
        CurveKind::Lead => (meas_low, meas_high, eval_low, eval_high),
    };

    let total = meas_high - meas_low;
    if !(total > 0.0) {
        return None;
    }

    let n = sample_count as f64;
    let start_ratio = (eval_low - meas_low) / total;
    let end_ratio = (eval_high - meas_low) / total;
    let start = (start_ratio * n).trunc().max(0.0);
    let end = (end_ratio * n).trunc().min(n);

    if end - start > MIN_SLICE_SAMPLES as f64 {
        Some(start as usize..end as usize)
    } else {
        None
    }
}
