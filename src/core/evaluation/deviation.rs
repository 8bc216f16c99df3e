//! 치형/치향 편차 (총 편차 F, 기울기 편차 fH, 형상 편차 ff)

use serde::{Deserialize, Serialize};

use crate::core::assembly::select_representative;
use crate::core::signal::{polyfit, polyval};
use crate::core::types::{EvaluationRange, ToothCurveSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlankDeviation {
    /// 평가 구간 최대 − 최소
    pub total: f64,
    /// 평균 직선의 끝값 − 시작값 (부호 있음)
    pub slope: f64,
    /// 평균 직선 잔차의 최대 − 최소
    pub form: f64,
}

/// 곡선 하나의 편차. `range` 는 샘플 위치와 같은 단위여야 한다.
pub fn flank_deviations(samples: &[f64], range: &EvaluationRange) -> FlankDeviation {
    let n = samples.len();
    if n == 0 {
        return FlankDeviation::default();
    }

    // 뒤집힌 구간도 (min, max) 로 본다
    let (meas_start, meas_end) = range.meas_bounds();
    let (eval_start, eval_end) = range.eval_bounds();

    let spacing = if n > 1 {
        (meas_end - meas_start) / (n - 1) as f64
    } else {
        0.001
    };
    let spacing = if spacing == 0.0 { 0.001 } else { spacing };

    let start = ((eval_start - meas_start) / spacing).floor().max(0.0);
    let end = ((eval_end - meas_start) / spacing)
        .floor()
        .min((n - 1) as f64);
    let window = if end > start {
        &samples[start as usize..=end as usize]
    } else {
        samples
    };

    let total = peak_to_valley(window.iter().copied());

    let x: Vec<f64> = (0..window.len()).map(|i| i as f64).collect();
    match polyfit(&x, window, 1) {
        Some(line) => {
            let trend = |i: usize| polyval(&line, i as f64);
            let last = window.len() - 1;
            FlankDeviation {
                total,
                slope: trend(last) - trend(0),
                form: peak_to_valley(window.iter().enumerate().map(|(i, &v)| v - trend(i))),
            }
        }
        None => FlankDeviation {
            total,
            slope: 0.0,
            form: total,
        },
    }
}

/// 치아마다 대표 곡선의 편차를 구해 평균한다. 곡선이 없으면 0.
pub fn mean_flank_deviations(
    curves: &ToothCurveSet,
    range: &EvaluationRange,
    selection_target: f64,
) -> FlankDeviation {
    let per_tooth: Vec<FlankDeviation> = curves
        .iter()
        .filter_map(|(_, by_position)| select_representative(by_position, selection_target))
        .filter(|(_, samples)| !samples.is_empty())
        .map(|(_, samples)| flank_deviations(samples, range))
        .collect();

    if per_tooth.is_empty() {
        return FlankDeviation::default();
    }

    let count = per_tooth.len() as f64;
    FlankDeviation {
        total: per_tooth.iter().map(|d| d.total).sum::<f64>() / count,
        slope: per_tooth.iter().map(|d| d.slope).sum::<f64>() / count,
        form: per_tooth.iter().map(|d| d.form).sum::<f64>() / count,
    }
}

fn peak_to_valley(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if max >= min {
        max - min
    } else {
        0.0
    }
}
