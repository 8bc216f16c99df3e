//! 피치 편차 요약 (fp, Fp, Fr)

use serde::Serialize;

use crate::core::types::PitchRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchSummary {
    pub teeth: Vec<u32>,
    /// 단일 피치 편차 fp
    pub single: Vec<f64>,
    /// 누적 피치 편차 Fp (fp 누적합)
    pub cumulative: Vec<f64>,
    pub single_max: f64,
    pub cumulative_max: f64,
    pub cumulative_min: f64,
    /// 런아웃 Fr = Fp 최대 − 최소
    pub runout: f64,
}

/// 측정 행 순서대로 누적한다. 행이 없으면 1..=잇수 의 0 편차.
pub fn summarize_pitch(rows: &[PitchRow], teeth_count: u32) -> PitchSummary {
    let (teeth, single): (Vec<u32>, Vec<f64>) = if rows.is_empty() {
        ((1..=teeth_count).collect(), vec![0.0; teeth_count as usize])
    } else {
        rows.iter().map(|r| (r.tooth, r.fp)).unzip()
    };

    let cumulative: Vec<f64> = single
        .iter()
        .scan(0.0, |acc, &fp| {
            *acc += fp;
            Some(*acc)
        })
        .collect();

    let max_of = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_of = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);

    let (single_max, cumulative_max, cumulative_min) = if single.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (max_of(&single), max_of(&cumulative), min_of(&cumulative))
    };

    PitchSummary {
        teeth,
        single,
        cumulative,
        single_max,
        cumulative_max,
        cumulative_min,
        runout: cumulative_max - cumulative_min,
    }
}
