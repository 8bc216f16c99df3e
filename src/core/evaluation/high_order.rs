//! 고차 분량 선별과 재구성

use crate::core::types::{AnalysisResult, HighOrderWave, SpectrumComponent};

/// 차수가 잇수 이상이면 고차(파형)로 본다
#[inline]
pub fn is_high_order(component: &SpectrumComponent, teeth_count: u32) -> bool {
    component.order >= teeth_count as f64
}

/// 주어진 분량들의 합을 각도(도) 위치에서 계산한다
pub fn reconstruct(components: &[SpectrumComponent], angles_deg: &[f64]) -> Vec<f64> {
    angles_deg
        .iter()
        .map(|deg| {
            let theta = deg.to_radians();
            components.iter().map(|c| c.evaluate(theta)).sum()
        })
        .collect()
}

/// 분해 결과로 분석 결과를 조립한다
///
/// 고차 진폭 합은 단순 합, RMS 는 고차 분량 진폭의 L2 노름이다.
/// 분량이 없으면 재구성 신호와 지표는 모두 0 이다.
pub fn build_result(
    angles: Vec<f64>,
    values: Vec<f64>,
    components: Vec<SpectrumComponent>,
    teeth_count: u32,
) -> AnalysisResult {
    let high_order: Vec<SpectrumComponent> = components
        .iter()
        .filter(|c| is_high_order(c, teeth_count))
        .copied()
        .collect();

    let high_order_amplitude = high_order.iter().map(|c| c.amplitude).sum::<f64>();
    let high_order_rms = high_order
        .iter()
        .map(|c| c.amplitude * c.amplitude)
        .sum::<f64>()
        .sqrt();

    let reconstructed_signal = reconstruct(&high_order, &angles);
    let high_order_waves = high_order
        .iter()
        .map(|c| HighOrderWave {
            order: c.order,
            amplitude: c.amplitude,
        })
        .collect();

    AnalysisResult {
        angles,
        values,
        reconstructed_signal,
        high_order_waves,
        spectrum_components: components,
        high_order_amplitude,
        high_order_rms,
    }
}
