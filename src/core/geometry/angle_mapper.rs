//! 치아 내부 회전각 오프셋 계산

use super::involute::{involute_polar_angle, radius_from_spread, spread_length};
use crate::core::signal::linspace;

/// 이보다 작은 비틀림각(도)은 평기어로 본다
pub const NEGLIGIBLE_HELIX_DEG: f64 = 0.01;

/// 비틀림각이 없을 때 한 피치 중 점들이 차지하는 비율
pub const LEAD_FALLBACK_FRACTION: f64 = 0.9;

/// 치형 곡선 `raw_len` 개 점의 회전각 오프셋(도)
///
/// 평가 시작/끝 지름 사이의 전개 길이를 등분하고, 각 점의 극각에서 첫 점의 극각을 뺀다.
/// 결과는 0 에서 시작해 단조 비감소한다. 지름 순서가 뒤집혀 있으면 작은 쪽부터 쓴다.
pub fn map_profile_angles(
    raw_len: usize,
    eval_start_diam: f64,
    eval_end_diam: f64,
    base_radius: f64,
) -> Vec<f64> {
    let (d_low, d_high) = (
        eval_start_diam.min(eval_end_diam),
        eval_start_diam.max(eval_end_diam),
    );

    let polar: Vec<f64> = linspace(
        spread_length(d_low, base_radius),
        spread_length(d_high, base_radius),
        raw_len,
    )
    .into_iter()
    .map(|l| involute_polar_angle(radius_from_spread(l, base_radius), base_radius))
    .collect();

    let start = polar.first().copied().unwrap_or(0.0);
    polar.into_iter().map(|p| (p - start).to_degrees()).collect()
}

/// 치향 곡선 `raw_len` 개 점의 회전각 오프셋(도)
///
/// 치폭 방향 위치 z 에 대해 Δφ = 2·z·tan|β| / d.
/// 비틀림각이 무시할 만하거나 피치원 지름이 0 이하이면 한 피치의 90% 안에 균등 배치한다.
pub fn map_lead_angles(
    raw_len: usize,
    eval_width_mm: f64,
    helix_angle_deg: f64,
    pitch_diameter: f64,
    pitch_angle_deg: f64,
) -> Vec<f64> {
    if helix_angle_deg.abs() < NEGLIGIBLE_HELIX_DEG || pitch_diameter <= 0.0 {
        return linspace(0.0, pitch_angle_deg * LEAD_FALLBACK_FRACTION, raw_len);
    }

    let tan_beta = helix_angle_deg.abs().to_radians().tan();
    linspace(0.0, eval_width_mm, raw_len)
        .into_iter()
        .map(|z| (2.0 * z * tan_beta / pitch_diameter).to_degrees())
        .collect()
}
