//! 인벌류트 기초 함수

/// 반지름 `radius` 에서의 인벌류트 극각 inv(α) = tan α − α (rad)
///
/// 기초원 안쪽이나 경계(`radius <= base_radius`), 또는 기초원 반지름이 0 이하이면 0.
#[inline]
pub fn involute_polar_angle(radius: f64, base_radius: f64) -> f64 {
    if base_radius <= 0.0 || radius <= base_radius {
        return 0.0;
    }
    let alpha = (base_radius / radius).clamp(-1.0, 1.0).acos();
    alpha.tan() - alpha
}

/// 지름 `diameter` 까지의 전개 길이 L = sqrt(r² − rb²)
///
/// 근호 안이 음수면 0 으로 자른다.
#[inline]
pub fn spread_length(diameter: f64, base_radius: f64) -> f64 {
    let radius = diameter / 2.0;
    (radius * radius - base_radius * base_radius).max(0.0).sqrt()
}

/// 전개 길이 → 반지름
#[inline]
pub fn radius_from_spread(spread: f64, base_radius: f64) -> f64 {
    (spread * spread + base_radius * base_radius).sqrt()
}
