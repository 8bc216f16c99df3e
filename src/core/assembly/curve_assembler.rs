//! 치아별 곡선 → 한 바퀴 각도 신호

use crate::core::geometry::{map_lead_angles, map_profile_angles};
use crate::core::signal::detrend;
use crate::core::types::{CurveKind, EvaluationRange, FlankSide, GearParameters, ToothCurveSet};

use super::selection::{evaluation_window, select_representative, MIN_TOOTH_SAMPLES};

/// 합성된 (각도, 값) 신호. 각도 오름차순, [0, 360).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledCurve {
    pub angles: Vec<f64>,
    pub values: Vec<f64>,
}

impl AssembledCurve {
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

/// 폐곡선 합성기
///
/// 기어 제원과 두 평가 구간을 빌려 쓰며 내부 상태는 없다.
pub struct CurveAssembler<'a> {
    gear: &'a GearParameters,
    profile_range: &'a EvaluationRange,
    lead_range: &'a EvaluationRange,
}

impl<'a> CurveAssembler<'a> {
    pub fn new(
        gear: &'a GearParameters,
        profile_range: &'a EvaluationRange,
        lead_range: &'a EvaluationRange,
    ) -> Self {
        Self {
            gear,
            profile_range,
            lead_range,
        }
    }

    /// 대표 곡선을 고를 기준 위치
    ///
    /// 치형 곡선은 치폭 위치 z 로, 치향 곡선은 지름 d 로 구분되므로
    /// 반대쪽 곡선 종류의 평가 구간 중앙을 쓴다.
    pub fn selection_target(&self, kind: CurveKind) -> f64 {
        match kind {
            CurveKind::Profile => self.lead_range.eval_midpoint(),
            CurveKind::Lead => self.profile_range.eval_midpoint(),
        }
    }

    fn own_range(&self, kind: CurveKind) -> &EvaluationRange {
        match kind {
            CurveKind::Profile => self.profile_range,
            CurveKind::Lead => self.lead_range,
        }
    }

    /// 치아 한 개의 (각도, 값) 열. 샘플이 부족하면 `None`.
    pub fn tooth_segment(
        &self,
        kind: CurveKind,
        tooth_id: u32,
        raw: &[f64],
    ) -> Option<(Vec<f64>, Vec<f64>)> {
        if raw.len() <= MIN_TOOTH_SAMPLES {
            return None;
        }

        let range = self.own_range(kind);
        let base_radius = self.gear.base_radius();
        let sliced = match evaluation_window(kind, range, base_radius, raw.len()) {
            Some(window) => &raw[window],
            None => raw,
        };

        let corrected = detrend(sliced);
        let n = corrected.len();

        let offsets = match kind {
            CurveKind::Profile => {
                let (d_low, d_high) = range.eval_bounds();
                map_profile_angles(n, d_low, d_high, base_radius)
            }
            CurveKind::Lead => map_lead_angles(
                n,
                range.eval_width(),
                self.gear.helix_angle(),
                self.gear.pitch_diameter(),
                self.gear.pitch_angle(),
            ),
        };

        let tooth_base_angle = (tooth_id as f64 - 1.0) * self.gear.pitch_angle();
        let angles = offsets.into_iter().map(|a| tooth_base_angle + a).collect();
        Some((angles, corrected))
    }

    /// 모든 치아를 번호 순으로 처리해 한 바퀴 신호를 만든다.
    ///
    /// 각도는 [0, 360) 으로 감싼 뒤 각도 기준으로 정렬한다(값도 같은 순서로 따라간다).
    pub fn assemble(&self, curves: &ToothCurveSet, kind: CurveKind, side: FlankSide) -> AssembledCurve {
        let target = self.selection_target(kind);
        let mut points: Vec<(f64, f64)> = Vec::new();
        let mut used_teeth = 0usize;

        for (tooth_id, by_position) in curves.iter() {
            let Some((position, raw)) = select_representative(by_position, target) else {
                continue;
            };

            match self.tooth_segment(kind, tooth_id, raw) {
                Some((angles, values)) => {
                    points.extend(angles.into_iter().zip(values));
                    used_teeth += 1;
                }
                None => log::debug!(
                    "{} {} 치아 {} 건너뜀: 위치 {:.3} 곡선 샘플 {}개",
                    kind,
                    side,
                    tooth_id,
                    position,
                    raw.len()
                ),
            }
        }

        for point in points.iter_mut() {
            point.0 = wrap_degrees(point.0);
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        log::debug!(
            "{} {} 합성: 치아 {}/{} 사용, {} 점",
            kind,
            side,
            used_teeth,
            curves.tooth_count(),
            points.len()
        );

        let (angles, values) = points.into_iter().unzip();
        AssembledCurve { angles, values }
    }
}

/// [0, 360) 으로 감싼다
#[inline]
fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // 아주 작은 음수는 rem_euclid 결과가 360.0 으로 반올림된다
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
