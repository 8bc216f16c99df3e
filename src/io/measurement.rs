//! 측정 문서 모델
//!
//! 치아별 곡선은 `{치아 번호: [{position, samples}]}` 형태로 받고
//! 코어의 `ToothCurveSet` 으로 정규화한다.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{
    CurveKind, EvaluationRange, FlankSide, GearMeasurement, GearParameters, PitchRow, SideCurves,
};
use crate::error::{Result, RippleError};

/// 측정기가 "정의되지 않음" 으로 기록하는 값
pub const UNDEFINED_SAMPLE: f64 = -2147483.648;

const UNDEFINED_TOLERANCE: f64 = 0.001;

fn default_pressure_angle() -> f64 {
    20.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearSpec {
    pub module: f64,
    pub teeth_count: u32,
    #[serde(default = "default_pressure_angle")]
    pub pressure_angle: f64,
    #[serde(default)]
    pub helix_angle: f64,
    #[serde(default)]
    pub face_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub position: f64,
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideDocument {
    #[serde(default)]
    pub left: BTreeMap<u32, Vec<CurveRecord>>,
    #[serde(default)]
    pub right: BTreeMap<u32, Vec<CurveRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchDocument {
    #[serde(default)]
    pub left: Vec<PitchRow>,
    #[serde(default)]
    pub right: Vec<PitchRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDocument {
    pub gear: GearSpec,
    pub profile_range: EvaluationRange,
    #[serde(alias = "helix_range")]
    pub lead_range: EvaluationRange,
    #[serde(default)]
    pub profile: SideDocument,
    #[serde(default, alias = "helix")]
    pub lead: SideDocument,
    #[serde(default)]
    pub pitch: PitchDocument,
}

impl MeasurementDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RippleError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// 코어 모델로 정규화한다. 정의되지 않음 샘플은 여기서 걸러진다.
    pub fn into_measurement(self) -> Result<GearMeasurement> {
        let spec = &self.gear;
        if !spec.module.is_finite() || !spec.pressure_angle.is_finite() || !spec.helix_angle.is_finite() {
            return Err(RippleError::InvalidGear("유한하지 않은 제원 값".to_string()));
        }
        if spec.helix_angle.abs() >= 90.0 {
            return Err(RippleError::InvalidGear(format!(
                "비틀림각 {}° 는 ±90° 미만이어야 함",
                spec.helix_angle
            )));
        }

        let gear = GearParameters::new(spec.module, spec.teeth_count, spec.pressure_angle, spec.helix_angle);
        if !gear.is_valid() {
            log::warn!(
                "모듈 {} / 잇수 {}: 기하 파생 값이 0 으로 설정됨",
                spec.module,
                spec.teeth_count
            );
        }

        let profile = normalize_sides(self.profile, CurveKind::Profile);
        let lead = normalize_sides(self.lead, CurveKind::Lead);

        Ok(GearMeasurement {
            gear,
            face_width: spec.face_width,
            profile_range: self.profile_range,
            lead_range: self.lead_range,
            profile,
            lead,
            pitch_left: self.pitch.left,
            pitch_right: self.pitch.right,
        })
    }
}

fn normalize_sides(doc: SideDocument, kind: CurveKind) -> SideCurves {
    let mut curves = SideCurves::default();
    for (side, teeth) in [(FlankSide::Left, doc.left), (FlankSide::Right, doc.right)] {
        let set = curves.side_mut(side);
        let mut dropped = 0usize;
        for (tooth, records) in teeth {
            for record in records {
                let before = record.samples.len();
                let samples = clean_samples(record.samples);
                dropped += before - samples.len();
                set.insert(tooth, record.position, samples);
            }
        }
        if dropped > 0 {
            log::debug!("{} {}: 정의되지 않은 샘플 {}개 제거", kind, side, dropped);
        }
        log::debug!("{} {}: 치아 {}개", kind, side, set.tooth_count());
    }
    curves
}

/// 정의되지 않음 표식과 유한하지 않은 값을 제거한다
pub fn clean_samples(samples: Vec<f64>) -> Vec<f64> {
    samples
        .into_iter()
        .filter(|v| v.is_finite() && (v - UNDEFINED_SAMPLE).abs() > UNDEFINED_TOLERANCE)
        .collect()
}
