//! ISO 1328 기반 치면 공차 추정

use serde::Serialize;

use crate::core::types::CurveKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlankTolerance {
    pub total: f64,
    pub slope: f64,
    pub form: f64,
}

/// 정밀도 등급 계수 (5 등급 = 1.0)
pub fn grade_factor(grade: u8) -> f64 {
    match grade {
        4 => 0.63,
        5 => 1.0,
        6 => 1.6,
        7 => 2.5,
        8 => 4.0,
        9 => 6.0,
        10 => 10.0,
        11 => 16.0,
        12 => 25.0,
        _ => 1.0,
    }
}

/// 총 공차와 그 70%(기울기), 40%(형상)
pub fn iso1328_tolerance(
    kind: CurveKind,
    module: f64,
    teeth_count: u32,
    face_width: f64,
    grade: u8,
) -> FlankTolerance {
    let k = grade_factor(grade);
    let d = module * teeth_count as f64;

    let base = match kind {
        CurveKind::Profile => 0.1 * module + 0.45 * d.max(0.0).sqrt() + 5.0,
        CurveKind::Lead => {
            let b = face_width.max(0.0);
            let ratio = if face_width > 0.0 { d / face_width } else { 1.0 };
            0.1 * ratio.max(0.0).sqrt() * b + 0.45 * b.sqrt() + 5.0
        }
    };

    let total = k * base;
    FlankTolerance {
        total,
        slope: total * 0.7,
        form: total * 0.4,
    }
}
