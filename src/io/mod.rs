//! # 입출력 경계
//!
//! 파서 협력자가 넘겨주는 측정 문서(JSON)와 표현 계층으로 넘기는 보고서

pub mod measurement;
pub mod report;

pub use measurement::{CurveRecord, GearSpec, MeasurementDocument, PitchDocument, SideDocument, UNDEFINED_SAMPLE};
pub use report::GearReport;
