//! # 파형 분석 코어
//!
//! 치아별 측정 곡선 → 회전각 합성 곡선 → 반복 정현파 분해 → 고차 파형 평가

pub mod types;
pub mod signal;
pub mod geometry;
pub mod assembly;
pub mod spectrum;
pub mod evaluation;
pub mod analyzer;

// 주요 타입들 재수출
pub use types::*;
pub use assembly::{AssembledCurve, CurveAssembler};
pub use spectrum::{decompose, SpectralDecomposer};
pub use evaluation::{FlankDeviation, FlankTolerance, PitchSummary};
pub use analyzer::{FlankReport, GearAnalysis, RippleAnalyzer};
