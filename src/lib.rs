//! 기어 치면 파형(ripple) 분석 라이브러리
//!
//! 치형/치향 측정 곡선을 한 바퀴 회전각 곡선으로 합성하고
//! 반복 정현파 분해로 잇수 이상의 고차 파형을 찾아낸다.

pub mod config;
pub mod core;
pub mod error;
pub mod io;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 자료 구조
    AnalysisResult, CurveKind, EvaluationRange, FlankSide, GearMeasurement, GearParameters,
    HighOrderWave, SpectrumComponent, ToothCurveSet,
    // 파이프라인
    CurveAssembler, FlankReport, GearAnalysis, RippleAnalyzer, SpectralDecomposer,
};
pub use config::AnalysisConfig;
pub use error::{Result, RippleError};
pub use io::{GearReport, MeasurementDocument};
