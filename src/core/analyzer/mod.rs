//! # 파형 분석기
//!
//! 합성 → 분해 → 결과 조립 파이프라인과 치형/치향 × 좌/우 네 방향 분석

pub mod ripple_analyzer;

pub use ripple_analyzer::{flat_placeholder, GearAnalysis, RippleAnalyzer, FlankReport, MIN_CURVE_POINTS, PLACEHOLDER_POINTS};
