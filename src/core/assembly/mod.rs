//! # 폐곡선 합성
//!
//! 치아별 측정 곡선을 추세 제거, 각도 매핑한 뒤 0–360° 한 바퀴 신호로 이어 붙인다.

pub mod selection;
pub mod curve_assembler;

pub use selection::{evaluation_window, select_representative, MIN_TOOTH_SAMPLES, MIN_SLICE_SAMPLES};
pub use curve_assembler::{AssembledCurve, CurveAssembler};
