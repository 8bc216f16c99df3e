//! # 평가
//!
//! 고차 파형 선별과 재구성, ISO 1328 식 편차/공차, 피치 편차 요약

pub mod high_order;
pub mod deviation;
pub mod pitch;
pub mod tolerance;

pub use high_order::{build_result, is_high_order, reconstruct};
pub use deviation::{flank_deviations, mean_flank_deviations, FlankDeviation};
pub use pitch::{summarize_pitch, PitchSummary};
pub use tolerance::{grade_factor, iso1328_tolerance, FlankTolerance};

#[cfg(test)]
mod __tests__;
