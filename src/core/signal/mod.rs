//! # 신호 전처리
//!
//! 치아별 원시 샘플의 추세 제거와 각도 신호의 주기 보간

pub mod polyfit;
pub mod detrend;
pub mod interpolate;

pub use polyfit::{polyfit, polyval, linspace};
pub use detrend::{detrend, MIN_DETREND_SAMPLES};
pub use interpolate::interp_periodic;

#[cfg(test)]
mod __tests__;
