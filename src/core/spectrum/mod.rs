//! # 반복 정현파 분해
//!
//! 균일 주기 격자 위에서 잔차에 가장 잘 맞는 차수를 하나씩 최소제곱으로 뽑아내고 빼는
//! 탐욕적 분해(matching pursuit). 한 번의 FFT 가 아니라 매 반복마다 갱신된 잔차에 다시 맞춘다.

pub mod harmonic;
pub mod decomposer;

pub use harmonic::{HarmonicFit, HarmonicTable};
pub use decomposer::{
    decompose, dedup_angles, default_max_order, SpectralDecomposer, AMPLITUDE_THRESHOLD,
    DEFAULT_NUM_COMPONENTS, MIN_DECOMPOSE_SAMPLES,
};

#[cfg(test)]
mod __tests__;
