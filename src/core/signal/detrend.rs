//! 크라우닝(2차) 및 기울기(1차) 추세 제거

use super::polyfit::{polyfit, polyval};

/// 이보다 짧은 곡선은 그대로 반환
pub const MIN_DETREND_SAMPLES: usize = 5;

const STD_EPSILON: f64 = 1e-10;

/// 한 치아 샘플 열에서 2차 추세를 제거한 뒤 남은 1차 추세를 제거한다.
///
/// 인덱스를 평균 0, 표준편차 1 로 정규화해서 근사한다. 출력 길이는 입력과 같다.
pub fn detrend(raw: &[f64]) -> Vec<f64> {
    let n = raw.len();
    if n < MIN_DETREND_SAMPLES {
        return raw.to_vec();
    }

    let x_norm = normalized_index(n);
    let no_crown = subtract_fit(&x_norm, raw, 2);
    subtract_fit(&x_norm, &no_crown, 1)
}

fn normalized_index(n: usize) -> Vec<f64> {
    let mean = (n - 1) as f64 / 2.0;
    let variance = (0..n)
        .map(|i| (i as f64 - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let std = variance.sqrt() + STD_EPSILON;

    (0..n).map(|i| (i as f64 - mean) / std).collect()
}

fn subtract_fit(x: &[f64], y: &[f64], degree: usize) -> Vec<f64> {
    match polyfit(x, y, degree) {
        Some(coeffs) => x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - polyval(&coeffs, xi))
            .collect(),
        None => {
            log::debug!("{}차 추세 근사 실패, 원본 유지 (n={})", degree, y.len());
            y.to_vec()
        }
    }
}
