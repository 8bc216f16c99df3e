//! 최소제곱 다항식 근사

use nalgebra::{DMatrix, DVector};

/// 이 값보다 작은 특이값은 0 으로 취급
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// 최소제곱 다항식 계수를 차수 오름차순(c0 + c1·x + c2·x² ...)으로 반환한다.
///
/// 점 개수가 `degree` 이하이거나 분해에 실패하면 `None`.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Option<Vec<f64>> {
    let n = x.len().min(y.len());
    if n <= degree {
        return None;
    }

    // 방데르몽드 행렬
    let a_matrix = DMatrix::from_fn(n, degree + 1, |i, j| x[i].powi(j as i32));
    let b_vector = DVector::from_column_slice(&y[..n]);

    let svd = a_matrix.svd(true, true);
    let coeffs = svd.solve(&b_vector, SINGULAR_TOLERANCE).ok()?;

    if coeffs.iter().all(|c| c.is_finite()) {
        Some(coeffs.iter().copied().collect())
    } else {
        None
    }
}

/// 오름차순 계수 다항식 값 (Horner)
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// 양 끝점을 포함하는 등간격 점열
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
