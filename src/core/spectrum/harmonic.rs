//! 균일 격자 위의 cos/sin 기저

use std::f64::consts::PI;

use nalgebra::{Matrix2, Vector2};

/// 그람 행렬식이 이 비율보다 작으면 특이 행렬로 본다
const SINGULAR_RATIO: f64 = 1e-10;

/// 한 차수의 최소제곱 계수: a·cos(kθ) + b·sin(kθ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicFit {
    pub a: f64,
    pub b: f64,
}

impl HarmonicFit {
    pub fn amplitude(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// atan2(a, b), (−π, π]
    pub fn phase(&self) -> f64 {
        self.a.atan2(self.b)
    }
}

/// N 점 균일 격자 θ_i = 2πi/N 의 cos/sin 표
///
/// 차수 k 의 기저값은 cos(kθ_i) = cos[(k·i) mod N] 로 얻으므로
/// 차수가 많아도 표 크기는 N 이다.
#[derive(Debug, Clone)]
pub struct HarmonicTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl HarmonicTable {
    pub fn new(n: usize) -> Self {
        let (cos, sin) = (0..n)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / n as f64;
                (theta.cos(), theta.sin())
            })
            .unzip();
        Self { cos, sin }
    }

    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    #[inline]
    fn index(&self, order: usize, i: usize) -> usize {
        ((order % self.len()) * i) % self.len()
    }

    /// [cos sin] 열의 그람 행렬 역행렬. 특이하면 `None`.
    pub fn gram_inverse(&self, order: usize) -> Option<Matrix2<f64>> {
        if self.is_empty() {
            return None;
        }

        let (mut cc, mut cs, mut ss) = (0.0, 0.0, 0.0);
        for i in 0..self.len() {
            let j = self.index(order, i);
            let (c, s) = (self.cos[j], self.sin[j]);
            cc += c * c;
            cs += c * s;
            ss += s * s;
        }

        let det = cc * ss - cs * cs;
        let scale = cc.max(ss);
        if !(det > SINGULAR_RATIO * scale * scale) {
            return None;
        }
        Matrix2::new(cc, cs, cs, ss).try_inverse()
    }

    /// 정규방정식으로 잔차에 대한 (a, b) 를 구한다
    pub fn fit(&self, order: usize, gram_inverse: &Matrix2<f64>, residual: &[f64]) -> HarmonicFit {
        let (mut rc, mut rs) = (0.0, 0.0);
        for (i, &r) in residual.iter().enumerate().take(self.len()) {
            let j = self.index(order, i);
            rc += self.cos[j] * r;
            rs += self.sin[j] * r;
        }

        let coeffs = gram_inverse * Vector2::new(rc, rs);
        HarmonicFit {
            a: coeffs[0],
            b: coeffs[1],
        }
    }

    /// 맞춘 정현파를 잔차에서 뺀다
    pub fn subtract(&self, order: usize, fit: &HarmonicFit, residual: &mut [f64]) {
        for (i, r) in residual.iter_mut().enumerate().take(self.len()) {
            let j = self.index(order, i);
            *r -= fit.a * self.cos[j] + fit.b * self.sin[j];
        }
    }
}
