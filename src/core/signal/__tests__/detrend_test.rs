use crate::core::signal::{detrend, linspace, polyfit, polyval, MIN_DETREND_SAMPLES};
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn 짧은_곡선은_그대로_반환() {
    let raw = vec![1.0, 4.0, 9.0, 16.0];
    assert!(raw.len() < MIN_DETREND_SAMPLES);
    assert_eq!(detrend(&raw), raw);
}

#[test]
fn 출력_길이_보존() {
    for n in [5usize, 6, 17, 480] {
        let raw: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
        assert_eq!(detrend(&raw).len(), n);
    }
}

#[test]
fn 상수_입력은_0에_가까운_잔차() {
    let raw = vec![3.25; 12];
    for v in detrend(&raw) {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn 최소_길이_입력도_처리() {
    let raw = vec![0.0, 1.0, 4.0, 9.0, 16.0];
    let out = detrend(&raw);
    assert_eq!(out.len(), 5);
    for v in out {
        assert!(v.is_finite());
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn 이차_추세와_잡음_분리() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 200;
    let noise: Vec<f64> = (0..n).map(|_| rng.gen_range(-0.01..0.01)).collect();
    let raw: Vec<f64> = (0..n)
        .map(|i| {
            let x = i as f64;
            1.5 + 0.3 * x + 0.02 * x * x + noise[i]
        })
        .collect();

    // 추세 제거는 선형 연산이므로 다항식 부분은 사라지고 잡음의 추세 제거 결과만 남는다
    let cleaned = detrend(&raw);
    let cleaned_noise = detrend(&noise);
    for (a, b) in cleaned.iter().zip(&cleaned_noise) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
    for v in &cleaned {
        assert!(v.abs() < 0.03, "잔차가 잡음 크기를 넘음: {}", v);
    }
}

#[test]
fn 다항식_근사_정확도() {
    let x = linspace(-2.0, 2.0, 9);
    let y: Vec<f64> = x.iter().map(|&v| 0.5 - 1.25 * v + 3.0 * v * v).collect();
    let coeffs = polyfit(&x, &y, 2).expect("근사 실패");

    assert_abs_diff_eq!(coeffs[0], 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(coeffs[1], -1.25, epsilon = 1e-10);
    assert_abs_diff_eq!(coeffs[2], 3.0, epsilon = 1e-10);
    assert_abs_diff_eq!(polyval(&coeffs, 1.5), 0.5 - 1.875 + 6.75, epsilon = 1e-9);
}

#[test]
fn 점이_부족하면_근사_없음() {
    assert!(polyfit(&[0.0, 1.0], &[1.0, 2.0], 2).is_none());
}

#[test]
fn linspace_끝점_포함() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}
