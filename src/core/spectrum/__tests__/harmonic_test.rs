use crate::core::spectrum::{HarmonicFit, HarmonicTable};
use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

#[test]
fn 단일_차수_계수_복원() {
    let n = 360;
    let table = HarmonicTable::new(n);
    let signal: Vec<f64> = (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            1.5 * (7.0 * theta).cos() - 0.5 * (7.0 * theta).sin()
        })
        .collect();

    let inverse = table.gram_inverse(7).expect("7 차는 정칙");
    let fit = table.fit(7, &inverse, &signal);
    assert_abs_diff_eq!(fit.a, 1.5, epsilon = 1e-10);
    assert_abs_diff_eq!(fit.b, -0.5, epsilon = 1e-10);

    let mut residual = signal.clone();
    table.subtract(7, &fit, &mut residual);
    assert!(residual.iter().all(|r| r.abs() < 1e-10));
}

#[test]
fn 나이퀴스트_차수는_특이() {
    // N/2 차에서는 sin 열이 모두 0
    let table = HarmonicTable::new(360);
    assert!(table.gram_inverse(180).is_none());
    assert!(table.gram_inverse(360).is_none());
    assert!(table.gram_inverse(179).is_some());
}

#[test]
fn 위상_규약() {
    let fit = HarmonicFit { a: 2.0, b: 0.0 };
    assert_abs_diff_eq!(fit.phase(), PI / 2.0, epsilon = 1e-15);
    assert_abs_diff_eq!(fit.amplitude(), 2.0, epsilon = 1e-15);

    let negative = HarmonicFit { a: 0.0, b: -1.0 };
    assert_abs_diff_eq!(negative.phase(), PI, epsilon = 1e-15);
}
