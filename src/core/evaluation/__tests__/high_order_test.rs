use crate::core::evaluation::{build_result, is_high_order, reconstruct};
use crate::core::spectrum::decompose;
use crate::core::types::SpectrumComponent;
use approx::assert_abs_diff_eq;

fn component(order: f64, amplitude: f64, phase: f64) -> SpectrumComponent {
    SpectrumComponent { order, amplitude, phase }
}

#[test]
fn 잇수와_같은_차수는_고차() {
    let teeth = 20;
    assert!(is_high_order(&component(20.0, 1.0, 0.0), teeth));
    assert!(!is_high_order(&component(19.0, 1.0, 0.0), teeth));

    let result = build_result(
        vec![0.0, 90.0],
        vec![0.0, 0.0],
        vec![component(20.0, 0.8, 0.1), component(19.0, 0.5, 0.2)],
        teeth,
    );
    assert_eq!(result.high_order_waves.len(), 1);
    assert_eq!(result.high_order_waves[0].order, 20.0);
}

#[test]
fn 고차_필터와_집계는_정의대로() {
    let components = vec![
        component(87.0, 1.2, 0.3),
        component(3.0, 0.9, -1.0),
        component(174.0, 0.4, 2.0),
        component(86.0, 0.3, 0.0),
    ];
    let teeth = 87;
    let result = build_result(vec![0.0, 1.0, 2.0], vec![0.0; 3], components.clone(), teeth);

    let high: Vec<&SpectrumComponent> = components.iter().filter(|c| c.order >= 87.0).collect();
    for c in &components {
        let present = result.high_order_waves.iter().any(|w| w.order == c.order);
        assert_eq!(present, c.order >= teeth as f64);
    }

    assert_eq!(
        result.high_order_amplitude,
        high.iter().map(|c| c.amplitude).sum::<f64>()
    );
    assert_eq!(
        result.high_order_rms,
        high.iter().map(|c| c.amplitude * c.amplitude).sum::<f64>().sqrt()
    );
    assert_eq!(result.spectrum_components, components);
}

#[test]
fn 분량이_없으면_0_결과() {
    let result = build_result(vec![0.0, 120.0, 240.0], vec![1.0, -1.0, 0.5], Vec::new(), 30);
    assert_eq!(result.high_order_amplitude, 0.0);
    assert_eq!(result.high_order_rms, 0.0);
    assert!(result.high_order_waves.is_empty());
    assert_eq!(result.reconstructed_signal, vec![0.0; 3]);
}

#[test]
fn 빈_입력도_실패하지_않음() {
    let result = build_result(Vec::new(), Vec::new(), Vec::new(), 30);
    assert!(result.angles.is_empty());
    assert!(result.reconstructed_signal.is_empty());
    assert!(result.spectrum_components.is_empty());
}

#[test]
fn 분해와_재구성_위상_일관성() {
    let teeth = 20;
    let angles: Vec<f64> = (0..720).map(|i| i as f64 * 0.5).collect();
    let values: Vec<f64> = angles
        .iter()
        .map(|a| 1.3 * (30.0 * a.to_radians()).cos() + 0.7 * (30.0 * a.to_radians()).sin())
        .collect();

    let components = decompose(&angles, &values, 10, 100);
    let result = build_result(angles, values.clone(), components, teeth);

    for (r, v) in result.reconstructed_signal.iter().zip(&values) {
        assert_abs_diff_eq!(*r, *v, epsilon = 1e-6);
    }
}

#[test]
fn 재구성은_코사인_사인_계수를_따른다() {
    // phase = π/2 → a = amp, b = 0 → amp·cos(kθ)
    let c = component(2.0, 3.0, std::f64::consts::FRAC_PI_2);
    let out = reconstruct(&[c], &[0.0, 45.0, 90.0]);
    assert_abs_diff_eq!(out[0], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[2], -3.0, epsilon = 1e-12);
}
