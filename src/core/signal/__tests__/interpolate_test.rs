use crate::core::signal::interp_periodic;
use approx::assert_abs_diff_eq;

#[test]
fn 구간_내부_선형_보간() {
    let xp = [0.0, 90.0, 180.0, 270.0];
    let fp = [0.0, 1.0, 0.0, -1.0];
    let out = interp_periodic(&[45.0, 135.0, 225.0], &xp, &fp, 360.0);

    assert_abs_diff_eq!(out[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(out[2], -0.5, epsilon = 1e-12);
}

#[test]
fn 경계를_넘는_보간() {
    // 350° 와 10° 사이는 360° 경계를 넘어 이어진다
    let xp = [10.0, 180.0, 350.0];
    let fp = [2.0, 0.0, 0.0];
    let out = interp_periodic(&[0.0, 355.0, 5.0], &xp, &fp, 360.0);

    assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(out[2], 1.5, epsilon = 1e-12);
}

#[test]
fn 정렬되지_않은_입력과_범위_밖_각도() {
    let xp = [270.0, 90.0, 450.0];
    let fp = [-1.0, 1.0, 1.0];
    let out = interp_periodic(&[90.0, -90.0], &xp, &fp, 360.0);

    assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1], -1.0, epsilon = 1e-12);
}

#[test]
fn 점이_없거나_하나일_때() {
    assert_eq!(interp_periodic(&[1.0, 2.0], &[], &[], 360.0), vec![0.0, 0.0]);
    assert_eq!(interp_periodic(&[1.0, 2.0], &[30.0], &[4.0], 360.0), vec![4.0, 4.0]);
}
