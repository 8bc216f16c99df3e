//! 반복 정현파 분해기

use crate::core::signal::interp_periodic;
use crate::core::types::SpectrumComponent;

use super::harmonic::{HarmonicFit, HarmonicTable};

/// 이보다 작은 최대 진폭이 나오면 분해를 멈춘다
pub const AMPLITUDE_THRESHOLD: f64 = 1e-6;

/// 입력 샘플이 이보다 적으면 분해하지 않는다
pub const MIN_DECOMPOSE_SAMPLES: usize = 8;

pub const DEFAULT_NUM_COMPONENTS: usize = 10;

/// 기본 최대 차수: 잇수의 5 배
pub fn default_max_order(teeth_count: u32) -> usize {
    5 * teeth_count as usize
}

/// 소수점 3 자리로 반올림해 [0, 360) 으로 감싼 각도 기준 중복 제거
///
/// 같은 각도가 여러 번 나오면 입력 순서상 처음 것만 남긴다. 결과는 각도 오름차순이다.
pub fn dedup_angles(angles: &[f64], values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut points: Vec<(f64, f64)> = angles
        .iter()
        .zip(values)
        .map(|(&a, &v)| {
            let rounded = ((a * 1000.0).round() / 1000.0).rem_euclid(360.0);
            (if rounded >= 360.0 { 0.0 } else { rounded }, v)
        })
        .collect();

    // 안정 정렬이므로 같은 각도 안에서는 입력 순서가 유지된다
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points.dedup_by(|later, earlier| later.0 == earlier.0);

    points.into_iter().unzip()
}

/// 반복 정현파 분해기
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralDecomposer {
    num_components: usize,
    max_order: usize,
}

impl SpectralDecomposer {
    pub fn new(num_components: usize, max_order: usize) -> Self {
        Self {
            num_components,
            max_order,
        }
    }

    pub fn num_components(&self) -> usize {
        self.num_components
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// 재표본화 격자 점 수: max(360, 2·max_order + 10)
    pub fn grid_size(&self) -> usize {
        (2 * self.max_order + 10).max(360)
    }

    /// 불규칙 (각도, 값) 곡선을 [0, 360) 균일 격자로 재표본화하고 평균을 뺀다
    pub fn resample(&self, angles: &[f64], values: &[f64]) -> Vec<f64> {
        let (unique_angles, unique_values) = dedup_angles(angles, values);

        let n = self.grid_size();
        let grid: Vec<f64> = (0..n).map(|i| 360.0 * i as f64 / n as f64).collect();
        let mut resampled = interp_periodic(&grid, &unique_angles, &unique_values, 360.0);

        let mean = resampled.iter().sum::<f64>() / n as f64;
        for v in resampled.iter_mut() {
            *v -= mean;
        }
        resampled
    }

    /// 진폭 내림차순 분량 목록
    ///
    /// 각 차수는 한 번만 뽑힌다. 최대 진폭이 `AMPLITUDE_THRESHOLD` 미만이거나
    /// 맞출 수 있는 차수가 없으면 정상 종료한다.
    pub fn decompose(&self, angles: &[f64], values: &[f64]) -> Vec<SpectrumComponent> {
        let n_samples = angles.len().min(values.len());
        if n_samples < MIN_DECOMPOSE_SAMPLES || self.max_order == 0 || self.num_components == 0 {
            return Vec::new();
        }

        let mut residual = self.resample(&angles[..n_samples], &values[..n_samples]);
        let table = HarmonicTable::new(residual.len());

        // 그람 행렬은 잔차와 무관하므로 한 번만 계산한다
        let gram: Vec<_> = (1..=self.max_order)
            .map(|order| table.gram_inverse(order))
            .collect();
        let mut used = vec![false; self.max_order + 1];
        let mut components = Vec::with_capacity(self.num_components);

        for _ in 0..self.num_components {
            let candidates = (1..=self.max_order).filter_map(|order| {
                if used[order] {
                    return None;
                }
                // 특이 기저 차수는 후보가 아니다
                let inverse = gram[order - 1].as_ref()?;
                Some((order, table.fit(order, inverse, &residual)))
            });

            let Some((order, fit)) = pick_strongest(candidates) else {
                log::debug!("분해 종료: 맞출 차수 없음 ({} 개 추출)", components.len());
                break;
            };

            let amplitude = fit.amplitude();
            if amplitude < AMPLITUDE_THRESHOLD {
                log::debug!(
                    "분해 종료: 최대 진폭 {:.3e} < {:.0e} ({} 개 추출)",
                    amplitude,
                    AMPLITUDE_THRESHOLD,
                    components.len()
                );
                break;
            }

            components.push(SpectrumComponent {
                order: order as f64,
                amplitude,
                phase: fit.phase(),
            });
            used[order] = true;
            table.subtract(order, &fit, &mut residual);
        }

        components.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
        components
    }
}

/// 진폭이 가장 큰 후보. 같으면 먼저 나온(낮은) 차수, 진폭 0 이하는 후보가 아니다.
pub(crate) fn pick_strongest<I>(candidates: I) -> Option<(usize, HarmonicFit)>
where
    I: IntoIterator<Item = (usize, HarmonicFit)>,
{
    let mut best: Option<(usize, HarmonicFit)> = None;
    let mut best_amplitude = 0.0;
    for (order, fit) in candidates {
        let amplitude = fit.amplitude();
        if amplitude > best_amplitude {
            best_amplitude = amplitude;
            best = Some((order, fit));
        }
    }
    best
}

/// `SpectralDecomposer` 한 번 호출용
pub fn decompose(
    angles: &[f64],
    values: &[f64],
    num_components: usize,
    max_order: usize,
) -> Vec<SpectrumComponent> {
    SpectralDecomposer::new(num_components, max_order).decompose(angles, values)
}
