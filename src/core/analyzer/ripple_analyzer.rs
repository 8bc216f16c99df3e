//! 파이프라인 조립

use rayon::prelude::*;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::assembly::{AssembledCurve, CurveAssembler};
use crate::core::evaluation::{
    build_result, iso1328_tolerance, mean_flank_deviations, FlankDeviation, FlankTolerance,
};
use crate::core::geometry::spread_length;
use crate::core::spectrum::SpectralDecomposer;
use crate::core::types::{
    AnalysisResult, CurveKind, EvaluationRange, FlankSide, GearMeasurement, GearParameters,
    ToothCurveSet,
};

/// 합성 곡선이 이보다 짧으면 평탄한 대체 신호를 쓴다
pub const MIN_CURVE_POINTS: usize = 100;

pub const PLACEHOLDER_POINTS: usize = 1000;

/// 0° 부터 등간격 1000 점, 값은 모두 0
pub fn flat_placeholder() -> AssembledCurve {
    AssembledCurve {
        angles: (0..PLACEHOLDER_POINTS)
            .map(|i| 360.0 * i as f64 / PLACEHOLDER_POINTS as f64)
            .collect(),
        values: vec![0.0; PLACEHOLDER_POINTS],
    }
}

/// (곡선 종류, 치면) 한 방향의 분석 결과와 편차/공차
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlankReport {
    pub kind: CurveKind,
    pub side: FlankSide,
    pub result: AnalysisResult,
    pub deviation: FlankDeviation,
    pub tolerance: FlankTolerance,
}

/// 측정 파일 하나의 네 방향 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearAnalysis {
    pub profile_left: FlankReport,
    pub profile_right: FlankReport,
    pub lead_left: FlankReport,
    pub lead_right: FlankReport,
}

impl GearAnalysis {
    pub fn get(&self, kind: CurveKind, side: FlankSide) -> &FlankReport {
        match (kind, side) {
            (CurveKind::Profile, FlankSide::Left) => &self.profile_left,
            (CurveKind::Profile, FlankSide::Right) => &self.profile_right,
            (CurveKind::Lead, FlankSide::Left) => &self.lead_left,
            (CurveKind::Lead, FlankSide::Right) => &self.lead_right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlankReport> {
        [
            &self.profile_left,
            &self.profile_right,
            &self.lead_left,
            &self.lead_right,
        ]
        .into_iter()
    }
}

/// 파형 분석기
///
/// 기어 제원, 평가 구간, 설정은 분석 동안 읽기 전용이다. 호출마다 결과를 새로 만든다.
#[derive(Debug, Clone)]
pub struct RippleAnalyzer {
    gear: GearParameters,
    profile_range: EvaluationRange,
    lead_range: EvaluationRange,
    face_width: Option<f64>,
    config: AnalysisConfig,
}

impl RippleAnalyzer {
    pub fn new(
        gear: GearParameters,
        profile_range: EvaluationRange,
        lead_range: EvaluationRange,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            gear,
            profile_range,
            lead_range,
            face_width: None,
            config,
        }
    }

    pub fn from_measurement(measurement: &GearMeasurement, config: AnalysisConfig) -> Self {
        Self {
            face_width: measurement.face_width,
            ..Self::new(
                measurement.gear,
                measurement.profile_range,
                measurement.lead_range,
                config,
            )
        }
    }

    pub fn gear(&self) -> &GearParameters {
        &self.gear
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn max_order(&self) -> usize {
        self.config.effective_max_order(self.gear.teeth_count())
    }

    pub fn decomposer(&self) -> SpectralDecomposer {
        SpectralDecomposer::new(self.config.num_components, self.max_order())
    }

    fn assembler(&self) -> CurveAssembler<'_> {
        CurveAssembler::new(&self.gear, &self.profile_range, &self.lead_range)
    }

    /// 한 방향 분석
    pub fn analyze(&self, kind: CurveKind, side: FlankSide, curves: &ToothCurveSet) -> AnalysisResult {
        let mut curve = self.assembler().assemble(curves, kind, side);
        if curve.len() < MIN_CURVE_POINTS {
            log::warn!(
                "{} {}: 합성 곡선 {} 점 (< {}), 평탄 대체 신호 사용",
                kind,
                side,
                curve.len(),
                MIN_CURVE_POINTS
            );
            curve = flat_placeholder();
        }

        let components = self.decomposer().decompose(&curve.angles, &curve.values);
        let result = build_result(curve.angles, curve.values, components, self.gear.teeth_count());

        log::info!(
            "{} {}: 분량 {}개, 고차 {}개, 고차 진폭 합 {:.4} µm, RMS {:.4} µm",
            kind,
            side,
            result.spectrum_components.len(),
            result.high_order_waves.len(),
            result.high_order_amplitude,
            result.high_order_rms
        );
        result
    }

    /// 치아 대표 곡선의 평균 편차
    ///
    /// 치형 구간은 지름으로 주어지므로 전개 길이로 바꿔 샘플 간격을 맞춘다.
    pub fn flank_deviation(&self, kind: CurveKind, curves: &ToothCurveSet) -> FlankDeviation {
        let target = self.assembler().selection_target(kind);
        let range = match kind {
            CurveKind::Profile => {
                let rb = self.gear.base_radius();
                let r = &self.profile_range;
                EvaluationRange::new(
                    spread_length(r.meas_start, rb),
                    spread_length(r.meas_end, rb),
                    spread_length(r.eval_start, rb),
                    spread_length(r.eval_end, rb),
                )
            }
            CurveKind::Lead => self.lead_range,
        };
        mean_flank_deviations(curves, &range, target)
    }

    pub fn tolerance(&self, kind: CurveKind) -> FlankTolerance {
        let face_width = self.face_width.unwrap_or_else(|| {
            let (start, end) = self.lead_range.meas_bounds();
            end - start
        });
        iso1328_tolerance(
            kind,
            self.gear.module(),
            self.gear.teeth_count(),
            face_width,
            self.config.accuracy_grade,
        )
    }

    pub fn report(&self, kind: CurveKind, side: FlankSide, curves: &ToothCurveSet) -> FlankReport {
        FlankReport {
            kind,
            side,
            result: self.analyze(kind, side, curves),
            deviation: self.flank_deviation(kind, curves),
            tolerance: self.tolerance(kind),
        }
    }

    /// 네 방향을 독립적으로 분석한다. `parallel` 설정이어도 결과는 순차 실행과 같다.
    pub fn analyze_gear(&self, measurement: &GearMeasurement) -> GearAnalysis {
        let directions = [
            (CurveKind::Profile, FlankSide::Left),
            (CurveKind::Profile, FlankSide::Right),
            (CurveKind::Lead, FlankSide::Left),
            (CurveKind::Lead, FlankSide::Right),
        ];

        let mut reports: Vec<FlankReport> = if self.config.parallel {
            directions
                .par_iter()
                .map(|&(kind, side)| self.report(kind, side, measurement.curves(kind, side)))
                .collect()
        } else {
            directions
                .iter()
                .map(|&(kind, side)| self.report(kind, side, measurement.curves(kind, side)))
                .collect()
        };

        // directions 순서 그대로
        let lead_right = reports.remove(3);
        let lead_left = reports.remove(2);
        let profile_right = reports.remove(1);
        let profile_left = reports.remove(0);

        GearAnalysis {
            profile_left,
            profile_right,
            lead_left,
            lead_right,
        }
    }
}
