//! 분석 보고서
//!
//! 표현 계층(차트, 표)이 그대로 쓰는 JSON 문서

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::analyzer::{GearAnalysis, RippleAnalyzer};
use crate::core::evaluation::{summarize_pitch, PitchSummary};
use crate::core::types::{FlankSide, GearMeasurement, GearParameters};
use crate::error::{Result, RippleError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearReport {
    pub gear: GearParameters,
    pub config: AnalysisConfig,
    pub max_order: usize,
    pub flanks: GearAnalysis,
    pub pitch_left: PitchSummary,
    pub pitch_right: PitchSummary,
}

impl GearReport {
    /// 네 방향 분석과 피치 요약을 한 번에 수행한다
    pub fn build(measurement: &GearMeasurement, config: AnalysisConfig) -> Self {
        let analyzer = RippleAnalyzer::from_measurement(measurement, config);
        let teeth = measurement.gear.teeth_count();

        Self {
            gear: measurement.gear,
            max_order: analyzer.max_order(),
            flanks: analyzer.analyze_gear(measurement),
            pitch_left: summarize_pitch(measurement.pitch_rows(FlankSide::Left), teeth),
            pitch_right: summarize_pitch(measurement.pitch_rows(FlankSide::Right), teeth),
            config: analyzer.config().clone(),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|e| RippleError::io(path, e))?;
        log::info!("보고서 저장: {}", path.display());
        Ok(())
    }
}
