//! # 분석 설정
//!
//! 분해 깊이와 최대 차수 등 코어가 받는 조정값. JSON 파일에서 읽고 CLI 인자로 덮어쓴다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::spectrum::{default_max_order, DEFAULT_NUM_COMPONENTS};
use crate::error::{Result, RippleError};

/// 재표본화 격자가 지나치게 커지지 않도록 하는 최대 차수 상한
pub const MAX_ORDER_LIMIT: usize = 20_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 추출할 스펙트럼 분량 수
    pub num_components: usize,
    /// 최대 차수. 없으면 잇수의 5 배
    pub max_order: Option<usize>,
    /// 네 방향 분석을 rayon 으로 병렬 실행
    pub parallel: bool,
    /// 공차 추정에 쓰는 ISO 1328 정밀도 등급
    pub accuracy_grade: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_components: DEFAULT_NUM_COMPONENTS,
            max_order: None,
            parallel: false,
            accuracy_grade: 5,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RippleError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_components == 0 {
            return Err(RippleError::InvalidConfig(
                "num_components 는 1 이상이어야 함".to_string(),
            ));
        }
        match self.max_order {
            Some(0) => Err(RippleError::InvalidConfig(
                "max_order 는 1 이상이어야 함".to_string(),
            )),
            Some(order) if order > MAX_ORDER_LIMIT => Err(RippleError::InvalidConfig(format!(
                "max_order {} 가 상한 {} 을 넘음",
                order, MAX_ORDER_LIMIT
            ))),
            _ => Ok(()),
        }
    }

    /// 실제 사용할 최대 차수
    pub fn effective_max_order(&self, teeth_count: u32) -> usize {
        self.max_order
            .unwrap_or_else(|| default_max_order(teeth_count))
            .min(MAX_ORDER_LIMIT)
    }
}
