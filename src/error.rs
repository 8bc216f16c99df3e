//! 크레이트 오류 타입
//!
//! 수치 코어는 오류를 내지 않는다. 오류는 파일/설정 경계에서만 생긴다.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RippleError {
    #[error("파일 입출력 실패 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 처리 실패: {0}")]
    Json(#[from] serde_json::Error),

    #[error("잘못된 기어 제원: {0}")]
    InvalidGear(String),

    #[error("잘못된 분석 설정: {0}")]
    InvalidConfig(String),
}

impl RippleError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RippleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RippleError>;
