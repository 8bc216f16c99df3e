//! # 기하 각도 매핑
//!
//! 치아 한 개의 샘플 위치를 회전각(도) 오프셋으로 바꾼다.
//! 치형은 인벌류트 극각, 치향은 비틀림각 보정을 사용한다.

pub mod involute;
pub mod angle_mapper;

pub use involute::{involute_polar_angle, radius_from_spread, spread_length};
pub use angle_mapper::{map_lead_angles, map_profile_angles, NEGLIGIBLE_HELIX_DEG, LEAD_FALLBACK_FRACTION};
