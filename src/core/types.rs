//! 치형/치향 파형 분석에 쓰이는 기본 자료 구조
//!
//! 파서(협력자)가 만든 값 객체와 분석 결과 구조체를 정의한다.
//! 코어는 이 구조체들을 읽기 전용으로만 다룬다.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 치면 방향 (좌/우)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlankSide {
    Left,
    Right,
}

impl FlankSide {
    pub const ALL: [FlankSide; 2] = [FlankSide::Left, FlankSide::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlankSide::Left => "left",
            FlankSide::Right => "right",
        }
    }
}

impl fmt::Display for FlankSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlankSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "links" => Ok(FlankSide::Left),
            "right" | "rechts" => Ok(FlankSide::Right),
            other => Err(format!("알 수 없는 치면 방향: {}", other)),
        }
    }
}

/// 측정 곡선 종류: 치형(profile) 또는 치향(lead, helix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Profile,
    #[serde(alias = "helix")]
    Lead,
}

impl CurveKind {
    pub const ALL: [CurveKind; 2] = [CurveKind::Profile, CurveKind::Lead];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Profile => "profile",
            CurveKind::Lead => "lead",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profile" | "profil" => Ok(CurveKind::Profile),
            "lead" | "helix" | "flankenlinie" => Ok(CurveKind::Lead),
            other => Err(format!("알 수 없는 곡선 종류: {}", other)),
        }
    }
}

/// 기어 제원
///
/// 파생 값(피치원 지름, 기초원 지름, 피치 각)은 생성 시 한 번 계산되며 이후 바뀌지 않는다.
/// 모듈 또는 잇수가 0 이하이면 파생 값은 모두 0 이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearParameters {
    module: f64,
    teeth_count: u32,
    pressure_angle: f64,
    helix_angle: f64,
    pitch_diameter: f64,
    base_diameter: f64,
    pitch_angle: f64,
}

impl GearParameters {
    pub fn new(module: f64, teeth_count: u32, pressure_angle: f64, helix_angle: f64) -> Self {
        let (pitch_diameter, base_diameter, pitch_angle) = if module > 0.0 && teeth_count > 0 {
            let beta = helix_angle.abs().to_radians();
            let alpha_n = pressure_angle.to_radians();
            // 정면 압력각
            let alpha_t = if beta.abs() > 1e-6 {
                (alpha_n.tan() / beta.cos()).atan()
            } else {
                alpha_n
            };

            let pitch_diameter = teeth_count as f64 * module / beta.cos();
            (
                pitch_diameter,
                pitch_diameter * alpha_t.cos(),
                360.0 / teeth_count as f64,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            module,
            teeth_count,
            pressure_angle,
            helix_angle,
            pitch_diameter,
            base_diameter,
            pitch_angle,
        }
    }

    pub fn module(&self) -> f64 {
        self.module
    }

    pub fn teeth_count(&self) -> u32 {
        self.teeth_count
    }

    pub fn pressure_angle(&self) -> f64 {
        self.pressure_angle
    }

    /// 비틀림각 (도, 부호 포함)
    pub fn helix_angle(&self) -> f64 {
        self.helix_angle
    }

    pub fn pitch_diameter(&self) -> f64 {
        self.pitch_diameter
    }

    pub fn base_diameter(&self) -> f64 {
        self.base_diameter
    }

    pub fn base_radius(&self) -> f64 {
        self.base_diameter / 2.0
    }

    /// 한 피치에 해당하는 회전각 (도)
    pub fn pitch_angle(&self) -> f64 {
        self.pitch_angle
    }

    pub fn is_valid(&self) -> bool {
        self.module > 0.0 && self.teeth_count > 0
    }
}

/// 측정/평가 구간 (mm)
///
/// 치형은 지름(da, de, d1, d2), 치향은 치폭 방향 위치(ba, be, b1, b2)로 주어진다.
/// 좌우 치면에 대해 독립적이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRange {
    pub meas_start: f64,
    pub meas_end: f64,
    pub eval_start: f64,
    pub eval_end: f64,
}

impl EvaluationRange {
    pub fn new(meas_start: f64, meas_end: f64, eval_start: f64, eval_end: f64) -> Self {
        Self {
            meas_start,
            meas_end,
            eval_start,
            eval_end,
        }
    }

    /// 뒤집힌 입력도 (min, max) 로 돌려준다
    pub fn eval_bounds(&self) -> (f64, f64) {
        (
            self.eval_start.min(self.eval_end),
            self.eval_start.max(self.eval_end),
        )
    }

    pub fn meas_bounds(&self) -> (f64, f64) {
        (
            self.meas_start.min(self.meas_end),
            self.meas_start.max(self.meas_end),
        )
    }

    pub fn eval_midpoint(&self) -> f64 {
        (self.eval_start + self.eval_end) / 2.0
    }

    pub fn eval_width(&self) -> f64 {
        (self.eval_end - self.eval_start).abs()
    }
}

/// 곡선의 2차 위치 키 (치형: 치폭 위치 z, 치향: 지름 d)
///
/// `f64::total_cmp` 로 전순서를 부여해 `BTreeMap` 키로 쓴다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position(pub f64);

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 한 치아의 위치별 측정 곡선
pub type CurvesByPosition = BTreeMap<Position, Vec<f64>>;

/// 치아 번호 → 위치 → 샘플 열
///
/// 샘플 순서는 측정 순서(스캔 방향)이며 의미가 있다.
/// 치아 순회는 항상 번호 오름차순이다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToothCurveSet {
    teeth: BTreeMap<u32, CurvesByPosition>,
}

impl ToothCurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tooth_id: u32, position: f64, samples: Vec<f64>) {
        self.teeth
            .entry(tooth_id)
            .or_default()
            .insert(Position(position), samples);
    }

    pub fn tooth(&self, tooth_id: u32) -> Option<&CurvesByPosition> {
        self.teeth.get(&tooth_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &CurvesByPosition)> {
        self.teeth.iter().map(|(&id, curves)| (id, curves))
    }

    pub fn tooth_count(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }
}

/// 좌/우 치면별 곡선 집합
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideCurves {
    pub left: ToothCurveSet,
    pub right: ToothCurveSet,
}

impl SideCurves {
    pub fn side(&self, side: FlankSide) -> &ToothCurveSet {
        match side {
            FlankSide::Left => &self.left,
            FlankSide::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: FlankSide) -> &mut ToothCurveSet {
        match side {
            FlankSide::Left => &mut self.left,
            FlankSide::Right => &mut self.right,
        }
    }
}

/// 단일 피치 편차 측정 행
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRow {
    pub tooth: u32,
    pub fp: f64,
}

/// 정규화된 측정 파일 한 건
#[derive(Debug, Clone, PartialEq)]
pub struct GearMeasurement {
    pub gear: GearParameters,
    pub face_width: Option<f64>,
    pub profile_range: EvaluationRange,
    pub lead_range: EvaluationRange,
    pub profile: SideCurves,
    pub lead: SideCurves,
    pub pitch_left: Vec<PitchRow>,
    pub pitch_right: Vec<PitchRow>,
}

impl GearMeasurement {
    pub fn curves(&self, kind: CurveKind, side: FlankSide) -> &ToothCurveSet {
        match kind {
            CurveKind::Profile => self.profile.side(side),
            CurveKind::Lead => self.lead.side(side),
        }
    }

    pub fn range(&self, kind: CurveKind) -> &EvaluationRange {
        match kind {
            CurveKind::Profile => &self.profile_range,
            CurveKind::Lead => &self.lead_range,
        }
    }

    pub fn pitch_rows(&self, side: FlankSide) -> &[PitchRow] {
        match side {
            FlankSide::Left => &self.pitch_left,
            FlankSide::Right => &self.pitch_right,
        }
    }
}

/// 스펙트럼 분량 하나 (차수, 진폭 µm, 위상 rad)
///
/// 위상은 `atan2(a, b)` 규약이다. a 는 cos 계수, b 는 sin 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumComponent {
    pub order: f64,
    pub amplitude: f64,
    pub phase: f64,
}

impl SpectrumComponent {
    /// (cos 계수 a, sin 계수 b)
    pub fn coefficients(&self) -> (f64, f64) {
        (
            self.amplitude * self.phase.sin(),
            self.amplitude * self.phase.cos(),
        )
    }

    /// 각도(rad)에서의 분량 값
    #[inline]
    pub fn evaluate(&self, theta: f64) -> f64 {
        let (a, b) = self.coefficients();
        a * (self.order * theta).cos() + b * (self.order * theta).sin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighOrderWave {
    pub order: f64,
    pub amplitude: f64,
}

/// (곡선 종류, 치면) 하나에 대한 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// 회전각 (도, 오름차순, [0, 360))
    pub angles: Vec<f64>,
    /// 추세 제거된 합성 곡선 (µm)
    pub values: Vec<f64>,
    /// 고차 분량만으로 재구성한 곡선
    pub reconstructed_signal: Vec<f64>,
    pub high_order_waves: Vec<HighOrderWave>,
    /// 진폭 내림차순 전체 분량
    pub spectrum_components: Vec<SpectrumComponent>,
    pub high_order_amplitude: f64,
    pub high_order_rms: f64,
}
