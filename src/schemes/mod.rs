//! 절감 대상이 되는 여섯 가지 급여 희생(salary sacrifice)/복리후생 제도.

pub mod params;

pub use params::{SchemeParameters, COMPANY_NI_RATE, WORKING_DAYS};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 제도 식별자. 여섯 개로 고정된 닫힌 집합이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeId {
    Pension,
    Bonus,
    Ev,
    Cycle,
    Holiday,
    Wellbeing,
}

impl SchemeId {
    /// 화면/계산 순서대로 나열한 전체 제도.
    pub const ALL: [SchemeId; 6] = [
        SchemeId::Pension,
        SchemeId::Bonus,
        SchemeId::Ev,
        SchemeId::Cycle,
        SchemeId::Holiday,
        SchemeId::Wellbeing,
    ];

    /// 토글 그룹과 언어팩에서 쓰는 키.
    pub fn key(self) -> &'static str {
        match self {
            SchemeId::Pension => "pension",
            SchemeId::Bonus => "bonus",
            SchemeId::Ev => "ev",
            SchemeId::Cycle => "cycle",
            SchemeId::Holiday => "holiday",
            SchemeId::Wellbeing => "wellbeing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let k = key.trim().to_lowercase();
        SchemeId::ALL.into_iter().find(|s| s.key() == k)
    }

    /// 배열 인덱스(ALL 순서).
    pub fn index(self) -> usize {
        match self {
            SchemeId::Pension => 0,
            SchemeId::Bonus => 1,
            SchemeId::Ev => 2,
            SchemeId::Cycle => 3,
            SchemeId::Holiday => 4,
            SchemeId::Wellbeing => 5,
        }
    }

    /// 영어 기본 표시명. 번역이 없을 때 사용한다.
    pub fn default_label(self) -> &'static str {
        match self {
            SchemeId::Pension => "Pension",
            SchemeId::Bonus => "Bonus Sacrifice",
            SchemeId::Ev => "Electric Vehicles",
            SchemeId::Cycle => "Cycle to Work",
            SchemeId::Holiday => "Buy Holiday",
            SchemeId::Wellbeing => "Financial Wellbeing",
        }
    }

    /// 제도별 상수 파라미터.
    pub fn parameters(self) -> &'static SchemeParameters {
        match self {
            SchemeId::Pension => &params::PENSION,
            SchemeId::Bonus => &params::BONUS,
            SchemeId::Ev => &params::EV,
            SchemeId::Cycle => &params::CYCLE,
            SchemeId::Holiday => &params::HOLIDAY,
            SchemeId::Wellbeing => &params::WELLBEING,
        }
    }
}

impl std::fmt::Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
