//! 제도별 회사 NI 절감액 계산식.
//!
//! 모든 함수는 부작용이 없는 순수 함수이며, `n`(직원 수)과 `salary`(평균 연봉)는
//! 0 이상이라고 가정한다. 참여 인원은 실수로 다루며 정수로 반올림하지 않는다.

use crate::inputs::Inputs;
use crate::schemes::{params, SchemeId, COMPANY_NI_RATE, WORKING_DAYS};
use crate::state::SchemeState;

/// 연금: salary × 기여율 × NI율 × n
pub fn pension_saving(n: f64, salary: f64) -> f64 {
    salary * params::PENSION.salary_rate * COMPANY_NI_RATE * params::PENSION.participating(n)
}

/// 보너스 희생: 참여자의 보너스(연봉의 20%)에 대한 NI.
pub fn bonus_saving(n: f64, salary: f64) -> f64 {
    let participating = params::BONUS.participating(n);
    salary * params::BONUS.salary_rate * COMPANY_NI_RATE * participating
}

/// 전기차 리스: 연간 리스료에 대한 NI + VAT 항(가중치 0).
pub fn ev_saving(n: f64, _salary: f64) -> f64 {
    let participating = params::EV.participating(n);
    let ni_savings = params::EV.annual_payment() * COMPANY_NI_RATE * participating;
    ni_savings + params::EV.vat_saving * participating
}

/// 자전거 출퇴근: 연간 납입액에 대한 NI + 참여자당 VAT 절감.
pub fn cycle_saving(n: f64, _salary: f64) -> f64 {
    let participating = params::CYCLE.participating(n);
    let ni_savings = params::CYCLE.annual_payment() * COMPANY_NI_RATE * participating;
    let vat_savings = params::CYCLE.vat_saving * participating;
    ni_savings + vat_savings
}

/// 휴가 구매: 구매한 휴가일 급여에 대한 NI.
pub fn holiday_saving(n: f64, salary: f64) -> f64 {
    let participating = params::HOLIDAY.participating(n);
    let daily_salary = salary / WORKING_DAYS;
    let total_cost = daily_salary * params::HOLIDAY.days * participating;
    total_cost * COMPANY_NI_RATE
}

/// 재정 웰빙: 영향받는 직원의 손실 근무일 가치. NI율을 곱하지 않는다.
pub fn wellbeing_saving(n: f64, salary: f64) -> f64 {
    let affected = params::WELLBEING.participating(n);
    affected * params::WELLBEING.days * (salary / WORKING_DAYS)
}

/// 제도 식별자로 해당 계산식을 호출한다.
pub fn saving_for(scheme: SchemeId, n: f64, salary: f64) -> f64 {
    match scheme {
        SchemeId::Pension => pension_saving(n, salary),
        SchemeId::Bonus => bonus_saving(n, salary),
        SchemeId::Ev => ev_saving(n, salary),
        SchemeId::Cycle => cycle_saving(n, salary),
        SchemeId::Holiday => holiday_saving(n, salary),
        SchemeId::Wellbeing => wellbeing_saving(n, salary),
    }
}

/// 활성화된 제도의 금액만 합산한다. 비활성 제도는 0으로 본다.
pub fn total_saving(results: &[f64; 6], enabled_mask: &[bool; 6]) -> f64 {
    results
        .iter()
        .zip(enabled_mask.iter())
        .filter(|(_, enabled)| **enabled)
        .map(|(amount, _)| *amount)
        .sum()
}

/// 한 번의 재계산 결과. 비활성 제도의 금액은 0이다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SavingsResult {
    amounts: [f64; 6],
    total: f64,
}

impl SavingsResult {
    pub fn amount(&self, scheme: SchemeId) -> f64 {
        self.amounts[scheme.index()]
    }

    pub fn amounts(&self) -> &[f64; 6] {
        &self.amounts
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// (제도, 금액) 쌍을 ALL 순서로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (SchemeId, f64)> + '_ {
        SchemeId::ALL.into_iter().map(|s| (s, self.amounts[s.index()]))
    }
}

/// 입력과 토글 상태로 전체 절감액을 새로 계산한다.
pub fn compute(inputs: &Inputs, state: &SchemeState) -> SavingsResult {
    let n = inputs.employees();
    let salary = inputs.avg_salary;
    let mask = state.mask();
    let mut amounts = [0.0; 6];
    for scheme in SchemeId::ALL {
        if mask[scheme.index()] {
            amounts[scheme.index()] = saving_for(scheme, n, salary);
        }
    }
    let total = total_saving(&amounts, &mask);
    SavingsResult { amounts, total }
}
