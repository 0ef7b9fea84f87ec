//! 제도별 계산식 회귀 테스트. 직원 100명, 평균 연봉 £30,000 기준 예시를 활용한다.
use ni_savings_calculator::calculator::{
    bonus_saving, compute, cycle_saving, ev_saving, holiday_saving, pension_saving, saving_for,
    total_saving, wellbeing_saving,
};
use ni_savings_calculator::display::format_currency;
use ni_savings_calculator::inputs::Inputs;
use ni_savings_calculator::schemes::SchemeId;
use ni_savings_calculator::state::{SchemeState, ToggleOption};
use proptest::prelude::{prop_assert, proptest};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn reference_scenario_per_scheme() {
    let (n, salary) = (100.0, 30_000.0);
    assert_close("pension", pension_saving(n, salary), 22_500.0, 1e-12);
    assert_close("bonus", bonus_saving(n, salary), 9_000.0, 1e-12);
    assert_close("ev", ev_saving(n, salary), 5_850.0, 1e-12);
    // 1800 NI + 2000 VAT
    assert_close("cycle", cycle_saving(n, salary), 3_800.0, 1e-12);
    assert_close("holiday", holiday_saving(n, salary), 865.384_615_384_6, 1e-9);
    assert_close("wellbeing", wellbeing_saving(n, salary), 5_653.846_153_846, 1e-9);
}

#[test]
fn reference_scenario_total_and_display() {
    let res = compute(&Inputs::new(100, 30_000.0), &SchemeState::default());
    assert_close("total", res.total(), 47_669.230_769_23, 1e-9);
    assert_eq!(format_currency(res.total()), "£47,669");
}

#[test]
fn fractional_participation_is_not_rounded() {
    // 7명 × 5% = 0.35명
    assert_close("ev", ev_saving(7.0, 0.0), 650.0 * 12.0 * 0.15 * 0.35, 1e-12);
    assert!(bonus_saving(3.0, 30_000.0) > 0.0);
}

#[test]
fn zero_inputs_give_zero_total() {
    let res = compute(&Inputs::from_raw("", "abc"), &SchemeState::default());
    assert_eq!(res.total(), 0.0);
    for (_, amount) in res.iter() {
        assert_eq!(amount, 0.0);
    }
}

#[test]
fn salary_independent_schemes_survive_zero_salary() {
    let res = compute(&Inputs::new(100, 0.0), &SchemeState::default());
    assert_close("ev", res.amount(SchemeId::Ev), 5_850.0, 1e-12);
    assert_close("cycle", res.amount(SchemeId::Cycle), 3_800.0, 1e-12);
    assert_eq!(res.amount(SchemeId::Pension), 0.0);
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_pension_is_linear_and_matches_simplified_rate(
        n in 0u32..100_000,
        salary_pence in 0u64..50_000_000
    ) {
        let n = n as f64;
        let salary = salary_pence as f64 / 100.0;
        let value = pension_saving(n, salary);
        let expected = salary * 0.0075 * n;
        prop_assert!(value >= 0.0);
        prop_assert!((value - expected).abs() <= 1e-9 * expected.max(1.0));
        let doubled = pension_saving(2.0 * n, salary);
        prop_assert!((doubled - 2.0 * value).abs() <= 1e-9 * value.max(1.0));
        let doubled_salary = pension_saving(n, 2.0 * salary);
        prop_assert!((doubled_salary - 2.0 * value).abs() <= 1e-9 * value.max(1.0));
    }

    #[test]
    fn prop_every_scheme_is_non_negative(
        n in 0u32..100_000,
        salary in 0.0f64..500_000.0
    ) {
        for scheme in SchemeId::ALL {
            prop_assert!(saving_for(scheme, n as f64, salary) >= 0.0);
        }
    }

    #[test]
    fn prop_total_is_sum_of_displayed_values(
        n in 0u64..50_000,
        salary in 0.0f64..250_000.0,
        mask_bits in 0u8..64
    ) {
        let mut state = SchemeState::default();
        for scheme in SchemeId::ALL {
            let enabled = mask_bits & (1 << scheme.index()) != 0;
            state.select(scheme, ToggleOption::from_enabled(enabled));
        }
        let res = compute(&Inputs::new(n, salary), &state);
        let sum: f64 = res.amounts().iter().sum();
        prop_assert!((res.total() - sum).abs() <= 1e-9 * sum.max(1.0));
        for (scheme, amount) in res.iter() {
            if !state.is_enabled(scheme) {
                prop_assert!(amount == 0.0);
            }
        }
        prop_assert!((total_saving(res.amounts(), &state.mask()) - res.total()).abs() <= 1e-9 * sum.max(1.0));
    }

    #[test]
    fn prop_disabling_a_scheme_removes_exactly_its_value(
        n in 0u64..50_000,
        salary in 0.0f64..250_000.0
    ) {
        let inputs = Inputs::new(n, salary);
        let all = compute(&inputs, &SchemeState::default());
        for scheme in SchemeId::ALL {
            let mut state = SchemeState::default();
            state.select(scheme, ToggleOption::No);
            let without = compute(&inputs, &state);
            let diff = all.total() - without.total();
            prop_assert!((diff - all.amount(scheme)).abs() <= 1e-6 * all.total().max(1.0));
            prop_assert!(without.amount(scheme) == 0.0);
        }
    }
}
