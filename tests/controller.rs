//! 재계산 컨트롤러가 일곱 개 표시 대상에 (이전값, 새값)을 올바르게 넘기는지 확인한다.
use std::time::{Duration, Instant};

use ni_savings_calculator::controller::{RecomputeController, SavingsEvents};
use ni_savings_calculator::display::{DisplayBoard, DisplayTarget, Transition};
use ni_savings_calculator::schemes::SchemeId;
use ni_savings_calculator::state::ToggleOption;
use proptest::prelude::{prop_assert, proptest};

fn last_to(changes: &[Transition], target: DisplayTarget) -> f64 {
    changes
        .iter()
        .rev()
        .find(|c| c.target == target)
        .map(|c| c.to)
        .unwrap_or(f64::NAN)
}

#[test]
fn every_trigger_emits_seven_transitions() {
    let mut controller = RecomputeController::default();
    let mut sink: Vec<Transition> = Vec::new();
    controller.on_employees_changed("100", &mut sink);
    assert_eq!(sink.len(), 7);
    controller.on_salary_changed("30000", &mut sink);
    assert_eq!(sink.len(), 14);
    controller.on_toggle_selected(SchemeId::Holiday, ToggleOption::No, &mut sink);
    assert_eq!(sink.len(), 21);

    let targets: Vec<DisplayTarget> = sink[14..].iter().map(|c| c.target).collect();
    assert_eq!(targets, DisplayTarget::ALL.to_vec());
}

#[test]
fn transitions_chain_previous_values() {
    let mut controller = RecomputeController::default();
    let mut sink: Vec<Transition> = Vec::new();
    controller.on_employees_changed("100", &mut sink);
    controller.on_salary_changed("30000", &mut sink);

    let first_total = sink[6];
    let second_total = sink[13];
    assert_eq!(first_total.target, DisplayTarget::Total);
    assert_eq!(first_total.from, 0.0);
    // 직원 수만 있을 때: 전기차 5850 + 자전거 3800
    assert!((first_total.to - 9_650.0).abs() < 1e-9);
    assert_eq!(second_total.from, first_total.to);
    assert!((second_total.to - 47_669.230_769).abs() < 1e-3);
}

#[test]
fn invalid_input_resets_to_zero() {
    let mut controller = RecomputeController::default();
    let mut sink: Vec<Transition> = Vec::new();
    controller.on_employees_changed("100", &mut sink);
    controller.on_salary_changed("30000", &mut sink);
    controller.on_employees_changed("", &mut sink);
    assert_eq!(last_to(&sink, DisplayTarget::Total), 0.0);
    controller.on_employees_changed("lots", &mut sink);
    assert_eq!(controller.latest().total(), 0.0);
    assert_eq!(controller.salary_raw(), "30000");
}

#[test]
fn toggle_off_then_on_restores_values() {
    let mut controller = RecomputeController::default();
    let mut sink: Vec<Transition> = Vec::new();
    controller.on_employees_changed("250", &mut sink);
    controller.on_salary_changed("41000", &mut sink);
    let before = *controller.latest();

    controller.on_toggle_selected(SchemeId::Bonus, ToggleOption::No, &mut sink);
    let off = *controller.latest();
    assert_eq!(off.amount(SchemeId::Bonus), 0.0);
    assert_eq!(last_to(&sink, DisplayTarget::Scheme(SchemeId::Bonus)), 0.0);
    for scheme in SchemeId::ALL {
        if scheme != SchemeId::Bonus {
            assert_eq!(off.amount(scheme), before.amount(scheme));
        }
    }

    controller.on_toggle_selected(SchemeId::Bonus, ToggleOption::Yes, &mut sink);
    assert_eq!(*controller.latest(), before);
}

#[test]
fn reselecting_current_option_still_recomputes() {
    let mut controller = RecomputeController::default();
    let mut sink: Vec<Transition> = Vec::new();
    controller.on_toggle_selected(SchemeId::Pension, ToggleOption::Yes, &mut sink);
    assert_eq!(sink.len(), 7);
    assert!(controller.state().is_enabled(SchemeId::Pension));
}

#[test]
fn board_sink_animates_to_latest_result() {
    let mut controller = RecomputeController::new(Duration::from_millis(800));
    let mut board = DisplayBoard::new();
    controller.on_employees_changed("100", &mut board);
    controller.on_salary_changed("30000", &mut board);
    assert!(board.is_animating());

    let later = Instant::now() + Duration::from_secs(2);
    assert!(!board.tick(later));
    assert_eq!(board.text_at(DisplayTarget::Total, later), "£47,669");
    assert_eq!(
        board.text_at(DisplayTarget::Scheme(SchemeId::Pension), later),
        "£22,500"
    );
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(48))]

    #[test]
    fn prop_total_matches_sum_after_random_toggles(
        employees in 0u32..20_000,
        salary in 0u32..200_000,
        toggles in proptest::collection::vec((0usize..6, proptest::bool::ANY), 0..12)
    ) {
        let mut controller = RecomputeController::default();
        let mut sink: Vec<Transition> = Vec::new();
        controller.on_employees_changed(&employees.to_string(), &mut sink);
        controller.on_salary_changed(&salary.to_string(), &mut sink);
        for (idx, on) in toggles {
            controller.on_toggle_selected(SchemeId::ALL[idx], ToggleOption::from_enabled(on), &mut sink);
        }
        let shown: f64 = SchemeId::ALL
            .iter()
            .map(|s| last_to(&sink, DisplayTarget::Scheme(*s)))
            .sum();
        let total = last_to(&sink, DisplayTarget::Total);
        prop_assert!((total - shown).abs() <= 1e-9 * shown.max(1.0));
        for scheme in SchemeId::ALL {
            if !controller.state().is_enabled(scheme) {
                prop_assert!(last_to(&sink, DisplayTarget::Scheme(scheme)) == 0.0);
            }
        }
    }
}
