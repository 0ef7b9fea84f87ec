//! 입력 변경/토글 선택에 반응해 전체를 다시 계산하고 표시 쪽으로 전달한다.

use std::time::Duration;

use tracing::{debug, info};

use crate::calculator::{self, SavingsResult};
use crate::display::{DisplaySink, DisplayTarget, ANIMATION_DURATION};
use crate::inputs::Inputs;
use crate::schemes::SchemeId;
use crate::state::{SchemeState, ToggleOption};

/// 입력 쪽에서 발생하는 이벤트 핸들러.
pub trait SavingsEvents {
    /// 직원 수 필드가 바뀌었다.
    fn on_employees_changed(&mut self, raw: &str, sink: &mut dyn DisplaySink);
    /// 평균 연봉 필드가 바뀌었다.
    fn on_salary_changed(&mut self, raw: &str, sink: &mut dyn DisplaySink);
    /// 제도 토글의 한 옵션이 선택되었다.
    fn on_toggle_selected(
        &mut self,
        scheme: SchemeId,
        option: ToggleOption,
        sink: &mut dyn DisplaySink,
    );
}

/// 토글 상태와 두 입력값을 단독으로 소유하는 재계산 컨트롤러.
#[derive(Debug, Clone)]
pub struct RecomputeController {
    state: SchemeState,
    employees_raw: String,
    salary_raw: String,
    latest: SavingsResult,
    duration: Duration,
}

impl Default for RecomputeController {
    fn default() -> Self {
        Self::new(ANIMATION_DURATION)
    }
}

impl RecomputeController {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: SchemeState::default(),
            employees_raw: String::new(),
            salary_raw: String::new(),
            latest: SavingsResult::default(),
            duration,
        }
    }

    pub fn state(&self) -> &SchemeState {
        &self.state
    }

    pub fn employees_raw(&self) -> &str {
        &self.employees_raw
    }

    pub fn salary_raw(&self) -> &str {
        &self.salary_raw
    }

    /// 현재 입력값(정리된 값).
    pub fn inputs(&self) -> Inputs {
        Inputs::from_raw(&self.employees_raw, &self.salary_raw)
    }

    /// 마지막으로 표시 쪽에 보낸 결과.
    pub fn latest(&self) -> &SavingsResult {
        &self.latest
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// 전체를 다시 계산하고 일곱 개 대상 모두에 (이전값, 새값)을 보낸다.
    pub fn recompute(&mut self, sink: &mut dyn DisplaySink) -> SavingsResult {
        let inputs = self.inputs();
        let result = calculator::compute(&inputs, &self.state);
        debug!(
            employees = inputs.num_employees,
            salary = inputs.avg_salary,
            total = result.total(),
            "recomputed savings"
        );

        for scheme in SchemeId::ALL {
            sink.animate(
                DisplayTarget::Scheme(scheme),
                self.latest.amount(scheme),
                result.amount(scheme),
                self.duration,
            );
        }
        sink.animate(
            DisplayTarget::Total,
            self.latest.total(),
            result.total(),
            self.duration,
        );
        self.latest = result;
        result
    }
}

impl SavingsEvents for RecomputeController {
    fn on_employees_changed(&mut self, raw: &str, sink: &mut dyn DisplaySink) {
        self.employees_raw = raw.to_string();
        self.recompute(sink);
    }

    fn on_salary_changed(&mut self, raw: &str, sink: &mut dyn DisplaySink) {
        self.salary_raw = raw.to_string();
        self.recompute(sink);
    }

    fn on_toggle_selected(
        &mut self,
        scheme: SchemeId,
        option: ToggleOption,
        sink: &mut dyn DisplaySink,
    ) {
        let prev = self.state.select(scheme, option);
        if prev != option.is_yes() {
            info!(scheme = scheme.key(), option = option.key(), "scheme toggled");
        }
        self.recompute(sink);
    }
}
