//! 표시 대상(제도 6개 + 합계)과 통화 포맷, 값 전환 애니메이션.

use std::time::{Duration, Instant};

use crate::schemes::SchemeId;

/// 기본 전환 시간.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(800);

/// 통화 기호.
pub const CURRENCY_SYMBOL: &str = "£";

/// 소수점 없이, 천 단위 쉼표를 넣어 파운드 금액으로 표시한다.
///
/// `1234567.0` → `"£1,234,567"`. 유한하지 않은 값은 `£0`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{grouped}")
    }
}

/// 감속(ease-out quart) 곡선. `progress`는 0~1로 잘린다.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// 값이 표시되는 대상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    Scheme(SchemeId),
    Total,
}

impl DisplayTarget {
    pub const ALL: [DisplayTarget; 7] = [
        DisplayTarget::Scheme(SchemeId::Pension),
        DisplayTarget::Scheme(SchemeId::Bonus),
        DisplayTarget::Scheme(SchemeId::Ev),
        DisplayTarget::Scheme(SchemeId::Cycle),
        DisplayTarget::Scheme(SchemeId::Holiday),
        DisplayTarget::Scheme(SchemeId::Wellbeing),
        DisplayTarget::Total,
    ];

    pub fn index(self) -> usize {
        match self {
            DisplayTarget::Scheme(s) => s.index(),
            DisplayTarget::Total => 6,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DisplayTarget::Scheme(s) => s.key(),
            DisplayTarget::Total => "total",
        }
    }
}

/// 계산 결과를 받아 화면에 반영하는 쪽의 인터페이스.
pub trait DisplaySink {
    /// `target`의 표시값을 `from`에서 `to`로 `duration` 동안 전환하도록 요청한다.
    fn animate(&mut self, target: DisplayTarget, from: f64, to: f64, duration: Duration);
}

/// 전환 요청 기록. CLI 출력과 테스트에서 사용한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub target: DisplayTarget,
    pub from: f64,
    pub to: f64,
}

impl DisplaySink for Vec<Transition> {
    fn animate(&mut self, target: DisplayTarget, from: f64, to: f64, _duration: Duration) {
        self.push(Transition { target, from, to });
    }
}

/// 대상 하나의 애니메이션 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Idle,
    Animating {
        from: f64,
        to: f64,
        started: Instant,
        duration: Duration,
    },
}

/// 애니메이션되는 표시값 하나.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedValue {
    value: f64,
    animation: Animation,
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self {
            value: 0.0,
            animation: Animation::Idle,
        }
    }
}

impl AnimatedValue {
    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.animation, Animation::Animating { .. })
    }

    /// `now` 시점의 표시값.
    pub fn value_at(&self, now: Instant) -> f64 {
        match self.animation {
            Animation::Idle => self.value,
            Animation::Animating {
                from,
                to,
                started,
                duration,
            } => {
                let progress = progress(started, duration, now);
                from + (to - from) * ease_out_quart(progress)
            }
        }
    }

    /// 새 전환을 시작한다. 진행 중인 전환은 취소되고 현재 표시값에서 다시 시작한다.
    pub fn start(&mut self, from: f64, to: f64, duration: Duration, now: Instant) {
        let from = if self.is_animating() {
            self.value_at(now)
        } else {
            from
        };
        if duration.is_zero() {
            self.value = to;
            self.animation = Animation::Idle;
            return;
        }
        self.value = from;
        self.animation = Animation::Animating {
            from,
            to,
            started: now,
            duration,
        };
    }

    /// 시간을 진행시킨다. 아직 전환 중이면 true.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Animation::Animating {
            to,
            started,
            duration,
            ..
        } = self.animation
        {
            if progress(started, duration, now) >= 1.0 {
                self.value = to;
                self.animation = Animation::Idle;
                return false;
            }
            self.value = self.value_at(now);
            return true;
        }
        false
    }
}

fn progress(started: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// 일곱 개 표시 대상을 가진 화면 보드. 대상별로 마지막 요청만 유효하다.
#[derive(Debug, Clone, Default)]
pub struct DisplayBoard {
    values: [AnimatedValue; 7],
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_at(
        &mut self,
        target: DisplayTarget,
        from: f64,
        to: f64,
        duration: Duration,
        now: Instant,
    ) {
        self.values[target.index()].start(from, to, duration, now);
    }

    pub fn get(&self, target: DisplayTarget) -> &AnimatedValue {
        &self.values[target.index()]
    }

    pub fn value_at(&self, target: DisplayTarget, now: Instant) -> f64 {
        self.values[target.index()].value_at(now)
    }

    /// 화면에 표시할 문자열.
    pub fn text_at(&self, target: DisplayTarget, now: Instant) -> String {
        format_currency(self.value_at(target, now))
    }

    /// 모든 대상을 진행시킨다. 하나라도 전환 중이면 true.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut any = false;
        for v in &mut self.values {
            any |= v.tick(now);
        }
        any
    }

    pub fn is_animating(&self) -> bool {
        self.values.iter().any(AnimatedValue::is_animating)
    }
}

impl DisplaySink for DisplayBoard {
    fn animate(&mut self, target: DisplayTarget, from: f64, to: f64, duration: Duration) {
        self.request_at(target, from, to, duration, Instant::now());
    }
}
