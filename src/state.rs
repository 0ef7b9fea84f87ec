use crate::schemes::SchemeId;

/// 토글 그룹의 선택지. 한 제도 안에서 서로 배타적이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOption {
    Yes,
    No,
}

impl ToggleOption {
    pub const ALL: [ToggleOption; 2] = [ToggleOption::Yes, ToggleOption::No];

    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ToggleOption::Yes
        } else {
            ToggleOption::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == ToggleOption::Yes
    }

    pub fn key(self) -> &'static str {
        match self {
            ToggleOption::Yes => "yes",
            ToggleOption::No => "no",
        }
    }
}

/// 제도별 활성화 여부. 세션 동안 메모리에만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeState {
    enabled: [bool; 6],
}

impl Default for SchemeState {
    fn default() -> Self {
        Self { enabled: [true; 6] }
    }
}

impl SchemeState {
    pub fn is_enabled(&self, scheme: SchemeId) -> bool {
        self.enabled[scheme.index()]
    }

    /// 토글 선택을 반영한다. 이전 값을 반환한다.
    pub fn select(&mut self, scheme: SchemeId, option: ToggleOption) -> bool {
        let prev = self.enabled[scheme.index()];
        self.enabled[scheme.index()] = option.is_yes();
        prev
    }

    /// 현재 선택된 토글 옵션. 그룹 안에서 정확히 하나만 선택된다.
    pub fn selected(&self, scheme: SchemeId) -> ToggleOption {
        ToggleOption::from_enabled(self.is_enabled(scheme))
    }

    /// 해당 옵션이 선택 표시 상태인지.
    pub fn is_selected(&self, scheme: SchemeId, option: ToggleOption) -> bool {
        self.selected(scheme) == option
    }

    /// ALL 순서의 활성화 마스크.
    pub fn mask(&self) -> [bool; 6] {
        self.enabled
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|e| **e).count()
    }
}
