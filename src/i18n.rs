use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::schemes::SchemeId;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EMPLOYEES: &str = "main_menu.employees";
    pub const MAIN_MENU_SALARY: &str = "main_menu.salary";
    pub const MAIN_MENU_TOGGLE: &str = "main_menu.toggle";
    pub const MAIN_MENU_BREAKDOWN: &str = "main_menu.breakdown";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_EMPLOYEES: &str = "prompt.employees";
    pub const PROMPT_SALARY: &str = "prompt.salary";
    pub const PROMPT_SCHEME: &str = "prompt.scheme";
    pub const PROMPT_YES_NO: &str = "prompt.yes_no";
    pub const TOGGLE_HEADING: &str = "toggle.heading";

    pub const BREAKDOWN_HEADING: &str = "breakdown.heading";
    pub const BREAKDOWN_INPUTS: &str = "breakdown.inputs";
    pub const BREAKDOWN_TOTAL: &str = "breakdown.total";
    pub const BREAKDOWN_DISABLED: &str = "breakdown.disabled";
    pub const BREAKDOWN_CHANGE: &str = "breakdown.change";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_ANIMATION: &str = "settings.prompt_animation";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en-gb",
            Language::Ko => "ko-kr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만 쓰는 번역기를 생성한다. 알 수 없는 코드는 영어로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: built_in_pack(lang_code),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]").to_string()
    }

    /// 제도 표시명.
    pub fn scheme_label(&self, scheme: SchemeId) -> String {
        self.lookup(&format!("scheme.{}", scheme.key()))
            .unwrap_or_else(|| scheme.default_label().to_string())
    }
}

/// `{name}` 자리표시자를 값으로 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-gb".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-gb".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-gb".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::En => parse_toml_to_map(include_str!("../locales/en-gb.toml")),
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== NI 절감 계산기 ===",
        MAIN_MENU_EMPLOYEES => "1) 직원 수 입력",
        MAIN_MENU_SALARY => "2) 평균 연봉 입력",
        MAIN_MENU_TOGGLE => "3) 제도 포함/제외",
        MAIN_MENU_BREAKDOWN => "4) 절감액 보기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_EMPLOYEES => "직원 수: ",
        PROMPT_SALARY => "평균 연봉 [£]: ",
        PROMPT_SCHEME => "제도 번호: ",
        PROMPT_YES_NO => "포함하시겠습니까? (y/n): ",
        TOGGLE_HEADING => "\n-- 제도 선택 --",
        BREAKDOWN_HEADING => "\n-- 회사 NI 절감액 --",
        BREAKDOWN_INPUTS => "직원 수 {employees}명, 평균 연봉 {salary}",
        BREAKDOWN_TOTAL => "총 절감액",
        BREAKDOWN_DISABLED => "(제외)",
        BREAKDOWN_CHANGE => "변경",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/en-gb/ko-kr, 엔터=유지): ",
        SETTINGS_PROMPT_ANIMATION => "전환 시간 [ms] (엔터=유지): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== NI Savings Calculator ===",
        MAIN_MENU_EMPLOYEES => "1) Number of employees",
        MAIN_MENU_SALARY => "2) Average salary",
        MAIN_MENU_TOGGLE => "3) Include/exclude a scheme",
        MAIN_MENU_BREAKDOWN => "4) Show savings",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_EMPLOYEES => "Number of employees: ",
        PROMPT_SALARY => "Average salary [£]: ",
        PROMPT_SCHEME => "Scheme number: ",
        PROMPT_YES_NO => "Include it? (y/n): ",
        TOGGLE_HEADING => "\n-- Schemes --",
        BREAKDOWN_HEADING => "\n-- Employer NI savings --",
        BREAKDOWN_INPUTS => "{employees} employees, average salary {salary}",
        BREAKDOWN_TOTAL => "Total savings",
        BREAKDOWN_DISABLED => "(excluded)",
        BREAKDOWN_CHANGE => "was",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/en-gb/ko-kr, enter to keep): ",
        SETTINGS_PROMPT_ANIMATION => "Transition time [ms] (enter to keep): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
