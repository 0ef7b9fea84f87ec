use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::display::ANIMATION_DURATION;

/// 기본 설정 파일 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 계산 상태는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto, en-gb, ko-kr)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 표시값 전환 시간 [ms]. 0이면 즉시 반영.
    pub animation_ms: u64,
    /// GUI 창 불투명도(0.3~1.0)
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            animation_ms: ANIMATION_DURATION.as_millis() as u64,
            window_alpha: 1.0,
        }
    }
}

impl Config {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장하고 반환한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "ni_savings_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_creates_defaults() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let cfg = load_or_create(&path).expect("create default");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "language = \"ko-kr\"\nanimation_ms = 0\n").expect("write");
        let cfg = load_or_create(&path).expect("load");
        assert_eq!(cfg.language, "ko-kr");
        assert_eq!(cfg.animation_duration(), Duration::ZERO);
        assert_eq!(cfg.window_alpha, 1.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "animation_ms = \"fast\"").expect("write");
        let err = load_or_create(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
        let _ = fs::remove_file(&path);
    }
}
