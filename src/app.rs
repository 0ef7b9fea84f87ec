use tracing::{info, warn};

use crate::config::Config;
use crate::controller::RecomputeController;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "settings error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// 설정 파일을 로드한다. 읽을 수 없으면 경고 후 기본값을 사용한다.
pub fn load_config() -> Config {
    match crate::config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "could not load config.toml, using defaults");
            Config::default()
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    tr: &mut Translator,
    controller: &mut RecomputeController,
) -> Result<(), AppError> {
    let mut out = std::io::stdout();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Employees => ui_cli::handle_employees(tr, controller, &mut out)?,
            MenuChoice::Salary => ui_cli::handle_salary(tr, controller, &mut out)?,
            MenuChoice::Toggle => ui_cli::handle_toggle(tr, controller, &mut out)?,
            MenuChoice::Breakdown => {
                ui_cli::print_breakdown(&mut out, tr, controller.inputs(), controller)?
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                controller.set_duration(config.animation_duration());
                let lang = i18n::resolve_language(None, &config.language);
                *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                info!(language = tr.language_code(), "settings saved");
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
