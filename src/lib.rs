//! 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 컨트롤러를 공유한다.

pub mod app;
pub mod calculator;
pub mod config;
pub mod controller;
pub mod display;
pub mod i18n;
pub mod inputs;
pub mod logging;
pub mod schemes;
pub mod state;
pub mod ui_cli;
