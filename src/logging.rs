use tracing_subscriber::EnvFilter;

/// 기본 로그 레벨. `RUST_LOG`로 덮어쓴다.
const DEFAULT_FILTER: &str = "warn";

/// stderr 로거를 설치한다. 이미 설치되어 있으면 아무것도 하지 않는다.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
