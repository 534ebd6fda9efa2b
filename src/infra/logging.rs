use tracing_subscriber::EnvFilter;

/// Фильтр по умолчанию, если RUST_LOG не задан.
pub const DEFAULT_FILTER: &str = "info";

/// Поднять fmt-подписчик tracing для бинарников.
///
/// Повторный вызов ничего не ломает: второй подписчик просто не ставится.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
