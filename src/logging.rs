use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ロガーを初期化する（stdoutは挨拶専用なので出力先はstderr）
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("greeter_factory=debug")
        } else {
            EnvFilter::new("greeter_factory=warn")
        }
    });

    // テストなどで既に初期化済みの場合は無視する
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
