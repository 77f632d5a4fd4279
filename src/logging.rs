//! 診断ログ（tracing）
//!
//! 利用者向けの進捗は println! で出し、こちらは stderr へ。
//! レベルは `SOOKSHMA_LOG` で上書きできる。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "sookshma=debug,sookshma_common=debug,warn" } else { "warn" };
    let env_filter = EnvFilter::try_from_env("SOOKSHMA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .init();
}
