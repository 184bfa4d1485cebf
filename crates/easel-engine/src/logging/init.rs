use std::sync::Once;

/// Options for the process-wide logger.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter in `env_logger` syntax, e.g. `"easel_engine=debug"`.
    /// When unset, `RUST_LOG` applies, with `info` as the fallback so studio
    /// command feedback still shows up.
    pub env_filter: Option<String>,

    /// ANSI color behavior for the log writer.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static LOG_INIT: Once = Once::new();

/// Installs the `env_logger` backend behind the `log` facade.
///
/// Safe to call more than once; only the first call takes effect. Run it
/// before the runtime starts so window and GPU bring-up failures get
/// logged too.
pub fn init_logging(config: LoggingConfig) {
    LOG_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter {
            Some(filters) => {
                builder.parse_filters(&filters);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style).init();

        log::debug!("log backend ready");
    });
}
