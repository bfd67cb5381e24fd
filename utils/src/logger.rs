use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    prelude::__tracing_subscriber_SubscriberExt,
    EnvFilter, Layer,
};

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

struct LocalTimer;
impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f")
        )
    }
}

static ADDITION_DIRECTIVE: &[&str] = &[
    "mio=warn",
    "actix_server::worker=warn",
    "actix_server::builder=warn",
];

fn build_filter(config: &Config) -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env().add_directive(
        config
            .level
            .parse()
            .with_context(|| format!("invalid log level: {}", config.level))?,
    );
    for d in ADDITION_DIRECTIVE {
        filter = filter.add_directive(d.parse()?);
    }
    Ok(filter)
}

pub fn init(config: &Config) -> Result<()> {
    let std_out = fmt::Layer::new()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_writer(std::io::stdout)
        .with_file(false)
        .with_filter(build_filter(config)?);

    let collector_std = tracing_subscriber::registry().with(std_out);
    tracing::subscriber::set_global_default(collector_std).context("failed to init logger")?;
    Ok(())
}
