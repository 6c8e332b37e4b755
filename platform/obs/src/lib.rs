use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    /// Number of `-v` flags passed on the command line.
    pub verbosity: u8,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "directory",
            env_filter: None,
            verbosity: 0,
        }
    }
}

impl ObsConfig {
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info,reqwest=warn,hyper=warn",
            _ => "debug,hyper=info,rustls=info",
        }
    }
}

/// Install the stderr fmt subscriber. Stdout is left to the caller.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let filter = config
        .env_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.default_directive().to_string());

    let env_filter = EnvFilter::try_new(filter)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    tracing::debug!(service = config.service_name, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_default_directive() {
        assert_eq!(ObsConfig::default().default_directive(), "warn");
        assert!(
            ObsConfig::default()
                .with_verbosity(1)
                .default_directive()
                .starts_with("info")
        );
        assert!(
            ObsConfig::default()
                .with_verbosity(3)
                .default_directive()
                .starts_with("debug")
        );
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(ObsConfig::default()).unwrap();
        init_tracing(ObsConfig::default()).unwrap();
    }
}
