use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use platform_people::{DEFAULT_ENDPOINT, DEFAULT_NATIONALITIES};
use products_directory::DEFAULT_EMPLOYEE_COUNT;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Flags that override the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Person API endpoint.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Nationality codes sent to the API (comma-separated).
    #[arg(long = "nat", global = true, value_name = "CODES", value_delimiter = ',')]
    pub nationalities: Option<Vec<String>>,
    /// Number of employees to load on startup.
    #[arg(long, global = true, value_name = "N")]
    pub count: Option<usize>,
    /// Per-request timeout in seconds (0 disables).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub nationalities: Vec<String>,
    pub employees: usize,
    pub timeout: Option<Duration>,
}

impl AppConfig {
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Flags win over `lookup`; an environment value is only parsed when no
    /// flag supplies that field. Validation runs on the merged result.
    pub fn resolve<F>(args: &ConfigArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match &args.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => lookup("DIRECTORY_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into()),
        };

        let nationalities = match (&args.nationalities, lookup("DIRECTORY_NATIONALITIES")) {
            (Some(codes), _) => split_codes(codes.iter().map(String::as_str)),
            (None, Some(raw)) => split_codes(raw.split(',')),
            (None, None) => DEFAULT_NATIONALITIES.map(String::from).to_vec(),
        };

        let employees = match args.count {
            Some(count) => count,
            None => match lookup("DIRECTORY_EMPLOYEES") {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("invalid DIRECTORY_EMPLOYEES")?,
                None => DEFAULT_EMPLOYEE_COUNT,
            },
        };

        let timeout_secs = match args.timeout_secs {
            Some(secs) => secs,
            None => match lookup("DIRECTORY_TIMEOUT_SECS") {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .context("invalid DIRECTORY_TIMEOUT_SECS")?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Self {
            endpoint,
            nationalities,
            employees,
            timeout: timeout_from_secs(timeout_secs),
        }
        .validated()
    }

    fn validated(self) -> Result<Self> {
        if self.employees == 0 {
            return Err(anyhow!("employee count must be at least 1"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(anyhow!("endpoint must not be empty"));
        }
        Ok(self)
    }
}

fn split_codes<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.filter_map(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_ascii_lowercase())
        }
    })
    .collect()
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
