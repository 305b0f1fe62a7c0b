use std::{fs, path::Path};
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::settings::ServiceConfig;

/// Load config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    // an empty document is a valid "all defaults" config
    if content.trim().is_empty() {
        return Ok(ServiceConfig::default());
    }
    let service_config: ServiceConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    debug!("validating config ...");
    validate(&service_config)?;
    Ok(service_config)
}

fn validate(config: &ServiceConfig) -> Result<()> {
    let ops = &config.ops;
    for (name, url) in [("ops.auth_url", &ops.auth_url), ("ops.base_url", &ops.base_url)] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!("{} must be an http(s) URL, got '{}'", name, url));
        }
    }
    if ops.request_timeout_seconds == 0 {
        return Err(anyhow!("ops.request_timeout_seconds must be positive"));
    }
    Ok(())
}

/// Replace `${VAR}` and `${VAR:default}` with environment values.
fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
