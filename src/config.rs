// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ExpenseBook", "expensebook"));

/// Overrides the config directory; used by tests to point at a tempdir.
pub const CONFIG_DIR_ENV: &str = "EXPENSEBOOK_CONFIG_DIR";

pub const SETTING_KEYS: &[&str] = &[
    "endpoint",
    "api-key",
    "access-token",
    "user-id",
    "currency",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// GraphQL endpoint of the hosted backend.
    #[serde(default)]
    pub endpoint: String,
    /// Project API key, sent as the `apikey` header.
    #[serde(default)]
    pub api_key: String,
    /// Bearer token of the signed-in user.
    #[serde(default)]
    pub access_token: String,
    /// Id of the signed-in user; every query and mutation is scoped to it.
    #[serde(default)]
    pub user_id: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "BDT".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            endpoint: String::new(),
            api_key: String::new(),
            access_token: String::new(),
            user_id: String::new(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint.clone()),
            "api-key" => Ok(self.api_key.clone()),
            "access-token" => Ok(self.access_token.clone()),
            "user-id" => Ok(self.user_id.clone()),
            "currency" => Ok(self.currency.clone()),
            _ => Err(anyhow::anyhow!(
                "Unknown config key '{}' (expected one of: {})",
                key,
                SETTING_KEYS.join(", ")
            )),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.endpoint = value.to_string(),
            "api-key" => self.api_key = value.to_string(),
            "access-token" => self.access_token = value.to_string(),
            "user-id" => self.user_id = value.to_string(),
            "currency" => self.currency = value.to_uppercase(),
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown config key '{}' (expected one of: {})",
                    key,
                    SETTING_KEYS.join(", ")
                ));
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(d) => PathBuf::from(d),
        None => {
            let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific config dir")?;
            proj.config_dir().to_path_buf()
        }
    };
    fs::create_dir_all(&dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn load() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(settings)
}

pub fn save(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    let raw = serde_json::to_string_pretty(settings)?;
    fs::write(&path, raw).with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
