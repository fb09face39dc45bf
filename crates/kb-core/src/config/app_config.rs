//! # Configuration DTO
//!
//! Maps a parsed TOML document onto [`AppConfig`]. Keys that are absent fall
//! back to the standard route table and storage locations; present values are
//! taken as-is without further validation.

use std::path::PathBuf;

use serde::Serialize;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub routes: RoutesConfig,
    pub onboarding: OnboardingConfig,
    pub storage: StorageConfig,
}

/// Paths the gate navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutesConfig {
    pub sign_in: String,
    pub unauthorized: String,
    pub home: String,
    pub onboarding_base: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingConfig {
    /// Minimum age accepted by the age verification step.
    pub minimum_age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    /// JSON document store of user profiles.
    pub profiles_path: PathBuf,
    /// Session record of onboarding progress.
    pub progress_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routes: RoutesConfig {
                sign_in: "/sign-in".to_string(),
                unauthorized: "/unauthorized".to_string(),
                home: "/dashboard".to_string(),
                onboarding_base: "/onboarding".to_string(),
            },
            onboarding: OnboardingConfig { minimum_age: 18 },
            storage: StorageConfig {
                profiles_path: PathBuf::from("data/profiles.json"),
                progress_path: PathBuf::from("data/onboarding_progress.json"),
            },
        }
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let str_at = |section: &str, key: &str| -> Option<String> {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let minimum_age = match toml_value
            .get("onboarding")
            .and_then(|o| o.get("minimum_age"))
        {
            Some(value) => {
                let age = value
                    .as_integer()
                    .ok_or_else(|| anyhow::anyhow!("onboarding.minimum_age must be an integer"))?;
                u32::try_from(age)
                    .map_err(|_| anyhow::anyhow!("onboarding.minimum_age out of range: {age}"))?
            }
            None => defaults.onboarding.minimum_age,
        };

        Ok(Self {
            routes: RoutesConfig {
                sign_in: str_at("routes", "sign_in").unwrap_or(defaults.routes.sign_in),
                unauthorized: str_at("routes", "unauthorized")
                    .unwrap_or(defaults.routes.unauthorized),
                home: str_at("routes", "home").unwrap_or(defaults.routes.home),
                onboarding_base: str_at("routes", "onboarding_base")
                    .unwrap_or(defaults.routes.onboarding_base),
            },
            onboarding: OnboardingConfig { minimum_age },
            storage: StorageConfig {
                profiles_path: str_at("storage", "profiles_path")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.profiles_path),
                progress_path: str_at("storage", "progress_path")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.progress_path),
            },
        })
    }
}
