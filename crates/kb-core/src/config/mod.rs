//! Application configuration domain model

mod app_config;

pub use app_config::{AppConfig, OnboardingConfig, RoutesConfig, StorageConfig};
