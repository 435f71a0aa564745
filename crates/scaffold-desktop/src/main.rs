//! Scaffold Desktop Application
//!
//! A starter desktop shell: a counter, a local notes demo and a TCP event feed.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use scaffold_core::AppConfig;
use tracing_subscriber::EnvFilter;

use services::BackendRuntime;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scaffold=debug")),
        )
        .init();

    tracing::info!("Starting Scaffold...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Note store: {}", config.db_path().display());

    // The backend runtime must outlive the UI
    let _backend = match BackendRuntime::start(&config) {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start backend runtime: {}", e);
            std::process::exit(1);
        }
    };

    let window = WindowBuilder::new()
        .with_title("Scaffold")
        .with_inner_size(LogicalSize::new(720.0, 760.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
