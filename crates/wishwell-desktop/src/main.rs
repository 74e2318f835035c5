//! Wishwell Desktop Application
//!
//! A celebratory greeting that ends by collecting one website idea.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod screens;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "wishwell=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Wishwell...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Wishwell")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
