#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppConfig;

/// Global configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or defaults)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_else(|| {
        let data_dir = default_data_dir();
        AppConfig {
            downloads_dir: default_downloads_dir(&data_dir),
            data_dir,
            base_url: DEFAULT_BASE_URL.to_string(),
            reduced_motion: false,
            start_on_designer: false,
        }
    })
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eclipse-memorial")
}

fn default_downloads_dir(data_dir: &std::path::Path) -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| data_dir.to_path_buf())
}

/// Eldritch Eclipse - Event site and memorial designer
#[derive(Parser, Debug)]
#[command(name = "eclipse-memorial-desktop")]
#[command(about = "Eldritch Eclipse - event landing page and gravestone designer")]
struct Args {
    /// Data directory for the preference store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Where exported images are saved (default: downloads directory)
    #[arg(long)]
    downloads_dir: Option<PathBuf>,

    /// Base URL used in share links
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Disable particles, smooth scrolling and the ambient background
    #[arg(long)]
    reduced_motion: bool,

    /// Open the designer instead of the landing page
    #[arg(long)]
    designer: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    memorial_core::logging::init(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let downloads_dir = args
        .downloads_dir
        .unwrap_or_else(|| default_downloads_dir(&data_dir));

    let config = AppConfig {
        data_dir,
        downloads_dir,
        base_url: args.base_url,
        reduced_motion: args.reduced_motion,
        start_on_designer: args.designer,
    };

    tracing::info!(
        "Starting with data dir: {:?}, downloads: {:?}",
        config.data_dir,
        config.downloads_dir
    );

    // Store configuration globally
    let _ = APP_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Eldritch Eclipse")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
