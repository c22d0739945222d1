use blockpress_config::{CMS_URL_VAR, Config};
use dioxus::prelude::*;
use std::env;
use std::process;
use std::sync::OnceLock;

mod ui;

use ui::App;

/// Resolved once in `main`, read by the root component.
static CONFIG: OnceLock<Config> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("blockpress starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "blockpress".to_string());

    let cli_cms_url = match args.as_slice() {
        [_] => None,
        [_, cms_url] => {
            log::info!("Using CMS URL from CLI argument: {cms_url}");
            Some(cms_url.clone())
        }
        _ => {
            eprintln!("Usage: {program_name} [cms-url]");
            process::exit(1);
        }
    };

    let config = match Config::resolve(cli_cms_url) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::resolve() failed with error: {e}");
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [cms-url]");
            eprintln!(
                "Or set {CMS_URL_VAR}, or create a config file at {}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    log::info!(
        "Using CMS at {} (API {})",
        config.site_url(),
        config.api_base()
    );
    let title = config.site_name.clone();
    if CONFIG.set(config).is_err() {
        log::warn!("Configuration was already set");
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config(&title))
        .launch(app_root);
}

fn app_root() -> Element {
    let Some(config) = CONFIG.get().cloned() else {
        log::error!("Root component rendered before the configuration was resolved");
        return rsx! {};
    };

    rsx! {
        App { config }
    }
}

fn make_window_config(title: &str) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false);

    Config::default().with_window(window)
}
