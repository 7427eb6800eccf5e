#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use home_value_oracle::util::config::AppConfig;
#[cfg(feature = "desktop")]
use home_value_oracle::util::version::APP_NAME;

fn main() {
    let loaded = AppConfig::from_env();

    #[cfg(not(target_arch = "wasm32"))]
    home_value_oracle::util::logging::init_tracing(
        loaded
            .as_ref()
            .map(|config| config.log_filter.as_str())
            .unwrap_or(home_value_oracle::util::config::DEFAULT_LOG_FILTER),
    );

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("ignoring invalid configuration: {err}");
        AppConfig::default()
    });

    tracing::info!(data_dir = ?config.data_dir, seeded = config.jitter_seed.is_some(), "starting");
    app::install_config(config);

    // WebKit's DMABUF renderer crashes on some Wayland drivers; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}
