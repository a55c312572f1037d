#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Livimmo - Real-estate marketplace with live viewings
#[derive(Parser, Debug)]
#[command(name = "livimmo-desktop")]
#[command(about = "Livimmo - browse listings and join live property viewings")]
struct Args {
    /// Window width in logical pixels (phone-ish portrait by default)
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 920.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livimmo=info".into()),
        )
        .init();

    let args = Args::parse();

    tracing::info!(width = args.width, height = args.height, "starting Livimmo");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Livimmo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
