//! Entry point for the TEQDR ECG review screen.

use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use teqdr_core::{Collaborators, ReviewState, sample_transcript};
use teqdr_review::components::App;
use teqdr_review::config::{Args, ReviewConfig};
use teqdr_review::logging;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Initial view state, built before launch.
static INITIAL_STATE: OnceLock<ReviewState> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let config = ReviewConfig::from(Args::parse());

    logging::init(config.log_filter.as_deref()).context("invalid --log-filter")?;

    let provider = config.catalog.provider();
    tracing::info!(source = %provider.describe(), "Loading catalog");
    let catalog = provider
        .load()
        .with_context(|| format!("failed to load {}", provider.describe()))?;
    tracing::info!(records = catalog.len(), "Catalog loaded");

    let initial = ReviewState::new(Arc::new(catalog))
        .with_transcript(sample_transcript())
        .with_chat_open(config.chat_open);
    INITIAL_STATE.set(initial).ok();

    tracing::info!("Starting ECG review screen");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("ECG Interpretation - TEQDR")
                        .with_inner_size(LogicalSize::new(config.window.width, config.window.height)),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    teqdr_ui::SHARED_CSS,
                    STYLES_CSS,
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: injects collaborators and hands the initial state to `App`.
#[component]
fn RootApp() -> Element {
    use_context_provider(Collaborators::demo);

    use_drop(|| tracing::info!("Shutting down ECG review screen"));

    match INITIAL_STATE.get() {
        Some(initial) => rsx! {
            App { initial: initial.clone() }
        },
        None => rsx! {
            div { class: "startup-error", "No catalog loaded." }
        },
    }
}
