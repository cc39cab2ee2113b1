#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod upload;
mod utils;

use anyhow::{Context, Result};
use app::{CatOrLoaf, NativePicker, UploadController};
use config::ClientConfig;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use upload::HttpClassifier;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("classify-worker")
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let classifier = HttpClassifier::new(&config).context("failed to build the HTTP client")?;
    tracing::info!(
        endpoint = classifier.endpoint(),
        timeout = ?config.request_timeout,
        "starting Cat or Loaf"
    );
    let controller = UploadController::new(
        Arc::new(classifier),
        Box::new(NativePicker),
        runtime.handle().clone(),
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Cat or Loaf")
            .with_inner_size([760.0, 600.0])
            .with_min_inner_size([480.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cat or Loaf",
        options,
        Box::new(move |cc| Box::new(CatOrLoaf::new(cc, controller))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
