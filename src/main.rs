mod app;
mod chart;
mod color;
mod config;
mod data;
mod sentiment;
mod state;
mod ui;

use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, anyhow};
use app::SentiPandaApp;
use eframe::egui;
use sentiment::{Classifier, PretrainedModel, SentimentModel};
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // One model per process: loading is the expensive part.
    let started = Instant::now();
    let pretrained = PretrainedModel::load().context("loading sentiment model")?;
    log::info!(
        "Loaded {} in {:?}",
        pretrained.name(),
        started.elapsed()
    );
    let model: Rc<dyn SentimentModel> = Rc::new(pretrained);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            let state = AppState::new(Classifier::new(model));
            Ok(Box::new(SentiPandaApp::new(state)))
        }),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}
