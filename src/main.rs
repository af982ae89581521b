use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;
use waste_classifier::WasteClassifier;

mod config;
mod disposal_guide;
mod error;
mod gui;
mod image_classifier;
mod label_table;
mod library;
mod model;
mod preprocessor;
mod render;
mod waste_category;
mod waste_classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let waste_classifier = WasteClassifier::load(&config, logger.clone());

    gui::run(&config, waste_classifier, logger)?;

    Ok(())
}
