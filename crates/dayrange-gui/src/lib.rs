//! dayrange calendar window using eframe/egui.

pub mod app;
pub mod ui_state;
pub mod widgets;

use dayrange_core::{LoggingDestination, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to open the calendar window: {0}")]
    Launch(String),
}

/// Main entry point for the GUI
pub fn run() -> Result<(), GuiError> {
    if let Err(err) = init_logging(LoggingDestination::FileOnly) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([520.0, 560.0])
            .with_resizable(true)
            .with_title("Day Ranges"),
        ..Default::default()
    };

    eframe::run_native(
        "Day Ranges",
        native_options,
        Box::new(|cc| Ok(Box::new(app::DayrangeApp::new(cc)))),
    )
    .map_err(|e| GuiError::Launch(e.to_string()))
}
