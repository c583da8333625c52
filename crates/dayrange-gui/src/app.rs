//! Main application structure for the calendar window

use chrono::{Local, NaiveDate};
use dayrange_core::{
    DateFormat, DateState, DayType, FileConfig, SelectionId, WeekStart, load_config,
};
use tracing::{info, warn};

use crate::ui_state::{ActivityEntry, ActivityLevel, Theme, UiState};
use crate::widgets;
use crate::widgets::calendar_grid::CalendarAction;

/// Main application struct implementing eframe::App
pub struct DayrangeApp {
    /// The selection being edited
    state: DateState,

    /// UI state
    ui_state: UiState,

    /// Label format for the range table
    format: DateFormat,

    week_start: WeekStart,

    today: NaiveDate,
}

impl DayrangeApp {
    /// Create the app from the per-user configuration
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let load = load_config();
        let mut app = Self::from_config(&load.config, Local::now().date_naive());
        for warning in load.warnings {
            warn!(%warning, "Configuration warning");
            app.add_activity(ActivityLevel::Warning, warning);
        }
        app.add_activity(ActivityLevel::Info, "Application started");
        app
    }

    pub fn from_config(config: &FileConfig, today: NaiveDate) -> Self {
        Self {
            state: DateState::with_day_type(config.selection.default_day_type),
            ui_state: UiState::new(today),
            format: config.date_format(),
            week_start: config.display.week_start,
            today,
        }
    }

    pub fn state(&self) -> &DateState {
        &self.state
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    fn add_activity(&mut self, level: ActivityLevel, message: impl Into<String>) {
        self.ui_state.push_activity(ActivityEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
        });
    }

    /// Apply a click or navigation from the calendar
    pub fn handle_calendar(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::PreviousMonth => self.ui_state.show_previous_month(),
            CalendarAction::NextMonth => self.ui_state.show_next_month(),
            CalendarAction::Today => self.ui_state.show_month_of(self.today),
            CalendarAction::Toggle(day) => self.toggle_day(day),
        }
    }

    fn toggle_day(&mut self, day: NaiveDate) {
        let before = self.state.selection(day).map(|s| s.day_type);
        self.state.toggle_date(Some(day));
        let after = self.state.selection(day).map(|s| s.day_type);

        let message = match (before, after) {
            (None, Some(day_type)) => format!("Selected {day} as {day_type}"),
            (Some(old), Some(new)) => format!("Changed {day} from {old} to {new}"),
            (Some(_), None) => format!("Deselected {day}"),
            (None, None) => return,
        };
        info!(%day, ranges = self.state.ranges().len(), "Toggled day");
        self.add_activity(ActivityLevel::Info, message);
    }

    /// Remove the range the table row refers to
    pub fn delete_range(&mut self, id: SelectionId) {
        let Some(range) = self.state.range_by_id(id).cloned() else {
            warn!(%id, "Range vanished before it could be removed");
            return;
        };
        self.state.remove_range(&range);
        info!(%id, days = range.len(), "Removed range");
        self.add_activity(
            ActivityLevel::Info,
            format!("Removed {} day(s) starting {}", range.len(), range.first_day()),
        );
    }

    pub fn set_day_type(&mut self, day_type: DayType) {
        self.state.set_day_type(day_type);
        self.add_activity(ActivityLevel::Info, format!("New selections are {day_type} days"));
    }

    pub fn clear(&mut self) {
        let removed = self.state.len();
        self.state.clear();
        info!(removed, "Cleared selection");
        self.add_activity(ActivityLevel::Info, format!("Cleared {removed} day(s)"));
    }

    /// Apply theme to egui context
    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.ui_state.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    /// Render the top panel with title and theme toggle
    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Day Ranges");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.ui_state.theme {
                        Theme::Dark => "☀ Light",
                        Theme::Light => "🌙 Dark",
                    };
                    if ui.button(theme_label).clicked() {
                        self.ui_state.theme = match self.ui_state.theme {
                            Theme::Dark => Theme::Light,
                            Theme::Light => Theme::Dark,
                        };
                    }
                });
            });
        });
    }

    /// Render the main UI content
    fn render_main_ui(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut day_type = self.state.day_type();
                if widgets::day_type_toggle::render(ui, &mut day_type) {
                    self.set_day_type(day_type);
                }

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    let action = widgets::calendar_grid::render(
                        ui,
                        &self.state,
                        self.ui_state.month,
                        self.week_start,
                    );
                    if let Some(action) = action {
                        self.handle_calendar(action);
                    }
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    ui.heading("Ranges");
                    let rows = self.state.range_rows(&self.format);
                    if let Some(id) = widgets::range_table::render(ui, &rows) {
                        self.delete_range(id);
                    }
                    ui.separator();
                    if widgets::summary::render(ui, self.state.counts()) {
                        self.clear();
                    }
                });

                ui.add_space(8.0);

                let log_response = egui::CollapsingHeader::new("Activity")
                    .default_open(self.ui_state.activity_expanded)
                    .show(ui, |ui| {
                        widgets::activity_log::render(ui, &mut self.ui_state);
                    });
                if log_response.header_response.clicked() {
                    self.ui_state.activity_expanded = !self.ui_state.activity_expanded;
                }
            });
    }
}

impl eframe::App for DayrangeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        self.render_top_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_main_ui(ui);
        });
    }
}
