//! Terminal UI rendering.

pub mod detail_overlay;
pub mod form_panel;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::config::AppConfig;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App, config: &AppConfig) {
    // Form on top, task list filling the middle, status bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    form_panel::render(frame, chunks[0], app);
    task_list::render(frame, chunks[1], app, config);
    status_bar::render(frame, chunks[2], app);

    // The detail overlay is drawn last, over everything
    if app.overlay_open() {
        detail_overlay::render(frame, frame.area(), app);
    }
}
