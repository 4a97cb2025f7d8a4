//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.overlay_open() {
        "Esc/Enter: close details"
    } else {
        match app.focus {
            PanelFocus::TitleInput | PanelFocus::DescriptionInput => {
                "Enter: submit | Tab: switch panel | Esc: quit | ←→: move cursor"
            }
            PanelFocus::TaskList => {
                "Enter: details | Space: toggle | e: edit | d: delete | ↑↓/jk: move | Esc: quit"
            }
        }
    };

    let done = app.manager.tasks().iter().filter(|t| t.completed).count();
    let total = app.manager.tasks().len();

    let status_line = Line::from(vec![
        Span::styled(
            concat!("taskdeck v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::raw(format!("{done}/{total} done")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
