//! Form panel rendering (title + description inputs and submit hint).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the form panel: two text inputs and the submit hint line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        "Title",
        app.manager.draft_title(),
        app.title_cursor,
        app.focus == PanelFocus::TitleInput,
        "What needs doing?",
    );
    render_field(
        frame,
        chunks[1],
        "Description",
        app.manager.draft_description(),
        app.description_cursor,
        app.focus == PanelFocus::DescriptionInput,
        "Add some detail...",
    );
    render_hint(frame, chunks[2], app);
}

/// Render a single bordered text input with a block cursor when focused.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    cursor: usize,
    is_focused: bool,
    placeholder: &str,
) {
    let mut display_text = text.to_string();
    if is_focused {
        if cursor >= display_text.len() {
            display_text.push('█');
        } else {
            display_text.insert(cursor, '█');
        }
    }

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            theme::panel_title(theme::FORM_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the submit hint: "Add" when composing, "Save" when editing.
fn render_hint(frame: &mut Frame, area: Rect, app: &App) {
    let label = if app.manager.is_editing() {
        "Save"
    } else {
        "Add"
    };
    let line = Line::from(vec![
        Span::styled(format!("[ Enter: {label} ]"), theme::bold()),
        Span::raw("  "),
        Span::styled(
            "Open a task from the list to see its full details",
            theme::dimmed(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
