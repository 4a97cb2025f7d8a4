//! Task list panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::config::AppConfig;
use crate::tasks::Task;

/// Render the task list with checkbox, title, and a short description
/// preview per task.
pub fn render(frame: &mut Frame, area: Rect, app: &App, config: &AppConfig) {
    let is_focused = app.focus == PanelFocus::TaskList;

    let block = Block::default()
        .title(Span::styled(
            "Tasks",
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.manager.tasks().is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Fill in the form above and press Enter.",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Room inside the borders, minus checkbox and indent
    let text_width = usize::from(area.width.saturating_sub(6).max(8));
    let preview_rows = usize::from(config.description_preview_rows);

    let items: Vec<ListItem> = app
        .manager
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let highlighted = is_focused && idx == app.list_cursor;
            let row_style = if highlighted {
                theme::selected()
            } else {
                Style::default()
            };
            ListItem::new(task_lines(task, text_width, preview_rows)).style(row_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Build the display lines for one task: a title row and up to
/// `preview_rows` rows of description, truncated with an ellipsis.
/// Truncation is display-only; stored text is never touched.
fn task_lines(task: &Task, text_width: usize, preview_rows: usize) -> Vec<Line<'static>> {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let (title_style, body_style) = if task.completed {
        (theme::completed(), theme::completed())
    } else {
        (theme::bold(), theme::dimmed())
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(checkbox, theme::normal()),
        Span::raw(" "),
        Span::styled(task.title.clone(), title_style),
    ])];

    let chars: Vec<char> = task.description.chars().collect();
    let visible = text_width * preview_rows;
    for (row, chunk) in chars.chunks(text_width.max(1)).take(preview_rows).enumerate() {
        let mut text: String = chunk.iter().collect();
        let is_last_row = row + 1 == preview_rows;
        if is_last_row && chars.len() > visible {
            text.pop();
            text.push('…');
        }
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(text, body_style),
        ]));
    }

    lines
}
