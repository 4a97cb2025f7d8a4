//! Application state and key-event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tasks::{TaskId, TaskListManager};

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Title input in the form (default).
    TitleInput,
    /// Description input in the form.
    DescriptionInput,
    /// Task list.
    TaskList,
}

/// Main application state: the task list manager plus presentation state.
pub struct App {
    /// Task list state and operations.
    pub manager: TaskListManager,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Cursor position in the title input (byte offset).
    pub title_cursor: usize,
    /// Cursor position in the description input (byte offset).
    pub description_cursor: usize,
    /// Highlighted row in the task list.
    pub list_cursor: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: TaskListManager::new(),
            focus: PanelFocus::TitleInput,
            title_cursor: 0,
            description_cursor: 0,
            list_cursor: 0,
            should_quit: false,
        }
    }

    /// Whether the detail overlay is currently visible.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.manager.selected_task().is_some()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C quits from anywhere, overlay included.
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // The overlay swallows everything except its dismiss keys.
        if self.overlay_open() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.manager.deselect();
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.handle_escape();
                return;
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::TitleInput => self.handle_title_key(key),
            PanelFocus::DescriptionInput => self.handle_description_key(key),
            PanelFocus::TaskList => self.handle_list_key(key),
        }
    }

    /// Esc cancels an in-progress edit, otherwise quits.
    fn handle_escape(&mut self) {
        if self.manager.is_editing() {
            self.manager.cancel_edit();
            self.title_cursor = 0;
            self.description_cursor = 0;
            self.focus = PanelFocus::TitleInput;
        } else {
            self.should_quit = true;
        }
    }

    /// Cycle focus forward: Title -> Description -> List -> Title.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::TitleInput => PanelFocus::DescriptionInput,
            PanelFocus::DescriptionInput => PanelFocus::TaskList,
            PanelFocus::TaskList => PanelFocus::TitleInput,
        };
    }

    /// Cycle focus backward: Title -> List -> Description -> Title.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::TitleInput => PanelFocus::TaskList,
            PanelFocus::TaskList => PanelFocus::DescriptionInput,
            PanelFocus::DescriptionInput => PanelFocus::TitleInput,
        };
    }

    /// Handle key event when the title input is focused.
    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Down => self.focus = PanelFocus::DescriptionInput,
            KeyCode::Char(c) => {
                enter_char(self.manager.draft_title_mut(), &mut self.title_cursor, c);
            }
            KeyCode::Backspace => {
                delete_char(self.manager.draft_title_mut(), &mut self.title_cursor);
            }
            KeyCode::Left => move_cursor_left(self.manager.draft_title(), &mut self.title_cursor),
            KeyCode::Right => move_cursor_right(self.manager.draft_title(), &mut self.title_cursor),
            KeyCode::Home => self.title_cursor = 0,
            KeyCode::End => self.title_cursor = self.manager.draft_title().len(),
            _ => {}
        }
    }

    /// Handle key event when the description input is focused.
    fn handle_description_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.focus = PanelFocus::TitleInput,
            KeyCode::Char(c) => {
                enter_char(
                    self.manager.draft_description_mut(),
                    &mut self.description_cursor,
                    c,
                );
            }
            KeyCode::Backspace => {
                delete_char(
                    self.manager.draft_description_mut(),
                    &mut self.description_cursor,
                );
            }
            KeyCode::Left => {
                move_cursor_left(self.manager.draft_description(), &mut self.description_cursor);
            }
            KeyCode::Right => {
                move_cursor_right(self.manager.draft_description(), &mut self.description_cursor);
            }
            KeyCode::Home => self.description_cursor = 0,
            KeyCode::End => self.description_cursor = self.manager.draft_description().len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.manager.tasks().len().saturating_sub(1);
                if self.list_cursor < last {
                    self.list_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.highlighted_id() {
                    self.manager.select(id);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.highlighted_id() {
                    self.manager.toggle_completed(id);
                }
            }
            KeyCode::Char('e') => self.begin_edit_highlighted(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_highlighted(),
            _ => {}
        }
    }

    /// Id of the task under the list cursor, if any.
    #[must_use]
    pub fn highlighted_id(&self) -> Option<TaskId> {
        self.manager.tasks().get(self.list_cursor).map(|t| t.id)
    }

    /// Commit the drafts (Add or Save) and reset the form when accepted.
    fn submit(&mut self) {
        if self.manager.commit().is_some() {
            self.title_cursor = 0;
            self.description_cursor = 0;
            self.focus = PanelFocus::TitleInput;
        }
    }

    /// Start editing the highlighted task: load drafts, jump to the form.
    fn begin_edit_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        self.manager.begin_edit(id);
        self.title_cursor = self.manager.draft_title().len();
        self.description_cursor = self.manager.draft_description().len();
        self.focus = PanelFocus::TitleInput;
    }

    /// Delete the highlighted task and keep the cursor on a valid row.
    fn delete_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        self.manager.delete(id);
        let last = self.manager.tasks().len().saturating_sub(1);
        if self.list_cursor > last {
            self.list_cursor = last;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a character into a draft buffer at the cursor position.
fn enter_char(buf: &mut String, cursor: &mut usize, c: char) {
    if *cursor >= buf.len() {
        buf.push(c);
        *cursor = buf.len();
    } else {
        buf.insert(*cursor, c);
        *cursor += c.len_utf8();
    }
}

/// Delete the character before the cursor.
fn delete_char(buf: &mut String, cursor: &mut usize) {
    if *cursor == 0 {
        return;
    }
    let width = buf[..*cursor].chars().next_back().map_or(0, char::len_utf8);
    *cursor -= width;
    buf.remove(*cursor);
}

/// Move the cursor one character left.
fn move_cursor_left(buf: &str, cursor: &mut usize) {
    let width = buf[..*cursor].chars().next_back().map_or(0, char::len_utf8);
    *cursor = cursor.saturating_sub(width);
}

/// Move the cursor one character right.
fn move_cursor_right(buf: &str, cursor: &mut usize) {
    if *cursor < buf.len() {
        let width = buf[*cursor..].chars().next().map_or(0, char::len_utf8);
        *cursor += width;
    }
}
