//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::state::{AppState, InputMode};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Search mode
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            KeyAction::None
        }

        // Page navigation
        KeyCode::Left | KeyCode::Char('h') => {
            let page = state.table.current_page();
            state.table.prev_page();
            if state.table.current_page() != page {
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let page = state.table.current_page();
            state.table.next_page();
            if state.table.current_page() != page {
                state.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Home => {
            state.table.first_page();
            state.selected = 0;
            KeyAction::None
        }
        KeyCode::End => {
            state.table.last_page();
            state.selected = 0;
            KeyAction::None
        }

        // Direct page jump (only pages that exist)
        KeyCode::Char(c @ '1'..='9') => {
            let page = c as usize - '0' as usize;
            if page <= state.table.total_pages() {
                state.go_to_page(page);
            } else {
                state.status_message = Some(format!("No page {}", page));
            }
            KeyAction::None
        }

        // Row selection within the current page
        KeyCode::Up | KeyCode::Char('k') => {
            if state.show_help {
                // Help popup swallows navigation keys while open.
            } else {
                state.select_up();
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if !state.show_help {
                state.select_down();
            }
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            KeyAction::None
        }

        KeyCode::Esc => {
            state.status_message = None;
            if state.show_help {
                state.show_help = false;
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in search mode. The filter is applied on every keystroke.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel: clear the query, back to the full set.
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.apply_search();
            KeyAction::None
        }
        KeyCode::Enter => {
            // Confirm: filter is already applied live, just leave the field.
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return KeyAction::None;
            }
            state.search_input.push(c);
            state.apply_search();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles mouse input: left-clicks on pagination links switch pages.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        state.click_page_link(mouse.column, mouse.row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_records;
    use crate::tui::pager::PagedTable;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state() -> AppState {
        AppState::new(PagedTable::new(demo_records()))
    }

    #[test]
    fn search_mode_filters_on_every_keystroke() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Search);

        let _ = handle_key(&mut state, key(KeyCode::Char('m')));
        let _ = handle_key(&mut state, key(KeyCode::Char('y')));
        assert_eq!(state.search_input, "my");
        // "my" matches the 4 Mysore rows.
        assert_eq!(state.table.filtered_len(), 4);

        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.search_input, "m");
        assert!(state.table.filtered_len() > 4);
    }

    #[test]
    fn search_confirm_keeps_filter_cancel_clears_it() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.table.query(), "x");

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.table.query(), "");
        assert_eq!(state.table.filtered_len(), 20);
    }

    #[test]
    fn typing_a_query_resets_to_page_1() {
        let mut state = state();
        state.go_to_page(3);

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.table.current_page(), 1);
    }

    #[test]
    fn arrow_keys_change_pages_with_clamping() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.table.current_page(), 2);

        let _ = handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.table.current_page(), 3);

        let _ = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.table.current_page(), 3);

        let _ = handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.table.current_page(), 1);

        let _ = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.table.current_page(), 1);
    }

    #[test]
    fn digit_jump_only_accepts_existing_pages() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.table.current_page(), 2);

        let _ = handle_key(&mut state, key(KeyCode::Char('9')));
        assert_eq!(state.table.current_page(), 2);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = state();

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert!(state.show_quit_confirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = state();

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.show_quit_confirm);

        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn mouse_click_on_link_switches_page() {
        let mut state = state();
        state.page_link_hits = vec![(Rect::new(2, 20, 3, 1), 1), (Rect::new(6, 20, 3, 1), 2)];

        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 6,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, mouse);
        assert_eq!(state.table.current_page(), 2);

        // Non-click mouse events are ignored.
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 2,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, moved);
        assert_eq!(state.table.current_page(), 2);
    }
}
