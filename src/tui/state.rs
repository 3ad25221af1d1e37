//! Application state management.

use ratatui::layout::Rect;

use crate::roster::UserRecord;

use super::pager::PagedTable;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Search field has focus; every keystroke re-filters the table.
    Search,
}

/// Application state: the paged table plus UI chrome.
pub struct AppState {
    /// The filtered, paginated roster table.
    pub table: PagedTable<UserRecord>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Raw text of the search field (the table holds the lowercased query).
    pub search_input: String,
    /// Selected row index within the current page.
    pub selected: usize,
    /// Help popup visibility.
    pub show_help: bool,
    /// Quit confirmation dialog visibility.
    pub show_quit_confirm: bool,
    /// Transient message shown in the header.
    pub status_message: Option<String>,
    /// Screen rects of the pagination links rendered last frame, with the
    /// page each link navigates to. Rebuilt on every render; consumed by
    /// mouse click dispatch.
    pub page_link_hits: Vec<(Rect, usize)>,
}

impl AppState {
    pub fn new(table: PagedTable<UserRecord>) -> Self {
        Self {
            table,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            selected: 0,
            show_help: false,
            show_quit_confirm: false,
            status_message: None,
            page_link_hits: Vec::new(),
        }
    }

    /// Applies the current search input to the table. Resets the page (the
    /// table does) and the in-page selection.
    pub fn apply_search(&mut self) {
        self.table.set_query(&self.search_input);
        self.selected = 0;
    }

    /// Jumps to a page and resets the in-page selection.
    pub fn go_to_page(&mut self, page: usize) {
        self.table.set_page(page);
        self.selected = 0;
    }

    /// Moves the in-page selection up.
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the in-page selection down, clamped to the last visible row.
    pub fn select_down(&mut self) {
        let max = self.table.page_rows().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    /// Clamps the selection to the rows actually visible on this page.
    /// Called before each render: a shrinking filter can leave the selection
    /// past the end of the page.
    pub fn clamp_selection(&mut self) {
        let len = self.table.page_rows().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Dispatches a click at terminal coordinates against the pagination
    /// links recorded by the last render. Returns the page that was hit.
    pub fn click_page_link(&mut self, column: u16, row: u16) -> Option<usize> {
        let page = self
            .page_link_hits
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|&(_, page)| page)?;
        self.go_to_page(page);
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_records;

    fn state() -> AppState {
        AppState::new(PagedTable::new(demo_records()))
    }

    #[test]
    fn apply_search_resets_page_and_selection() {
        let mut state = state();
        state.go_to_page(3);
        state.selected = 4;

        state.search_input = "chennai".to_string();
        state.apply_search();

        assert_eq!(state.table.current_page(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_stays_within_page() {
        let mut state = state();
        state.go_to_page(3); // last page has 4 rows
        for _ in 0..10 {
            state.select_down();
        }
        assert_eq!(state.selected, 3);

        state.select_up();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn clamp_selection_after_filter_shrinks_page() {
        let mut state = state();
        state.selected = 7;
        state.table.set_query("mumbai"); // 5 rows
        state.clamp_selection();
        assert_eq!(state.selected, 4);

        state.table.set_query("no match");
        state.clamp_selection();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn click_page_link_hits_recorded_rect() {
        let mut state = state();
        state.page_link_hits = vec![
            (Rect::new(2, 20, 3, 1), 1),
            (Rect::new(6, 20, 3, 1), 2),
            (Rect::new(10, 20, 3, 1), 3),
        ];

        assert_eq!(state.click_page_link(7, 20), Some(2));
        assert_eq!(state.table.current_page(), 2);

        // Click outside any link is ignored.
        assert_eq!(state.click_page_link(0, 0), None);
        assert_eq!(state.table.current_page(), 2);
    }
}
