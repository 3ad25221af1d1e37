//! Pagination bar: one clickable link per page, rebuilt every frame.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// One page link, laid out relative to the start of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Page this link navigates to (1-based).
    pub page: usize,
    /// Link label, e.g. `[ 2 ]`.
    pub label: String,
    /// Column offset of the label within the bar.
    pub offset: u16,
    /// Whether this is the current page.
    pub active: bool,
}

/// Lays out the page links for a pagination bar. Zero pages yields no links.
pub fn layout_page_links(total_pages: usize, current_page: usize) -> Vec<PageLink> {
    let mut links = Vec::with_capacity(total_pages);
    let mut offset = 0u16;
    for page in 1..=total_pages {
        let label = format!("[ {} ]", page);
        let width = label.len() as u16;
        links.push(PageLink {
            page,
            label,
            offset,
            active: page == current_page,
        });
        offset += width + 1; // single space between links
    }
    links
}

/// Renders the pagination bar and records each link's screen rect in
/// `state.page_link_hits` for mouse dispatch. The registry is rebuilt from
/// scratch on every render, so links for pages that no longer exist
/// disappear along with their hit targets.
pub fn render_pagination(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.page_link_hits.clear();

    let total_pages = state.table.total_pages();
    let links = layout_page_links(total_pages, state.table.current_page());

    let mut spans: Vec<Span> = Vec::with_capacity(links.len() * 2);
    for link in &links {
        let style = if link.active {
            Styles::link_active()
        } else {
            Styles::link_inactive()
        };

        let width = link.label.len() as u16;
        // Links past the right edge are neither drawn usefully nor clickable.
        if link.offset + width <= area.width {
            state.page_link_hits.push((
                Rect::new(area.x + link.offset, area.y, width, 1),
                link.page,
            ));
        }

        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(link.label.clone(), style));
    }

    let line = if spans.is_empty() {
        Line::from(Span::styled("no matches", Styles::dim()))
    } else {
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_link_per_page_with_active_marker() {
        let links = layout_page_links(3, 2);
        assert_eq!(links.len(), 3);
        assert_eq!(
            links.iter().map(|l| l.page).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(!links[0].active);
        assert!(links[1].active);
        assert!(!links[2].active);
    }

    #[test]
    fn zero_pages_yields_no_links() {
        assert!(layout_page_links(0, 1).is_empty());
    }

    #[test]
    fn link_offsets_do_not_overlap() {
        let links = layout_page_links(12, 1);
        for pair in links.windows(2) {
            let end = pair[0].offset + pair[0].label.len() as u16;
            assert!(pair[1].offset > end);
        }
        // Two-digit labels are wider.
        assert_eq!(links[9].label, "[ 10 ]");
    }
}
