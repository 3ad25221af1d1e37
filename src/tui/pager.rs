//! Generic paged table state: filtering and pagination.

/// Default number of rows shown per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 8;

/// Trait for table row items.
pub trait TableRow: Clone {
    /// Number of columns.
    fn column_count() -> usize;

    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings.
    fn cells(&self) -> Vec<String>;

    /// Check if the row matches a lowercase query.
    /// Matches when the row's visible text contains the query as a substring.
    fn matches_query(&self, query: &str) -> bool {
        self.cells().join(" ").to_lowercase().contains(query)
    }
}

/// State for a filtered, paginated table.
///
/// The full item set is captured once at construction and never mutated;
/// `filtered` holds indices into it, in original order. The current page is
/// 1-based.
#[derive(Debug, Clone)]
pub struct PagedTable<T: TableRow> {
    /// All items (unfiltered), captured at construction.
    items: Vec<T>,
    /// Indices of items matching the current query, in document order.
    filtered: Vec<usize>,
    /// Current lowercase query. Empty matches all rows.
    query: String,
    /// Current page, 1-based.
    current_page: usize,
    /// Rows shown per page.
    rows_per_page: usize,
}

impl<T: TableRow> PagedTable<T> {
    /// Creates a table over the full item set with the default page size.
    /// Initially unfiltered, on page 1.
    pub fn new(items: Vec<T>) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filtered,
            query: String::new(),
            current_page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    /// Overrides the page size. Zero is coerced to 1.
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page.max(1);
        self
    }

    /// Sets the search query, recomputes the filtered set, and resets to
    /// page 1. The query is lowercased; matching is case-insensitive
    /// substring search over the row's visible text.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches_query(&self.query))
            .map(|(i, _)| i)
            .collect();
        self.current_page = 1;
        tracing::debug!(
            query = %self.query,
            matched = self.filtered.len(),
            total = self.items.len(),
            "query applied"
        );
    }

    /// Jumps to the given 1-based page.
    ///
    /// No bounds check: callers only emit links for valid pages. An
    /// out-of-range page yields an empty [`page_rows`](Self::page_rows)
    /// slice rather than an error.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        tracing::debug!(page = self.current_page, "page set");
    }

    /// Current lowercase query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Configured page size.
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Number of rows in the full set.
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// Number of rows matching the current query.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Total number of pages. Zero when no rows match.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.rows_per_page)
    }

    /// Rows of the filtered set belonging to the current page, in order.
    pub fn page_rows(&self) -> Vec<&T> {
        let start = (self.current_page - 1).saturating_mul(self.rows_per_page);
        self.filtered
            .iter()
            .skip(start)
            .take(self.rows_per_page)
            .map(|&i| &self.items[i])
            .collect()
    }

    /// Moves to the next page, clamped to the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.set_page(self.current_page + 1);
        }
    }

    /// Moves to the previous page, clamped to page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.set_page(self.current_page - 1);
        }
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    /// Jumps to the last page (page 1 when no rows match).
    pub fn last_page(&mut self) {
        self.set_page(self.total_pages().max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item(&'static str, &'static str);

    impl TableRow for Item {
        fn column_count() -> usize {
            2
        }

        fn headers() -> Vec<&'static str> {
            vec!["NAME", "CITY"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn twenty_rows() -> Vec<Item> {
        vec![
            Item("Asha", "Chennai"),
            Item("Bharat", "Mumbai"),
            Item("Chitra", "Chennai"),
            Item("Deepak", "Delhi"),
            Item("Esha", "Mumbai"),
            Item("Farhan", "Delhi"),
            Item("Gita", "Chennai"),
            Item("Hari", "Mysore"),
            Item("Indira", "Delhi"),
            Item("Jay", "Mumbai"),
            Item("Kavya", "Chennai"),
            Item("Lakshmi", "Mysore"),
            Item("Mohan", "Delhi"),
            Item("Nisha", "Mumbai"),
            Item("Om", "Chennai"),
            Item("Priya", "Mysore"),
            Item("Qadir", "Delhi"),
            Item("Ravi", "Mumbai"),
            Item("Sita", "Chennai"),
            Item("Tara", "Mysore"),
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring_over_row_text() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_query("CHEN");

        let names: Vec<String> = table.page_rows().iter().map(|r| r.0.to_string()).collect();
        // Subsequence of the full set, original order preserved.
        assert_eq!(
            names,
            vec!["Asha", "Chitra", "Gita", "Kavya", "Om", "Sita"]
        );
        assert_eq!(table.filtered_len(), 6);
    }

    #[test]
    fn empty_query_matches_all_rows() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_query("delhi");
        table.set_query("");
        assert_eq!(table.filtered_len(), 20);
    }

    #[test]
    fn total_pages_is_ceil_of_filtered_len() {
        let table = PagedTable::new(twenty_rows());
        assert_eq!(table.total_pages(), 3); // ceil(20 / 8)

        let mut table = table;
        table.set_query("mysore"); // 4 matches
        assert_eq!(table.total_pages(), 1);

        table.set_query("no such row");
        assert_eq!(table.total_pages(), 0);
    }

    #[test]
    fn twenty_rows_paginate_as_8_8_4() {
        let mut table = PagedTable::new(twenty_rows());
        assert_eq!(table.page_rows().len(), 8);

        table.set_page(2);
        let page2: Vec<String> = table.page_rows().iter().map(|r| r.0.to_string()).collect();
        // Page 2 shows rows 9-16 of the full set.
        assert_eq!(
            page2,
            vec!["Indira", "Jay", "Kavya", "Lakshmi", "Mohan", "Nisha", "Om", "Priya"]
        );

        table.set_page(3);
        assert_eq!(table.page_rows().len(), 4);
    }

    #[test]
    fn visible_rows_equal_min_of_page_size_and_remainder() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_query("mumbai"); // 5 matches
        assert_eq!(table.total_pages(), 1);
        assert_eq!(table.page_rows().len(), 5);
    }

    #[test]
    fn no_matches_means_zero_pages_and_zero_rows() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_query("zzz");
        assert_eq!(table.total_pages(), 0);
        assert!(table.page_rows().is_empty());
    }

    #[test]
    fn page_rows_is_idempotent() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_query("chennai");
        table.set_page(1);

        let first: Vec<String> = table.page_rows().iter().map(|r| r.0.to_string()).collect();
        let second: Vec<String> = table.page_rows().iter().map(|r| r.0.to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn set_query_resets_to_page_1() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_page(3);
        assert_eq!(table.current_page(), 3);

        table.set_query("a");
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn out_of_range_page_renders_empty() {
        let mut table = PagedTable::new(twenty_rows());
        table.set_page(7);
        assert!(table.page_rows().is_empty());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut table = PagedTable::new(twenty_rows());
        table.prev_page();
        assert_eq!(table.current_page(), 1);

        table.last_page();
        assert_eq!(table.current_page(), 3);
        table.next_page();
        assert_eq!(table.current_page(), 3);

        table.first_page();
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn custom_page_size() {
        let table = PagedTable::new(twenty_rows()).with_rows_per_page(5);
        assert_eq!(table.total_pages(), 4);
        assert_eq!(table.page_rows().len(), 5);
    }
}
