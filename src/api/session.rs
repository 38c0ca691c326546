//! Pagination Session
//!
//! Cursor state for walking the paginated location listing.

use crate::models::LocationPage;

/// Which way to page through the location listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Per-caller pagination cursor.
///
/// Updated only after a listing page has been fetched successfully, whether it
/// came from the network or from the cache. The two directions are tracked
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<String>,
    next: Option<String>,
    previous: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the URL to fetch for `direction`, or `root` if no cursor is known.
    pub fn resolve(&self, direction: Direction, root: &str) -> String {
        let cursor = match direction {
            Direction::Forward => &self.next,
            Direction::Backward => &self.previous,
        };

        cursor.clone().unwrap_or_else(|| root.to_string())
    }

    /// Records that `url` was fetched and produced `page`.
    pub fn advance(&mut self, url: String, page: &LocationPage) {
        self.current = Some(url);
        self.next = non_empty(page.next.as_deref());
        self.previous = non_empty(page.previous.as_deref());
    }

    /// URL of the last page fetched.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}

fn non_empty(url: Option<&str>) -> Option<String> {
    url.filter(|u| !u.is_empty()).map(str::to_string)
}
