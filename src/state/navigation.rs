//! Navigation state for the ParsePoint TUI.
//!
//! This module handles:
//! - The current table page (1-based)
//! - The cursor row within that page
//! - The selected summary item backing the detail modal
//! - Scroll position of the detail modal
//! - Which table has keyboard focus, and the statement-line cursor
//!
//! # Design
//!
//! The navigation state is decoupled from the data it navigates. Page and
//! selection bounds are passed in by the caller, which owns the store.

use super::data::PAGE_SIZE;

/// Table receiving cursor keys on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFocus {
    #[default]
    Summary,
    /// Raw statement lines (transactions schema only).
    Statement,
}

// ============================================================================
// Navigation State
// ============================================================================

/// Navigation state: current page, cursor row and detail selection.
///
/// # Example
///
/// ```ignore
/// use crate::state::NavigationState;
///
/// let mut nav = NavigationState::new();
/// assert!(nav.set_page(2, store.page_count()));
/// nav.select(nav.cursor_index(), store.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Current table page, 1-based.
    pub current_page: usize,
    /// Cursor row within the current page.
    pub cursor: usize,
    /// Index into the sorted summary of the item shown in the detail modal.
    pub selected: Option<usize>,
    /// Scroll offset of the detail modal's transaction list.
    pub detail_scroll: u16,
    pub focus: TableFocus,
    /// Cursor into the statement lines; the list scrolls, it is not paged.
    pub statement_cursor: usize,
    /// Statement line shown in the line detail modal.
    pub statement_selected: Option<usize>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            cursor: 0,
            selected: None,
            detail_scroll: 0,
            focus: TableFocus::Summary,
            statement_cursor: 0,
            statement_selected: None,
        }
    }
}

impl NavigationState {
    /// Creates a new `NavigationState` on page 1 with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets page, cursor and selection (at the start of every upload).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Moves to `page` if it lies in `1..=page_count`.
    ///
    /// # Arguments
    ///
    /// * `page` - The requested 1-based page
    /// * `page_count` - Number of pages in the store
    ///
    /// # Returns
    ///
    /// `true` if the page changed. Out-of-range requests leave the state
    /// untouched.
    pub fn set_page(&mut self, page: usize, page_count: usize) -> bool {
        if page == 0 || page > page_count {
            return false;
        }
        if page != self.current_page {
            self.current_page = page;
            self.cursor = 0;
        }
        true
    }

    pub fn next_page(&mut self, page_count: usize) -> bool {
        self.set_page(self.current_page.saturating_add(1), page_count)
    }

    pub fn prev_page(&mut self, page_count: usize) -> bool {
        self.set_page(self.current_page.saturating_sub(1), page_count)
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Moves the cursor up one row, stopping at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last row on the page.
    pub fn move_down(&mut self, rows_on_page: usize) {
        if self.cursor + 1 < rows_on_page {
            self.cursor += 1;
        }
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self, rows_on_page: usize) {
        self.cursor = rows_on_page.saturating_sub(1);
    }

    /// Index into the sorted summary of the row under the cursor.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        (self.current_page.saturating_sub(1)) * PAGE_SIZE + self.cursor
    }

    // ========================================================================
    // Detail Selection
    // ========================================================================

    /// Selects a summary item for the detail modal.
    ///
    /// # Returns
    ///
    /// `true` if `index` refers to an existing item and the modal opened.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.selected = Some(index);
        self.detail_scroll = 0;
        true
    }

    /// Closes the detail modal and clears the selection.
    pub fn close_detail(&mut self) {
        self.selected = None;
        self.detail_scroll = 0;
    }

    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    /// `true` when either detail modal is open.
    #[must_use]
    pub const fn is_any_detail_open(&self) -> bool {
        self.selected.is_some() || self.statement_selected.is_some()
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Scrolls the detail list down, clamped to `max_scroll`.
    pub fn scroll_detail_down(&mut self, max_scroll: u16) {
        if self.detail_scroll < max_scroll {
            self.detail_scroll += 1;
        }
    }
}

// ============================================================================
// Statement Lines
// ============================================================================

impl NavigationState {
    /// Flips focus between the two tables. Without statement lines the
    /// summary keeps focus.
    pub fn toggle_focus(&mut self, statement_len: usize) {
        self.focus = match self.focus {
            TableFocus::Summary if statement_len > 0 => TableFocus::Statement,
            _ => TableFocus::Summary,
        };
    }

    pub fn statement_up(&mut self) {
        self.statement_cursor = self.statement_cursor.saturating_sub(1);
    }

    pub fn statement_down(&mut self, len: usize) {
        if self.statement_cursor + 1 < len {
            self.statement_cursor += 1;
        }
    }

    pub fn statement_to_top(&mut self) {
        self.statement_cursor = 0;
    }

    pub fn statement_to_bottom(&mut self, len: usize) {
        self.statement_cursor = len.saturating_sub(1);
    }

    /// Opens the line detail modal for `index`.
    ///
    /// # Returns
    ///
    /// `true` if `index` refers to an existing line.
    pub fn select_statement(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.statement_selected = Some(index);
        true
    }

    pub fn close_statement_detail(&mut self) {
        self.statement_selected = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
