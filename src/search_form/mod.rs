//! Search form feature - query input and optional filter groups.
//!
//! This module contains state management and business logic for the
//! search form: a free-text query, three toggleable filter groups
//! (artist, classification, year range), and submit validation. The
//! form's only output is a [`SearchFilters`] value built at submit time.

pub mod ui;

use crate::filters::{Classification, SearchFilters};

/// Number of ticks the invalid-submit shake lasts.
const SHAKE_TICKS: u8 = 6;

/// Rows of the search form, top to bottom. Input rows of a toggled-off
/// group are not part of the visible row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Free-text query input.
    Query,
    /// Artist group toggle.
    ArtistToggle,
    /// Artist text input.
    ArtistInput,
    /// Classification group toggle.
    ClassificationToggle,
    /// Classification picker row.
    ClassificationPicker,
    /// Year range group toggle.
    DateToggle,
    /// Year-from input.
    DateFromInput,
    /// Year-to input.
    DateToInput,
    /// Submit row.
    Submit,
}

impl FormRow {
    /// Whether this row holds an editable text buffer.
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FormRow::Query | FormRow::ArtistInput | FormRow::DateFromInput | FormRow::DateToInput
        )
    }

    fn is_year_input(self) -> bool {
        matches!(self, FormRow::DateFromInput | FormRow::DateToInput)
    }
}

/// Classification picker overlay state.
#[derive(Debug)]
pub struct PickerState {
    /// Cursor position within [`Classification::ALL`].
    pub cursor: usize,
}

impl PickerState {
    fn new(current: Option<Classification>) -> Self {
        let cursor = current
            .and_then(|chosen| Classification::ALL.iter().position(|c| *c == chosen))
            .unwrap_or(0);
        Self { cursor }
    }

    /// Move the picker cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the picker cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < Classification::ALL.len() {
            self.cursor += 1;
        }
    }

    /// The classification under the cursor.
    pub fn selected(&self) -> Classification {
        Classification::ALL[self.cursor]
    }
}

/// Search form state.
#[derive(Debug)]
pub struct SearchFormState {
    /// Free-text query buffer.
    pub query: String,
    /// Artist filter buffer.
    pub artist: String,
    /// Chosen classification, if any.
    pub classification: Option<Classification>,
    /// Year-from buffer.
    pub date_from: String,
    /// Year-to buffer.
    pub date_to: String,
    /// Artist group visibility.
    pub show_artist: bool,
    /// Classification group visibility.
    pub show_classification: bool,
    /// Year range group visibility.
    pub show_date_range: bool,
    /// Whether the focused text row is in editing mode.
    pub editing: bool,
    /// Classification picker overlay, when open.
    pub picker: Option<PickerState>,
    cursor: usize,
    shake_ticks: u8,
}

impl SearchFormState {
    /// Create a fresh form.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            artist: String::new(),
            classification: None,
            date_from: String::new(),
            date_to: String::new(),
            show_artist: false,
            show_classification: false,
            show_date_range: false,
            editing: false,
            picker: None,
            cursor: 0,
            shake_ticks: 0,
        }
    }

    /// Create a form with the query pre-filled.
    pub fn with_query(query: impl Into<String>) -> Self {
        let mut form = Self::new();
        form.query = query.into();
        form
    }

    /// The currently visible rows, top to bottom.
    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows = vec![FormRow::Query, FormRow::ArtistToggle];
        if self.show_artist {
            rows.push(FormRow::ArtistInput);
        }
        rows.push(FormRow::ClassificationToggle);
        if self.show_classification {
            rows.push(FormRow::ClassificationPicker);
        }
        rows.push(FormRow::DateToggle);
        if self.show_date_range {
            rows.push(FormRow::DateFromInput);
            rows.push(FormRow::DateToInput);
        }
        rows.push(FormRow::Submit);
        rows
    }

    /// The row under the cursor.
    pub fn current_row(&self) -> FormRow {
        let rows = self.rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    /// Cursor position within the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.rows().len() - 1)
    }

    /// Move the cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor().saturating_sub(1);
    }

    /// Move the cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor() + 1 < self.rows().len() {
            self.cursor = self.cursor() + 1;
        }
    }

    /// Toggle the filter group under the cursor, if any.
    pub fn toggle_current(&mut self) {
        match self.current_row() {
            FormRow::ArtistToggle => self.show_artist = !self.show_artist,
            FormRow::ClassificationToggle => {
                self.show_classification = !self.show_classification;
            },
            FormRow::DateToggle => self.show_date_range = !self.show_date_range,
            _ => {},
        }
    }

    /// Activate the row under the cursor.
    ///
    /// Text rows enter editing mode, toggle rows flip, the picker row
    /// opens the classification picker, and the submit row validates
    /// and builds the filter set. Returns `Some` only on a successful
    /// submit.
    pub fn activate(&mut self) -> Option<SearchFilters> {
        match self.current_row() {
            row if row.is_text_input() => {
                self.editing = true;
                None
            },
            FormRow::ArtistToggle | FormRow::ClassificationToggle | FormRow::DateToggle => {
                self.toggle_current();
                None
            },
            FormRow::ClassificationPicker => {
                self.picker = Some(PickerState::new(self.classification));
                None
            },
            FormRow::Submit => self.submit(),
            _ => None,
        }
    }

    /// Append a character to the focused text buffer.
    pub fn input(&mut self, ch: char) {
        if !self.editing {
            return;
        }

        let row = self.current_row();
        if row.is_year_input() && !(ch.is_ascii_digit() || (ch == '-' && self.buffer(row).is_empty()))
        {
            return;
        }

        if let Some(buffer) = self.buffer_mut(row) {
            buffer.push(ch);
        }
    }

    /// Remove the last character from the focused text buffer.
    pub fn backspace(&mut self) {
        if self.editing {
            let row = self.current_row();
            if let Some(buffer) = self.buffer_mut(row) {
                buffer.pop();
            }
        }
    }

    /// Leave editing mode.
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Confirm the picker selection.
    pub fn picker_choose(&mut self) {
        if let Some(picker) = self.picker.take() {
            self.classification = Some(picker.selected());
        }
    }

    /// Close the picker without changing the selection.
    pub fn picker_cancel(&mut self) {
        self.picker = None;
    }

    /// Validate and build the filter set.
    ///
    /// An empty (or all-whitespace) query triggers the shake signal and
    /// returns `None`. Otherwise each optional filter is included only
    /// when its group is visible; a hidden group's value is absent, not
    /// empty.
    pub fn submit(&mut self) -> Option<SearchFilters> {
        let query = self.query.trim();
        if query.is_empty() {
            self.trigger_shake();
            return None;
        }

        Some(SearchFilters {
            query: query.to_string(),
            artist: self.show_artist.then(|| self.artist.clone()),
            classification: self.classification.filter(|_| self.show_classification),
            date_from: self.show_date_range.then(|| parse_year(&self.date_from)).flatten(),
            date_to: self.show_date_range.then(|| parse_year(&self.date_to)).flatten(),
        })
    }

    /// Start the invalid-submit shake.
    pub fn trigger_shake(&mut self) {
        self.shake_ticks = SHAKE_TICKS;
    }

    /// Advance the shake animation by one tick.
    pub fn tick(&mut self) {
        self.shake_ticks = self.shake_ticks.saturating_sub(1);
    }

    /// Whether the shake signal is active.
    pub fn shake_active(&self) -> bool {
        self.shake_ticks > 0
    }

    /// Horizontal offset of the query input for the current shake tick.
    pub fn shake_offset(&self) -> u16 {
        if self.shake_ticks % 2 == 1 {
            2
        } else {
            0
        }
    }

    fn buffer(&self, row: FormRow) -> &str {
        match row {
            FormRow::Query => &self.query,
            FormRow::ArtistInput => &self.artist,
            FormRow::DateFromInput => &self.date_from,
            FormRow::DateToInput => &self.date_to,
            _ => "",
        }
    }

    fn buffer_mut(&mut self, row: FormRow) -> Option<&mut String> {
        match row {
            FormRow::Query => Some(&mut self.query),
            FormRow::ArtistInput => Some(&mut self.artist),
            FormRow::DateFromInput => Some(&mut self.date_from),
            FormRow::DateToInput => Some(&mut self.date_to),
            _ => None,
        }
    }
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}
