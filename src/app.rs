//! Application state and logic.

use crate::api::ApiClient;
use crate::clipboard;
use crate::detail::DetailState;
use crate::filters::SearchFilters;
use crate::results::ResultsState;
use crate::search_form::SearchFormState;
use crate::util::{artwork_detail_text, artwork_summary_text};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Search form.
    Search,
    /// Results list.
    Results,
    /// Artwork detail.
    Detail,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current screen.
    pub screen: Screen,
    /// Search form state.
    pub form: SearchFormState,
    /// Results screen state.
    pub results: ResultsState,
    /// Detail screen state, while the detail screen is open.
    pub detail: Option<DetailState>,
    /// Collection API client.
    pub client: ApiClient,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new(client: ApiClient, initial_query: Option<String>) -> Self {
        let form = match initial_query {
            Some(query) => SearchFormState::with_query(query),
            None => SearchFormState::new(),
        };

        Self {
            screen: Screen::Search,
            form,
            results: ResultsState::new(),
            detail: None,
            client,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Activate the focused form row (edit, toggle, pick, or submit).
    pub fn activate_form_row(&mut self) {
        if let Some(filters) = self.form.activate() {
            self.open_results(filters);
        } else if self.form.shake_active() {
            self.status = "Enter a search term".to_string();
        }
    }

    /// Submit the search form from anywhere on the form.
    pub fn submit_search(&mut self) {
        if let Some(filters) = self.form.submit() {
            self.open_results(filters);
        } else {
            self.status = "Enter a search term".to_string();
        }
    }

    fn open_results(&mut self, filters: SearchFilters) {
        tracing::info!(query = %filters.query, "search submitted");
        self.results.apply_filters(filters, &self.client);
        self.screen = Screen::Results;
        self.status = if self.results.loading {
            "Searching...".to_string()
        } else {
            result_count_status(self.results.items.len())
        };
    }

    /// Open the detail screen for the selected result.
    pub fn open_detail(&mut self) {
        let Some(artwork) = self.results.current() else {
            self.status = "No artwork selected".to_string();
            return;
        };

        self.status = format!("Loading {}...", artwork.title);
        self.detail = Some(DetailState::open(artwork.id, &self.client));
        self.screen = Screen::Detail;
    }

    /// Go back one screen.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Detail => {
                self.detail = None;
                self.screen = Screen::Results;
                self.status = result_count_status(self.results.items.len());
            },
            Screen::Results => {
                self.screen = Screen::Search;
                self.status = "Ready".to_string();
            },
            Screen::Search => {},
        }
    }

    /// Advance animations and poll in-flight fetches.
    pub fn tick(&mut self) {
        self.form.tick();

        if let Some(count) = self.results.poll() {
            if self.screen == Screen::Results {
                self.status = result_count_status(count);
            }
        }

        if let Some(detail) = self.detail.as_mut() {
            if detail.poll() && self.screen == Screen::Detail {
                self.status = match &detail.detail {
                    Some(record) => match &record.title {
                        Some(title) => format!("Loaded {}", title),
                        None => "Loaded artwork".to_string(),
                    },
                    None => "No Details found.".to_string(),
                };
            }
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the current artwork's info to the clipboard.
    pub fn copy_current(&mut self) {
        let text = match self.screen {
            Screen::Results => self.results.current().map(|artwork| {
                let thumbnail = artwork
                    .image_id
                    .as_deref()
                    .map(|image_id| self.client.thumbnail_url(image_id));
                artwork_summary_text(artwork, thumbnail.as_deref())
            }),
            Screen::Detail => self
                .detail
                .as_ref()
                .and_then(|state| state.detail.as_ref())
                .map(|record| {
                    let image = record
                        .image_id
                        .as_deref()
                        .map(|image_id| self.client.detail_image_url(image_id));
                    artwork_detail_text(record, image.as_deref())
                }),
            Screen::Search => None,
        };

        let Some(text) = text else {
            self.status = "Nothing to copy".to_string();
            return;
        };

        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.status = "Copied!".to_string(),
            Err(err) => self.status = format!("Copy failed: {}", err),
        }
    }
}

fn result_count_status(count: usize) -> String {
    if count == 0 {
        "No Results Found.".to_string()
    } else {
        format!("{} artworks", count)
    }
}
