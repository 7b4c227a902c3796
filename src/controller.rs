use log::{debug, error, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::MealApi;
use crate::error::{BrowserError, Result};
use crate::model::{ApiMeal, FilterKind, FilterOption, MealDetail, MealSummary};
use crate::view::{RequestTicket, StalePolicy, Transition, ViewState};

/// Key that submits the search box
pub const SUBMIT_KEY: &str = "Enter";

/// The user action a failure belongs to; picks the banner message
#[derive(Debug, Clone, Copy)]
enum Action<'a> {
    Search(&'a str),
    Random,
    Filter(FilterKind, &'a str),
    Detail,
}

/// Message shown in the error banner for `err` raised while running `action`
fn error_message(action: Action<'_>, err: &BrowserError) -> String {
    match (action, err) {
        (_, BrowserError::EmptySearchTerm) => err.to_string(),
        (Action::Search(term), BrowserError::NotFound(_)) => {
            format!("No recipes found for \"{}\"", term)
        }
        (Action::Filter(kind, value), BrowserError::NotFound(_)) => format!(
            "No recipes found for {} \"{}\"",
            kind.heading_label().to_lowercase(),
            value
        ),
        (Action::Random, BrowserError::NotFound(_)) => "Failed to load random recipe".to_string(),
        (action, err) if err.is_transport() => match action {
            Action::Search(_) => "Something went wrong. Try again.".to_string(),
            Action::Random => "Failed to load random recipe".to_string(),
            Action::Filter(kind, value) => {
                format!("Failed to load recipes for {}: {}", kind.heading_label(), value)
            }
            Action::Detail => "Failed to load recipe details".to_string(),
        },
        _ => err.to_string(),
    }
}

fn summaries(meals: Vec<ApiMeal>) -> Vec<MealSummary> {
    meals.into_iter().map(MealSummary::from).collect()
}

/// Drives the page: every user action issues one API call and turns the
/// response into a [`Transition`] on the shared [`ViewState`].
///
/// Clones share the API client and the state, so actions can run
/// concurrently from separate tasks.
pub struct RecipeBrowser<A> {
    api: Arc<A>,
    state: Arc<Mutex<ViewState>>,
}

impl<A> Clone for RecipeBrowser<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: MealApi> RecipeBrowser<A> {
    pub fn new(api: A, policy: StalePolicy) -> Self {
        Self::with_state(Arc::new(api), Arc::new(Mutex::new(ViewState::new(policy))))
    }

    /// Build around an existing client and page state
    pub fn with_state(api: Arc<A>, state: Arc<Mutex<ViewState>>) -> Self {
        Self { api, state }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current page state
    pub fn snapshot(&self) -> ViewState {
        self.state().clone()
    }

    fn ticket(&self) -> RequestTicket {
        self.state().issue_ticket()
    }

    fn apply(&self, ticket: RequestTicket, transition: Transition) -> bool {
        self.state().apply(ticket, transition)
    }

    fn present_error(&self, ticket: RequestTicket, action: Action<'_>, err: &BrowserError) {
        debug!("{:?} failed: {}", action, err);
        self.apply(ticket, Transition::ShowError(error_message(action, err)));
    }

    /// Applies a list response: results on success, the banner otherwise.
    fn show_list(
        &self,
        ticket: RequestTicket,
        action: Action<'_>,
        heading: String,
        response: Result<Option<Vec<ApiMeal>>>,
        not_found: impl FnOnce() -> BrowserError,
    ) {
        match response {
            Ok(Some(meals)) => {
                self.apply(
                    ticket,
                    Transition::ShowResults {
                        heading,
                        meals: summaries(meals),
                    },
                );
            }
            Ok(None) => self.present_error(ticket, action, &not_found()),
            Err(err) => self.present_error(ticket, action, &err),
        }
    }

    /// Searches meals by name using the raw search box value
    pub async fn search(&self, input: &str) {
        let term = input.trim();
        let ticket = self.ticket();
        if term.is_empty() {
            self.present_error(ticket, Action::Search(term), &BrowserError::EmptySearchTerm);
            return;
        }

        let response = self.api.search(term).await;
        self.show_list(
            ticket,
            Action::Search(term),
            format!("Results for \"{}\"", term),
            response,
            || BrowserError::NotFound(term.to_string()),
        );
    }

    /// Key press in the search box; only the submit key searches
    pub async fn handle_search_key(&self, key: &str, input: &str) {
        if key == SUBMIT_KEY {
            self.search(input).await;
        }
    }

    pub async fn random(&self) {
        let ticket = self.ticket();
        let response = self.api.random().await;
        self.show_list(
            ticket,
            Action::Random,
            "Random Recipe".to_string(),
            response,
            || BrowserError::NotFound("random".to_string()),
        );
    }

    /// Drop-down change. The placeholder option is ignored.
    pub async fn filter(&self, kind: FilterKind, value: &str) {
        if value.is_empty() {
            return;
        }

        let ticket = self.ticket();
        let response = match kind {
            FilterKind::Category => self.api.filter_by_category(value).await,
            FilterKind::Area => self.api.filter_by_area(value).await,
        };
        self.show_list(
            ticket,
            Action::Filter(kind, value),
            format!("{}: {}", kind.heading_label(), value),
            response,
            || BrowserError::NotFound(value.to_string()),
        );
    }

    pub async fn filter_by_category(&self, value: &str) {
        self.filter(FilterKind::Category, value).await
    }

    pub async fn filter_by_area(&self, value: &str) {
        self.filter(FilterKind::Area, value).await
    }

    /// Fetches the full record for `id` and opens the detail panel.
    ///
    /// An unknown id leaves the page untouched and returns `false`.
    pub async fn open_detail(&self, id: &str) -> bool {
        let ticket = self.ticket();
        match self.api.lookup(id).await {
            Ok(meals) => match meals.and_then(|m| m.into_iter().next()) {
                Some(meal) => {
                    self.apply(ticket, Transition::OpenDetail(MealDetail::from(meal)));
                    true
                }
                None => {
                    warn!("No recipe found for id {}", id);
                    false
                }
            },
            Err(err) => {
                self.present_error(ticket, Action::Detail, &err);
                false
            }
        }
    }

    /// Activates the card at `position` (0-based) in the grid.
    ///
    /// Returns `false` when there is no such card or its record is gone.
    pub async fn open_card(&self, position: usize) -> bool {
        let id = self.state().grid.get(position).map(|meal| meal.id.clone());
        match id {
            Some(id) => self.open_detail(&id).await,
            None => false,
        }
    }

    /// Hides the detail panel; its content stays until the next open
    pub fn close_detail(&self) {
        let ticket = self.ticket();
        self.apply(ticket, Transition::CloseDetail);
    }

    /// Fills both drop-downs at startup. Failures are logged, never shown.
    pub async fn load_filters(&self) {
        let categories = self.api.list_categories().await.map(|entries| {
            entries.map(|e| e.into_iter().map(FilterOption::from).collect::<Vec<_>>())
        });
        self.append_options(FilterKind::Category, categories);

        let areas = self.api.list_areas().await.map(|entries| {
            entries.map(|e| e.into_iter().map(FilterOption::from).collect::<Vec<_>>())
        });
        self.append_options(FilterKind::Area, areas);
    }

    fn append_options(&self, kind: FilterKind, response: Result<Option<Vec<FilterOption>>>) {
        match response {
            Ok(Some(options)) => {
                let ticket = self.ticket();
                self.apply(ticket, Transition::AppendFilterOptions { kind, options });
            }
            Ok(None) => warn!("No {} options returned", kind.heading_label()),
            Err(err) => error!("Filters failed to load: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_messages() {
        assert_eq!(
            error_message(Action::Search(""), &BrowserError::EmptySearchTerm),
            "Please enter a search term"
        );
        assert_eq!(
            error_message(
                Action::Search("xyz"),
                &BrowserError::NotFound("xyz".to_string())
            ),
            "No recipes found for \"xyz\""
        );
        assert_eq!(
            error_message(Action::Search("xyz"), &BrowserError::StatusError(500)),
            "Something went wrong. Try again."
        );
    }

    #[test]
    fn test_other_action_messages() {
        assert_eq!(
            error_message(Action::Random, &BrowserError::StatusError(500)),
            "Failed to load random recipe"
        );
        assert_eq!(
            error_message(
                Action::Filter(FilterKind::Area, "Atlantis"),
                &BrowserError::NotFound("Atlantis".to_string())
            ),
            "No recipes found for cuisine \"Atlantis\""
        );
        assert_eq!(
            error_message(
                Action::Filter(FilterKind::Category, "Beef"),
                &BrowserError::StatusError(502)
            ),
            "Failed to load recipes for Category: Beef"
        );
        assert_eq!(
            error_message(Action::Detail, &BrowserError::StatusError(404)),
            "Failed to load recipe details"
        );
        assert_eq!(
            error_message(Action::Random, &BrowserError::NotFound("random".to_string())),
            "Failed to load random recipe"
        );
    }

    #[test]
    fn test_not_found_uses_the_typed_term() {
        // The message quotes the action's term, not whatever the error carries
        assert_eq!(
            error_message(
                Action::Search("pho"),
                &BrowserError::NotFound("ignored".to_string())
            ),
            "No recipes found for \"pho\""
        );
    }

    #[test]
    fn test_only_transport_errors_get_generic_messages() {
        let io = || BrowserError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));

        assert_eq!(
            error_message(Action::Search("soup"), &io()),
            "I/O error: disk full"
        );
        assert_eq!(
            error_message(Action::Filter(FilterKind::Area, "Thai"), &io()),
            "I/O error: disk full"
        );
        assert_eq!(
            error_message(Action::Detail, &io()),
            "I/O error: disk full"
        );

        let decode = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert_eq!(
            error_message(Action::Search("soup"), &BrowserError::from(decode)),
            "Something went wrong. Try again."
        );
    }
}
