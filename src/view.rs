use log::debug;
use serde::Deserialize;

use crate::model::{FilterKind, FilterOption, MealDetail, MealSummary};

/// Decides what happens when responses complete out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Every completed response is applied; the last one to complete wins.
    #[default]
    LastWriteWins,
    /// A response is dropped if a newer request already updated the same region.
    LatestOnly,
}

/// Monotonic id handed out when an action starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// Page regions that can be raced by concurrent actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Grid, heading and error banner move together
    Results,
    Detail,
}

/// The detail panel. Closing hides it but keeps the last content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanel {
    pub content: Option<MealDetail>,
    pub visible: bool,
    /// Set when the panel was just opened and should be scrolled to
    pub scroll_into_view: bool,
}

/// State change produced by a controller action
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    ShowResults {
        heading: String,
        meals: Vec<MealSummary>,
    },
    ShowError(String),
    OpenDetail(MealDetail),
    CloseDetail,
    AppendFilterOptions {
        kind: FilterKind,
        options: Vec<FilterOption>,
    },
}

impl Transition {
    fn region(&self) -> Option<Region> {
        match self {
            Transition::ShowResults { .. } | Transition::ShowError(_) => Some(Region::Results),
            Transition::OpenDetail(_) | Transition::CloseDetail => Some(Region::Detail),
            Transition::AppendFilterOptions { .. } => None,
        }
    }
}

/// Everything the page shows
#[derive(Debug, Clone)]
pub struct ViewState {
    pub heading: String,
    pub grid: Vec<MealSummary>,
    pub error: Option<String>,
    pub detail: DetailPanel,
    pub category_options: Vec<FilterOption>,
    pub area_options: Vec<FilterOption>,
    policy: StalePolicy,
    next_ticket: u64,
    results_ticket: Option<RequestTicket>,
    detail_ticket: Option<RequestTicket>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

impl ViewState {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            heading: String::new(),
            grid: Vec::new(),
            error: None,
            detail: DetailPanel::default(),
            category_options: vec![FilterOption::placeholder(
                FilterKind::Category.placeholder_label(),
            )],
            area_options: vec![FilterOption::placeholder(
                FilterKind::Area.placeholder_label(),
            )],
            policy,
            next_ticket: 0,
            results_ticket: None,
            detail_ticket: None,
        }
    }

    /// Hands out the next request id. Call when the action starts, before awaiting.
    pub fn issue_ticket(&mut self) -> RequestTicket {
        self.next_ticket += 1;
        RequestTicket(self.next_ticket)
    }

    pub fn options(&self, kind: FilterKind) -> &[FilterOption] {
        match kind {
            FilterKind::Category => &self.category_options,
            FilterKind::Area => &self.area_options,
        }
    }

    /// Applies `transition` on behalf of the request holding `ticket`.
    ///
    /// Returns `false` when the transition was dropped as stale.
    pub fn apply(&mut self, ticket: RequestTicket, transition: Transition) -> bool {
        if let Some(region) = transition.region() {
            let last = match region {
                Region::Results => &mut self.results_ticket,
                Region::Detail => &mut self.detail_ticket,
            };
            if self.policy == StalePolicy::LatestOnly && last.is_some_and(|l| ticket < l) {
                debug!("Dropping stale response for request {:?}", ticket);
                return false;
            }
            *last = Some(last.map_or(ticket, |l| l.max(ticket)));
        }

        match transition {
            Transition::ShowResults { heading, meals } => self.show_results(heading, meals),
            Transition::ShowError(message) => self.show_error(message),
            Transition::OpenDetail(detail) => self.open_detail(detail),
            Transition::CloseDetail => self.close_detail(),
            Transition::AppendFilterOptions { kind, options } => {
                self.append_filter_options(kind, options)
            }
        }
        true
    }

    /// Replaces the grid and heading. Hides any error.
    pub fn show_results(&mut self, heading: impl Into<String>, meals: Vec<MealSummary>) {
        self.error = None;
        self.heading = heading.into();
        self.grid = meals;
    }

    /// Shows `message` in the error banner and clears the grid and heading.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.grid.clear();
        self.heading.clear();
    }

    pub fn open_detail(&mut self, detail: MealDetail) {
        self.detail.content = Some(detail);
        self.detail.visible = true;
        self.detail.scroll_into_view = true;
    }

    pub fn close_detail(&mut self) {
        self.detail.visible = false;
        self.detail.scroll_into_view = false;
    }

    /// Appends after whatever is already there, placeholder included.
    pub fn append_filter_options(&mut self, kind: FilterKind, options: Vec<FilterOption>) {
        match kind {
            FilterKind::Category => self.category_options.extend(options),
            FilterKind::Area => self.area_options.extend(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: format!("Meal {}", id),
            thumbnail_url: String::new(),
            category: None,
        }
    }

    fn detail(id: &str) -> MealDetail {
        MealDetail {
            id: id.to_string(),
            name: format!("Meal {}", id),
            thumbnail_url: String::new(),
            category: None,
            area: None,
            instructions: String::new(),
            ingredients: Vec::new(),
            youtube_url: None,
        }
    }

    #[test]
    fn test_new_state_has_placeholders_only() {
        let state = ViewState::default();
        assert_eq!(state.category_options.len(), 1);
        assert!(state.category_options[0].is_placeholder());
        assert_eq!(state.area_options.len(), 1);
        assert!(state.area_options[0].is_placeholder());
        assert!(state.grid.is_empty());
        assert!(state.error.is_none());
        assert!(!state.detail.visible);
    }

    #[test]
    fn test_error_and_results_are_exclusive() {
        let mut state = ViewState::default();
        state.show_results("Results for \"a\"", vec![summary("1"), summary("2")]);
        state.show_error("boom");

        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.grid.is_empty());
        assert!(state.heading.is_empty());

        state.show_results("Random Recipe", vec![summary("3")]);
        assert!(state.error.is_none());
        assert_eq!(state.grid.len(), 1);
    }

    #[test]
    fn test_close_keeps_stale_content() {
        let mut state = ViewState::default();
        state.open_detail(detail("7"));
        assert!(state.detail.visible);
        assert!(state.detail.scroll_into_view);

        state.close_detail();
        assert!(!state.detail.visible);
        assert_eq!(state.detail.content.as_ref().map(|d| d.id.as_str()), Some("7"));
    }

    #[test]
    fn test_filter_options_append_after_placeholder() {
        let mut state = ViewState::default();
        state.append_filter_options(
            FilterKind::Area,
            vec![FilterOption::new("Italian"), FilterOption::new("Thai")],
        );

        let labels: Vec<_> = state.options(FilterKind::Area).iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Areas", "Italian", "Thai"]);
        assert_eq!(state.options(FilterKind::Category).len(), 1);
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let mut state = ViewState::default();
        let a = state.issue_ticket();
        let b = state.issue_ticket();
        assert!(a < b);
    }

    #[test]
    fn test_last_write_wins_applies_late_response() {
        let mut state = ViewState::new(StalePolicy::LastWriteWins);
        let first = state.issue_ticket();
        let second = state.issue_ticket();

        assert!(state.apply(
            second,
            Transition::ShowResults {
                heading: "Cuisine: Thai".to_string(),
                meals: vec![summary("2")],
            }
        ));
        assert!(state.apply(
            first,
            Transition::ShowResults {
                heading: "Category: Beef".to_string(),
                meals: vec![summary("1")],
            }
        ));

        assert_eq!(state.heading, "Category: Beef");
        assert_eq!(state.grid, vec![summary("1")]);
    }

    #[test]
    fn test_latest_only_drops_stale_response() {
        let mut state = ViewState::new(StalePolicy::LatestOnly);
        let first = state.issue_ticket();
        let second = state.issue_ticket();

        assert!(state.apply(
            second,
            Transition::ShowResults {
                heading: "Cuisine: Thai".to_string(),
                meals: vec![summary("2")],
            }
        ));
        assert!(!state.apply(first, Transition::ShowError("late".to_string())));

        assert_eq!(state.heading, "Cuisine: Thai");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_latest_only_regions_are_independent() {
        let mut state = ViewState::new(StalePolicy::LatestOnly);
        let lookup = state.issue_ticket();
        let search = state.issue_ticket();

        state.apply(
            search,
            Transition::ShowResults {
                heading: "Results for \"x\"".to_string(),
                meals: vec![],
            },
        );
        assert!(state.apply(lookup, Transition::OpenDetail(detail("9"))));
        assert!(state.detail.visible);
    }

    #[test]
    fn test_latest_only_close_supersedes_pending_open() {
        let mut state = ViewState::new(StalePolicy::LatestOnly);
        let lookup = state.issue_ticket();
        let close = state.issue_ticket();

        state.apply(close, Transition::CloseDetail);
        assert!(!state.apply(lookup, Transition::OpenDetail(detail("9"))));
        assert!(!state.detail.visible);
    }
}
