//! Fetch/filter/sort/paginate state for one list screen.
//!
//! `ListState` is a plain value with discrete transition functions;
//! components own one instance inside a signal and call the mutators
//! from thin event handlers. Keeping it free of reactive and DOM types
//! makes the whole state machine host-testable.
//!
//! Phases: `Idle -> Loading -> Ready | Failed`. Any criteria / sort /
//! page change while `Ready` or `Failed` re-enters `Loading` (in
//! server mode via a refetch the screen issues after the mutator).
//! Overlapping fetches resolve last-request-wins: every `begin_fetch`
//! takes a fresh token and responses for stale tokens are discarded.

use contracts::shared::list::{ListPage, ListQuery};

use crate::shared::api_client::FetchError;
use crate::shared::filter::{Criterion, FieldAccess, FilterCriteria};
use crate::shared::pagination::PageState;
use crate::shared::sort::{sort_items, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Where pagination happens for this screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// The backend filters and paginates; every state change refetches.
    ServerPaged,
    /// The full set is fetched once and filtered/sorted/sliced here.
    ClientPaged,
}

/// Identifies one issued fetch. Compared on arrival; stale responses
/// are ignored (cooperative cancellation, no true abort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub mode: FetchMode,
    pub phase: ListPhase,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub page: PageState,
    /// The visible page of records.
    pub items: Vec<T>,
    /// Banner text; previous items stay on screen while this is set.
    pub error: Option<String>,
    /// Full fetched set (client mode only), kept in last-sorted order
    /// so re-sorts are stable against the previous render.
    source: Vec<T>,
    issued: u64,
    applied: u64,
}

impl<T: FieldAccess + Clone> ListState<T> {
    pub fn new(mode: FetchMode, default_sort_field: &str) -> Self {
        Self {
            mode,
            phase: ListPhase::Idle,
            criteria: FilterCriteria::new(),
            sort: SortSpec::asc(default_sort_field),
            page: PageState::default(),
            items: Vec::new(),
            error: None,
            source: Vec::new(),
            issued: 0,
            applied: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Start a fetch and get the token the response must present.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.issued += 1;
        self.phase = ListPhase::Loading;
        RequestToken(self.issued)
    }

    fn accept(&mut self, token: RequestToken) -> bool {
        // Only the latest issued request may update visible state.
        if token.0 != self.issued || token.0 <= self.applied {
            return false;
        }
        self.applied = token.0;
        true
    }

    /// Apply a server-paginated response. Returns false when the
    /// response was stale and discarded.
    pub fn apply_page(
        &mut self,
        token: RequestToken,
        result: Result<ListPage<T>, FetchError>,
    ) -> bool {
        if !self.accept(token) {
            return false;
        }
        match result {
            Ok(page) => {
                self.page.set_total(page.total_count);
                self.items = page.items;
                self.error = None;
                self.phase = ListPhase::Ready;
            }
            Err(e) => {
                // Previous items stay visible, only the banner changes.
                self.error = Some(e.message());
                self.phase = ListPhase::Failed;
            }
        }
        true
    }

    /// Apply a full-set response (client mode) and rebuild the view.
    pub fn apply_source(
        &mut self,
        token: RequestToken,
        result: Result<Vec<T>, FetchError>,
    ) -> bool {
        if !self.accept(token) {
            return false;
        }
        match result {
            Ok(source) => {
                self.source = source;
                self.error = None;
                self.phase = ListPhase::Ready;
                self.refresh_view();
            }
            Err(e) => {
                self.error = Some(e.message());
                self.phase = ListPhase::Failed;
            }
        }
        true
    }

    /// Filter, sort and slice the fetched set into `items`.
    fn refresh_view(&mut self) {
        sort_items(&mut self.source, &self.sort);
        let filtered: Vec<T> = self
            .source
            .iter()
            .filter(|item| self.criteria.matches(*item))
            .cloned()
            .collect();
        self.page.set_total(filtered.len());
        self.items = self.page.slice(&filtered).to_vec();
    }

    /// Set or clear one filter criterion. Always returns to page 0.
    pub fn set_criterion(&mut self, field: &str, criterion: Criterion) {
        self.criteria.set(field, criterion);
        self.page.index = 0;
        if self.mode == FetchMode::ClientPaged {
            self.refresh_view();
        }
    }

    pub fn clear_criteria(&mut self) {
        self.criteria.clear_all();
        self.page.index = 0;
        if self.mode == FetchMode::ClientPaged {
            self.refresh_view();
        }
    }

    /// Header click: toggle on the active field, ascending on a new
    /// one. Always returns to page 0.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.page.index = 0;
        if self.mode == FetchMode::ClientPaged {
            self.refresh_view();
        }
    }

    pub fn go_to_page(&mut self, index: usize) {
        self.page.go_to(index);
        if self.mode == FetchMode::ClientPaged {
            self.refresh_view();
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page.set_size(size);
        if self.mode == FetchMode::ClientPaged {
            self.refresh_view();
        }
    }

    /// Query for the current page and criteria (server mode).
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.page.index, self.page.size)
            .with_filters(self.criteria.to_query_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::FieldValue;
    use contracts::shared::list::ListPage;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    impl FieldAccess for Item {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "name" => Some(FieldValue::Text(self.name.clone())),
                _ => None,
            }
        }
    }

    fn item(id: usize) -> Item {
        Item {
            id: format!("id-{:02}", id),
            name: format!("Item {:02}", id),
        }
    }

    fn items(range: std::ops::Range<usize>) -> Vec<Item> {
        range.map(item).collect()
    }

    // Simulates the backend side of a server-paginated fetch.
    fn server_page(all: &[Item], query: &ListQuery) -> ListPage<Item> {
        let start = (query.page * query.limit).min(all.len());
        let end = (start + query.limit).min(all.len());
        ListPage {
            items: all[start..end].to_vec(),
            total_count: all.len(),
        }
    }

    #[test]
    fn fetch_moves_idle_to_loading_to_ready() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ServerPaged, "name");
        assert_eq!(state.phase, ListPhase::Idle);
        let token = state.begin_fetch();
        assert_eq!(state.phase, ListPhase::Loading);
        assert!(state.apply_page(
            token,
            Ok(ListPage {
                items: items(0..5),
                total_count: 5
            })
        ));
        assert_eq!(state.phase, ListPhase::Ready);
        assert_eq!(state.items.len(), 5);
    }

    #[test]
    fn twenty_three_items_paginate_into_three_pages() {
        let all = items(0..23);
        let mut state: ListState<Item> = ListState::new(FetchMode::ServerPaged, "name");
        state.set_page_size(10);

        let token = state.begin_fetch();
        state.apply_page(token, Ok(server_page(&all, &state.query())));
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.page.total_count, 23);
        assert_eq!(state.page.page_count(), 3);

        state.go_to_page(2);
        let token = state.begin_fetch();
        state.apply_page(token, Ok(server_page(&all, &state.query())));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.page.total_count, 23);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ServerPaged, "name");
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // Second (latest) request resolves first.
        assert!(state.apply_page(
            second,
            Ok(ListPage {
                items: items(10..15),
                total_count: 5
            })
        ));
        // The slower first response arrives afterwards and is ignored.
        assert!(!state.apply_page(
            first,
            Ok(ListPage {
                items: items(0..5),
                total_count: 5
            })
        ));
        assert_eq!(state.items, items(10..15));
        assert_eq!(state.phase, ListPhase::Ready);
    }

    #[test]
    fn failure_keeps_previous_items_and_sets_banner() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ServerPaged, "name");
        let token = state.begin_fetch();
        state.apply_page(
            token,
            Ok(ListPage {
                items: items(0..5),
                total_count: 5,
            }),
        );

        let token = state.begin_fetch();
        state.apply_page(
            token,
            Err(FetchError::Server {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert_eq!(state.phase, ListPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.items, items(0..5));

        // A later successful fetch clears the banner.
        let token = state.begin_fetch();
        state.apply_page(
            token,
            Ok(ListPage {
                items: items(0..5),
                total_count: 5,
            }),
        );
        assert!(state.error.is_none());
        assert_eq!(state.phase, ListPhase::Ready);
    }

    #[test]
    fn client_mode_filters_sorts_and_slices() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ClientPaged, "name");
        state.set_page_size(10);
        let token = state.begin_fetch();
        state.apply_source(token, Ok(items(0..23)));
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.page.page_count(), 3);

        state.set_criterion("name", Criterion::Contains("item 1".to_string()));
        // Items 10..20 match "Item 1x".
        assert_eq!(state.page.total_count, 10);
        assert_eq!(state.page.index, 0);

        state.toggle_sort("name");
        assert_eq!(state.items.first(), Some(&item(19)));
    }

    #[test]
    fn filter_change_resets_page_index() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ClientPaged, "name");
        state.set_page_size(5);
        let token = state.begin_fetch();
        state.apply_source(token, Ok(items(0..23)));
        state.go_to_page(3);
        assert_eq!(state.page.index, 3);

        state.set_criterion("name", Criterion::Contains("item".to_string()));
        assert_eq!(state.page.index, 0);
    }

    #[test]
    fn query_carries_page_and_criteria() {
        let mut state: ListState<Item> = ListState::new(FetchMode::ServerPaged, "name");
        state.set_page_size(50);
        state.set_criterion("name", Criterion::Equals("agent".to_string()));
        state.go_to_page(0);
        let pairs = state.query().query_pairs();
        assert!(pairs.contains(&("limit".to_string(), "50".to_string())));
        assert!(pairs.contains(&("name".to_string(), "agent".to_string())));
    }
}
