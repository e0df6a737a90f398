use tracing::{debug, error};

use api::{
    image::ImageEntry,
    search::{SearchImagesReq, SearchPage},
};

use crate::config::GalleryConfig;

// the only message the user ever sees; the underlying error goes to the log
pub const FETCH_ERROR: &str = "Failed to fetch NASA images. Try again later.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Loading,
    LoadingMore,
    Error,
}

// a claim on the gallery for one fetch
//
// only the ticket carrying the latest generation may change the state, which is what
// keeps a slow response for an old query from overwriting a newer one
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    pub append: bool,
}

impl FetchTicket {
    pub fn request(&self) -> SearchImagesReq {
        SearchImagesReq {
            query: self.query.clone(),
            page: self.page,
        }
    }
}

// search state plus the entries fetched for the current query
//
// the list is replaced when a page 1 response lands and appended to by every later
// page, so it always equals the union of the pages fetched for `query`
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    default_query: String,
    page_size: usize,

    query: String,
    page: u32,
    has_more: bool,
    phase: Phase,
    error: Option<String>,
    total_hits: Option<u64>,
    generation: u64,
    // set once a page for `query` has actually been applied
    first_page_loaded: bool,

    entries: Vec<ImageEntry>,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        GalleryState {
            default_query: config.default_query.clone(),
            page_size: config.page_size,
            query: config.default_query.clone(),
            page: 1,
            has_more: true,
            phase: Phase::Idle,
            error: None,
            total_hits: None,
            generation: 0,
            first_page_loaded: false,
            entries: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::LoadingMore)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total_hits(&self) -> Option<u64> {
        self.total_hits
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more && self.first_page_loaded && !self.loading()
    }

    // scrolling never retries a failed page; that takes an explicit request
    pub fn can_load_more_on_scroll(&self) -> bool {
        self.can_load_more() && self.phase != Phase::Error
    }

    // blank input falls back to the configured default
    pub fn effective_query(&self, input: &str) -> String {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            self.default_query.clone()
        } else {
            trimmed.to_owned()
        }
    }

    // start over at page 1, superseding anything still in flight
    //
    // the old entries stay on screen until the new page arrives
    pub fn begin_search(&mut self, input: &str) -> FetchTicket {
        self.generation += 1;
        self.query = self.effective_query(input);
        self.page = 1;
        self.has_more = true;
        self.first_page_loaded = false;
        self.phase = Phase::Loading;
        self.error = None;

        debug!(query = %self.query, generation = self.generation, "starting search");

        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
            page: 1,
            append: false,
        }
    }

    // None while a fetch is outstanding, before page 1 of the current query has landed,
    // or once the last page has been seen
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if !self.can_load_more() {
            return None;
        }

        self.generation += 1;
        self.phase = Phase::LoadingMore;
        self.error = None;

        debug!(
            query = %self.query,
            page = self.page + 1,
            generation = self.generation,
            "loading next page"
        );

        Some(FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
            page: self.page + 1,
            append: true,
        })
    }

    // returns false if the ticket was superseded and the result thrown away
    pub fn complete(&mut self, ticket: &FetchTicket, result: anyhow::Result<SearchPage>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding superseded response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.has_more = page.entries.len() >= self.page_size;
                self.total_hits = page.total_hits;
                self.page = ticket.page;
                self.first_page_loaded = true;

                if ticket.append {
                    self.entries.extend(page.entries);
                } else {
                    self.entries = page.entries;
                }

                self.phase = Phase::Idle;
            }
            Err(err) => {
                error!(query = %ticket.query, page = ticket.page, "image search failed: {err:#}");

                self.error = Some(String::from(FETCH_ERROR));
                self.phase = Phase::Error;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(page_size: usize) -> GalleryConfig {
        GalleryConfig {
            page_size,
            ..GalleryConfig::default()
        }
    }

    fn batch(query: &str, page: u32, len: usize) -> anyhow::Result<SearchPage> {
        let entries = (0..len)
            .map(|i| ImageEntry {
                id: format!("{query}-{page}-{i}"),
                title: format!("title {i}"),
                date: String::from("2020-05-01"),
                url: format!("https://example.test/{query}/{page}/{i}.jpg"),
            })
            .collect();

        Ok(SearchPage {
            entries,
            total_hits: Some(1000),
        })
    }

    #[test]
    fn initial_state_uses_default_query() {
        let state = GalleryState::new(&config(100));

        assert_eq!(state.query(), "galaxy");
        assert_eq!(state.page(), 1);
        assert!(state.has_more());
        assert!(!state.loading());
        assert!(state.entries().is_empty());
    }

    #[test]
    fn blank_input_searches_default() {
        let mut state = GalleryState::new(&config(100));

        let ticket = state.begin_search("   ");

        assert_eq!(ticket.query, "galaxy");
        assert_eq!(ticket.page, 1);
        assert!(!ticket.append);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn first_page_replaces_and_later_pages_append() {
        let mut state = GalleryState::new(&config(3));

        let ticket = state.begin_search("mars");
        assert!(state.complete(&ticket, batch("mars", 1, 3)));
        assert_eq!(state.entries().len(), 3);

        let ticket = state.begin_load_more().unwrap();
        assert_eq!(ticket.page, 2);
        assert!(ticket.append);
        assert!(state.complete(&ticket, batch("mars", 2, 3)));

        assert_eq!(state.entries().len(), 6);
        assert_eq!(state.page(), 2);
        assert_eq!(state.entries()[3].id, "mars-2-0");

        let ticket = state.begin_search("moon");
        assert!(state.complete(&ticket, batch("moon", 1, 2)));

        assert_eq!(state.entries().len(), 2);
        assert!(state.entries().iter().all(|e| e.id.starts_with("moon-1-")));
    }

    #[test]
    fn short_page_ends_paging() {
        let mut state = GalleryState::new(&config(100));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 100));
        assert!(state.has_more());

        let ticket = state.begin_load_more().unwrap();
        state.complete(&ticket, batch("mars", 2, 99));
        assert!(!state.has_more());
        assert_eq!(state.begin_load_more(), None);
    }

    #[test]
    fn new_query_resets_paging_before_fetching() {
        let mut state = GalleryState::new(&config(2));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 1));
        assert!(!state.has_more());

        state.begin_search("moon");

        assert_eq!(state.page(), 1);
        assert!(state.has_more());
        // old entries stay until the new page resolves
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn load_more_is_refused_while_loading() {
        let mut state = GalleryState::new(&config(2));

        state.begin_search("mars");
        assert_eq!(state.begin_load_more(), None);

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 2));
        state.begin_load_more().unwrap();
        assert_eq!(state.begin_load_more(), None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = GalleryState::new(&config(100));

        let slow = state.begin_search("mar");
        let fast = state.begin_search("mars");

        assert!(state.complete(&fast, batch("mars", 1, 5)));
        assert!(!state.complete(&slow, batch("mar", 1, 100)));

        assert_eq!(state.query(), "mars");
        assert_eq!(state.entries().len(), 5);
        assert!(state.entries().iter().all(|e| e.id.starts_with("mars-")));
        assert!(!state.has_more());
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut state = GalleryState::new(&config(100));

        let slow = state.begin_search("mar");
        state.begin_search("mars");

        assert!(!state.complete(&slow, batch("mar", 1, 5)));
        assert!(state.loading());
    }

    #[test]
    fn load_more_superseded_by_new_query() {
        let mut state = GalleryState::new(&config(2));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 2));

        let more = state.begin_load_more().unwrap();
        let fresh = state.begin_search("moon");

        assert!(!state.complete(&more, batch("mars", 2, 2)));
        assert!(state.complete(&fresh, batch("moon", 1, 2)));
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn error_keeps_entries_and_sets_message() {
        let mut state = GalleryState::new(&config(2));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 2));

        let ticket = state.begin_load_more().unwrap();
        assert!(state.complete(&ticket, Err(anyhow::Error::msg("connection reset"))));

        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.error(), Some(FETCH_ERROR));
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.page(), 1);
        assert!(!state.loading());
    }

    #[test]
    fn failed_first_page_needs_a_new_search() {
        let mut state = GalleryState::new(&config(2));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, Err(anyhow::Error::msg("bad gateway")));
        assert!(state.error().is_some());

        assert_eq!(state.begin_load_more(), None);

        state.begin_search("mars");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failed_later_page_can_be_retried() {
        let mut state = GalleryState::new(&config(2));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 2));

        let ticket = state.begin_load_more().unwrap();
        state.complete(&ticket, Err(anyhow::Error::msg("timeout")));

        assert!(!state.can_load_more_on_scroll());
        assert!(state.can_load_more());

        let retry = state.begin_load_more().unwrap();
        assert_eq!(retry.page, 2);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn total_hits_follow_latest_page() {
        let mut state = GalleryState::new(&config(100));

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 10));

        assert_eq!(state.total_hits(), Some(1000));
    }

    #[test]
    fn scrolling_loads_more_only_while_healthy() {
        let mut state = GalleryState::new(&config(2));
        assert!(!state.can_load_more_on_scroll());

        let ticket = state.begin_search("mars");
        state.complete(&ticket, batch("mars", 1, 2));
        assert!(state.can_load_more_on_scroll());

        let ticket = state.begin_load_more().unwrap();
        assert!(!state.can_load_more_on_scroll());

        state.complete(&ticket, batch("mars", 2, 2));
        assert!(state.can_load_more_on_scroll());
    }
}
