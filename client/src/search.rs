//! Search-as-you-type over the static post index.
//!
//! DESIGN
//! ======
//! Keystrokes are debounced; each settled query issues at most one read of
//! `/releases.json` and filters its posts by case-insensitive title
//! substring. The [`SearchGate`] generation counter decides which response
//! may render: a response whose ticket is no longer the latest is dropped,
//! so a slow older request can never overwrite a newer result.
//!
//! ERROR HANDLING
//! ==============
//! Fetch, status, decode, and timeout failures all become
//! [`SearchOutcome::Failed`] and render one localized error line.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::cell::Cell;

use serde::Deserialize;

use crate::language::Language;

/// One entry of the post index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub title: String,
    pub url: String,
}

/// Top-level shape of `/releases.json`. A missing `posts` list is an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<Post>,
}

impl PostIndex {
    /// # Errors
    ///
    /// Returns [`SearchError::Decode`] for malformed JSON or a missing post list.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        serde_json::from_str(raw).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("post index request failed: {0}")]
    Network(String),

    #[error("post index returned status {0}")]
    Status(u16),

    #[error("post index decode failed: {0}")]
    Decode(String),

    #[error("post index request timed out after {0}ms")]
    Timeout(u32),
}

/// What a search settled into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: hide the results, no request made.
    Hidden,
    Matches(Vec<Post>),
    NoMatches,
    Failed(SearchError),
}

/// Provider of the post index.
pub trait PostSource {
    async fn fetch_index(&self) -> Result<PostIndex, SearchError>;
}

pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Posts whose lower-cased title contains the lower-cased query, in index order.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = normalize_query(query);
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Run one search. An empty query returns [`SearchOutcome::Hidden`] without
/// touching `source`.
pub async fn run_search<P: PostSource>(source: &P, raw_query: &str) -> SearchOutcome {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return SearchOutcome::Hidden;
    }

    match source.fetch_index().await {
        Ok(index) => {
            let matches = filter_posts(&index.posts, &query);
            log::debug!("search {query:?}: {} of {} posts", matches.len(), index.posts.len());
            if matches.is_empty() { SearchOutcome::NoMatches } else { SearchOutcome::Matches(matches) }
        }
        Err(e) => {
            log::warn!("{e}");
            SearchOutcome::Failed(e)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Generation counter: only the latest ticket may render.
#[derive(Debug, Default)]
pub struct SearchGate {
    latest: Cell<u64>,
}

impl SearchGate {
    pub fn issue(&self) -> SearchTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        SearchTicket(next)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Render `outcome` only if `ticket` is still the latest. Returns whether it rendered.
pub fn settle(
    gate: &SearchGate,
    ticket: SearchTicket,
    view: &impl ResultsView,
    outcome: &SearchOutcome,
    messages: &SearchMessages,
) -> bool {
    if !gate.is_current(ticket) {
        return false;
    }
    render_outcome(view, outcome, messages);
    true
}

/// Placeholder texts shown in the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMessages {
    pub no_results: String,
    pub load_error: String,
}

impl SearchMessages {
    pub fn for_language(language: Language) -> Self {
        let (no_results, load_error) = match language {
            Language::Th => ("ไม่พบผลลัพธ์", "เกิดข้อผิดพลาดในการโหลดข้อมูล"),
            Language::En => ("No results found", "Failed to load data"),
        };
        Self { no_results: no_results.to_owned(), load_error: load_error.to_owned() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Empty,
    Error,
}

/// The results container as seen by [`render_outcome`].
pub trait ResultsView {
    fn clear(&self);
    fn push_link(&self, post: &Post);
    fn push_message(&self, kind: MessageKind, text: &str);
    fn set_visible(&self, visible: bool);
}

/// Replace the container's content with `outcome` and set its visibility.
pub fn render_outcome(view: &impl ResultsView, outcome: &SearchOutcome, messages: &SearchMessages) {
    match outcome {
        SearchOutcome::Hidden => {
            view.set_visible(false);
            return;
        }
        SearchOutcome::Matches(posts) => {
            view.clear();
            for post in posts {
                view.push_link(post);
            }
        }
        SearchOutcome::NoMatches => {
            view.clear();
            view.push_message(MessageKind::Empty, &messages.no_results);
        }
        SearchOutcome::Failed(_) => {
            view.clear();
            view.push_message(MessageKind::Error, &messages.load_error);
        }
    }
    view.set_visible(true);
}

#[cfg(feature = "hydrate")]
pub use browser::{HttpPostSource, SearchController, SearchElements};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::future::{Either, select};
    use gloo_events::EventListener;
    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use web_sys::{Document, Element, HtmlInputElement};

    use super::*;
    use crate::config::SearchConfig;
    use crate::error::ClientError;
    use crate::util::classes::{self, ClassList, HIDDEN};
    use crate::util::dom;

    const ROW_CLASSES: &[&str] = &["py-2", "border-b", "border-gray-200", "dark:border-gray-700"];
    const LINK_CLASSES: &[&str] =
        &["text-blue-600", "hover:text-blue-800", "dark:text-blue-400", "dark:hover:text-blue-600"];
    const EMPTY_CLASSES: &[&str] = &["text-gray-500", "dark:text-gray-400"];
    const ERROR_CLASSES: &[&str] = &["text-red-500"];

    /// `gloo-net` reader of the post index with a request timeout.
    pub struct HttpPostSource {
        url: String,
        timeout_ms: u32,
    }

    impl HttpPostSource {
        pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
            Self { url: url.into(), timeout_ms }
        }

        async fn request(&self) -> Result<PostIndex, SearchError> {
            let response = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(SearchError::Status(response.status()));
            }
            let body = response.text().await.map_err(|e| SearchError::Network(e.to_string()))?;
            PostIndex::parse(&body)
        }
    }

    impl PostSource for HttpPostSource {
        async fn fetch_index(&self) -> Result<PostIndex, SearchError> {
            let request = Box::pin(self.request());
            let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
            match select(request, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(SearchError::Timeout(self.timeout_ms)),
            }
        }
    }

    struct DomResults {
        document: Document,
        container: Element,
    }

    impl DomResults {
        fn append(&self, tag: &str, classes: &[&str], text: &str) -> Result<Element, ClientError> {
            let element = dom::create(&self.document, tag, classes)?;
            element.set_text_content(Some(text));
            Ok(element)
        }

        fn try_push_link(&self, post: &Post) -> Result<(), ClientError> {
            let row = dom::create(&self.document, "div", ROW_CLASSES)?;
            let link = self.append("a", LINK_CLASSES, &post.title)?;
            link.set_attribute("href", &post.url)
                .map_err(|e| ClientError::Dom(dom::describe(&e)))?;
            row.append_child(&link).map_err(|e| ClientError::Dom(dom::describe(&e)))?;
            self.container
                .append_child(&row)
                .map_err(|e| ClientError::Dom(dom::describe(&e)))?;
            Ok(())
        }

        fn try_push_message(&self, kind: MessageKind, text: &str) -> Result<(), ClientError> {
            let classes = match kind {
                MessageKind::Empty => EMPTY_CLASSES,
                MessageKind::Error => ERROR_CLASSES,
            };
            let note = self.append("p", classes, text)?;
            self.container
                .append_child(&note)
                .map_err(|e| ClientError::Dom(dom::describe(&e)))?;
            Ok(())
        }
    }

    impl ResultsView for DomResults {
        fn clear(&self) {
            self.container.set_inner_html("");
        }

        fn push_link(&self, post: &Post) {
            if let Err(e) = self.try_push_link(post) {
                log::warn!("result row for {}: {e}", post.url);
            }
        }

        fn push_message(&self, kind: MessageKind, text: &str) {
            if let Err(e) = self.try_push_message(kind, text) {
                log::warn!("result message: {e}");
            }
        }

        fn set_visible(&self, visible: bool) {
            classes::set_visible(&self.container.class_list(), visible);
        }
    }

    /// Elements a search box needs, resolved from configured ids.
    pub struct SearchElements {
        pub input: HtmlInputElement,
        pub results: Element,
        pub clear: Option<Element>,
    }

    impl SearchElements {
        /// `Ok(None)` when the page has no search input.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::MissingElement`] if the input exists but the
        /// results container or a configured clear button does not.
        pub fn locate(document: &Document, config: &SearchConfig) -> Result<Option<Self>, ClientError> {
            let Some(input) = dom::find_id(document, &config.input_id) else {
                return Ok(None);
            };
            let input: HtmlInputElement = dom::cast(input, &config.input_id, "HtmlInputElement")?;
            let results = dom::require_id(document, &config.results_id)?;
            let clear = config
                .clear_button_id
                .as_deref()
                .map(|id| dom::require_id(document, id))
                .transpose()?;
            Ok(Some(Self { input, results, clear }))
        }
    }

    /// Bound search box; dropping it removes its listeners, cancels a
    /// pending debounced search, and discards any search still in flight.
    pub struct SearchController {
        _listeners: Vec<EventListener>,
        pending: Rc<RefCell<Option<Timeout>>>,
        gate: Rc<SearchGate>,
    }

    impl SearchController {
        pub fn bind(
            document: &Document,
            elements: SearchElements,
            config: &SearchConfig,
            messages: SearchMessages,
        ) -> Self {
            let SearchElements { input, results, clear } = elements;
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let gate = Rc::new(SearchGate::default());
            let source = Rc::new(HttpPostSource::new(config.index_url.clone(), config.fetch_timeout_ms));
            let view = Rc::new(DomResults { document: document.clone(), container: results.clone() });
            let messages = Rc::new(messages);
            let delay_ms = config.debounce_ms;

            let mut listeners = Vec::new();

            {
                let input_el = input.clone();
                let pending = Rc::clone(&pending);
                let gate = Rc::clone(&gate);
                listeners.push(EventListener::new(&input, "input", move |_| {
                    let query = normalize_query(&input_el.value());
                    let gate = Rc::clone(&gate);
                    let source = Rc::clone(&source);
                    let view = Rc::clone(&view);
                    let messages = Rc::clone(&messages);
                    let timeout = Timeout::new(delay_ms, move || {
                        let ticket = gate.issue();
                        wasm_bindgen_futures::spawn_local(async move {
                            let outcome = run_search(&*source, &query).await;
                            if !settle(&gate, ticket, &*view, &outcome, &messages) {
                                log::debug!("dropping stale search {query:?}");
                            }
                        });
                    });
                    // Replacing the handle drops the previous timer, cancelling it.
                    *pending.borrow_mut() = Some(timeout);
                }));
            }

            if let Some(clear) = clear {
                let input_el = input.clone();
                let clear_el = clear.clone();
                listeners.push(EventListener::new(&input, "input", move |_| {
                    clear_el.class_list().set(HIDDEN, input_el.value().is_empty());
                }));

                let input_el = input.clone();
                let clear_el = clear.clone();
                let pending = Rc::clone(&pending);
                let gate = Rc::clone(&gate);
                listeners.push(EventListener::new(&clear, "click", move |_| {
                    pending.borrow_mut().take();
                    gate.issue();
                    input_el.set_value("");
                    classes::set_visible(&results.class_list(), false);
                    classes::set_visible(&clear_el.class_list(), false);
                }));
            }

            Self { _listeners: listeners, pending, gate }
        }
    }

    impl Drop for SearchController {
        fn drop(&mut self) {
            self.pending.borrow_mut().take();
            self.gate.issue();
        }
    }
}
