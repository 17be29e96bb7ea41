use super::*;

use std::cell::RefCell;

use futures::executor::block_on;

fn post(title: &str, url: &str) -> Post {
    Post { title: title.to_owned(), url: url.to_owned() }
}

fn sample_posts() -> Vec<Post> {
    vec![
        post("Blockchain 101", "/a"),
        post("Intro to Web", "/b"),
        post("Why BLOCKS matter", "/c"),
        post("สอนเขียน Rust", "/d"),
    ]
}

struct FakeSource {
    result: Result<PostIndex, SearchError>,
    calls: Cell<usize>,
}

impl FakeSource {
    fn serving(posts: Vec<Post>) -> Self {
        Self { result: Ok(PostIndex { posts }), calls: Cell::new(0) }
    }

    fn failing(err: SearchError) -> Self {
        Self { result: Err(err), calls: Cell::new(0) }
    }
}

impl PostSource for FakeSource {
    async fn fetch_index(&self) -> Result<PostIndex, SearchError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Link { title: String, url: String },
    Message(MessageKind, String),
}

#[derive(Default)]
struct FakeView {
    nodes: RefCell<Vec<Node>>,
    visible: Cell<bool>,
}

impl ResultsView for FakeView {
    fn clear(&self) {
        self.nodes.borrow_mut().clear();
    }

    fn push_link(&self, post: &Post) {
        self.nodes.borrow_mut().push(Node::Link { title: post.title.clone(), url: post.url.clone() });
    }

    fn push_message(&self, kind: MessageKind, text: &str) {
        self.nodes.borrow_mut().push(Node::Message(kind, text.to_owned()));
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

// =============================================================
// Index parsing
// =============================================================

#[test]
fn index_parses_posts_in_order() {
    let index = PostIndex::parse(r#"{"posts":[{"title":"A","url":"/a"},{"title":"B","url":"/b","date":"x"}]}"#)
        .expect("index");
    assert_eq!(index.posts, vec![post("A", "/a"), post("B", "/b")]);
}

#[test]
fn missing_or_null_post_list_is_decode_error() {
    assert!(matches!(PostIndex::parse(r#"{"items":[]}"#), Err(SearchError::Decode(_))));
    assert!(matches!(PostIndex::parse(r#"{"posts":null}"#), Err(SearchError::Decode(_))));
    assert!(matches!(PostIndex::parse("<html>"), Err(SearchError::Decode(_))));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_is_case_insensitive_substring_in_source_order() {
    let matches = filter_posts(&sample_posts(), "BLOCK");
    assert_eq!(matches, vec![post("Blockchain 101", "/a"), post("Why BLOCKS matter", "/c")]);
}

#[test]
fn filter_matches_non_latin_titles() {
    let matches = filter_posts(&sample_posts(), "rust");
    assert_eq!(matches, vec![post("สอนเขียน Rust", "/d")]);
}

#[test]
fn filter_without_match_is_empty() {
    assert!(filter_posts(&sample_posts(), "kubernetes").is_empty());
}

// =============================================================
// run_search
// =============================================================

#[test]
fn empty_query_hides_without_request() {
    let source = FakeSource::serving(sample_posts());
    assert_eq!(block_on(run_search(&source, "")), SearchOutcome::Hidden);
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn block_query_yields_single_row() {
    let source = FakeSource::serving(vec![post("Blockchain 101", "/a"), post("Intro to Web", "/b")]);
    let outcome = block_on(run_search(&source, "block"));
    assert_eq!(outcome, SearchOutcome::Matches(vec![post("Blockchain 101", "/a")]));
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn query_without_match_is_no_matches() {
    let source = FakeSource::serving(sample_posts());
    assert_eq!(block_on(run_search(&source, "zzz")), SearchOutcome::NoMatches);
}

#[test]
fn source_failure_is_failed_outcome() {
    let source = FakeSource::failing(SearchError::Status(404));
    assert_eq!(block_on(run_search(&source, "web")), SearchOutcome::Failed(SearchError::Status(404)));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn matches_render_one_link_per_post_and_show() {
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::Th);
    view.nodes.borrow_mut().push(Node::Message(MessageKind::Empty, "stale".to_owned()));

    render_outcome(&view, &SearchOutcome::Matches(vec![post("Blockchain 101", "/a")]), &messages);

    assert_eq!(
        *view.nodes.borrow(),
        vec![Node::Link { title: "Blockchain 101".to_owned(), url: "/a".to_owned() }]
    );
    assert!(view.visible.get());
}

#[test]
fn no_matches_render_single_placeholder() {
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::Th);
    render_outcome(&view, &SearchOutcome::NoMatches, &messages);
    assert_eq!(*view.nodes.borrow(), vec![Node::Message(MessageKind::Empty, "ไม่พบผลลัพธ์".to_owned())]);
    assert!(view.visible.get());
}

#[test]
fn failure_renders_exactly_one_localized_error_and_shows() {
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::En);
    let outcome = SearchOutcome::Failed(SearchError::Network("offline".to_owned()));

    render_outcome(&view, &outcome, &messages);

    assert_eq!(*view.nodes.borrow(), vec![Node::Message(MessageKind::Error, "Failed to load data".to_owned())]);
    assert!(view.visible.get());
}

#[test]
fn hidden_outcome_only_hides() {
    let view = FakeView::default();
    view.visible.set(true);
    view.nodes.borrow_mut().push(Node::Message(MessageKind::Empty, "kept".to_owned()));

    render_outcome(&view, &SearchOutcome::Hidden, &SearchMessages::for_language(Language::Th));

    assert!(!view.visible.get());
    assert_eq!(view.nodes.borrow().len(), 1);
}

// =============================================================
// SearchGate
// =============================================================

#[test]
fn only_latest_ticket_is_current() {
    let gate = SearchGate::default();
    let first = gate.issue();
    assert!(gate.is_current(first));

    let second = gate.issue();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn stale_response_does_not_overwrite_newer_render() {
    let gate = SearchGate::default();
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::En);
    let source = FakeSource::serving(sample_posts());

    let old_ticket = gate.issue();
    let new_ticket = gate.issue();

    // The newer search resolves first.
    let newer = block_on(run_search(&source, "web"));
    assert!(settle(&gate, new_ticket, &view, &newer, &messages));
    let older = block_on(run_search(&source, "block"));
    assert!(!settle(&gate, old_ticket, &view, &older, &messages));

    assert_eq!(*view.nodes.borrow(), vec![Node::Link { title: "Intro to Web".to_owned(), url: "/b".to_owned() }]);
    assert!(view.visible.get());
}

#[test]
fn latest_ticket_renders_when_responses_arrive_in_order() {
    let gate = SearchGate::default();
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::Th);

    let first = gate.issue();
    let second = gate.issue();
    assert!(!settle(&gate, first, &view, &SearchOutcome::NoMatches, &messages));
    assert!(settle(&gate, second, &view, &SearchOutcome::Matches(vec![post("A", "/a")]), &messages));

    assert_eq!(*view.nodes.borrow(), vec![Node::Link { title: "A".to_owned(), url: "/a".to_owned() }]);
}

#[test]
fn in_flight_search_is_discarded_once_gate_moves_on() {
    let gate = SearchGate::default();
    let view = FakeView::default();
    let messages = SearchMessages::for_language(Language::En);

    let ticket = gate.issue();
    // Clearing the box or tearing the controller down issues a fresh ticket.
    gate.issue();

    assert!(!settle(&gate, ticket, &view, &SearchOutcome::NoMatches, &messages));
    assert!(view.nodes.borrow().is_empty());
    assert!(!view.visible.get());
}

#[test]
fn messages_are_localized() {
    let th = SearchMessages::for_language(Language::Th);
    assert_eq!(th.load_error, "เกิดข้อผิดพลาดในการโหลดข้อมูล");
    let en = SearchMessages::for_language(Language::En);
    assert_eq!(en.no_results, "No results found");
}
