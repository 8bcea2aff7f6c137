// tests/view_pipeline.rs
//
// Filter → sort behavior of the view pipeline, without any UI.
//
use recipe_cards::store::RecordStore;
use recipe_cards::view::{self, Query, Session, SortMode};

const HEADERS: &str =
    "Timestamp,Name of the recipe,Name of the person,Ingredients list,Story or Memory behind the recipe,Language,Approved";

fn store() -> RecordStore {
    let rows = [
        // two "Bread" entries to pin down sort stability
        "6/10/2024 09:00:00,Bread,Zoe,flour; water; salt,Learned in Vienna,German,yes",
        "not a date,Bread,Adam,rye flour,From my uncle,German,yes",
        "6/12/2024 18:30:00,Adobo,Rita,chicken; soy sauce; vinegar,Rainy season comfort,Filipino,yes",
        ",Ceviche,Marco,fish; lime,Beach holidays,Spanish,yes",
        "6/11/2024 08:00:00,Scones,June,flour; cream,Tea with mum,English,yes",
    ];
    RecordStore::load(&format!("{HEADERS}\n{}\n", rows.join("\n")))
}

fn names(store: &RecordStore, view: &view::View) -> Vec<String> {
    view.ids
        .iter()
        .filter_map(|&id| view::card(store, id))
        .map(|c| c.name)
        .collect()
}

#[test]
fn default_query_preserves_store_order() {
    let store = store();
    let view = view::compute_view(&store, &Query::default());
    assert_eq!(names(&store, &view), vec!["Bread", "Bread", "Adobo", "Ceviche", "Scones"]);
}

#[test]
fn search_spans_name_submitter_ingredients_and_story() {
    let store = store();

    for (needle, expected) in [
        ("adobo", vec!["Adobo"]),          // name
        ("marco", vec!["Ceviche"]),        // submitter
        ("soy sauce", vec!["Adobo"]),      // ingredients
        ("vienna", vec!["Bread"]),         // story
    ] {
        let mut q = Query::default();
        q.search = needle.into();
        let view = view::compute_view(&store, &q);
        assert_eq!(names(&store, &view), expected, "needle: {needle}");
    }
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let store = store();
    let mut q = Query::default();
    q.search = "  CEVICHE ".into();
    let view = view::compute_view(&store, &q);
    assert_eq!(names(&store, &view), vec!["Ceviche"]);
}

#[test]
fn language_filter_honors_all_sentinel() {
    let store = store();

    let mut q = Query::default();
    q.language = "German".into(); // case-insensitive against stored values
    let view = view::compute_view(&store, &q);
    assert_eq!(view.len(), 2);

    q.language = "all".into();
    let view = view::compute_view(&store, &q);
    assert_eq!(view.len(), store.len());
}

#[test]
fn language_and_search_combine() {
    let store = store();
    let mut q = Query::default();
    q.language = "german".into();
    q.search = "rye".into();
    let view = view::compute_view(&store, &q);
    assert_eq!(names(&store, &view), vec!["Bread"]);
    assert_eq!(view.ids[0].as_usize(), 1);
}

#[test]
fn name_sort_is_stable_for_equal_names() {
    let store = store();
    let mut q = Query::default();
    q.sort = SortMode::Name;
    let view = view::compute_view(&store, &q);

    assert_eq!(
        names(&store, &view),
        vec!["Adobo", "Bread", "Bread", "Ceviche", "Scones"]
    );
    // The two Breads keep their store-relative order: Zoe's row first.
    let bread_ids: Vec<usize> = view.ids[1..3].iter().map(|id| id.as_usize()).collect();
    assert_eq!(bread_ids, vec![0, 1]);
}

#[test]
fn newest_sort_puts_unparseable_timestamps_last() {
    let store = store();
    let mut q = Query::default();
    q.sort = SortMode::Newest;
    let view = view::compute_view(&store, &q);

    // Parseable timestamps descending, then the epoch-defaulted pair
    // ("not a date", "") in store order.
    assert_eq!(
        names(&store, &view),
        vec!["Adobo", "Scones", "Bread", "Bread", "Ceviche"]
    );
    assert_eq!(view.ids[3].as_usize(), 1);
    assert_eq!(view.ids[4].as_usize(), 3);
}

#[test]
fn sort_tokens_parse_with_default_fallback() {
    assert_eq!(SortMode::from_token("name"), SortMode::Name);
    assert_eq!(SortMode::from_token(" NEWEST "), SortMode::Newest);
    assert_eq!(SortMode::from_token("whatever"), SortMode::None);
}

#[test]
fn session_resets_page_on_query_change_only() {
    let mut session = Session::default();
    session.set_page(3);
    assert_eq!(session.page(), 3);

    session.set_search("bread");
    assert_eq!(session.page(), 1);

    session.set_page(2);
    session.set_sort(SortMode::Name);
    assert_eq!(session.page(), 1);

    session.set_page(2);
    session.set_language("german");
    assert_eq!(session.page(), 1);

    // Page-only changes leave the query alone.
    session.set_page(2);
    assert_eq!(session.query().language, "german");
    assert_eq!(session.query().search, "bread");
}

#[test]
fn empty_document_renders_zero_items_without_failing() {
    let store = RecordStore::load("");
    assert!(store.is_empty());
    assert!(store.headers().is_empty());

    let view = view::compute_view(&store, &Query::default());
    let paged = view::paginate(&view, 1, 6);
    assert!(paged.ids.is_empty());
    assert_eq!(paged.current, 1);
    assert_eq!(paged.total, 1);
}
