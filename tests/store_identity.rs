// tests/store_identity.rs
//
// Approval gate + permanent-identity guarantees of the RecordStore.
//
use recipe_cards::store::{RecordId, RecordStore};
use recipe_cards::view::{self, Query, SortMode};

const HEADERS: &str =
    "Timestamp,Name of the recipe,Name of the person,Ingredients list,Story or Memory behind the recipe,Language,Approved";

fn sheet() -> String {
    let rows = [
        "6/01/2024 10:00:00,Pierogi,Anna,flour; potatoes,Grandma's Sunday dish,Polish,TRUE",
        "6/02/2024 11:00:00,Laksa,Mei,noodles; coconut milk,Hawker memories,Malay,Yes",
        "6/03/2024 12:00:00,Rejected Stew,Bob,mystery meat,none,English,false",
        "6/04/2024 13:00:00,Empanadas,Lucia,dough; beef,Street food,Spanish,1",
        "6/05/2024 14:00:00,Unreviewed Pie,Cara,apples,none,English,",
        "6/06/2024 15:00:00,Refused Salad,Dan,lettuce,none,English,no",
    ];
    format!("{HEADERS}\n{}\n", rows.join("\n"))
}

#[test]
fn approval_filter_keeps_truthy_tokens_only() {
    let store = RecordStore::load(&sheet());
    // TRUE / Yes / 1 pass; false / empty / no do not.
    assert_eq!(store.len(), 3);

    let names: Vec<String> = store
        .ids()
        .filter_map(|id| view::card(&store, id))
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Pierogi", "Laksa", "Empanadas"]);
}

#[test]
fn identity_is_position_in_approved_store_not_in_views() {
    let store = RecordStore::load(&sheet());

    // Capture Empanadas' id from a name-sorted view.
    let mut query = Query::default();
    query.sort = SortMode::Name;
    let sorted = view::compute_view(&store, &query);
    let captured = *sorted
        .ids
        .iter()
        .find(|&&id| view::card(&store, id).map(|c| c.name) == Some("Empanadas".into()))
        .unwrap();

    // A completely different view later on…
    let mut other = Query::default();
    other.language = "polish".into();
    let _ = view::compute_view(&store, &other);

    // …still resolves the captured id to the identical record.
    let card = view::card(&store, captured).unwrap();
    assert_eq!(card.name, "Empanadas");
    // And the id is the post-approval position (third approved row).
    assert_eq!(captured.as_usize(), 2);
}

#[test]
fn record_id_round_trips_through_its_query_parameter_form() {
    let store = RecordStore::load(&sheet());
    let id = store.ids().nth(1).unwrap();

    let param = id.to_string();
    let back: RecordId = param.parse().unwrap();
    assert_eq!(back, id);

    let card = view::card(&store, back).unwrap();
    assert_eq!(card.name, "Laksa");
}

#[test]
fn stale_or_fabricated_ids_resolve_to_none() {
    let store = RecordStore::load(&sheet());
    let bogus: RecordId = "99".parse().unwrap();
    assert!(store.record(bogus).is_none());
}

#[test]
fn languages_are_distinct_normalized_and_sorted() {
    let store = RecordStore::load(&sheet());
    assert_eq!(store.languages(), vec!["malay", "polish", "spanish"]);
}
