use shelfmark::{
    book::{BookDraft, ValidationError},
    core::store::BookStore,
    types::Genre,
};

fn draft(title: &str, author: &str, year: i32, genre: &str, read: bool) -> BookDraft {
    BookDraft::new(title, author, year, genre, read)
}

#[test]
fn add_appends_record_with_input_fields() {
    let mut store = BookStore::new();
    store.add(draft("Dune", "Herbert", 1965, "Fiction", true)).unwrap();
    let added = store
        .add(draft("Cosmos", "Sagan", 1980, "Science", false))
        .unwrap();

    let last = store.all().last().unwrap();
    assert_eq!(last, &added);
    assert_eq!(last.title, "Cosmos");
    assert_eq!(last.author, "Sagan");
    assert_eq!(last.publication_year, 1980);
    assert_eq!(last.genre, Genre::Science);
    assert!(!last.read_status);
    assert!(!last.added_date.is_empty());
}

#[test]
fn added_dates_never_decrease_in_insertion_order() {
    let mut store = BookStore::new();
    for i in 0..5 {
        store
            .add(draft(&format!("Vol {i}"), "Anon", 2001, "History", false))
            .unwrap();
    }
    let dates: Vec<&str> = store.all().iter().map(|b| b.added_date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn double_remove_is_a_noop_the_second_time() {
    let mut store = BookStore::new();
    store.add(draft("A", "X", 2000, "Art", false)).unwrap();
    store.add(draft("B", "Y", 2001, "Art", false)).unwrap();

    assert!(store.remove(1));
    let after_first = store.clone();
    assert!(!store.remove(1));
    assert_eq!(store, after_first);
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_shifts_later_positions_down() {
    let mut store = BookStore::new();
    for t in ["A", "B", "C"] {
        store.add(draft(t, "X", 2000, "Religion", false)).unwrap();
    }
    assert!(store.remove(0));
    let titles: Vec<&str> = store.all().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);
}

#[test]
fn duplicates_are_distinct_records() {
    let mut store = BookStore::new();
    store.add(draft("Dune", "Herbert", 1965, "Fiction", false)).unwrap();
    store.add(draft("Dune", "Herbert", 1965, "Fiction", false)).unwrap();
    assert_eq!(store.len(), 2);

    assert!(store.toggle_read(1));
    assert!(!store.get(0).unwrap().read_status);
    assert!(store.get(1).unwrap().read_status);
}

#[test]
fn validation_failure_creates_nothing() {
    let mut store = BookStore::new();
    let err = store.add(draft("Dune", "  ", 1965, "Fiction", true)).unwrap_err();
    assert_eq!(err, ValidationError::EmptyAuthor);

    let err = store.add(draft("Dune", "Herbert", 999, "Fiction", true)).unwrap_err();
    assert!(matches!(err, ValidationError::YearOutOfRange { year: 999, .. }));

    assert!(store.is_empty());
}
