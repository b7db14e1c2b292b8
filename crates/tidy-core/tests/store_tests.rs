//! Store behavior tests: partition, move, folder removal, edit, and the
//! import/organize/export round trip.

use std::collections::HashSet;

use rstest::rstest;
use tidy_core::{
    export_html, Bookmark, BookmarkId, Container, Destination, ExportOptions, FolderId,
    ImportOptions, MoveOutcome, Store, UnresolvedDestination,
};

fn store_with(n: usize) -> Store {
    let mut store = Store::new();
    store.replace(
        (0..n)
            .map(|i| Bookmark::new(format!("b{}", i), format!("http://b{}.example", i)))
            .collect(),
    );
    store
}

/// Every bookmark id appears exactly once across all lists.
fn assert_partitioned(store: &Store) {
    let mut seen = HashSet::new();
    for (_, bookmark) in store.bookmarks() {
        assert!(seen.insert(bookmark.id), "duplicate id {}", bookmark.id);
    }
    assert_eq!(seen.len(), store.bookmark_count());
}

fn occurrences(store: &Store, id: &BookmarkId) -> Vec<Container> {
    store
        .bookmarks()
        .filter(|(_, b)| b.id == *id)
        .map(|(c, _)| c)
        .collect()
}

// === Move ===

#[rstest]
#[case::pool_to_folder(Container::Unorganized, 0)]
#[case::folder_to_pool(Container::Folder(0), usize::MAX)]
#[case::folder_to_folder(Container::Folder(0), 1)]
fn test_move_is_atomic(#[case] source: Container, #[case] target_folder: usize) {
    let mut store = store_with(4);
    let f0 = store.create_folder("F0").unwrap();
    let f1 = store.create_folder("F1").unwrap();

    let id = store.unorganized()[0].id;
    if source == Container::Folder(0) {
        store.move_bookmark(&id, Destination::Folder(f0), UnresolvedDestination::Drop);
    }

    let (destination, expected) = match target_folder {
        0 => (Destination::Folder(f0), Container::Folder(0)),
        1 => (Destination::Folder(f1), Container::Folder(1)),
        _ => (Destination::Unorganized, Container::Unorganized),
    };

    let count = store.bookmark_count();
    let outcome = store.move_bookmark(&id, destination, UnresolvedDestination::Drop);

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(occurrences(&store, &id), vec![expected]);
    assert_eq!(store.bookmark_count(), count);
    let list = store.list(expected).unwrap();
    assert_eq!(list.last().unwrap().id, id, "moved bookmark is appended");
    assert_partitioned(&store);
}

#[test]
fn test_move_appends_not_inserts() {
    let mut store = store_with(3);
    let folder = store.create_folder("F").unwrap();
    let ids: Vec<BookmarkId> = store.unorganized().iter().map(|b| b.id).collect();

    for id in ids.iter().rev() {
        store.move_bookmark(id, Destination::Folder(folder), UnresolvedDestination::Drop);
    }

    let filed: Vec<BookmarkId> = store
        .folder(&folder)
        .unwrap()
        .children
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(filed, ids.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn test_move_to_missing_folder_drops_bookmark() {
    let mut store = store_with(3);
    let id = store.unorganized()[1].id;

    let outcome = store.move_bookmark(
        &id,
        Destination::Folder(FolderId::new_v4()),
        UnresolvedDestination::Drop,
    );

    assert_eq!(outcome, MoveOutcome::Dropped);
    assert!(store.locate(&id).is_none());
    assert_eq!(store.bookmark_count(), 2);
    assert_partitioned(&store);
}

#[test]
fn test_move_to_removed_folder_restores_when_configured() {
    let mut store = store_with(2);
    let folder = store.create_folder("gone").unwrap();
    assert_eq!(store.remove_folder(&folder), Some(0));
    let id = store.unorganized()[0].id;

    let outcome = store.move_bookmark(
        &id,
        Destination::Folder(folder),
        UnresolvedDestination::Restore,
    );

    assert_eq!(outcome, MoveOutcome::Restored);
    assert_eq!(store.unorganized()[0].id, id);
    assert_eq!(store.bookmark_count(), 2);
}

// === Folder removal ===

#[test]
fn test_remove_folder_relocates_children_in_order() {
    let mut store = store_with(4);
    let folder = store.create_folder("F").unwrap();
    let b1 = store.unorganized()[2].id;
    let b2 = store.unorganized()[0].id;
    store.move_bookmark(&b1, Destination::Folder(folder), UnresolvedDestination::Drop);
    store.move_bookmark(&b2, Destination::Folder(folder), UnresolvedDestination::Drop);
    let count = store.bookmark_count();

    assert_eq!(store.remove_folder(&folder), Some(2));

    assert!(store.folder(&folder).is_none());
    assert_eq!(store.bookmark_count(), count);
    let tail: Vec<BookmarkId> = store.unorganized()[2..].iter().map(|b| b.id).collect();
    assert_eq!(tail, vec![b1, b2]);
    assert_partitioned(&store);
}

#[test]
fn test_list_of_removed_folder_is_none() {
    let mut store = store_with(2);
    let folder = store.create_folder("F").unwrap();
    assert_eq!(store.list(Container::Folder(0)), Some(&[][..]));

    assert_eq!(store.remove_folder(&folder), Some(0));

    assert!(store.list(Container::Folder(0)).is_none());
    assert_eq!(store.list(Container::Unorganized).map(<[_]>::len), Some(2));
}

#[test]
fn test_remove_missing_folder_is_noop() {
    let mut store = store_with(2);
    store.create_folder("F");
    let before = store.clone();
    assert_eq!(store.remove_folder(&FolderId::new_v4()), None);
    assert_eq!(store, before);
}

// === Folder creation ===

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_folder_name_rejected(#[case] name: &str) {
    let mut store = store_with(1);
    let before = store.clone();
    assert_eq!(store.create_folder(name), None);
    assert_eq!(store, before);
}

#[test]
fn test_folder_ids_unique() {
    let mut store = Store::new();
    let a = store.create_folder("Same").unwrap();
    let b = store.create_folder("Same").unwrap();
    assert_ne!(a, b);
    assert_eq!(store.folders().len(), 2);
}

// === Edit ===

#[test]
fn test_edit_to_same_values_is_idempotent() {
    let mut store = store_with(3);
    let folder = store.create_folder("F").unwrap();
    let id = store.unorganized()[1].id;
    store.move_bookmark(&id, Destination::Folder(folder), UnresolvedDestination::Drop);
    let current = store.bookmark(&id).unwrap().clone();
    let before = store.clone();

    assert!(store.edit_bookmark(&id, &current.title, &current.url));

    assert_eq!(store, before);
}

#[test]
fn test_edit_keeps_position() {
    let mut store = store_with(3);
    let id = store.unorganized()[1].id;
    assert!(store.edit_bookmark(&id, "renamed", "https://renamed.example"));
    assert_eq!(store.unorganized()[1].id, id);
    assert_eq!(store.unorganized()[1].title, "renamed");
}

#[test]
fn test_edit_missing_is_noop() {
    let mut store = store_with(2);
    let before = store.clone();
    assert!(!store.edit_bookmark(&BookmarkId::new_v4(), "x", "y"));
    assert_eq!(store, before);
}

// === Import / export ===

#[test]
fn test_import_replaces_previous_organization() {
    let mut store = store_with(3);
    let folder = store.create_folder("F").unwrap();
    let id = store.unorganized()[0].id;
    store.move_bookmark(&id, Destination::Folder(folder), UnresolvedDestination::Drop);

    let summary = store.import_html(
        r#"<A HREF="http://new">New</A>"#,
        &ImportOptions::default(),
    );

    assert_eq!(summary.imported, 1);
    assert_eq!(summary.discarded, 3);
    assert!(store.folders().is_empty());
    assert_eq!(store.unorganized()[0].title, "New");
}

#[test]
fn test_round_trip_single_bookmark() {
    let mut store = Store::new();
    store.import_html(r#"<DL><p><DT><A HREF="http://a">A</A></DL>"#, &ImportOptions::default());
    let folder = store.create_folder("F").unwrap();
    let id = store.unorganized()[0].id;
    store.move_bookmark(&id, Destination::Folder(folder), UnresolvedDestination::Drop);

    let html = export_html(&store, &ExportOptions::default());

    let heading = html.find(r#"<H3 ADD_DATE="0">F</H3>"#).expect("folder heading");
    let anchor = html
        .find(r#"<A HREF="http://a" ADD_DATE="0">A</A>"#)
        .expect("anchor");
    assert!(heading < anchor);
}

#[test]
fn test_export_excludes_unorganized_by_default() {
    let mut store = store_with(2);
    let folder = store.create_folder("Kept").unwrap();
    let filed = store.unorganized()[0].id;
    store.move_bookmark(&filed, Destination::Folder(folder), UnresolvedDestination::Drop);

    let html = export_html(&store, &ExportOptions::default());
    assert!(html.contains("http://b0.example"));
    assert!(!html.contains("http://b1.example"), "unfiled bookmark is not exported");

    let html = export_html(
        &store,
        &ExportOptions {
            include_unorganized: true,
        },
    );
    assert!(html.contains(r#"  <DT><A HREF="http://b1.example" ADD_DATE="0">b1</A>"#));
}
