use curio::marks::{MarkSet, BOOKMARKS_KEY, PROGRESS_KEY};
use curio::store::fs::FileStore;
use curio::store::StateStore;

#[test]
fn test_marks_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut marks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    marks.toggle("ai-1");
    marks.toggle("web-2");
    drop(marks);

    let reopened = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    assert_eq!(reopened.len(), 2);
    assert!(reopened.contains("ai-1"));
    assert!(reopened.contains("web-2"));
}

#[test]
fn test_toggle_off_is_durable_too() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut marks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    marks.toggle("ai-1");
    marks.toggle("web-2");
    marks.toggle("ai-1");
    drop(marks);

    let reopened = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    assert!(!reopened.contains("ai-1"));
    assert!(reopened.contains("web-2"));
}

#[test]
fn test_slot_file_holds_a_sorted_json_array() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut marks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    marks.toggle("web-2");
    marks.toggle("ai-1");

    let payload = std::fs::read_to_string(temp_dir.path().join("bookmarks.json")).unwrap();
    assert_eq!(payload, r#"["ai-1","web-2"]"#);
}

#[test]
fn test_corrupt_slot_falls_back_to_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("bookmarks.json"), "{ not json").unwrap();

    let marks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    assert!(marks.is_empty());
}

#[test]
fn test_corrupt_slot_is_replaced_on_next_toggle() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("progress.json"), "42").unwrap();

    let mut marks = MarkSet::open(FileStore::new(temp_dir.path()), PROGRESS_KEY);
    marks.toggle("ds-1");

    let payload = std::fs::read_to_string(temp_dir.path().join("progress.json")).unwrap();
    assert_eq!(payload, r#"["ds-1"]"#);
}

#[test]
fn test_bookmarks_and_progress_do_not_share_a_slot() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut bookmarks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    let mut progress = MarkSet::open(FileStore::new(temp_dir.path()), PROGRESS_KEY);
    bookmarks.toggle("ai-1");
    progress.toggle("web-2");
    drop(bookmarks);
    drop(progress);

    let bookmarks = MarkSet::open(FileStore::new(temp_dir.path()), BOOKMARKS_KEY);
    let progress = MarkSet::open(FileStore::new(temp_dir.path()), PROGRESS_KEY);
    assert!(bookmarks.contains("ai-1"));
    assert!(!bookmarks.contains("web-2"));
    assert!(progress.contains("web-2"));
    assert!(!progress.contains("ai-1"));
}

#[test]
fn test_store_reads_what_it_wrote() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path().join("nested").join("state"));

    assert!(store.write("bookmarks", r#"["ai-1"]"#));
    assert_eq!(store.read("bookmarks").as_deref(), Some(r#"["ai-1"]"#));
    assert_eq!(store.read("progress"), None);
}
