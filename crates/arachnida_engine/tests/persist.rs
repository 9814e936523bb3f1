use std::fs;

use arachnida_engine::{ensure_output_dir, ImageStore, PersistError, SaveOutcome};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("nested").join("data");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert!(files_in(&new_dir).is_empty());
}

#[test]
fn output_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = ImageStore::open(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::OutputDir(_)));
}

#[test]
fn first_save_writes_under_original_name() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    let outcome = store.save("cat.png", b"meow").unwrap();
    assert_eq!(outcome, SaveOutcome::Written(temp.path().join("cat.png")));
    assert_eq!(fs::read(temp.path().join("cat.png")).unwrap(), b"meow");
}

#[test]
fn identical_content_is_skipped_not_rewritten() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    store.save("cat.png", b"meow").unwrap();
    let outcome = store.save("cat.png", b"meow").unwrap();

    assert_eq!(outcome, SaveOutcome::Duplicate(temp.path().join("cat.png")));
    assert_eq!(files_in(temp.path()), vec!["cat.png"]);
}

#[test]
fn different_content_gets_next_numbered_name() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    store.save("cat.png", b"one").unwrap();
    let second = store.save("cat.png", b"two").unwrap();
    let third = store.save("cat.png", b"three").unwrap();

    assert_eq!(second, SaveOutcome::Written(temp.path().join("cat(1).png")));
    assert_eq!(third, SaveOutcome::Written(temp.path().join("cat(2).png")));
    assert_eq!(fs::read(temp.path().join("cat(2).png")).unwrap(), b"three");
    assert_eq!(
        files_in(temp.path()),
        vec!["cat(1).png", "cat(2).png", "cat.png"]
    );
}

#[test]
fn duplicate_of_a_numbered_variant_is_skipped() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    store.save("cat.png", b"one").unwrap();
    store.save("cat.png", b"two").unwrap();
    let outcome = store.save("cat.png", b"two").unwrap();

    assert_eq!(outcome, SaveOutcome::Duplicate(temp.path().join("cat(1).png")));
    assert_eq!(files_in(temp.path()), vec!["cat(1).png", "cat.png"]);
}

#[test]
fn numbered_name_is_the_smallest_free_index() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.png"), b"original").unwrap();
    fs::write(temp.path().join("cat(2).png"), b"someone else").unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    let outcome = store.save("cat.png", b"new").unwrap();
    assert_eq!(outcome, SaveOutcome::Written(temp.path().join("cat(1).png")));
}

#[test]
fn same_content_under_different_names_is_written_twice() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    store.save("cat.png", b"same").unwrap();
    let outcome = store.save("dog.png", b"same").unwrap();

    assert_eq!(outcome, SaveOutcome::Written(temp.path().join("dog.png")));
    assert_eq!(files_in(temp.path()), vec!["cat.png", "dog.png"]);
}

#[test]
fn extensionless_names_are_numbered_at_the_end() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::open(temp.path()).unwrap();

    store.save("image", b"a").unwrap();
    let outcome = store.save("image", b"b").unwrap();
    assert_eq!(outcome, SaveOutcome::Written(temp.path().join("image(1)")));
}
