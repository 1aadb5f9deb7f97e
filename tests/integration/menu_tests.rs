//! Console menu tests with scripted input

use library_catalog::cli::Menu;
use tempfile::TempDir;

use crate::common;

async fn run_script(dir: &TempDir, script: &str) -> String {
    let services = common::services(dir).await;
    let mut output = Vec::new();
    Menu::new(services.catalog, script.as_bytes(), &mut output)
        .run()
        .await
        .expect("Menu failed");
    String::from_utf8(output).expect("Menu output is not UTF-8")
}

#[tokio::test]
async fn test_list_empty_then_exit() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "5\n6\n").await;
    assert!(output.contains("The library is empty."));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_add_manually_and_list() {
    let dir = TempDir::new().unwrap();
    let output = run_script(
        &dir,
        "2\nThe Great Gatsby\nF. Scott Fitzgerald\n978-0-7432-7356-5\n5\n6\n",
    )
    .await;
    assert!(output.contains("Added: The Great Gatsby by F. Scott Fitzgerald (ISBN: 978-0-7432-7356-5)"));
    assert!(output.contains("--- Library Books ---"));
    assert!(output.contains("---------"));
}

#[tokio::test]
async fn test_add_by_isbn_duplicate() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\n9780451524935\n1\n9780451524935\n6\n").await;
    assert!(output.contains("Added: Nineteen Eighty-Four by George Orwell (ISBN: 9780451524935)"));
    assert!(output.contains("Error: Book with ISBN 9780451524935 already exists"));
}

#[tokio::test]
async fn test_lookup_failure_keeps_running() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "1\n0000000000\n5\n6\n").await;
    assert!(output.contains("not found in Open Library"));
    assert!(output.contains("The library is empty."));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_find_and_remove() {
    let dir = TempDir::new().unwrap();
    let output = run_script(
        &dir,
        "2\n1984\nGeorge Orwell\n978-0-452-28423-4\n4\n978-0-452-28423-4\n3\n978-0-452-28423-4\n3\n978-0-452-28423-4\n6\n",
    )
    .await;
    assert!(output.contains("Found: 1984 by George Orwell (ISBN: 978-0-452-28423-4)"));
    assert!(output.contains("Removed book with ISBN: 978-0-452-28423-4"));
    assert!(output.contains("Error: Book with ISBN 978-0-452-28423-4 not found"));
}

#[tokio::test]
async fn test_invalid_choice_and_eof() {
    let dir = TempDir::new().unwrap();
    let output = run_script(&dir, "9\n").await;
    assert!(output.contains("Invalid choice"));
    assert!(!output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_menu_changes_persist() {
    let dir = TempDir::new().unwrap();
    run_script(&dir, "2\nTest Book\nTest Author\n978-1-234-56789-0\n6\n").await;

    let output = run_script(&dir, "5\n6\n").await;
    assert!(output.contains("Test Book by Test Author (ISBN: 978-1-234-56789-0)"));
}
