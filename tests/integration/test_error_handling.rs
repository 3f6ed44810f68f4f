// エラーハンドリングの統合テスト
use std::fs;
use tempfile::TempDir;
use user_store::{storage::local::LocalStorageBackend, App, Options, UserStoreError};

#[test]
fn test_remove_missing_id_leaves_file_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    // 整形済みの内容は再エンコードされると変わってしまう
    let original = "[\n  {\"id\": \"1\", \"email\": \"a@x.com\", \"age\": 30}\n]\n";
    fs::write(&file, original).unwrap();

    let app = App::new(LocalStorageBackend::new());
    let options = Options::new("remove")
        .with_file_name(file.to_str().unwrap())
        .with_id("2");
    let mut output: Vec<u8> = Vec::new();
    app.run(&options, &mut output).unwrap();

    assert_eq!(output, b"Item with id 2 not found");
    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn test_duplicate_add_leaves_file_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    let original = "[ {\"id\": \"1\", \"email\": \"a@x.com\", \"age\": 30} ]";
    fs::write(&file, original).unwrap();

    let app = App::new(LocalStorageBackend::new());
    let options = Options::new("add")
        .with_file_name(file.to_str().unwrap())
        .with_item(r#"{"id":"1","email":"other@x.com","age":1}"#);
    let mut output: Vec<u8> = Vec::new();
    app.run(&options, &mut output).unwrap();

    assert_eq!(output, b"Item with id 1 already exists");
    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn test_unreadable_location_is_fatal_io() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("missing_dir").join("user.json");

    let app = App::new(LocalStorageBackend::new());
    let options = Options::new("list").with_file_name(file.to_str().unwrap());
    let error = app.run(&options, &mut Vec::<u8>::new()).unwrap_err();

    assert!(matches!(error, UserStoreError::FatalIo { .. }));
    assert!(error.is_fatal());
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_validation_happens_before_file_access() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");

    let app = App::new(LocalStorageBackend::new());
    let options = Options::new("add").with_file_name(file.to_str().unwrap());
    let error = app.run(&options, &mut Vec::<u8>::new()).unwrap_err();

    assert_eq!(error.to_string(), "-item flag has to be specified");
    assert!(!file.exists());
}

#[test]
fn test_non_array_file_is_fatal_decode() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    fs::write(&file, r#"{"id":"1"}"#).unwrap();

    let app = App::new(LocalStorageBackend::new());
    let options = Options::new("findById")
        .with_file_name(file.to_str().unwrap())
        .with_id("1");
    let error = app.run(&options, &mut Vec::<u8>::new()).unwrap_err();

    assert!(matches!(error, UserStoreError::FatalDecode { .. }));
}
