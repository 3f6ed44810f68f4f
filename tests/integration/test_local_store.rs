// ローカルファイル上のレコードストアのテスト
use std::fs;
use tempfile::TempDir;
use user_store::{storage::local::LocalStorageBackend, RecordStore, User};

fn users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User::new(i.to_string(), format!("user{i}@example.com"), 20 + i as i64))
        .collect()
}

#[test]
fn test_add_then_find_round_trip_for_many_users() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    let store = RecordStore::new(LocalStorageBackend::new());

    for user in users(5) {
        let item = serde_json::to_string(&user).unwrap();
        let outcome = store.add(&file, &item).unwrap();
        assert!(outcome.is_applied());
        store.persist(&file, &outcome.bytes).unwrap();

        let found = store.find_by_id(&file, &user.id).unwrap();
        let decoded: User = serde_json::from_slice(&found).unwrap();
        assert_eq!(decoded, user);
    }

    let stored: Vec<User> = serde_json::from_slice(&fs::read(&file).unwrap()).unwrap();
    assert_eq!(stored, users(5));
}

#[test]
fn test_remove_keeps_relative_order() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    fs::write(&file, serde_json::to_vec(&users(4)).unwrap()).unwrap();
    let store = RecordStore::new(LocalStorageBackend::new());

    let outcome = store.remove(&file, "1").unwrap();
    store.persist(&file, &outcome.bytes).unwrap();

    let stored: Vec<User> = serde_json::from_slice(&fs::read(&file).unwrap()).unwrap();
    let ids: Vec<&str> = stored.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "2", "3"]);
}

#[test]
fn test_existing_duplicates_on_disk_are_not_validated() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("user.json");
    let duplicated = vec![User::new("1", "a@x.com", 1), User::new("1", "b@x.com", 2)];
    fs::write(&file, serde_json::to_vec(&duplicated).unwrap()).unwrap();
    let store = RecordStore::new(LocalStorageBackend::new());

    // 読み込み時には重複を検査しない
    assert_eq!(store.list(&file).unwrap(), serde_json::to_vec(&duplicated).unwrap());
    let found: User = serde_json::from_slice(&store.find_by_id(&file, "1").unwrap()).unwrap();
    assert_eq!(found.email, "a@x.com");

    let outcome = store.add(&file, r#"{"id":"2","email":"c@x.com","age":3}"#).unwrap();
    assert!(outcome.is_applied());
}
