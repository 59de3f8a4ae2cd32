// Integration tests for the front desk
//
// Tests cover:
// - Intent loading from disk, including degraded loads
// - Chat matching and logging
// - Backup export / restore round trips
// - Intent editing persisted across reloads

use chatdesk::config::config::StorageConfig;
use chatdesk::models::Intent;
use chatdesk::services::{
    BackupError, FALLBACK_RESPONSE, FrontDesk, FrontDeskService, IntentStore, LoadIssue,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn temp_storage() -> (PathBuf, StorageConfig) {
    let dir = std::env::temp_dir().join(format!("chatdesk-it-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let storage = StorageConfig {
        intents_path: dir.join("intents.json"),
        backup_path: dir.join("backup.json"),
    };
    (dir, storage)
}

const INTENTS: &str = r#"{
    "intents": [
        {"tag": "greeting", "patterns": ["hello", "hi"], "responses": ["Hi there!", "Hello!"]},
        {"tag": "booking", "patterns": ["appointment", "book"], "responses": ["Use the appointment form."]}
    ]
}"#;

#[tokio::test]
async fn test_desk_answers_from_intents_file() {
    let (_dir, storage) = temp_storage();
    std::fs::write(&storage.intents_path, INTENTS).unwrap();

    let desk = FrontDesk::open(&storage).await;

    assert_eq!(desk.chat("Hi, how are you?").await.text(), "Hi there!");
    assert_eq!(
        desk.chat("Can I BOOK a slot?").await.text(),
        "Use the appointment form."
    );
    assert_eq!(desk.chat("tell me a joke").await.text(), FALLBACK_RESPONSE);
    assert_eq!(desk.snapshot().await.chat_logs.len(), 3);
}

#[tokio::test]
async fn test_malformed_intents_file_degrades_to_empty() {
    let (_dir, storage) = temp_storage();
    std::fs::write(&storage.intents_path, "{\"intents\": [ oops").unwrap();

    let load = IntentStore::load(&storage.intents_path).await;
    assert!(matches!(load.issue(), Some(LoadIssue::Malformed(_))));

    let desk = FrontDesk::open(&storage).await;
    assert_eq!(desk.chat("hello").await.text(), FALLBACK_RESPONSE);
}

#[tokio::test]
async fn test_backup_round_trip_preserves_order() {
    let (_dir, storage) = temp_storage();
    std::fs::write(&storage.intents_path, INTENTS).unwrap();
    let desk = FrontDesk::open(&storage).await;

    for name in ["A", "B", "C"] {
        desk.submit_appointment(BTreeMap::from([("name".to_string(), name.to_string())]))
            .await;
    }
    desk.chat("hello").await;
    desk.chat("book").await;
    let before = desk.snapshot().await;

    desk.export_backup().await.unwrap();

    let other = FrontDesk::open(&storage).await;
    other
        .restore_backup(Some(storage.backup_path.as_path()))
        .await
        .unwrap();
    let after = other.snapshot().await;

    assert_eq!(after, before);
    let names: Vec<_> = after
        .appointments
        .iter()
        .map(|a| a.field("name").unwrap())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_restore_scenario_document() {
    let (_dir, storage) = temp_storage();
    let path = storage.backup_path.clone();
    std::fs::write(
        &path,
        r#"{"appointments": [{"name": "A", "timestamp": "2024-01-01 10:00"}], "chat_logs": []}"#,
    )
    .unwrap();

    let desk = FrontDesk::open(&storage).await;
    desk.chat("something").await;
    desk.restore_backup(Some(path.as_path())).await.unwrap();

    let doc = desk.snapshot().await;
    assert!(doc.chat_logs.is_empty());
    assert_eq!(doc.appointments.len(), 1);
    assert_eq!(doc.appointments[0].field("name"), Some("A"));
    assert_eq!(doc.appointments[0].timestamp.as_deref(), Some("2024-01-01 10:00"));
}

#[tokio::test]
async fn test_restore_invalid_json_is_reported() {
    let (_dir, storage) = temp_storage();
    std::fs::write(&storage.backup_path, "[1, 2").unwrap();

    let desk = FrontDesk::open(&storage).await;
    let err = desk
        .restore_backup(Some(storage.backup_path.as_path()))
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::Parse(_)));
}

#[tokio::test]
async fn test_added_intent_survives_restart() {
    let (_dir, storage) = temp_storage();
    std::fs::write(&storage.intents_path, INTENTS).unwrap();

    let desk = FrontDesk::open(&storage).await;
    let intent = Intent::new("hours", ["open"], ["We are open 9 to 5."]);
    desk.add_intent(intent.clone()).await.unwrap();

    let restarted = FrontDesk::open(&storage).await;
    let doc = restarted.intents().await;
    assert_eq!(doc.intents.len(), 3);
    assert_eq!(doc.intents[2], intent);
    assert_eq!(
        restarted.chat("When are you open?").await.text(),
        "We are open 9 to 5."
    );
}

#[tokio::test]
async fn test_restored_appointment_without_timestamp_exports_unchanged() {
    let (_dir, storage) = temp_storage();
    let source = storage.backup_path.with_file_name("legacy.json");
    std::fs::write(&source, r#"{"appointments": [{"name": "A"}]}"#).unwrap();

    let desk = FrontDesk::open(&storage).await;
    desk.restore_backup(Some(source.as_path())).await.unwrap();
    desk.export_backup().await.unwrap();

    let exported: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&storage.backup_path).unwrap()).unwrap();
    assert_eq!(
        exported,
        serde_json::json!({"appointments": [{"name": "A"}], "chat_logs": []})
    );
}
