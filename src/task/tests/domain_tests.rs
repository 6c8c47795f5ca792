//! Domain tests for task records and identifiers.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::task::domain::{Task, TaskDomainError, TaskId};
use rstest::rstest;

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_id_rejects_blank_values(#[case] value: &str) {
    assert_eq!(TaskId::new(value), Err(TaskDomainError::EmptyTaskId));
}

#[test]
fn task_id_preserves_opaque_values_verbatim() {
    let id = TaskId::new("abc123").expect("valid identifier");
    assert_eq!(id.as_str(), "abc123");
    assert_eq!(id.to_string(), "abc123");
}

#[test]
fn generated_task_ids_are_unique_uuids() {
    let first = TaskId::generate();
    let second = TaskId::generate();
    assert_ne!(first, second);
    uuid::Uuid::parse_str(first.as_str()).expect("generated identifier is a UUID");
}

#[test]
fn task_id_serializes_transparently() {
    let id = TaskId::new("abc123").expect("valid identifier");
    let value = serde_json::to_value(&id).expect("serializable");
    assert_eq!(value, serde_json::json!("abc123"));
}

#[test]
fn new_task_carries_no_identifier() {
    let task = Task::new("Buy milk", "2%", false);
    assert!(task.id().is_none());
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), "2%");
    assert!(!task.completed());
}

#[test]
fn with_id_forces_the_identifier() {
    let id = TaskId::new("abc123").expect("valid identifier");
    let other = TaskId::new("def456").expect("valid identifier");

    let task = Task::new("Buy milk", "2%", true).with_id(id.clone());
    assert_eq!(task.id(), Some(&id));

    // A later forcing wins, mirroring path-parameter authority on updates.
    let reassigned = task.with_id(other.clone());
    assert_eq!(reassigned.id(), Some(&other));
}

#[test]
fn into_parts_round_trips_fields() {
    let id = TaskId::new("abc123").expect("valid identifier");
    let task = Task::new("Buy milk", "2% skim", true).with_id(id.clone());

    let (part_id, title, description, completed) = task.into_parts();
    assert_eq!(part_id, Some(id));
    assert_eq!(title, "Buy milk");
    assert_eq!(description, "2% skim");
    assert!(completed);
}
