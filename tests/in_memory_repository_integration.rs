//! Behavioural integration tests for the in-memory task repository.
//!
//! These tests exercise the repository through realistic storage flows,
//! verifying that it honours the persistence-port contract: identifier
//! assignment on first save, upsert on forced identifiers, and silent no-op
//! deletes.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    ports::TaskRepository,
};

#[tokio::test(flavor = "multi_thread")]
async fn save_without_identifier_assigns_one() {
    let repo = InMemoryTaskRepository::new();
    let draft = Task::new("Buy milk", "2%", false);

    let persisted = repo.save(&draft).await.expect("save should succeed");

    let id = persisted.id().expect("persisted task carries an identifier");
    assert!(!id.as_str().is_empty());
    assert_eq!(persisted.title(), "Buy milk");
    assert_eq!(persisted.description(), "2%");
    assert!(!persisted.completed());
}

#[tokio::test(flavor = "multi_thread")]
async fn save_with_identifier_replaces_the_stored_record() {
    let repo = InMemoryTaskRepository::new();
    let created = repo
        .save(&Task::new("Buy milk", "2%", false))
        .await
        .expect("initial save should succeed");
    let id = created.id().expect("identifier assigned").clone();

    let replacement = Task::new("Buy milk", "2% skim", true).with_id(id.clone());
    let replaced = repo
        .save(&replacement)
        .await
        .expect("replacement save should succeed");
    assert_eq!(replaced, replacement);

    let all = repo.find_all().await.expect("find_all should succeed");
    assert_eq!(all, vec![replacement]);
}

#[tokio::test(flavor = "multi_thread")]
async fn save_with_unknown_identifier_inserts_under_it() {
    let repo = InMemoryTaskRepository::new();
    let forced = TaskId::new("abc123").expect("valid identifier");

    let stored = repo
        .save(&Task::new("Ghost task", "appears on PUT", false).with_id(forced.clone()))
        .await
        .expect("upsert should succeed");
    assert_eq!(stored.id(), Some(&forced));

    let all = repo.find_all().await.expect("find_all should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all.first().and_then(Task::id), Some(&forced));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_only_the_named_record() {
    let repo = InMemoryTaskRepository::new();
    let keep = repo
        .save(&Task::new("keep", "", false))
        .await
        .expect("save should succeed");
    let drop_task = repo
        .save(&Task::new("drop", "", false))
        .await
        .expect("save should succeed");
    let drop_id = drop_task.id().expect("identifier assigned").clone();

    repo.delete_by_id(&drop_id)
        .await
        .expect("delete should succeed");

    let all = repo.find_all().await.expect("find_all should succeed");
    assert_eq!(all, vec![keep]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_of_absent_identifier_is_a_no_op() {
    let repo = InMemoryTaskRepository::new();
    let stored = repo
        .save(&Task::new("survivor", "", false))
        .await
        .expect("save should succeed");

    let absent = TaskId::new("never-stored").expect("valid identifier");
    repo.delete_by_id(&absent)
        .await
        .expect("deleting an absent identifier should succeed");

    let all = repo.find_all().await.expect("find_all should succeed");
    assert_eq!(all, vec![stored]);
}

#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_store() {
    let repo = InMemoryTaskRepository::new();
    let handle = repo.clone();

    let stored = handle
        .save(&Task::new("shared", "", false))
        .await
        .expect("save should succeed");

    let all = repo.find_all().await.expect("find_all should succeed");
    assert_eq!(all, vec![stored]);
}
