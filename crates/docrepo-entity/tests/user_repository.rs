//! End-to-end behaviour of the user repository over the in-memory store.

use std::sync::Arc;

use docrepo_core::config::RepositoryConfig;
use docrepo_core::error::ErrorKind;
use docrepo_core::traits::{Repository, Store};
use docrepo_core::types::Filter;
use docrepo_entity::user::{User, UserRepository, user_repository};
use docrepo_store::memory::MemoryStore;

const PASSWORD: &str = "correct-horse-battery-staple-42";

fn setup(page_size: u64) -> (Arc<MemoryStore>, UserRepository) {
    let memory = Arc::new(MemoryStore::new());
    let store: Arc<dyn Store> = memory.clone();
    let repo = user_repository(store, &RepositoryConfig { page_size });
    (memory, repo)
}

#[tokio::test]
async fn test_save_and_find_by_email() {
    let (_, repo) = setup(50);
    let user = User::new("ada@example.com", PASSWORD);
    repo.save(&user).await.unwrap();

    let found = repo
        .find_one(&Filter::by("email", "ada@example.com"), None)
        .await
        .unwrap();
    assert_eq!(found, user);

    let by_id = repo
        .find_one(&Filter::by("id", user.id), None)
        .await
        .unwrap();
    assert_eq!(by_id.email, "ada@example.com");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (memory, repo) = setup(50);
    repo.save(&User::new("x@x.com", PASSWORD)).await.unwrap();

    let err = repo.save(&User::new("x@x.com", PASSWORD)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(err.message, "email 'x@x.com' already exists");
    assert_eq!(memory.len("users"), 1);
}

#[tokio::test]
async fn test_updating_keeps_single_document() {
    let (memory, repo) = setup(50);
    let mut user = User::new("ada@example.com", PASSWORD);
    repo.save(&user).await.unwrap();

    user.email = "lovelace@example.com".into();
    user.touch();
    repo.save(&user).await.unwrap();

    assert_eq!(memory.len("users"), 1);
    assert!(
        !repo
            .exists(&Filter::by("email", "ada@example.com"), None)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_weak_password_never_reaches_the_store() {
    let (memory, repo) = setup(50);
    let err = repo
        .save(&User::new("ada@example.com", "password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.details, vec!["password: is too weak".to_string()]);
    assert!(memory.is_empty("users"));
}

#[tokio::test]
async fn test_missing_email_is_required() {
    let (_, repo) = setup(50);
    let err = repo.save(&User::new("", PASSWORD)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Required);
    assert_eq!(err.message, "Required 'email'");
}

#[tokio::test]
async fn test_soft_deleted_user_frees_email() {
    let (memory, repo) = setup(50);
    let mut user = User::new("x@x.com", PASSWORD);
    repo.save(&user).await.unwrap();

    user.soft_delete();
    repo.save(&user).await.unwrap();
    assert_eq!(repo.count(&Filter::new(), None).await.unwrap(), 0);

    repo.save(&User::new("x@x.com", PASSWORD)).await.unwrap();
    assert_eq!(repo.count(&Filter::new(), None).await.unwrap(), 1);
    assert_eq!(memory.len("users"), 2);
}

#[tokio::test]
async fn test_search_and_paginate() {
    let (_, repo) = setup(2);
    for email in ["ada@example.com", "grace@example.com", "alan@other.org"] {
        repo.save(&User::new(email, PASSWORD)).await.unwrap();
    }

    let matches = repo
        .find_many(&Filter::new(), None, Some("EXAMPLE"))
        .await
        .unwrap();
    assert_eq!(matches.len(), 2);

    let page = repo.paginate(&Filter::new(), Some(1), None).await.unwrap();
    assert_eq!(page.total_docs, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.limit, 2);
    assert!(page.has_next_page);

    let second = repo.find_many(&Filter::new(), Some(1), None).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].email, "alan@other.org");
}

#[tokio::test]
async fn test_search_must_be_alphanumeric() {
    let (_, repo) = setup(50);
    let err = repo
        .find_many(&Filter::new(), None, Some("ada@example"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}
