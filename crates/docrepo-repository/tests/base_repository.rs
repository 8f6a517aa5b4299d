//! Store-backed repository behaviour against the in-memory store.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use docrepo_core::error::ErrorKind;
use docrepo_core::traits::Repository;
use docrepo_core::types::Filter;

use helpers::{Account, RecordingStore, base_repository};

#[tokio::test]
async fn test_save_twice_updates_instead_of_inserting() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store.clone(), 50);
    let mut account = Account::new("ada@example.com", "Ada");

    repo.save(&account).await.unwrap();
    repo.save(&account).await.unwrap();
    assert_eq!(store.inner.len("accounts"), 1);
    assert_eq!(store.creates.load(Ordering::SeqCst), 1);
    assert_eq!(store.updates.load(Ordering::SeqCst), 1);

    account.name = "Ada Lovelace".into();
    repo.save(&account).await.unwrap();
    let found = repo
        .find_one(&Filter::by("id", account.id.clone()), None)
        .await
        .unwrap();
    assert_eq!(found, account);
    assert_eq!(store.inner.len("accounts"), 1);
}

#[tokio::test]
async fn test_soft_deleted_entities_are_invisible() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store.clone(), 50);
    let mut gone = Account::new("gone@example.com", "Gone");
    gone.is_deleted = true;
    repo.save(&gone).await.unwrap();
    repo.save(&Account::new("here@example.com", "Here"))
        .await
        .unwrap();

    let by_email = Filter::by("email", "gone@example.com");
    assert_eq!(repo.count(&by_email, None).await.unwrap(), 0);
    assert!(!repo.exists(&by_email, None).await.unwrap());
    let err = repo.find_one(&by_email, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(repo.find_many(&by_email, None, None).await.unwrap().is_empty());

    let everyone = repo.find_many(&Filter::new(), None, None).await.unwrap();
    assert_eq!(everyone.len(), 1);
    assert_eq!(everyone[0].email, "here@example.com");
}

#[tokio::test]
async fn test_filter_cannot_reveal_deleted_entities() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store, 50);
    let mut gone = Account::new("gone@example.com", "Gone");
    gone.is_deleted = true;
    repo.save(&gone).await.unwrap();

    let asks_for_deleted = Filter::by("isDeleted", true);
    assert_eq!(repo.count(&asks_for_deleted, None).await.unwrap(), 0);
}

#[tokio::test]
async fn test_saving_soft_deleted_entity_updates_it() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store.clone(), 50);
    let mut account = Account::new("ada@example.com", "Ada");
    account.is_deleted = true;
    repo.save(&account).await.unwrap();

    account.is_deleted = false;
    repo.save(&account).await.unwrap();
    assert_eq!(store.inner.len("accounts"), 1);
    assert_eq!(repo.count(&Filter::new(), None).await.unwrap(), 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive_across_searchables() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store, 50);
    repo.save(&Account::new("ada@example.com", "Ada"))
        .await
        .unwrap();
    repo.save(&Account::new("grace@example.com", "Grace Hopper"))
        .await
        .unwrap();

    assert_eq!(repo.count(&Filter::new(), Some("HOPPER")).await.unwrap(), 1);
    assert_eq!(repo.count(&Filter::new(), Some("example")).await.unwrap(), 2);
    assert!(!repo.exists(&Filter::new(), Some("nobody")).await.unwrap());

    let found = repo.find_one(&Filter::new(), Some("grace")).await.unwrap();
    assert_eq!(found.name, "Grace Hopper");
}

#[tokio::test]
async fn test_empty_search_does_not_narrow() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store, 50);
    for i in 0..3 {
        repo.save(&Account::new(&format!("u{i}@example.com"), "User"))
            .await
            .unwrap();
    }

    let filter = Filter::by("name", "User");
    let without = repo.find_many(&filter, Some(0), None).await.unwrap();
    let with_empty = repo.find_many(&filter, Some(0), Some("")).await.unwrap();
    assert_eq!(without.len(), 3);
    assert_eq!(without, with_empty);
}

#[tokio::test]
async fn test_find_many_pages_with_fixed_limit() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store, 2);
    for i in 0..5 {
        repo.save(&Account::new(&format!("u{i}@example.com"), "User"))
            .await
            .unwrap();
    }

    let first = repo.find_many(&Filter::new(), None, None).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].email, "u0@example.com");

    let last = repo.find_many(&Filter::new(), Some(2), None).await.unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].email, "u4@example.com");

    assert!(
        repo.find_many(&Filter::new(), Some(3), None)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_paginate_counts_matching_entities() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store, 2);
    for i in 0..5 {
        repo.save(&Account::new(&format!("u{i}@example.com"), "User"))
            .await
            .unwrap();
    }

    let page = repo.paginate(&Filter::new(), Some(1), None).await.unwrap();
    assert_eq!(page.total_docs, 5);
    assert_eq!(page.limit, 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next_page);
    assert_eq!(page.next_page, Some(2));
    assert!(!page.has_prev_page);

    let searched = repo.paginate(&Filter::new(), None, Some("u3")).await.unwrap();
    assert_eq!(searched.page, 0);
    assert_eq!(searched.total_docs, 1);
}

#[tokio::test]
async fn test_exists_does_not_fetch_documents() {
    let store = Arc::new(RecordingStore::default());
    let repo = base_repository(store.clone(), 50);
    repo.save(&Account::new("ada@example.com", "Ada"))
        .await
        .unwrap();
    let find_ones = store.find_ones.load(Ordering::SeqCst);

    assert!(repo.exists(&Filter::by("name", "Ada"), None).await.unwrap());
    assert_eq!(store.find_ones.load(Ordering::SeqCst), find_ones);
    assert_eq!(store.finds.load(Ordering::SeqCst), 0);
}
