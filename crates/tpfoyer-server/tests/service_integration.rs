//! Service-level tests: Foyer and Universite services sharing one store

use std::sync::Arc;

use tpfoyer::{DomainError, Foyer, Universite};
use tpfoyer_server::adapters::MemoryStore;
use tpfoyer_server::AppState;

fn state() -> AppState {
    AppState::in_memory(Arc::new(MemoryStore::default()))
}

#[tokio::test]
async fn test_create_foyer_and_universite() {
    let state = state();

    let foyer = state
        .foyer_service
        .add(Foyer::new("Test Foyer Integration", 800))
        .await
        .unwrap();
    let universite = state
        .universite_service
        .add(Universite::new("Test University", "123 Test Street"))
        .await
        .unwrap();

    assert!(foyer.id.is_some());
    assert!(universite.id.is_some());
    assert_eq!(foyer.nom.as_deref(), Some("Test Foyer Integration"));
    assert_eq!(universite.nom.as_deref(), Some("Test University"));
}

#[tokio::test]
async fn test_retrieve_all_foyers_and_universites() {
    let state = state();

    state.foyer_service.add(Foyer::new("Foyer 1", 300)).await.unwrap();
    state.foyer_service.add(Foyer::new("Foyer 2", 400)).await.unwrap();
    state
        .universite_service
        .add(Universite::new("University 1", "Address 1"))
        .await
        .unwrap();
    state
        .universite_service
        .add(Universite::new("University 2", "Address 2"))
        .await
        .unwrap();

    assert_eq!(state.foyer_service.retrieve_all().await.unwrap().len(), 2);
    assert_eq!(state.universite_service.retrieve_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retrieve_foyer_and_universite_by_id() {
    let state = state();

    let foyer = state
        .foyer_service
        .add(Foyer::new("Retrieve Test Foyer", 500))
        .await
        .unwrap();
    let universite = state
        .universite_service
        .add(Universite::new("Retrieve Test University", "Retrieve Address"))
        .await
        .unwrap();

    let foyer = state.foyer_service.retrieve(foyer.id.unwrap()).await.unwrap();
    let universite = state
        .universite_service
        .retrieve(universite.id.unwrap())
        .await
        .unwrap();

    assert_eq!(foyer.nom.as_deref(), Some("Retrieve Test Foyer"));
    assert_eq!(universite.nom.as_deref(), Some("Retrieve Test University"));
}

#[tokio::test]
async fn test_delete_foyer_and_universite() {
    let state = state();

    let foyer_id = state
        .foyer_service
        .add(Foyer::new("Foyer to Delete", 200))
        .await
        .unwrap()
        .id
        .unwrap();
    let universite_id = state
        .universite_service
        .add(Universite::new("University to Delete", "Delete Address"))
        .await
        .unwrap()
        .id
        .unwrap();

    state.foyer_service.remove(foyer_id).await.unwrap();
    state.universite_service.remove(universite_id).await.unwrap();

    assert!(state.foyer_service.retrieve(foyer_id).await.unwrap_err().is_not_found());
    assert!(state
        .universite_service
        .retrieve(universite_id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_concurrent_operations() {
    let state = state();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .foyer_service
                    .add(Foyer::new(format!("Concurrent Foyer {}", i), 100 + i))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(state.foyer_service.retrieve_all().await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_one_foyer_per_universite() {
    let state = state();

    let foyer = state
        .foyer_service
        .add(Foyer::new("Foyer Unique", 120))
        .await
        .unwrap();
    state
        .universite_service
        .add(Universite::new("First", "Here").with_foyer(foyer.clone()))
        .await
        .unwrap();

    let err = state
        .universite_service
        .add(Universite::new("Second", "There").with_foyer(foyer))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Conflict(_)));
}
