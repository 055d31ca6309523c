//! Test doubles and request helpers for unit tests
//!
//! `StubRepository` answers from a fixed set of records and records every
//! call, so tests can check which repository operation a service used and how
//! often. `save` echoes its input without storing it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use tpfoyer::{CrudRepository, DomainError, Entity, Etudiant, Foyer, Universite};

use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    FindAll,
    FindById(i64),
    Save(Option<i64>),
    DeleteById(i64),
    Count,
    ExistsById(i64),
    DeleteAll,
}

pub struct StubRepository<E> {
    records: Vec<E>,
    calls: Mutex<Vec<RepoCall>>,
}

impl<E: Entity> StubRepository<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn times(&self, call: &RepoCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for StubRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        self.record(RepoCall::FindAll);
        Ok(self.records.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        self.record(RepoCall::FindById(id));
        Ok(self.records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn save(&self, record: &E) -> Result<E, DomainError> {
        self.record(RepoCall::Save(record.id()));
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        self.record(RepoCall::DeleteById(id));
        Ok(self.records.iter().any(|r| r.id() == Some(id)))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.record(RepoCall::Count);
        Ok(self.records.len() as u64)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        self.record(RepoCall::ExistsById(id));
        Ok(self.records.iter().any(|r| r.id() == Some(id)))
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.record(RepoCall::DeleteAll);
        Ok(())
    }
}

/// Repositories backing a stubbed [`AppState`]
pub struct StubRepositories {
    pub foyers: Arc<StubRepository<Foyer>>,
    pub universites: Arc<StubRepository<Universite>>,
    pub etudiants: Arc<StubRepository<Etudiant>>,
}

impl StubRepositories {
    pub fn new(foyers: Vec<Foyer>, universites: Vec<Universite>, etudiants: Vec<Etudiant>) -> Self {
        Self {
            foyers: Arc::new(StubRepository::with_records(foyers)),
            universites: Arc::new(StubRepository::with_records(universites)),
            etudiants: Arc::new(StubRepository::with_records(etudiants)),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.foyers.clone(),
            self.universites.clone(),
            self.etudiants.clone(),
        )
    }

    pub fn router(&self) -> Router {
        crate::app(self.state(), &crate::AppConfig::default())
    }
}

/// Build a request with an optional JSON body
pub fn request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Response status, content type and body (`Null` when empty or not JSON)
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
    pub text: String,
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);

    TestResponse {
        status,
        content_type,
        body,
        text,
    }
}
