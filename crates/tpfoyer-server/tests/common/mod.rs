//! Shared helpers: a live server over a fresh in-memory store

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::Value;
use tokio::net::TcpListener;

use tpfoyer_server::adapters::MemoryStore;
use tpfoyer_server::{AppConfig, AppState};

pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    pub store: Arc<MemoryStore>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("tpfoyer_server=debug,tower_http=debug")
            .try_init();

        let store = Arc::new(MemoryStore::default());
        let router = tpfoyer_server::app(AppState::in_memory(store.clone()), &AppConfig::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            store,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("GET")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let res = self.get(path).await;
        assert!(res.status().is_success(), "GET {} -> {}", path, res.status());
        res.json().await.expect("json body")
    }

    pub async fn post_json(&self, path: &str, body: Value) -> Value {
        let res = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("POST");
        assert!(res.status().is_success(), "POST {} -> {}", path, res.status());
        res.json().await.expect("json body")
    }

    pub async fn put_json(&self, path: &str, body: Value) -> Value {
        let res = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("PUT");
        assert!(res.status().is_success(), "PUT {} -> {}", path, res.status());
        res.json().await.expect("json body")
    }

    pub async fn delete(&self, path: &str) -> reqwest::StatusCode {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE")
            .status()
    }
}
