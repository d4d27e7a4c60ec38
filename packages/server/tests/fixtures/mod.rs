//! Test fixtures: an in-process server bound to an ephemeral port.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use parlor_server::{ServerConfig, serve};
use serde_json::Value;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Server with the default timings (sweeps effectively never run in a test).
    pub async fn start() -> Self {
        Self::start_with(Duration::from_secs(15), Duration::from_secs(10)).await
    }

    pub async fn start_with(sweep_interval: Duration, stale_after: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let config = ServerConfig::with_timings(addr, sweep_interval, stale_after);
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let stop = async move {
                let _ = rx.await;
            };
            serve(listener, &config, stop)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            shutdown: Some(shutdown),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

/// Thin client for the chat API
pub struct ChatClient {
    base_url: String,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(server: &TestServer) -> Self {
        Self {
            base_url: server.base_url(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn register(&self, name: &str) -> reqwest::Response {
        self.http
            .post(format!("{}/participants", self.base_url))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn participants(&self, user: Option<&str>) -> reqwest::Response {
        let mut request = self.http.get(format!("{}/participants", self.base_url));
        if let Some(user) = user {
            request = request.header("user", user);
        }
        request.send().await.expect("Failed to send request")
    }

    pub async fn post_message(&self, user: Option<&str>, body: Value) -> reqwest::Response {
        let mut request = self
            .http
            .post(format!("{}/messages", self.base_url))
            .json(&body);
        if let Some(user) = user {
            request = request.header("user", user);
        }
        request.send().await.expect("Failed to send request")
    }

    pub async fn messages(&self, user: Option<&str>, limit: Option<&str>) -> reqwest::Response {
        let mut url = format!("{}/messages", self.base_url);
        if let Some(limit) = limit {
            url = format!("{url}?limit={limit}");
        }
        let mut request = self.http.get(url);
        if let Some(user) = user {
            request = request.header("user", user);
        }
        request.send().await.expect("Failed to send request")
    }

    /// Messages visible to `user`, parsed
    pub async fn messages_for(&self, user: &str, limit: Option<&str>) -> Vec<Value> {
        let response = self.messages(Some(user), limit).await;
        assert_eq!(response.status(), 200);
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn heartbeat(&self, user: Option<&str>) -> reqwest::Response {
        let mut request = self.http.post(format!("{}/status", self.base_url));
        if let Some(user) = user {
            request = request.header("user", user);
        }
        request.send().await.expect("Failed to send request")
    }

    pub async fn edit_message(&self, user: &str, id: &str, body: Value) -> reqwest::Response {
        self.http
            .put(format!("{}/messages/{}", self.base_url, id))
            .header("user", user)
            .json(&body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn delete_message(&self, user: Option<&str>, id: &str) -> reqwest::Response {
        let mut request = self
            .http
            .delete(format!("{}/messages/{}", self.base_url, id));
        if let Some(user) = user {
            request = request.header("user", user);
        }
        request.send().await.expect("Failed to send request")
    }
}
