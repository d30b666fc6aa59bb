//! Shared test helpers: a scripted in-memory transport.

#![allow(dead_code)]

use async_trait::async_trait;
use dynect_client::{Credentials, DynectError, HttpRequest, Result, Session, Transport};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE_URL: &str = "https://api.dynect.test/REST";
pub const TOKEN: &str = "Zb1kWXNzMjdpemlmYkZOa";

/// Transport that replays scripted bodies and records every request
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    responses: VecDeque<Scripted>,
    requests: Vec<HttpRequest>,
}

struct Scripted {
    delay: Option<Duration>,
    outcome: Result<String>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body
    pub fn respond(&self, body: Value) -> &Self {
        self.respond_raw(&body.to_string())
    }

    /// Queue a raw body
    pub fn respond_raw(&self, body: &str) -> &Self {
        self.script(None, Ok(body.to_string()))
    }

    /// Queue a JSON body delivered only after `delay`
    pub fn respond_after(&self, body: Value, delay: Duration) -> &Self {
        self.script(Some(delay), Ok(body.to_string()))
    }

    /// Queue a transport failure
    pub fn fail(&self, detail: &str) -> &Self {
        self.script(None, Err(DynectError::Transport(detail.to_string())))
    }

    /// Queue a transport failure reported only after `delay`
    pub fn fail_after(&self, detail: &str, delay: Duration) -> &Self {
        self.script(Some(delay), Err(DynectError::Transport(detail.to_string())))
    }

    fn script(&self, delay: Option<Duration>, outcome: Result<String>) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Scripted { delay, outcome });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<String> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            state.responses.pop_front()
        };
        let Some(Scripted { delay, outcome }) = scripted else {
            return Err(DynectError::Transport("no scripted response".to_string()));
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

pub fn session(transport: &FakeTransport) -> Session {
    Session::builder()
        .base_url(BASE_URL)
        .transport(transport.clone())
        .build()
        .expect("session should build")
}

/// A session that has already logged in with [`TOKEN`]
pub async fn connected(transport: &FakeTransport) -> Session {
    let session = session(transport);
    transport.respond(success(json!({"token": TOKEN, "version": "3.7.0"})));
    session
        .connect(&credentials())
        .await
        .expect("login should succeed");
    transport.clear_requests();
    session
}

pub fn credentials() -> Credentials {
    Credentials::new("acme", "ops", "hunter2")
}

pub fn success(data: Value) -> Value {
    json!({
        "status": "success",
        "data": data,
        "job_id": 1_000_001,
        "msgs": [{"INFO": "ok", "SOURCE": "API-B", "ERR_CD": null, "LVL": "INFO"}]
    })
}

pub fn failure(info: &str) -> Value {
    json!({
        "status": "failure",
        "data": {},
        "job_id": 1_000_002,
        "msgs": [{"INFO": info, "SOURCE": "BLL", "ERR_CD": "INVALID_DATA", "LVL": "ERROR"}]
    })
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}/{path}/")
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request had no body"))
        .expect("body should be JSON")
}
