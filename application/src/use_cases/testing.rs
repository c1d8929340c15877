//! Scripted fakes shared by the use case tests.

use crate::ports::dispatch_logger::{DispatchEvent, DispatchLogger};
use crate::ports::progress::DispatchProgress;
use crate::ports::upstream_gateway::{GatewayError, UpstreamGateway, UpstreamResponse};
use async_trait::async_trait;
use hwhelper_domain::{
    Attempt, AttemptPayload, Endpoint, EndpointRegistry, EndpointSpec, Topic,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// What the fake upstream does for one URL
#[derive(Debug, Clone)]
pub enum Script {
    Status(u16, &'static str),
    TransportError(&'static str),
    /// Transport-level timeout reported by the gateway itself
    GatewayTimeout,
    /// Never answers; only the caller's timeout ends it
    Hang,
    /// 200 with `{"result": <payload topic>}`
    EchoTopic,
}

/// Gateway fake scripted per URL, counting calls.
///
/// Unscripted URLs answer `404`.
pub struct ScriptedGateway {
    scripts: HashMap<String, Script>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn on(mut self, url: &str, script: Script) -> Self {
        self.scripts.insert(url.to_string(), script);
        self
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl UpstreamGateway for ScriptedGateway {
    async fn post(
        &self,
        endpoint: &Endpoint,
        payload: &AttemptPayload,
    ) -> Result<UpstreamResponse, GatewayError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.url().to_string())
            .or_insert(0) += 1;

        match self.scripts.get(endpoint.url()) {
            Some(Script::Status(status, body)) => Ok(UpstreamResponse::new(*status, *body)),
            Some(Script::TransportError(detail)) => {
                Err(GatewayError::Transport(detail.to_string()))
            }
            Some(Script::GatewayTimeout) => Err(GatewayError::Timeout),
            Some(Script::Hang) => std::future::pending().await,
            Some(Script::EchoTopic) => Ok(UpstreamResponse::new(
                200,
                serde_json::json!({ "result": payload.topic() }).to_string(),
            )),
            None => Ok(UpstreamResponse::new(404, "no script")),
        }
    }
}

/// Registry over `urls` with a fixed test credential
pub fn registry(urls: &[&str]) -> EndpointRegistry {
    EndpointRegistry::new(
        urls.iter().map(|u| EndpointSpec::new(*u)).collect(),
        "test-token",
    )
    .unwrap()
}

/// Progress notifier that records every callback
pub struct TrackingProgress {
    started: Mutex<Vec<String>>,
    completed: Mutex<Vec<Attempt>>,
    finished: Mutex<Option<bool>>,
}

impl TrackingProgress {
    pub fn new() -> Self {
        Self {
            started: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
            finished: Mutex::new(None),
        }
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<Attempt> {
        self.completed.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Option<bool> {
        *self.finished.lock().unwrap()
    }
}

impl DispatchProgress for TrackingProgress {
    fn on_dispatch_start(&self, _topic: &Topic, _total_endpoints: usize) {}

    fn on_attempt_start(&self, _index: usize, endpoint: &Endpoint) {
        self.started.lock().unwrap().push(endpoint.url().to_string());
    }

    fn on_attempt_complete(&self, _index: usize, attempt: &Attempt) {
        self.completed.lock().unwrap().push(attempt.clone());
    }

    fn on_dispatch_complete(&self, success: bool) {
        *self.finished.lock().unwrap() = Some(success);
    }
}

/// Logger that keeps event types in order
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl DispatchLogger for RecordingLogger {
    fn log(&self, event: DispatchEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}
