#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::response::IntoResponse;
use financeai_backend::routes::create_router;
use financeai_backend::services::gateway::{CompletionGateway, GatewayError};
use financeai_backend::state::AppState;
use serde_json::Value;

pub enum Behaviour {
    Reply(&'static str),
    MissingKey,
    EmptyCandidates,
}

/// Gateway double that records every prompt it receives.
pub struct FakeGateway {
    behaviour: Behaviour,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self { behaviour, calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionGateway for FakeGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.behaviour {
            Behaviour::Reply(text) => Ok(text.to_string()),
            Behaviour::MissingKey => Err(GatewayError::MissingApiKey),
            Behaviour::EmptyCandidates => Err(GatewayError::EmptyCandidates),
        }
    }
}

pub fn app_with(gateway: Arc<dyn CompletionGateway>) -> Router {
    create_router().with_state(Arc::new(AppState::new(gateway)))
}

pub fn post_chat(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// What the mock upstream saw on its last hit.
#[derive(Default)]
pub struct Recorded {
    pub hits: usize,
    pub uri: Option<Uri>,
    pub body: Option<Value>,
}

/// Serves a fixed answer for any path on an ephemeral local port.
pub async fn spawn_upstream(status: StatusCode, answer: Value, delay: Duration) -> (String, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let seen = recorded.clone();

    let app = Router::new().fallback(move |uri: Uri, Json(body): Json<Value>| {
        let seen = seen.clone();
        let answer = answer.clone();
        async move {
            {
                let mut rec = seen.lock().unwrap();
                rec.hits += 1;
                rec.uri = Some(uri);
                rec.body = Some(body);
            }
            tokio::time::sleep(delay).await;
            (status, Json(answer)).into_response()
        }
    });

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}
