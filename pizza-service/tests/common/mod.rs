#![allow(dead_code)]

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use pizza_service::config::{ObservabilityConfig, OpenAiConfig, PizzaConfig};
use pizza_service::startup::Application;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;

/// A request captured by the stub upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct StubState {
    status: StatusCode,
    reply: Value,
    captured: Mutex<Vec<CapturedRequest>>,
}

/// Local stand-in for the OpenAI chat completions API.
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    /// Upstream that answers 200 with `content` as the first choice.
    pub async fn answering(content: &str) -> Self {
        Self::spawn(
            StatusCode::OK,
            serde_json::json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 812, "completion_tokens": 1, "total_tokens": 813 }
            }),
        )
        .await
    }

    pub async fn spawn(status: StatusCode, reply: Value) -> Self {
        let state = Arc::new(StubState {
            status,
            reply,
            captured: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub upstream");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/v1", port),
            state,
        }
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }
}

async fn chat_completions(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    state
        .captured
        .lock()
        .unwrap()
        .push(CapturedRequest { authorization, body });

    (state.status, Json(state.reply.clone()))
}

pub fn test_config(base_url: &str, api_key_var: &str) -> PizzaConfig {
    PizzaConfig {
        common: CoreConfig {
            port: 0,
            log_level: "info".to_string(),
        },
        openai: OpenAiConfig {
            base_url: base_url.to_string(),
            api_key_var: api_key_var.to_string(),
            timeout_secs: 5,
            ..OpenAiConfig::default()
        },
        observability: ObservabilityConfig {
            otlp_endpoint: None,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the full application with the OpenAI provider.
    pub async fn spawn(config: PizzaConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self { address, port }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.address)
    }
}

/// Collects JSON log lines emitted while its guard is held.
///
/// The guard sets a thread-local default subscriber, so it only sees events
/// from the current thread; `#[tokio::test]` runs on a single thread.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .json()
            .flatten_event(true)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Every captured event, one JSON object per line.
    pub fn events(&self) -> Vec<Value> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Captured events whose message is `message`.
    pub fn events_with_message(&self, message: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event["message"] == message)
            .collect()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
