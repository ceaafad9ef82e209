use crate::config::AppConfig;
use crate::llm::{ChatBackend, ChatRequest, LlmError};
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Backend that answers every model the same way and records the models asked.
#[derive(Clone)]
pub struct StubBackend {
    reply: Result<String, (u16, String)>,
    pub asked: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            asked: Arc::default(),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ChatBackend for StubBackend {
    fn complete(&self, _api_key: &str, request: &ChatRequest) -> Result<String, LlmError> {
        self.asked.lock().unwrap().push(request.model.clone());
        match &self.reply {
            Ok(content) => Ok(content.clone()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        models: vec!["o1".into(), "gpt-3.5-turbo".into()],
        ..AppConfig::default()
    }
}

pub fn test_state(backend: StubBackend) -> AppState {
    AppState::with_backend(test_config(), backend)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp)).unwrap()
}
