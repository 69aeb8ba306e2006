//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{Method, RawResponse, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Answers requests from a queue and records every call.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<RawResponse, String>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_string() }));
    }

    pub fn push_transport_error(&self, detail: &str) {
        self.responses.borrow_mut().push_back(Err(detail.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, String> {
        self.calls.borrow_mut().push(Call { method, path: path.to_string(), body: body.cloned() });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(format!("no scripted response for {} {}", method, path)))
    }
}
