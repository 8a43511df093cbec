//! Recording transport for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use oanda_rest::error::HttpError;
use oanda_rest::http::{HttpRequest, RawResponse, Transport};
use oanda_rest::prelude::*;

pub const API_KEY: &str = "68845455388b640e79cb2a8da89db3a4-test";
pub const ACCOUNT_ID: u64 = 5517316;

/// Answers requests from a queue of canned responses and records every
/// request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(RawResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        next.ok_or_else(|| HttpError::Transport("no response queued".into()))
    }
}

/// Practice-account client over a mock answering with `responses` in order.
pub fn mock_client(responses: &[(u16, &str)]) -> OandaClient<MockTransport> {
    let transport = responses
        .iter()
        .fold(MockTransport::new(), |t, (status, body)| t.respond(*status, body));
    OandaClient::with_transport(API_KEY, AccountType::Practice, transport)
}

/// Every request the client has sent so far.
pub fn sent(client: &OandaClient<MockTransport>) -> Vec<HttpRequest> {
    client.http().transport().requests()
}

pub fn last_sent(client: &OandaClient<MockTransport>) -> HttpRequest {
    client.http().transport().last_request()
}
