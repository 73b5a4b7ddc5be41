//! Scripted transport and a one-shot HTTP server shared by the API tests.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde_json::Value;

use super::client::ApiClient;
use super::transport::{ApiRequest, RawResponse, Transport, TransportError};
use crate::session::{MemoryStore, Role, Session, TokenStore};

pub const BASE_URL: &str = "https://api.test/api";
pub const TOKEN: &str = "test-token";

/// Mock transport that records every request and replays scripted outcomes.
///
/// With nothing scripted it answers `200 null`.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
    call_count: AtomicU32,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.push(Err(err))
    }

    fn push(self, outcome: Result<RawResponse, TransportError>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn calls(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, Value::Null)))
    }
}

/// Client with an empty in-memory session.
pub fn anonymous_client(
    role: Role,
    transport: MockTransport,
) -> (ApiClient<MockTransport>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone(), role);
    (ApiClient::with_transport(BASE_URL, session, transport), store)
}

/// Client whose session already holds `TOKEN` as the access token.
pub fn authed_client(
    role: Role,
    transport: MockTransport,
) -> (ApiClient<MockTransport>, Arc<MemoryStore>) {
    let (client, store) = anonymous_client(role, transport);
    store
        .set(&format!("{}AccessToken", role.prefix()), TOKEN)
        .unwrap();
    (client, store)
}

// ── Canned HTTP server ───────────────────────────────────────────────────

/// Serve one connection on a free local port with a canned raw response.
///
/// Returns the base URL and a handle that yields the request it received,
/// lowercased. The connection is closed right after `response` is written,
/// so a response shorter than its `Content-Length` arrives truncated.
pub fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("failed to accept connection");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://127.0.0.1:{}", port), handle)
}

/// Base URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !request_complete(&buf) {
        let n = stream.read(&mut chunk).expect("failed to read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).to_lowercase()
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
    let body = &buf[end + 4..];
    if head.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= length
}
