//! Minimal stand-in for the code-push REST API.
//!
//! Serves canned JSON per route and records every request line so tests
//! can assert which calls were made.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

fn drain_chunks(reader: &mut impl BufRead) {
    loop {
        let mut size_line = String::new();
        if reader.read_line(&mut size_line).unwrap_or(0) == 0 {
            return;
        }
        let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
        let mut chunk = vec![0u8; size + 2];
        if reader.read_exact(&mut chunk).is_err() || size == 0 {
            return;
        }
    }
}

pub struct FakeService {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeService {
    /// Start serving. Each route is matched by prefix against "METHOD path".
    pub fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake service");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let mut reader = BufReader::new(stream);
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                let mut content_length = 0usize;
                let mut chunked = false;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                        break;
                    }
                    let lower = line.to_ascii_lowercase();
                    if let Some(v) = lower.strip_prefix("content-length:") {
                        content_length = v.trim().parse().unwrap_or(0);
                    }
                    if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
                        chunked = true;
                    }
                }
                if chunked {
                    drain_chunks(&mut reader);
                } else {
                    let mut body = vec![0u8; content_length];
                    let _ = reader.read_exact(&mut body);
                }

                let request = request_line.trim().to_string();
                recorded.lock().unwrap().push(request.clone());

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| request.starts_with(prefix))
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, r#"{"message":"no route"}"#.to_string()));
                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = reader.get_mut().write_all(response.as_bytes());
            }
        });

        Self { url, requests }
    }

    /// Routes for app `abc123` with release `1.0.0` and a `stable` channel.
    /// Creating a channel always answers with `beta`.
    pub fn counter_app() -> Self {
        Self::start(vec![
            (
                "GET /api/v1/apps",
                200,
                r#"[{"app_id":"abc123","display_name":"Counter"}]"#.to_string(),
            ),
            (
                "GET /api/v1/releases",
                200,
                r#"[{"id":1,"app_id":"abc123","version":"1.0.0"}]"#.to_string(),
            ),
            (
                "GET /api/v1/channels",
                200,
                r#"[{"id":7,"app_id":"abc123","channel":"stable"}]"#.to_string(),
            ),
            (
                "POST /api/v1/channels",
                201,
                r#"{"id":8,"app_id":"abc123","channel":"beta"}"#.to_string(),
            ),
            (
                "POST /api/v1/patches/promote",
                201,
                "{}".to_string(),
            ),
            (
                "POST /api/v1/patches/42/artifacts",
                201,
                "{}".to_string(),
            ),
            (
                "POST /api/v1/patches",
                200,
                r#"{"id":42,"number":3}"#.to_string(),
            ),
        ])
    }

    /// Request lines received so far, e.g. `GET /api/v1/apps HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn received(&self, prefix: &str) -> bool {
        self.requests().iter().any(|r| r.starts_with(prefix))
    }
}
