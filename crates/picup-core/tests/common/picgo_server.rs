//! Minimal HTTP/1.1 server standing in for the PicGo upload endpoint.
//!
//! Records every request and answers with whatever the responder closure
//! returns for it. One request per connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The single url in a `{"list": [url]}` body.
    pub fn listed_url(&self) -> String {
        let v: serde_json::Value = serde_json::from_str(&self.body).expect("json body");
        v["list"][0].as_str().expect("list[0] string").to_string()
    }
}

/// Canned reply: status code and body.
pub type Reply = (u16, String);

pub struct PicGoServer {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl PicGoServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reply with `{"success":true,"result":["<prefix><file name>"]}` for every request.
pub fn success_reply(hosted_prefix: &str) -> impl Fn(&RecordedRequest) -> Reply + Send + Sync + 'static {
    let prefix = hosted_prefix.to_string();
    move |req: &RecordedRequest| -> Reply {
        let url = req.listed_url();
        let name = url.rsplit('/').next().unwrap_or("").to_string();
        (
            200,
            serde_json::json!({ "success": true, "result": [format!("{prefix}{name}")] }).to_string(),
        )
    }
}

/// Starts the server in a background thread. Runs until the process exits.
pub fn start<F>(responder: F) -> PicGoServer
where
    F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let responder = Arc::new(responder);
    {
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let requests = Arc::clone(&requests);
                let responder = Arc::clone(&responder);
                thread::spawn(move || handle(stream, &requests, responder.as_ref()));
            }
        });
    }
    PicGoServer {
        endpoint: format!("http://127.0.0.1:{}/upload", port),
        requests,
    }
}

fn handle<F>(mut stream: TcpStream, requests: &Mutex<Vec<RecordedRequest>>, responder: &F)
where
    F: Fn(&RecordedRequest) -> Reply,
{
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let (status, body) = responder(&request);
    requests.lock().unwrap().push(request);
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = std::str::from_utf8(&buf[..header_end]).ok()?.to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..end]).to_string();

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}
