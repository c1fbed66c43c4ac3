//! Upload client for PicGo-compatible HTTP endpoints.
//!
//! Uses the curl crate (libcurl) to POST `{"list": [url]}` as JSON and reads
//! the hosted url from the `result` array of the reply.

mod response;

pub use response::parse_response;

use crate::config::PicupConfig;
use crate::error::UploadError;
use serde::Serialize;
use std::time::Duration;

/// Anything that can turn a local path or remote url into a hosted url.
///
/// Configuration is passed per call so a run never reads ambient state.
pub trait Uploader {
    fn upload(&self, cfg: &PicupConfig, url: &str) -> Result<String, UploadError>;
}

/// Request body expected by the PicGo server.
#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    list: [&'a str; 1],
}

/// Blocking PicGo client. One request per call; no retries.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Default, Clone, Copy)]
pub struct PicGoClient;

impl PicGoClient {
    pub fn new() -> Self {
        Self
    }
}

impl Uploader for PicGoClient {
    fn upload(&self, cfg: &PicupConfig, url: &str) -> Result<String, UploadError> {
        let body = serde_json::to_vec(&UploadRequest { list: [url] }).map_err(|e| {
            UploadError::InvalidResponse {
                reason: format!("encode request: {e}"),
            }
        })?;

        let mut easy = curl::easy::Easy::new();
        easy.url(&cfg.picgo_server)?;
        easy.post(true)?;
        easy.post_fields_copy(&body)?;
        if let Some(secs) = cfg.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        // Suppress `Expect: 100-continue`; the body is always small.
        headers.append("Expect:")?;
        easy.http_headers(headers)?;

        let mut reply: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                reply.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(endpoint = %cfg.picgo_server, code, bytes = reply.len(), "upload response");
        parse_response(code, &reply)
    }
}
