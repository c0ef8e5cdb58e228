use std::sync::Mutex;

use mmcoms_core::net::{HttpClient, HttpRequest, HttpResponse};

/// Records every request and answers each one with the same canned response.
#[derive(Debug)]
pub struct RecordingHttpClient {
    status_code: u16,
    body: Vec<u8>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            body: body.as_bytes().to_vec(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
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

impl HttpClient for RecordingHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, anyhow::Error> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::new(self.status_code, self.body.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailingMockHttpClient;

impl HttpClient for FailingMockHttpClient {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, anyhow::Error> {
        Err(anyhow::anyhow!("host unreachable"))
    }
}

/// Number of descriptors this process holds open on `path`.
#[cfg(target_os = "linux")]
pub fn open_handles_to(path: &std::path::Path) -> usize {
    let target = std::fs::canonicalize(path).unwrap();
    std::fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| std::fs::read_link(entry.path()).ok())
        .filter(|linked| *linked == target)
        .count()
}
