use anyhow::Result;
use std::collections::HashMap;

/// A simple structure to represent an HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: String, // only "POST" is issued today
    pub headers: HashMap<String, String>,
    pub body: Option<HttpBody>,
}

/// Request body. Form bodies are encoded by the transport, which also sets
/// the `multipart/form-data` content type and boundary.
#[derive(Debug, Clone)]
pub enum HttpBody {
    Bytes(Vec<u8>),
    Form(Vec<FormPart>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

impl HttpRequest {
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "POST".to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(HttpBody::Bytes(body));
        self
    }

    pub fn with_form(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Some(HttpBody::Form(parts));
        self
    }

    /// The form part called `name`, if this is a form request.
    pub fn form_part(&self, name: &str) -> Option<&FormPart> {
        match &self.body {
            Some(HttpBody::Form(parts)) => parts.iter().find(|part| part.name() == name),
            _ => None,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A simple structure for the HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Body as text. Invalid UTF-8 is replaced rather than rejected so error
    /// bodies can always be reported.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for executing blocking HTTP requests.
///
/// Implementations must hand back every status code as an `HttpResponse`;
/// `Err` is reserved for transport failures (DNS, refused connections, TLS,
/// timeouts).
pub trait HttpClient: Send + Sync {
    /// Executes a given HTTP request and returns the response.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
