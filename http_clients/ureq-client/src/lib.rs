use anyhow::{Context, Result, anyhow};
use mmcoms_core::net::{FormPart, HttpBody, HttpClient, HttpRequest, HttpResponse};
use ureq::Agent;
use ureq::unversioned::multipart::{Form, Part};

/// HTTP client implementation using `ureq` for blocking HTTP requests.
///
/// The agent is configured to hand back every status code, so 401 and 5xx
/// answers reach the caller as responses instead of transport errors.
#[derive(Clone)]
pub struct UreqHttpClient {
    agent: Agent,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = match request.method.as_str() {
            "POST" => {
                let mut req = self.agent.post(&request.url);
                for (key, value) in &request.headers {
                    req = req.header(key, value);
                }
                match &request.body {
                    Some(HttpBody::Bytes(body)) => req.send(&body[..]),
                    Some(HttpBody::Form(parts)) => req.send(build_form(parts)?),
                    None => req.send_empty(),
                }
                .with_context(|| format!("POST {}", request.url))?
            }
            method => {
                return Err(anyhow!("Unsupported HTTP method: {}", method));
            }
        };

        let status_code = response.status().as_u16();
        log::debug!("POST {} -> {}", request.url, status_code);

        // ureq caps `read_to_vec` at 10 MB by default; responses are passed
        // through whole.
        let mut body = response.into_body();
        let body_bytes = body
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .context("failed to read response body")?;

        Ok(HttpResponse {
            status_code,
            body: body_bytes,
        })
    }
}

/// Builds a ureq form borrowing from `parts`. ureq sets the
/// `multipart/form-data` content type and boundary when it is sent.
fn build_form(parts: &[FormPart]) -> Result<Form<'_>> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                filename,
                content_type,
                data,
            } => form.part(
                name,
                Part::bytes(data)
                    .file_name(filename)
                    .mime_str(content_type)
                    .with_context(|| format!("invalid content type for part {name}"))?,
            ),
        };
    }
    Ok(form)
}
