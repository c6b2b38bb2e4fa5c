//! REST API helpers for the record endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: [`HttpBackend`] returns [`RequestError::Unavailable`] since the
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`RequestError`]; callers skip their success path
//! and turn the error into an operator-facing notice. Nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::EntityKind;
use crate::config::ClientConfig;
use crate::util::browser::ImageBlob;

/// Message used when a failed response carries no `error` field.
pub const FALLBACK_ERROR: &str = "Request failed";

/// Errors produced by record API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not valid JSON of the expected shape.
    #[error("invalid response: {0}")]
    Parse(String),

    /// The request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// HTTP calls are only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl RequestError {
    /// Operator-facing text: the backend's message for status failures.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A binary file part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePart<I> {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub data: I,
}

/// Text fields plus an optional file, sent as `multipart/form-data`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartForm<I> {
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart<I>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody<I> {
    Empty,
    Json(Value),
    Multipart(MultipartForm<I>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest<I> {
    pub method: Method,
    pub url: String,
    pub body: RequestBody<I>,
}

/// Something that can deliver an [`ApiRequest`] and return the JSON body.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Binary payload type carried by multipart file parts.
    type Image;

    /// Send `request`, returning the parsed JSON body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] for transport failures, non-2xx statuses,
    /// and unparsable bodies.
    async fn send(&self, request: ApiRequest<Self::Image>) -> Result<Value, RequestError>;
}

pub fn create_endpoint(base: &str, kind: EntityKind) -> String {
    format!("{base}/{}/create/", kind.segment())
}

pub fn update_endpoint(base: &str, kind: EntityKind, id: &str) -> String {
    format!("{base}/{}/{id}/update/", kind.segment())
}

pub fn delete_endpoint(base: &str, kind: EntityKind, id: &str) -> String {
    format!("{base}/{}/{id}/delete/", kind.segment())
}

/// Detail endpoint used to populate the edit form.
pub fn record_endpoint(base: &str, kind: EntityKind, id: &str) -> String {
    format!("{base}/{}/{id}/", kind.segment())
}

/// Map an HTTP status and decoded body to the caller-facing result.
///
/// Non-2xx is a failure regardless of body; the backend's `error` field is
/// used as the message when present.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for non-2xx statuses and
/// [`RequestError::Parse`] for 2xx responses whose body failed to decode.
pub fn interpret_response(status: u16, body: Result<Value, String>) -> Result<Value, RequestError> {
    if (200..300).contains(&status) {
        return body.map_err(RequestError::Parse);
    }
    let message = body
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_owned());
    Err(RequestError::Status { status, message })
}

/// Browser HTTP backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Backend for HttpBackend {
    type Image = ImageBlob;

    async fn send(&self, request: ApiRequest<ImageBlob>) -> Result<Value, RequestError> {
        #[cfg(feature = "csr")]
        {
            let url = request.url.clone();
            let result = send_browser(&self.config, request).await;
            if let Err(e) = &result {
                leptos::logging::warn!("API error: {url}: {e}");
            }
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(RequestError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_browser(config: &ClientConfig, request: ApiRequest<ImageBlob>) -> Result<Value, RequestError> {
    use gloo_net::http::Request;

    let token = super::csrf::read_token(config);
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    }
    .header(super::csrf::CSRF_HEADER, &token);

    let prepared = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(&value),
        RequestBody::Multipart(form) => builder.body(multipart_form_data(&form)?),
    }
    .map_err(|e| RequestError::Encode(e.to_string()))?;

    let resp = prepared.send().await.map_err(|e| RequestError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.json::<Value>().await.map_err(|e| e.to_string());
    interpret_response(status, body)
}

#[cfg(feature = "csr")]
fn multipart_form_data(form: &MultipartForm<ImageBlob>) -> Result<web_sys::FormData, RequestError> {
    let encode = |e: wasm_bindgen::JsValue| RequestError::Encode(format!("{e:?}"));

    let data = web_sys::FormData::new().map_err(encode)?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value).map_err(encode)?;
    }
    if let Some(part) = &form.file {
        let options = web_sys::FilePropertyBag::new();
        options.set_type(&part.content_type);
        let file = web_sys::File::new_with_blob_sequence_and_options(
            &js_sys::Array::of1(&part.data),
            &part.file_name,
            &options,
        )
        .map_err(encode)?;
        data.append_with_blob_and_filename(&part.field, &file, &part.file_name)
            .map_err(encode)?;
    }
    Ok(data)
}
