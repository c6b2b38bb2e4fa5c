//! Generic create/edit/delete controller state for one record modal.
//!
//! DESIGN
//! ======
//! Network calls are split into a synchronous `begin_*` step that reads state
//! and builds the request, the caller's `Backend::send`, and a synchronous
//! `settle_*` step that applies the result. Reactive callers keep state in a
//! signal across the await; tests drive the same steps directly.
//!
//! Submit branches on the edit target: present means update, absent means
//! create. A failed call leaves the modal open; a successful one closes it
//! and yields an [`Outcome`] whose presentation reloads the page.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde_json::{Map, Value};

use super::form::{FieldSpec, FormValues};
use super::records::Record;
use crate::net::api::{
    ApiRequest, Backend, FilePart, Method, MultipartForm, RequestBody, RequestError, create_endpoint, delete_endpoint,
    record_endpoint, update_endpoint,
};
use crate::net::types::{ApiResponse, EntityKind};

/// Which endpoint a submission targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Update(String),
}

/// Image part accompanying a submission (case files only).
#[derive(Clone, Debug, PartialEq)]
pub enum Upload<I> {
    /// Plain JSON body, no image field.
    None,
    /// Multipart body with this file.
    File(FilePart<I>),
    /// JSON body asking the backend to drop the stored image.
    Clear,
}

/// A payload ready to send, captured when submit began.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub kind: EntityKind,
    pub action: Action,
    pub payload: Value,
}

impl Submission {
    pub fn is_update(&self) -> bool {
        matches!(self.action, Action::Update(_))
    }

    pub fn endpoint(&self, base: &str) -> String {
        match &self.action {
            Action::Create => create_endpoint(base, self.kind),
            Action::Update(id) => update_endpoint(base, self.kind, id),
        }
    }

    /// Build the HTTP request: JSON unless a file is uploaded.
    pub fn to_request<I>(&self, base: &str, upload: Upload<I>) -> ApiRequest<I> {
        let url = self.endpoint(base);
        let body = match upload {
            Upload::None => RequestBody::Json(self.payload.clone()),
            Upload::Clear => {
                let mut payload = self.payload.clone();
                if let Value::Object(map) = &mut payload {
                    map.insert("image".to_owned(), Value::String(String::new()));
                }
                RequestBody::Json(payload)
            }
            Upload::File(file) => RequestBody::Multipart(MultipartForm { fields: form_fields(&self.payload), file: Some(file) }),
        };
        ApiRequest { method: Method::Post, url, body }
    }
}

/// Flatten a JSON payload into multipart text parts.
pub fn form_fields(payload: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = payload else {
        return Vec::new();
    };
    map.iter()
        .map(|(key, value)| {
            let text = match value {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

/// Result of a controller operation, handed to a presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created { kind: EntityKind, id: Option<i64> },
    Updated { kind: EntityKind, id: String },
    Deleted { kind: EntityKind, id: String },
    /// The operator declined a confirmation.
    Aborted,
    /// A submit was already in flight.
    Busy,
    Failed(RequestError),
}

impl Outcome {
    /// Whether the backend state changed and the page must reload.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Updated { .. } | Self::Deleted { .. })
    }
}

/// State of one record modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub kind: EntityKind,
    pub fields: &'static [FieldSpec],
    pub open: bool,
    /// Id of the record being edited; `None` while creating.
    pub target: Option<String>,
    pub form: FormValues,
    /// A populate-on-edit fetch is pending.
    pub loading: bool,
    /// A submit is pending.
    pub in_flight: bool,
}

impl EditorState {
    pub fn new<R: Record>() -> Self {
        Self {
            kind: R::KIND,
            fields: R::FIELDS,
            open: false,
            target: None,
            form: FormValues::defaults(R::FIELDS),
            loading: false,
            in_flight: false,
        }
    }

    pub fn title(&self) -> String {
        match self.target {
            Some(_) => format!("Edit {}", self.kind.label()),
            None => format!("Create New {}", self.kind.label()),
        }
    }

    /// Clear the target, reset the form and show the modal.
    pub fn open_create(&mut self) {
        self.target = None;
        self.form = FormValues::defaults(self.fields);
        self.loading = false;
        self.open = true;
    }

    /// Record the edit target and return the fetch request for its values.
    pub fn begin_edit<I>(&mut self, base: &str, id: &str) -> ApiRequest<I> {
        self.target = Some(id.to_owned());
        self.loading = true;
        self.open = false;
        ApiRequest { method: Method::Get, url: record_endpoint(base, self.kind, id), body: RequestBody::Empty }
    }

    /// Populate the form and show the modal, or report the failed fetch.
    ///
    /// A backend without a detail route answers 404; the modal then opens in
    /// edit mode on a reset form, the way record pages without populate
    /// support behave. Results for a target that is no longer current are
    /// ignored.
    pub fn finish_edit(&mut self, id: &str, fetched: Result<FormValues, RequestError>) -> Option<Outcome> {
        if self.target.as_deref() != Some(id) || !self.loading {
            return None;
        }
        self.loading = false;
        match fetched {
            Ok(form) => {
                self.form = form;
                self.open = true;
                None
            }
            Err(RequestError::Status { status: 404, .. }) => {
                self.form = FormValues::defaults(self.fields);
                self.open = true;
                None
            }
            Err(e) => {
                self.target = None;
                Some(Outcome::Failed(e))
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    /// Capture the payload and mark the submit in flight.
    ///
    /// # Errors
    ///
    /// Returns [`Outcome::Busy`] while an earlier submit is pending, and
    /// [`Outcome::Failed`] if the payload cannot be serialized.
    pub fn begin_submit<R: Record>(&mut self) -> Result<Submission, Outcome> {
        if self.in_flight {
            return Err(Outcome::Busy);
        }
        let payload = serde_json::to_value(R::from_form(&self.form))
            .map_err(|e| Outcome::Failed(RequestError::Encode(e.to_string())))?;
        let action = match self.target.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Action::Update(id.to_owned()),
            None => Action::Create,
        };
        self.in_flight = true;
        Ok(Submission { kind: self.kind, action, payload })
    }

    /// Apply the backend's answer to a submission.
    pub fn settle_submit(&mut self, submission: &Submission, result: Result<Value, RequestError>) -> Outcome {
        self.in_flight = false;
        match result {
            Ok(body) => {
                self.close();
                match &submission.action {
                    Action::Create => {
                        let id = serde_json::from_value::<ApiResponse>(body).ok().and_then(|r| r.id);
                        Outcome::Created { kind: submission.kind, id }
                    }
                    Action::Update(id) => Outcome::Updated { kind: submission.kind, id: id.clone() },
                }
            }
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Decode a detail response into form values for `R`.
///
/// `null` columns read as the field's empty value.
///
/// # Errors
///
/// Returns [`RequestError::Parse`] when the body does not match `R`.
pub fn decode_record<R: Record>(body: Value) -> Result<FormValues, RequestError> {
    let body = match body {
        Value::Object(map) => Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => other,
    };
    let record: R = serde_json::from_value(body).map_err(|e| RequestError::Parse(e.to_string()))?;
    Ok(record.to_form())
}

pub fn delete_request<I>(base: &str, kind: EntityKind, id: &str) -> ApiRequest<I> {
    ApiRequest { method: Method::Post, url: delete_endpoint(base, kind, id), body: RequestBody::Json(Value::Object(Map::new())) }
}

/// Confirmation question shown before deleting a `kind` record.
pub fn delete_prompt(kind: EntityKind) -> String {
    format!("Are you sure you want to delete this {}? This action cannot be undone.", kind.label().to_lowercase())
}

/// Delete a record after the operator answered the confirmation.
///
/// Declining performs no network call.
pub async fn delete_record<B: Backend>(backend: &B, base: &str, kind: EntityKind, id: &str, confirmed: bool) -> Outcome {
    if !confirmed {
        return Outcome::Aborted;
    }
    match backend.send(delete_request(base, kind, id)).await {
        Ok(_) => Outcome::Deleted { kind, id: id.to_owned() },
        Err(e) => Outcome::Failed(e),
    }
}
