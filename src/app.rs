//! Root component: record controllers, overlays and page command routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted on top of a server-rendered record page. It owns one controller
//! per record type, the delete confirmation, the image viewer and the notice
//! tray, and listens for clicks on the page's `data-intel-*` buttons and on
//! modal backdrops.
//!
//! DESIGN
//! ======
//! [`record_controller`] is the single generic controller; the five record
//! types differ only in their `Record` impl. Async work runs on
//! `spawn_local` between the synchronous `begin_*`/`settle_*` transitions of
//! `EditorState`, and every result is handed to the presenter.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::case_image::{CaseImageField, ImageExtension};
use crate::components::confirm_dialog::{ConfirmDeleteDialog, PendingDelete};
use crate::components::image_viewer::ImageViewer;
use crate::components::notice_tray::{BrowserPresenter, NoticeTray};
use crate::components::record_modal::RecordModal;
use crate::config::ClientConfig;
use crate::net::api::{Backend, HttpBackend};
use crate::net::types::{CaseFile, EntityKind, Gang, Incident, Member, Relationship};
use crate::state::editor::{EditorState, Upload, decode_record, delete_record};
use crate::state::modal::{ModalId, PageCommand};
use crate::state::notice::{NoticeState, present};
use crate::state::records::Record;

/// Signals and callbacks driving one record modal.
#[derive(Clone, Copy)]
pub struct RecordController {
    pub editor: RwSignal<EditorState>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<String>,
    pub close: Callback<()>,
    pub submit: Callback<()>,
}

/// Build the controller for record type `R`.
///
/// `image` is the case image extension; its session is released whenever
/// the modal opens or closes and its upload joins the submit.
pub fn record_controller<R: Record>(
    backend: HttpBackend,
    presenter: BrowserPresenter,
    image: Option<ImageExtension>,
) -> RecordController {
    let editor = RwSignal::new(EditorState::new::<R>());
    let release = move || {
        if let Some(image) = image {
            image.release();
        }
    };

    let open_create = Callback::new(move |()| {
        release();
        editor.update(EditorState::open_create);
    });

    let open_edit = {
        let backend = backend.clone();
        Callback::new(move |id: String| {
            release();
            let Some(request) = editor.try_update(|s| s.begin_edit(&backend.config().api_base, &id)) else {
                return;
            };
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let fetched = match backend.send(request).await {
                    Ok(body) => decode_record::<R>(body),
                    Err(e) => Err(e),
                };
                if let Some(outcome) = editor.try_update(|s| s.finish_edit(&id, fetched)).flatten() {
                    present(&presenter, &outcome);
                }
            });
        })
    };

    let close = Callback::new(move |()| {
        editor.update(EditorState::close);
        release();
    });

    let submit = Callback::new(move |()| {
        let submission = match editor.try_update(|s| s.begin_submit::<R>()) {
            Some(Ok(submission)) => submission,
            Some(Err(outcome)) => {
                present(&presenter, &outcome);
                return;
            }
            None => return,
        };
        let upload = image.map_or(Upload::None, |image| image.upload(submission.is_update()));
        let request = submission.to_request(&backend.config().api_base, upload);
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.send(request).await;
            let Some(outcome) = editor.try_update(|s| s.settle_submit(&submission, result)) else {
                return;
            };
            if outcome.is_success() {
                release();
            }
            present(&presenter, &outcome);
        });
    });

    RecordController { editor, open_create, open_edit, close, submit }
}

/// The five record controllers.
#[derive(Clone, Copy)]
pub struct Controllers {
    gang: RecordController,
    member: RecordController,
    incident: RecordController,
    case: RecordController,
    relationship: RecordController,
}

impl Controllers {
    pub fn get(&self, kind: EntityKind) -> RecordController {
        match kind {
            EntityKind::Gang => self.gang,
            EntityKind::Member => self.member,
            EntityKind::Incident => self.incident,
            EntityKind::Case => self.case,
            EntityKind::Relationship => self.relationship,
        }
    }
}

fn build_controllers(backend: &HttpBackend, presenter: BrowserPresenter, case_image: ImageExtension) -> Controllers {
    Controllers {
        gang: record_controller::<Gang>(backend.clone(), presenter, None),
        member: record_controller::<Member>(backend.clone(), presenter, None),
        incident: record_controller::<Incident>(backend.clone(), presenter, None),
        case: record_controller::<CaseFile>(backend.clone(), presenter, Some(case_image)),
        relationship: record_controller::<Relationship>(backend.clone(), presenter, None),
    }
}

/// Page-level routing target shared by the click listener.
#[derive(Clone, Copy)]
struct Router {
    controllers: Controllers,
    pending_delete: RwSignal<Option<PendingDelete>>,
    viewer: RwSignal<Option<String>>,
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
impl Router {
    fn dispatch(&self, command: PageCommand) {
        match command {
            PageCommand::Create(kind) => self.controllers.get(kind).open_create.run(()),
            PageCommand::Edit(kind, id) => self.controllers.get(kind).open_edit.run(id),
            PageCommand::Delete(kind, id) => self.pending_delete.set(Some(PendingDelete { kind, id })),
            PageCommand::ViewImage(src) => self.viewer.set(Some(src)),
        }
    }

    fn close(&self, modal: ModalId) {
        match modal.entity() {
            Some(kind) => self.controllers.get(kind).close.run(()),
            None => self.viewer.set(None),
        }
    }
}

/// Route a window click to a backdrop close or a page command.
#[cfg(feature = "csr")]
fn route_click(router: Router, ev: &leptos::ev::MouseEvent) {
    use wasm_bindgen::JsCast;

    use crate::state::modal::{ACTION_ATTR, ACTION_SELECTOR, ENTITY_ATTR, ID_ATTR, SRC_ATTR};

    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    if let Some(modal) = ModalId::from_element_id(&target.id()) {
        router.close(modal);
        return;
    }
    let Ok(Some(button)) = target.closest(ACTION_SELECTOR) else {
        return;
    };
    let action = button.get_attribute(ACTION_ATTR).unwrap_or_default();
    let entity = button.get_attribute(ENTITY_ATTR);
    let id = button.get_attribute(ID_ATTR);
    let src = button.get_attribute(SRC_ATTR);
    match PageCommand::from_attributes(&action, entity.as_deref(), id.as_deref(), src.as_deref()) {
        Some(command) => {
            ev.prevent_default();
            router.dispatch(command);
        }
        None => leptos::logging::warn!("ignoring page action {action:?}"),
    }
}

/// Edit-mode root mounted over the record page.
#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    let notices = RwSignal::new(NoticeState::default());
    let presenter = BrowserPresenter { notices, reload_delay_ms: config.reload_delay_ms };
    let backend = HttpBackend::new(config);
    let case_image = ImageExtension::new();

    let controllers = build_controllers(&backend, presenter, case_image);
    let pending_delete = RwSignal::new(None::<PendingDelete>);
    let viewer = RwSignal::new(None::<String>);
    let router = Router { controllers, pending_delete, viewer };

    let on_delete_answer = Callback::new(move |confirmed: bool| {
        let Some(PendingDelete { kind, id }) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let base = backend.config().api_base.clone();
            let outcome = delete_record(&backend, &base, kind, &id, confirmed).await;
            present(&presenter, &outcome);
        });
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| route_click(router, &ev));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    let _ = router;

    let modal = move |c: RecordController| view! { <RecordModal editor=c.editor on_close=c.close on_submit=c.submit /> };

    view! {
        {modal(controllers.gang)}
        {modal(controllers.member)}
        {modal(controllers.incident)}
        <RecordModal
            editor=controllers.case.editor
            on_close=controllers.case.close
            on_submit=controllers.case.submit
        >
            <CaseImageField image=case_image editor=controllers.case.editor />
        </RecordModal>
        {modal(controllers.relationship)}
        <ConfirmDeleteDialog pending=pending_delete on_answer=on_delete_answer />
        <ImageViewer src=viewer />
        <NoticeTray notices=notices />
    }
}
