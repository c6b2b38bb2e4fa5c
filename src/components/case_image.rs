//! Case image input with in-modal cropping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the case modal only. The crop session holds JS handles,
//! so it lives in a thread-local signal; the preview object URL is tracked
//! beside it so it can be revoked when replaced or released.
//!
//! ERROR HANDLING
//! ==============
//! Attach and export failures are logged at warn level and leave the chosen
//! file in place, so the case can still be saved with the uncropped image.

use leptos::prelude::*;

use crate::state::crop::{CropSession, CropStage, SourceFile};
use crate::state::editor::{EditorState, Upload};
use crate::util::browser::{ImageBlob, ImageHost, clear_file_input, object_url, revoke_object_url, selected_file};
use crate::util::cropper::CropperJs;

/// Crop session plus the DOM handles it drives.
#[derive(Clone, Copy)]
pub struct ImageExtension {
    session: RwSignal<CropSession<CropperJs>, LocalStorage>,
    preview: RwSignal<Option<String>>,
    input: NodeRef<leptos::html::Input>,
    host: NodeRef<leptos::html::Img>,
}

impl ImageExtension {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(CropSession::new()),
            preview: RwSignal::new(None),
            input: NodeRef::new(),
            host: NodeRef::new(),
        }
    }

    pub fn stage(&self) -> CropStage {
        self.session.with(CropSession::stage)
    }

    /// Image part for the next submit.
    pub fn upload(&self, editing: bool) -> Upload<ImageBlob> {
        self.session.with_untracked(|s| s.upload(editing))
    }

    /// Whether a file is chosen or a cropper is open.
    pub fn has_selection(&self) -> bool {
        self.session.with_untracked(|s| s.source().is_some() || s.stage() != CropStage::Empty)
    }

    /// Destroy any widget, drop the crop and reset the file input.
    pub fn release(&self) {
        self.session.update(CropSession::clear);
        self.set_preview(None);
        clear_file_input(self.input.get_untracked());
    }

    pub(crate) fn select(&self, file: Option<SourceFile<ImageBlob>>) {
        self.set_preview(None);
        let session = self.session;
        self.with_host(move |host| {
            session.update(|s| {
                if let Err(e) = s.select_file(host, file) {
                    leptos::logging::warn!("image cropper unavailable: {e}");
                }
            });
        });
    }

    fn apply(&self) {
        let Some(export) = self.session.with_untracked(|s| s.begin_apply()) else {
            return;
        };
        let ext = *self;
        leptos::task::spawn_local(async move {
            let exported = export.await;
            let finished = ext.session.try_update(|s| s.finish_apply(exported));
            match finished {
                Some(Ok(())) => {
                    let url = ext.session.with_untracked(|s| s.cropped().and_then(object_url));
                    ext.set_preview(url);
                }
                Some(Err(e)) => leptos::logging::warn!("crop failed: {e}"),
                None => {}
            }
        });
    }

    fn crop_again(&self) {
        let session = self.session;
        self.with_host(move |host| {
            session.update(|s| {
                if let Err(e) = s.crop_again(host) {
                    leptos::logging::warn!("could not reopen cropper: {e}");
                }
            });
        });
    }

    fn remove(&self) {
        self.session.update(CropSession::remove);
        self.set_preview(None);
        clear_file_input(self.input.get_untracked());
    }

    fn set_preview(&self, url: Option<String>) {
        if let Some(old) = self.preview.get_untracked() {
            revoke_object_url(&old);
        }
        self.preview.set(url);
    }

    fn with_host(&self, f: impl FnOnce(&ImageHost)) {
        #[cfg(feature = "csr")]
        {
            if let Some(img) = self.host.get_untracked() {
                f(&img);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.host;
            f(&());
        }
    }
}

impl Default for ImageExtension {
    fn default() -> Self {
        Self::new()
    }
}

/// File input, crop stage and controls for the case image.
#[component]
pub fn CaseImageField(image: ImageExtension, editor: RwSignal<EditorState>) -> impl IntoView {
    let stage = move || image.stage();
    let cropping = move || stage() == CropStage::Cropping;
    let has_source = move || image.session.with(|s| s.source().is_some());
    let removed = move || image.session.with(CropSession::removed);
    let editing = move || editor.with(|s| s.target.is_some());

    let run = move |f: fn(&CropSession<CropperJs>)| image.session.with_untracked(f);

    view! {
        <div class="case-image">
            <label class="dialog__label">
                "Image"
                <input
                    node_ref=image.input
                    class="dialog__input"
                    type="file"
                    name="image"
                    accept="image/*"
                    on:change=move |ev| image.select(selected_file(&ev))
                />
            </label>

            <div class="case-image__stage" style:display=move || if cropping() { "block" } else { "none" }>
                <img node_ref=image.host class="case-image__source" alt="Image to crop" />
                <div class="case-image__tools">
                    <button class="btn" type="button" on:click=move |_| run(|s| s.rotate(-90.0))>"⟲"</button>
                    <button class="btn" type="button" on:click=move |_| run(|s| s.rotate(90.0))>"⟳"</button>
                    <button class="btn" type="button" on:click=move |_| run(|s| s.zoom(0.1))>"+"</button>
                    <button class="btn" type="button" on:click=move |_| run(|s| s.zoom(-0.1))>"−"</button>
                    <button class="btn" type="button" on:click=move |_| run(CropSession::reset)>"Reset"</button>
                    <button class="btn" type="button" on:click=move |_| image.session.update(CropSession::cancel)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="button" on:click=move |_| image.apply()>
                        "Apply Crop"
                    </button>
                </div>
            </div>

            <Show when=move || stage() == CropStage::Cropped>
                <div class="case-image__preview">
                    <img src=move || image.preview.get().unwrap_or_default() alt="Cropped preview" />
                    <button class="btn" type="button" on:click=move |_| image.crop_again()>
                        "Crop Again"
                    </button>
                </div>
            </Show>

            <Show when=move || has_source() || editing()>
                <button class="btn btn--danger" type="button" on:click=move |_| image.remove()>
                    "Remove Image"
                </button>
            </Show>
            <Show when=move || removed() && editing()>
                <p class="dialog__danger">"The current image will be removed when you save."</p>
            </Show>
        </div>
    }
}
