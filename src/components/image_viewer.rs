//! Full-size image modal for case images.

use leptos::prelude::*;

use crate::state::modal::ModalId;

/// Shows `src` full size while it is set; closing clears it.
///
/// Backdrop clicks are handled by the app-level listener via the element id.
#[component]
pub fn ImageViewer(src: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div
            id=ModalId::ImageViewer.element_id()
            class="modal modal--image"
            style:display=move || if src.with(Option::is_some) { "block" } else { "none" }
        >
            <div class="modal__content modal__content--image">
                <button class="modal__close" type="button" on:click=move |_| src.set(None) title="Close">
                    "✕"
                </button>
                <img class="modal__image" src=move || src.get().unwrap_or_default() alt="Case image" />
            </div>
        </div>
    }
}
