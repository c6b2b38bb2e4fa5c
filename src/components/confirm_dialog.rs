//! Delete confirmation dialog.

use leptos::prelude::*;

use crate::net::types::EntityKind;
use crate::state::editor::delete_prompt;

/// A delete waiting for the operator's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: String,
}

/// Dialog shown while a delete is pending; answers through `on_answer`.
#[component]
pub fn ConfirmDeleteDialog(pending: RwSignal<Option<PendingDelete>>, on_answer: Callback<bool>) -> impl IntoView {
    view! {
        <Show when=move || pending.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| on_answer.run(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>
                        {move || pending.with(|p| p.as_ref().map(|p| format!("Delete {}", p.kind.label())))}
                    </h2>
                    <p class="dialog__danger">
                        {move || pending.with(|p| p.as_ref().map(|p| delete_prompt(p.kind)))}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_answer.run(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_answer.run(true)>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
