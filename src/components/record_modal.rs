//! Create/edit modal for one record type.
//!
//! SYSTEM CONTEXT
//! ==============
//! One instance per entity. The outer element carries the modal's backdrop
//! id so the app-level click listener can close it; visibility follows
//! `EditorState::open`. Inputs are generated from the record's field table.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::form::{FieldKind, FieldSpec};
use crate::state::modal::ModalId;

/// Modal with a form generated from the editor's field table.
///
/// Extra inputs (the case image field) are passed as children and rendered
/// after the generated fields.
#[component]
pub fn RecordModal(
    editor: RwSignal<EditorState>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (kind, fields) = editor.with_untracked(|s| (s.kind, s.fields));
    let modal_id = ModalId::for_entity(kind).element_id();
    let form_id = format!("{}Form", kind.segment());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div
            id=modal_id
            class="modal"
            style:display=move || if editor.with(|s| s.open) { "block" } else { "none" }
        >
            <div class="modal__content">
                <div class="modal__header">
                    <h2>{move || editor.with(EditorState::title)}</h2>
                    <button class="modal__close" type="button" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                <form id=form_id class="modal__form" on:submit=on_form_submit>
                    {fields.iter().map(|spec| view! { <FormField spec=*spec editor=editor /> }).collect_view()}
                    {children.map(|c| c())}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || editor.with(|s| s.in_flight)
                        >
                            {move || if editor.with(|s| s.in_flight) { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// One labelled input bound to a form value.
#[component]
fn FormField(spec: FieldSpec, editor: RwSignal<EditorState>) -> impl IntoView {
    let name = spec.name;
    let value = move || editor.with(|s| s.form.get(name).to_owned());
    let set_value = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        editor.update(|s| s.form.set(name, next));
    };

    let input = match spec.kind {
        FieldKind::Text => view! {
            <input class="dialog__input" type="text" name=name required=spec.required prop:value=value on:input=set_value />
        }
        .into_any(),
        FieldKind::Color => view! {
            <input class="dialog__input" type="color" name=name prop:value=value on:input=set_value />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input class="dialog__input" type="number" name=name required=spec.required prop:value=value on:input=set_value />
        }
        .into_any(),
        FieldKind::Reference(target) => view! {
            <input
                class="dialog__input"
                type="number"
                min="1"
                name=name
                placeholder=format!("{} id", target.label())
                required=spec.required
                prop:value=value
                on:input=set_value
            />
        }
        .into_any(),
        FieldKind::LongText => view! {
            <textarea class="dialog__textarea" name=name rows="3" required=spec.required prop:value=value on:input=set_value></textarea>
        }
        .into_any(),
        FieldKind::Choice(choices) => view! {
            <select class="dialog__input" name=name on:change=set_value>
                {choices
                    .iter()
                    .map(|choice| {
                        let option_value = choice.value;
                        view! {
                            <option
                                value=option_value
                                prop:selected=move || editor.with(|s| s.form.get(name) == option_value)
                            >
                                {choice.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Flag => view! {
            <input
                type="checkbox"
                name=name
                prop:checked=move || editor.with(|s| s.form.flag(name))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    editor.update(|s| s.form.set_flag(name, checked));
                }
            />
        }
        .into_any(),
    };

    view! {
        <label class="dialog__label">
            {spec.label}
            {input}
        </label>
    }
}
