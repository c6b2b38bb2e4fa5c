//! Toast tray for operation notices, and the browser presenter feeding it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers present outcomes through [`BrowserPresenter`]: notices land in
//! the shared `NoticeState` signal rendered here, and successful mutations
//! reload the page after a short delay so the notice stays readable. Each
//! notice dismisses itself after `NOTICE_TTL_MS`.

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TTL_MS, Notice, NoticeLevel, NoticeState, Presenter};
use crate::util::browser::{after, reload_after};

/// Presenter writing to the notice tray and reloading the page.
#[derive(Clone, Copy)]
pub struct BrowserPresenter {
    pub notices: RwSignal<NoticeState>,
    pub reload_delay_ms: u32,
}

impl Presenter for BrowserPresenter {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => leptos::logging::log!("{}", notice.text),
            NoticeLevel::Error => leptos::logging::warn!("{}", notice.text),
        }
        let (notices, id) = (self.notices, notice.id.clone());
        notices.update(|n| n.push(notice));
        after(NOTICE_TTL_MS, move || notices.update(|n| n.dismiss(&id)));
    }

    fn reload(&self) {
        reload_after(self.reload_delay_ms);
    }
}

/// Stack of dismissable notices, newest last.
#[component]
pub fn NoticeTray(notices: RwSignal<NoticeState>) -> impl IntoView {
    view! {
        <div class="notice-tray" role="status">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__dismiss"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(&id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
