//! Thin browser glue: page metadata, reloads, object URLs and file inputs.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort browser-only behavior; non-browser builds
//! no-op so state modules and tests never touch `web-sys`.

use crate::state::crop::SourceFile;

/// Binary image handle: a JS `Blob` in the browser, raw bytes elsewhere.
#[cfg(feature = "csr")]
pub type ImageBlob = web_sys::Blob;
#[cfg(not(feature = "csr"))]
pub type ImageBlob = Vec<u8>;

/// Element the crop widget attaches to.
#[cfg(feature = "csr")]
pub type ImageHost = web_sys::HtmlImageElement;
#[cfg(not(feature = "csr"))]
pub type ImageHost = ();

/// Content of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let el = document.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Run `f` once after `delay_ms`. Outside the browser `f` never runs.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}

/// Reload the current page after `delay_ms`, leaving time for a notice.
pub fn reload_after(delay_ms: u32) {
    after(delay_ms, || {
        #[cfg(feature = "csr")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    });
}

/// Create an object URL for previewing `image`.
pub fn object_url(image: &ImageBlob) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::Url::create_object_url_with_blob(image).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image;
        None
    }
}

pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &leptos::ev::Event) -> Option<SourceFile<ImageBlob>> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        Some(SourceFile { name: file.name(), content_type: file.type_(), data: file.into() })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Reset a file input so the same file can be chosen again.
pub fn clear_file_input(input: Option<leptos::web_sys::HtmlInputElement>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = input {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
    }
}
