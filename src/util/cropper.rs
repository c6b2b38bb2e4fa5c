//! Binding to the page's global `Cropper` image-cropping widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record page loads Cropper.js from a `<script>` tag; this module binds
//! its constructor and the handful of methods the case editor needs, and
//! exposes them as a [`CropWidget`].
//!
//! ERROR HANDLING
//! ==============
//! A missing or throwing constructor becomes [`CropError::Attach`]; a canvas
//! that cannot be produced or encoded becomes [`CropError::Export`]. Outside
//! the browser every operation reports [`CropError::Unavailable`].

#[cfg(all(test, not(feature = "csr")))]
#[path = "cropper_test.rs"]
mod cropper_test;

use futures::future::LocalBoxFuture;

use crate::state::crop::{CropError, CropOptions, CropOutput, CropWidget};
use crate::util::browser::{ImageBlob, ImageHost};

/// A scalar Cropper.js option value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionValue {
    Number(f64),
    Flag(bool),
    Text(&'static str),
}

/// Cropper.js constructor options, keyed by their JS names.
pub fn cropper_options(options: &CropOptions) -> Vec<(&'static str, OptionValue)> {
    vec![
        ("aspectRatio", OptionValue::Number(options.aspect_ratio)),
        ("viewMode", OptionValue::Number(f64::from(options.view_mode))),
        ("dragMode", OptionValue::Text(options.drag_mode)),
        ("autoCropArea", OptionValue::Number(options.auto_crop_area)),
        ("minCropBoxWidth", OptionValue::Number(f64::from(options.min_crop_box_width))),
        ("minCropBoxHeight", OptionValue::Number(f64::from(options.min_crop_box_height))),
        ("highlight", OptionValue::Flag(options.highlight)),
        ("restore", OptionValue::Flag(options.restore)),
        ("responsive", OptionValue::Flag(true)),
        ("background", OptionValue::Flag(false)),
    ]
}

#[cfg(feature = "csr")]
impl From<OptionValue> for wasm_bindgen::JsValue {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Number(n) => n.into(),
            OptionValue::Flag(b) => b.into(),
            OptionValue::Text(t) => t.into(),
        }
    }
}

#[cfg(feature = "csr")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Cropper;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(image: &web_sys::HtmlImageElement, options: &js_sys::Object) -> Result<Cropper, JsValue>;

        #[wasm_bindgen(method, js_name = getCroppedCanvas)]
        pub fn get_cropped_canvas(this: &Cropper, options: &js_sys::Object) -> JsValue;

        #[wasm_bindgen(method)]
        pub fn rotate(this: &Cropper, degree: f64);

        #[wasm_bindgen(method)]
        pub fn zoom(this: &Cropper, ratio: f64);

        #[wasm_bindgen(method)]
        pub fn reset(this: &Cropper);

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Cropper);
    }
}

/// A live Cropper.js instance over the preview image.
#[cfg(feature = "csr")]
pub struct CropperJs {
    inner: js::Cropper,
    host: web_sys::HtmlImageElement,
    url: String,
}

/// Placeholder widget; never constructed outside the browser.
#[cfg(not(feature = "csr"))]
pub struct CropperJs {
    _private: (),
}

#[cfg(feature = "csr")]
fn js_object(entries: &[(&str, wasm_bindgen::JsValue)]) -> js_sys::Object {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        let _ = js_sys::Reflect::set(&object, &(*key).into(), value);
    }
    object
}

#[cfg(feature = "csr")]
impl CropWidget for CropperJs {
    type Image = ImageBlob;
    type Host = ImageHost;

    fn attach(host: &ImageHost, source: &ImageBlob, options: &CropOptions) -> Result<Self, CropError> {
        let url = web_sys::Url::create_object_url_with_blob(source).map_err(|e| CropError::Attach(format!("{e:?}")))?;
        host.set_src(&url);

        let entries: Vec<(&str, wasm_bindgen::JsValue)> =
            cropper_options(options).into_iter().map(|(key, value)| (key, value.into())).collect();
        let js_options = js_object(&entries);
        match js::Cropper::new(host, &js_options) {
            Ok(inner) => Ok(Self { inner, host: host.clone(), url }),
            Err(e) => {
                let _ = web_sys::Url::revoke_object_url(&url);
                leptos::logging::warn!("cropper attach failed: {e:?}");
                Err(CropError::Attach(format!("{e:?}")))
            }
        }
    }

    fn export(&self, output: &CropOutput) -> LocalBoxFuture<'static, Result<ImageBlob, CropError>> {
        use futures::FutureExt;
        use wasm_bindgen::JsCast;

        let canvas_options = js_object(&[
            ("width", output.width.into()),
            ("height", output.height.into()),
            ("imageSmoothingEnabled", true.into()),
            ("imageSmoothingQuality", "high".into()),
        ]);
        let Ok(canvas) = self.inner.get_cropped_canvas(&canvas_options).dyn_into::<web_sys::HtmlCanvasElement>() else {
            return futures::future::ready(Err(CropError::Export("no cropped canvas".to_owned()))).boxed_local();
        };

        let (tx, rx) = futures::channel::oneshot::channel::<Option<web_sys::Blob>>();
        let callback = wasm_bindgen::closure::Closure::once_into_js(move |blob: wasm_bindgen::JsValue| {
            let _ = tx.send(blob.dyn_into::<web_sys::Blob>().ok());
        });
        if let Err(e) = canvas.to_blob_with_type_and_encoder_options(
            callback.unchecked_ref(),
            output.mime_type,
            &output.quality.into(),
        ) {
            return futures::future::ready(Err(CropError::Export(format!("{e:?}")))).boxed_local();
        }

        async move {
            match rx.await {
                Ok(Some(blob)) => Ok(blob),
                Ok(None) => Err(CropError::Export("canvas produced no image".to_owned())),
                Err(_) => Err(CropError::Export("export cancelled".to_owned())),
            }
        }
        .boxed_local()
    }

    fn rotate(&self, degrees: f64) {
        self.inner.rotate(degrees);
    }

    fn zoom(&self, ratio: f64) {
        self.inner.zoom(ratio);
    }

    fn reset(&self) {
        self.inner.reset();
    }

    fn destroy(self) {
        self.inner.destroy();
        self.host.remove_attribute("src").ok();
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

#[cfg(not(feature = "csr"))]
impl CropWidget for CropperJs {
    type Image = ImageBlob;
    type Host = ImageHost;

    fn attach(_host: &ImageHost, _source: &ImageBlob, _options: &CropOptions) -> Result<Self, CropError> {
        Err(CropError::Unavailable)
    }

    fn export(&self, _output: &CropOutput) -> LocalBoxFuture<'static, Result<ImageBlob, CropError>> {
        Box::pin(futures::future::ready(Err(CropError::Unavailable)))
    }

    fn rotate(&self, _degrees: f64) {}

    fn zoom(&self, _ratio: f64) {}

    fn reset(&self) {}

    fn destroy(self) {}
}
