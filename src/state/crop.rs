//! Case-image crop session.
//!
//! DESIGN
//! ======
//! The session owns at most one live widget and at most one cropped image.
//! Stages move Empty -> Cropping -> Cropped and back; every path that leaves
//! Cropping destroys the widget first, so two widgets never share the host
//! element. The case editor owns one session and releases it whenever its
//! modal closes.

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

use futures::future::LocalBoxFuture;

use crate::net::api::FilePart;
use crate::state::editor::Upload;

/// Widget settings for the case-image cropper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropOptions {
    pub aspect_ratio: f64,
    pub view_mode: u8,
    pub auto_crop_area: f64,
    pub min_crop_box_width: u32,
    pub min_crop_box_height: u32,
    /// What dragging on the image does: `"move"` pans the image under a
    /// fixed crop box, `"crop"` draws a new box.
    pub drag_mode: &'static str,
    /// Dim the area outside the crop box.
    pub highlight: bool,
    /// Restore the crop box after a container resize.
    pub restore: bool,
}

pub const CASE_CROP_OPTIONS: CropOptions = CropOptions {
    aspect_ratio: 16.0 / 9.0,
    view_mode: 1,
    auto_crop_area: 0.8,
    min_crop_box_width: 100,
    min_crop_box_height: 100,
    drag_mode: "move",
    highlight: false,
    restore: false,
};

/// Raster output produced when a crop is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropOutput {
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
    pub quality: f64,
}

pub const CASE_CROP_OUTPUT: CropOutput = CropOutput { width: 1200, height: 675, mime_type: "image/jpeg", quality: 0.9 };

/// File name used for a cropped upload when the original name is unknown.
pub const CROPPED_FILE_NAME: &str = "cropped-image.jpg";

/// Multipart field carrying the case image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    #[error("crop widget could not attach: {0}")]
    Attach(String),

    #[error("crop export failed: {0}")]
    Export(String),

    #[error("image cropping is only available in the browser")]
    Unavailable,
}

/// Capability set of the embedded crop widget.
pub trait CropWidget: Sized {
    type Image: Clone;
    type Host;

    /// Attach a new widget over `source` rendered into `host`.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::Attach`] when the widget cannot be constructed.
    fn attach(host: &Self::Host, source: &Self::Image, options: &CropOptions) -> Result<Self, CropError>;

    /// Render the current crop box to a raster image.
    fn export(&self, output: &CropOutput) -> LocalBoxFuture<'static, Result<Self::Image, CropError>>;

    fn rotate(&self, degrees: f64);

    fn zoom(&self, ratio: f64);

    fn reset(&self);

    /// Tear down the widget and release its rendering surface.
    fn destroy(self);
}

/// A file chosen in the image input.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFile<I> {
    pub name: String,
    pub content_type: String,
    pub data: I,
}

/// Observable stage of a [`CropSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CropStage {
    #[default]
    Empty,
    Cropping,
    Cropped,
}

enum Stage<W: CropWidget> {
    Empty,
    Cropping { widget: W, prior: Option<W::Image> },
    Cropped { image: W::Image },
}

pub struct CropSession<W: CropWidget> {
    stage: Stage<W>,
    source: Option<SourceFile<W::Image>>,
    removed: bool,
}

impl<W: CropWidget> Default for CropSession<W> {
    fn default() -> Self {
        Self { stage: Stage::Empty, source: None, removed: false }
    }
}

impl<W: CropWidget> Drop for CropSession<W> {
    fn drop(&mut self) {
        self.take_widget();
    }
}

impl<W: CropWidget> CropSession<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> CropStage {
        match self.stage {
            Stage::Empty => CropStage::Empty,
            Stage::Cropping { .. } => CropStage::Cropping,
            Stage::Cropped { .. } => CropStage::Cropped,
        }
    }

    /// The image that would be uploaded as the crop result, if any.
    ///
    /// While re-cropping, the previously applied crop stays pending until a
    /// new one is applied.
    pub fn cropped(&self) -> Option<&W::Image> {
        match &self.stage {
            Stage::Cropped { image } | Stage::Cropping { prior: Some(image), .. } => Some(image),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&SourceFile<W::Image>> {
        self.source.as_ref()
    }

    /// Whether the operator explicitly removed the image.
    pub fn removed(&self) -> bool {
        self.removed
    }

    /// React to a change of the file input. `None` means the input was cleared.
    ///
    /// A new file discards any earlier crop, which belonged to another file.
    ///
    /// # Errors
    ///
    /// Returns the attach error; the session is then Empty but keeps the file
    /// so it can still be uploaded uncropped.
    pub fn select_file(&mut self, host: &W::Host, file: Option<SourceFile<W::Image>>) -> Result<(), CropError> {
        let Some(file) = file else {
            self.clear();
            return Ok(());
        };
        self.take_widget();
        self.stage = Stage::Empty;
        self.removed = false;
        let attached = W::attach(host, &file.data, &CASE_CROP_OPTIONS);
        self.source = Some(file);
        self.stage = Stage::Cropping { widget: attached?, prior: None };
        Ok(())
    }

    /// Start exporting the current crop box. `None` outside Cropping.
    pub fn begin_apply(&self) -> Option<LocalBoxFuture<'static, Result<W::Image, CropError>>> {
        match &self.stage {
            Stage::Cropping { widget, .. } => Some(widget.export(&CASE_CROP_OUTPUT)),
            _ => None,
        }
    }

    /// Store the exported image and move to Cropped.
    ///
    /// An export that resolves after the session left Cropping is discarded.
    ///
    /// # Errors
    ///
    /// Returns the export error; the session stays in Cropping.
    pub fn finish_apply(&mut self, exported: Result<W::Image, CropError>) -> Result<(), CropError> {
        if !matches!(self.stage, Stage::Cropping { .. }) {
            return Ok(());
        }
        let image = exported?;
        self.take_widget();
        self.stage = Stage::Cropped { image };
        Ok(())
    }

    /// Re-open the widget over the cropped image (not the original file).
    ///
    /// # Errors
    ///
    /// Returns the attach error; the session stays in Cropped.
    pub fn crop_again(&mut self, host: &W::Host) -> Result<(), CropError> {
        match std::mem::replace(&mut self.stage, Stage::Empty) {
            Stage::Cropped { image } => match W::attach(host, &image, &CASE_CROP_OPTIONS) {
                Ok(widget) => {
                    self.stage = Stage::Cropping { widget, prior: Some(image) };
                    Ok(())
                }
                Err(e) => {
                    self.stage = Stage::Cropped { image };
                    Err(e)
                }
            },
            other => {
                self.stage = other;
                Ok(())
            }
        }
    }

    /// Leave Cropping without applying: back to the prior crop, or Empty.
    pub fn cancel(&mut self) {
        self.take_widget();
    }

    pub fn rotate(&self, degrees: f64) {
        if let Stage::Cropping { widget, .. } = &self.stage {
            widget.rotate(degrees);
        }
    }

    pub fn zoom(&self, ratio: f64) {
        if let Stage::Cropping { widget, .. } = &self.stage {
            widget.zoom(ratio);
        }
    }

    pub fn reset(&self) {
        if let Stage::Cropping { widget, .. } = &self.stage {
            widget.reset();
        }
    }

    /// Drop the widget, the crop and the chosen file.
    pub fn clear(&mut self) {
        self.take_widget();
        self.stage = Stage::Empty;
        self.source = None;
        self.removed = false;
    }

    /// Operator pressed "remove image": clear and remember the removal so an
    /// update can ask the backend to drop the stored image.
    pub fn remove(&mut self) {
        self.clear();
        self.removed = true;
    }

    /// Image part to send with the case form.
    ///
    /// Priority: cropped image, then the uncropped chosen file, then an
    /// explicit clear when editing an existing case.
    pub fn upload(&self, editing: bool) -> Upload<W::Image> {
        if let Some(image) = self.cropped() {
            let file_name = self.source.as_ref().map_or(CROPPED_FILE_NAME, |s| s.name.as_str());
            return Upload::File(FilePart {
                field: IMAGE_FIELD.to_owned(),
                file_name: file_name.to_owned(),
                content_type: CASE_CROP_OUTPUT.mime_type.to_owned(),
                data: image.clone(),
            });
        }
        if let Some(source) = &self.source {
            return Upload::File(FilePart {
                field: IMAGE_FIELD.to_owned(),
                file_name: source.name.clone(),
                content_type: source.content_type.clone(),
                data: source.data.clone(),
            });
        }
        if editing && self.removed {
            return Upload::Clear;
        }
        Upload::None
    }

    fn take_widget(&mut self) {
        if !matches!(self.stage, Stage::Cropping { .. }) {
            return;
        }
        if let Stage::Cropping { widget, prior } = std::mem::replace(&mut self.stage, Stage::Empty) {
            widget.destroy();
            if let Some(image) = prior {
                self.stage = Stage::Cropped { image };
            }
        }
    }
}
