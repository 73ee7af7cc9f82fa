//! Editor controller tying the session, file codec and sliders together.
//!
//! A front end owns one [`Editor`] and calls into it from its event
//! handlers: menu actions map to [`Editor::open`], [`Editor::save`],
//! [`Editor::save_as`], [`Editor::undo`] and [`Editor::redo`]; effect
//! buttons map to [`Editor::apply`]; slider drags map to
//! [`Editor::preview`] followed by [`Editor::commit_preview`] or
//! [`Editor::cancel_preview`]. After each call the front end redraws
//! [`Editor::display`] and [`Editor::status`].
//!
//! A failed open or save never changes the session.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::config::{EditorConfig, SliderRange};
use crate::ops::Edit;
use crate::session::EditSession;
use crate::types::Image;

/// Status text shown before any image is opened.
pub const NO_IMAGE_STATUS: &str = "No image loaded";

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No image loaded")]
    NoImage,

    #[error("No file path; use save as")]
    NoPath,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Adjustments driven by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Blur,
    Brightness,
    Contrast,
    Scale,
}

impl Slider {
    /// The edit this slider produces at `value`.
    pub fn edit(self, value: f32) -> Edit {
        match self {
            Slider::Blur => Edit::Blur { intensity: value },
            Slider::Brightness => Edit::Brightness { delta: value },
            Slider::Contrast => Edit::Contrast { delta: value },
            Slider::Scale => Edit::Resize {
                scale_percent: value,
            },
        }
    }
}

/// An uncommitted slider result.
#[derive(Debug)]
struct Preview {
    slider: Slider,
    value: f32,
    image: Image,
}

/// Front-end facing editor state.
#[derive(Debug, Default)]
pub struct Editor {
    session: EditSession,
    config: EditorConfig,
    path: Option<PathBuf>,
    preview: Option<Preview>,
    last_action: Option<String>,
}

impl Editor {
    /// Creates an editor with no image loaded.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The underlying undo/redo session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Slider ranges and save settings in use.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Path of the open file, updated by `save` and `save_as`.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Range and starting value of a slider.
    pub fn slider_range(&self, slider: Slider) -> SliderRange {
        match slider {
            Slider::Blur => self.config.blur,
            Slider::Brightness => self.config.brightness,
            Slider::Contrast => self.config.contrast,
            Slider::Scale => self.config.scale,
        }
    }

    /// Open an image file and make it the current image.
    ///
    /// The previous image, if any, becomes an undo step.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Codec` if the file cannot be read or decoded.
    /// The session is left as it was.
    pub fn open(&mut self, path: &Path) -> Result<&Image, EditorError> {
        let image = codec::open_image(path)?;

        self.preview = None;
        self.session.load(image);
        self.path = Some(path.to_path_buf());
        self.last_action = Some("Opened".to_string());
        self.current_image()
    }

    /// Write the current image back to its file.
    ///
    /// A pending preview is not saved; commit it first. When the file path
    /// has no extension the configured default is appended, and the path
    /// written becomes the file path.
    pub fn save(&mut self) -> Result<PathBuf, EditorError> {
        let path = self.path.as_deref().ok_or(EditorError::NoPath)?;
        let image = self.current_image()?;
        let written = codec::save_image(image, path, &self.config.default_extension)?;
        self.path = Some(written.clone());
        Ok(written)
    }

    /// Write the current image to `path` and make that the file path.
    ///
    /// A path without an extension gets the configured default appended.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf, EditorError> {
        let image = self.current_image()?;
        let written = codec::save_image(image, path, &self.config.default_extension)?;
        self.path = Some(written.clone());
        Ok(written)
    }

    /// Apply an edit to the current image and commit it as one undo step.
    ///
    /// Blur intensity and resize percentage are clamped into their slider
    /// ranges first; other parameters pass through unchanged.
    pub fn apply(&mut self, edit: Edit) -> Result<&Image, EditorError> {
        let edit = self.bounded(edit);
        let result = edit.apply(self.current_image()?);

        self.preview = None;
        self.session.commit(result);
        log::info!("applied {edit}");
        self.last_action = Some(edit.to_string());
        self.current_image()
    }

    /// Compute a slider adjustment without committing it.
    ///
    /// `value` is clamped into the slider's configured range. The preview
    /// is always computed from the committed image, so successive drags
    /// replace each other instead of stacking.
    pub fn preview(&mut self, slider: Slider, value: f32) -> Result<&Image, EditorError> {
        let value = self.slider_range(slider).clamp(value);
        let image = slider.edit(value).apply(self.current_image()?);

        let preview = self.preview.insert(Preview {
            slider,
            value,
            image,
        });
        Ok(&preview.image)
    }

    /// Slider and clamped value of the pending preview, if any.
    pub fn pending_preview(&self) -> Option<(Slider, f32)> {
        self.preview.as_ref().map(|p| (p.slider, p.value))
    }

    /// Commit the pending preview as one undo step. Without a pending
    /// preview this only returns the current image.
    pub fn commit_preview(&mut self) -> Result<&Image, EditorError> {
        if let Some(preview) = self.preview.take() {
            let edit = preview.slider.edit(preview.value);
            self.session.commit(preview.image);
            log::info!("applied {edit}");
            self.last_action = Some(edit.to_string());
        }
        self.current_image()
    }

    /// Drop the pending preview.
    pub fn cancel_preview(&mut self) {
        self.preview = None;
    }

    /// The image to draw: the pending preview if any, else the current image.
    pub fn display(&self) -> Option<&Image> {
        match &self.preview {
            Some(preview) => Some(&preview.image),
            None => self.session.current(),
        }
    }

    /// Undo the last committed edit, discarding any pending preview.
    pub fn undo(&mut self) -> Option<&Image> {
        self.preview = None;
        if self.session.can_undo() {
            self.last_action = Some("Undo".to_string());
        }
        self.session.undo()
    }

    /// Redo the last undone edit, discarding any pending preview.
    pub fn redo(&mut self) -> Option<&Image> {
        self.preview = None;
        if self.session.can_redo() {
            self.last_action = Some("Redo".to_string());
        }
        self.session.redo()
    }

    /// Status-bar text.
    ///
    /// `"No image loaded"` before the first open, otherwise
    /// `"<file> - <W>x<H>"` followed by the last action.
    pub fn status(&self) -> String {
        let Some(image) = self.display() else {
            return NO_IMAGE_STATUS.to_string();
        };

        let name = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        let mut status = format!("{name} - {}x{}", image.width, image.height);
        if let Some(action) = &self.last_action {
            status.push_str(" | ");
            status.push_str(action);
        }
        status
    }

    /// Clamp the parameters whose cost grows with their value.
    fn bounded(&self, edit: Edit) -> Edit {
        let bounded = match edit {
            Edit::Blur { intensity } => Edit::Blur {
                intensity: self.config.blur.clamp(intensity),
            },
            Edit::Resize { scale_percent } => Edit::Resize {
                scale_percent: self.config.scale.clamp(scale_percent),
            },
            other => other,
        };
        if bounded != edit {
            log::debug!("clamped {edit} to {bounded}");
        }
        bounded
    }

    fn current_image(&self) -> Result<&Image, EditorError> {
        self.session.current().ok_or(EditorError::NoImage)
    }
}
