//! Snapedit Core - image operations and undo/redo editing
//!
//! This crate provides everything a simple image editor needs below its
//! user interface: a stateless library of image operations, the edit
//! session that keeps the current image and its undo/redo history, file
//! decoding and encoding, and an editor controller for front ends.
//!
//! # Flow
//!
//! A front end computes a new image with an operation from [`ops`] and
//! commits it to the [`EditSession`]; undo and redo move between stored
//! snapshots without re-running any operation. [`Editor`] wraps that flow
//! together with file I/O and slider previews.

pub mod codec;
pub mod config;
pub mod editor;
pub mod luminance;
pub mod ops;
pub mod session;
pub mod types;

pub use codec::{decode_image, encode_image, open_image, save_image, CodecError};
pub use config::{ConfigError, EditorConfig, SliderRange};
pub use editor::{Editor, EditorError, Slider};
pub use ops::{Edit, FlipMode, ParseEditError, Rotation};
pub use session::{EditSession, SessionState};
pub use types::{Image, PixelLayout};
