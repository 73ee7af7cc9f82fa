//! Edit session: the current image and its linear undo/redo history.
//!
//! The session is the only place the displayed image changes. Every
//! successful load or edit goes through [`EditSession::commit`] (or its
//! alias [`EditSession::load`]), which pushes the previous image onto the
//! undo stack and discards any redo history. [`EditSession::undo`] and
//! [`EditSession::redo`] move images between the two stacks without
//! running any operation.
//!
//! Images are taken by value and handed out as shared references, so a
//! stored snapshot can never be changed from outside the session.
//!
//! # States
//!
//! ```text
//! Empty --load/commit--> Loaded --load/commit/undo/redo--> Loaded
//! ```
//!
//! There is no transition back to `Empty`.

use crate::types::Image;

/// Whether an image has been loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded; only `load`/`commit` do anything.
    Empty,
    /// An image is present.
    Loaded,
}

/// Current image plus undo and redo stacks.
///
/// Both stacks push and pop at the end of their `Vec`, so the most recent
/// snapshot is last.
#[derive(Debug, Default)]
pub struct EditSession {
    current: Option<Image>,
    undo_stack: Vec<Image>,
    redo_stack: Vec<Image>,
}

impl EditSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image, recording the previous one for undo.
    ///
    /// Clears the redo stack.
    pub fn load(&mut self, image: Image) {
        if let Some(previous) = self.current.replace(image) {
            self.undo_stack.push(previous);
        }
        self.redo_stack.clear();
        log::debug!(
            "commit: undo depth {}, redo cleared",
            self.undo_stack.len()
        );
    }

    /// Commit an edit result. Identical to [`load`](Self::load): every
    /// committed edit is exactly one undo step.
    pub fn commit(&mut self, image: Image) {
        self.load(image);
    }

    /// The current image, or `None` before the first load.
    pub fn current(&self) -> Option<&Image> {
        self.current.as_ref()
    }

    /// Step back one edit.
    ///
    /// With an empty undo stack this is a no-op. Returns the (possibly
    /// unchanged) current image.
    pub fn undo(&mut self) -> Option<&Image> {
        if let Some(current) = self.current.as_mut() {
            if let Some(previous) = self.undo_stack.pop() {
                let undone = std::mem::replace(current, previous);
                self.redo_stack.push(undone);
                log::debug!(
                    "undo: undo depth {}, redo depth {}",
                    self.undo_stack.len(),
                    self.redo_stack.len()
                );
            }
        }
        self.current.as_ref()
    }

    /// Re-apply the most recently undone edit.
    ///
    /// With an empty redo stack this is a no-op. Returns the (possibly
    /// unchanged) current image.
    pub fn redo(&mut self) -> Option<&Image> {
        if let Some(current) = self.current.as_mut() {
            if let Some(next) = self.redo_stack.pop() {
                let redone = std::mem::replace(current, next);
                self.undo_stack.push(redone);
                log::debug!(
                    "redo: undo depth {}, redo depth {}",
                    self.undo_stack.len(),
                    self.redo_stack.len()
                );
            }
        }
        self.current.as_ref()
    }

    /// `Loaded` once an image has been loaded, `Empty` before that.
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::types::PixelLayout;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Commit(u8),
        Undo,
        Redo,
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            any::<u8>().prop_map(Step::Commit),
            Just(Step::Undo),
            Just(Step::Redo),
        ]
    }

    fn tagged(tag: u8) -> Image {
        Image::new(2, 2, PixelLayout::Gray, vec![tag; 4])
    }

    /// Reference history: every image ever committed along the current
    /// branch, plus a cursor to the one being shown.
    struct Model {
        timeline: Vec<u8>,
        cursor: Option<usize>,
    }

    impl Model {
        fn apply(&mut self, step: &Step) {
            match (step, self.cursor) {
                (Step::Commit(tag), None) => {
                    self.timeline = vec![*tag];
                    self.cursor = Some(0);
                }
                (Step::Commit(tag), Some(i)) => {
                    self.timeline.truncate(i + 1);
                    self.timeline.push(*tag);
                    self.cursor = Some(i + 1);
                }
                (Step::Undo, Some(i)) if i > 0 => self.cursor = Some(i - 1),
                (Step::Redo, Some(i)) if i + 1 < self.timeline.len() => {
                    self.cursor = Some(i + 1)
                }
                _ => {}
            }
        }
    }

    proptest! {
        /// Property: the session matches a cursor-over-timeline model.
        #[test]
        fn prop_matches_timeline_model(steps in prop::collection::vec(step_strategy(), 0..40)) {
            let mut session = EditSession::new();
            let mut model = Model { timeline: Vec::new(), cursor: None };

            for step in &steps {
                match step {
                    Step::Commit(tag) => session.commit(tagged(*tag)),
                    Step::Undo => { session.undo(); }
                    Step::Redo => { session.redo(); }
                }
                model.apply(step);

                let expected = model.cursor.map(|i| tagged(model.timeline[i]));
                prop_assert_eq!(session.current(), expected.as_ref());

                let undo_depth = model.cursor.unwrap_or(0);
                let redo_depth = model
                    .cursor
                    .map(|i| model.timeline.len() - i - 1)
                    .unwrap_or(0);
                prop_assert_eq!(session.undo_depth(), undo_depth);
                prop_assert_eq!(session.redo_depth(), redo_depth);
            }
        }

        /// Property: undo after a commit restores the prior image and redo
        /// restores the committed one exactly.
        #[test]
        fn prop_undo_redo_inverse(tags in prop::collection::vec(any::<u8>(), 2..12)) {
            let mut session = EditSession::new();
            for tag in &tags {
                session.commit(tagged(*tag));
            }
            let last = tagged(tags[tags.len() - 1]);
            let before_last = tagged(tags[tags.len() - 2]);

            prop_assert_eq!(session.undo(), Some(&before_last));
            prop_assert_eq!(session.redo(), Some(&last));
        }

        /// Property: a commit after any number of undos leaves nothing to redo.
        #[test]
        fn prop_commit_invalidates_redo(
            tags in prop::collection::vec(any::<u8>(), 1..12),
            undos in 0usize..12,
            fresh in any::<u8>(),
        ) {
            let mut session = EditSession::new();
            for tag in &tags {
                session.commit(tagged(*tag));
            }
            for _ in 0..undos {
                session.undo();
            }

            session.commit(tagged(fresh));
            prop_assert!(!session.can_redo());
            prop_assert_eq!(session.redo(), Some(&tagged(fresh)));
        }
    }
}
