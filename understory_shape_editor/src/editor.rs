// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_contain::ShapeBox;

use crate::error::EditError;
use crate::stage::Stage;

/// Index of a stage within an [`Editor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StageId(usize);

impl StageId {
    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a pointer press landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerDown<K> {
    /// A shape was pressed; a drag gesture is now tracking it.
    Shape(K),
    /// Empty stage area was pressed; the selection was cleared.
    Empty,
}

/// What a pointer release completed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerUp<K> {
    /// The shape was pressed and released without moving; it is now selected.
    Clicked(K),
    /// The shape was dragged; its clamped position was committed.
    Dropped {
        /// The dragged shape.
        id: K,
        /// Its committed box.
        bounds: ShapeBox,
    },
    /// No drag was in progress.
    Idle,
}

/// Controller owning one or more stages and a shared single selection.
///
/// The editor routes pointer events to a stage and keeps the selection
/// consistent with them:
/// - Pressing a shape starts a drag; releasing without movement selects it.
/// - Pressing empty stage area clears the selection.
/// - Resizing is only possible for the selected shape, mirroring transform
///   handles that are shown only on the selection.
///
/// Selection is a single id shared by all stages. A stage whose store does
/// not contain the selected id simply has nothing selected.
#[derive(Clone, Debug)]
pub struct Editor<K> {
    stages: Vec<Stage<K>>,
    selection: Option<K>,
}

impl<K> Default for Editor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Editor<K> {
    /// Creates an editor without stages.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stages: Vec::new(),
            selection: None,
        }
    }

    /// Adds a stage and returns its id.
    pub fn add_stage(&mut self, stage: Stage<K>) -> StageId {
        self.stages.push(stage);
        StageId(self.stages.len() - 1)
    }

    /// Returns the stage with `id`.
    #[must_use]
    pub fn stage(&self, id: StageId) -> Option<&Stage<K>> {
        self.stages.get(id.0)
    }

    /// Returns the stage with `id` for direct edits.
    pub fn stage_mut(&mut self, id: StageId) -> Option<&mut Stage<K>> {
        self.stages.get_mut(id.0)
    }

    /// Iterates over all stages with their ids.
    pub fn stages(&self) -> impl Iterator<Item = (StageId, &Stage<K>)> {
        self.stages.iter().enumerate().map(|(i, s)| (StageId(i), s))
    }

    /// Returns the selected shape id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selection.as_ref()
    }

    fn stage_or_err(&mut self, id: StageId) -> Result<&mut Stage<K>, EditError> {
        self.stages.get_mut(id.0).ok_or(EditError::UnknownStage)
    }
}

impl<K: PartialEq + Clone + fmt::Debug> Editor<K> {
    /// Selects `id`, replacing any previous selection.
    ///
    /// The id is not checked against the stages. Returns `true` if the
    /// selection changed.
    pub fn select(&mut self, id: K) -> bool {
        if self.selection.as_ref() == Some(&id) {
            return false;
        }
        log::debug!("select {id:?}");
        self.selection = Some(id);
        true
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        let had = self.selection.take();
        if let Some(id) = &had {
            log::debug!("deselect {id:?}");
        }
        had.is_some()
    }

    /// Returns `true` if `id` is the selected shape.
    #[must_use]
    pub fn is_selected(&self, id: &K) -> bool {
        self.selection.as_ref() == Some(id)
    }

    /// Handles a pointer press on `stage` at `pos`.
    pub fn pointer_down(
        &mut self,
        stage: StageId,
        pos: Point,
    ) -> Result<PointerDown<K>, EditError> {
        let target = self.stage_or_err(stage)?;
        let hit = target.hit_test(pos).cloned();
        match hit {
            Some(id) => {
                target.begin_drag(&id, pos)?;
                Ok(PointerDown::Shape(id))
            }
            None => {
                self.clear_selection();
                Ok(PointerDown::Empty)
            }
        }
    }

    /// Handles a pointer move on `stage`.
    ///
    /// Returns the clamped preview box while a drag is active.
    pub fn pointer_move(
        &mut self,
        stage: StageId,
        pos: Point,
    ) -> Result<Option<ShapeBox>, EditError> {
        Ok(self.stage_or_err(stage)?.drag_to(pos))
    }

    /// Handles a pointer release on `stage`.
    pub fn pointer_up(&mut self, stage: StageId) -> Result<PointerUp<K>, EditError> {
        let Some(end) = self.stage_or_err(stage)?.end_drag() else {
            return Ok(PointerUp::Idle);
        };
        if end.moved {
            Ok(PointerUp::Dropped {
                id: end.id,
                bounds: end.bounds,
            })
        } else {
            self.select(end.id.clone());
            Ok(PointerUp::Clicked(end.id))
        }
    }

    /// Starts resizing the selected shape on `stage`.
    pub fn resize_begin(&mut self, stage: StageId) -> Result<(), EditError> {
        let selected = self.selection.clone().ok_or(EditError::NotSelected)?;
        let target = self.stage_or_err(stage)?;
        if !target.shapes().contains(&selected) {
            return Err(EditError::NotSelected);
        }
        target.begin_resize(&selected)
    }

    /// Evaluates one resize/rotate frame on `stage`.
    ///
    /// Returns the box to preview, or `None` if no resize is active.
    pub fn resize_step(
        &mut self,
        stage: StageId,
        proposed: ShapeBox,
    ) -> Result<Option<ShapeBox>, EditError> {
        Ok(self.stage_or_err(stage)?.resize_step(proposed))
    }

    /// Ends the resize on `stage` and commits the floored box.
    pub fn resize_end(&mut self, stage: StageId) -> Result<Option<ShapeBox>, EditError> {
        Ok(self.stage_or_err(stage)?.end_resize())
    }
}
