// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_contain::InvalidGeometry;

/// Errors returned by the store, stages, and editor.
///
/// A rejected resize step is not an error; it is reported by returning the
/// previously accepted box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    /// No shape with the given id exists in the store.
    UnknownShape,
    /// A shape with the given id is already present.
    DuplicateShape,
    /// The stage id does not refer to a stage of this editor.
    UnknownStage,
    /// The operation needs a selected shape on the stage and there is none.
    NotSelected,
    /// Another drag or resize gesture is still active on the stage.
    GestureInProgress,
    /// The shape's geometry failed validation.
    InvalidGeometry(InvalidGeometry),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape => f.write_str("no shape with this id"),
            Self::DuplicateShape => f.write_str("a shape with this id already exists"),
            Self::UnknownStage => f.write_str("no stage with this id"),
            Self::NotSelected => f.write_str("no shape is selected on this stage"),
            Self::GestureInProgress => f.write_str("another gesture is in progress"),
            Self::InvalidGeometry(err) => write!(f, "invalid shape geometry: {err}"),
        }
    }
}

impl core::error::Error for EditError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidGeometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidGeometry> for EditError {
    fn from(err: InvalidGeometry) -> Self {
        Self::InvalidGeometry(err)
    }
}
