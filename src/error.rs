use std::{error::Error, fmt};

/// Misuse of a [`Cursor`](struct.Cursor.html).
///
/// These errors signal a bug in the caller, never a property of the data: a missing item is
/// reported through `Option` or `bool` by the tree's own methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// `advance` was called after the last item had been yielded.
    Exhausted,
    /// `remove` was called before the first `advance`, or twice without an `advance` in between.
    NothingToRemove,
}

impl Error for CursorError {}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::Exhausted => write!(f, "Cursor has no more items to yield"),
            CursorError::NothingToRemove => {
                write!(f, "Cursor has no yielded item to remove; call `advance` first")
            }
        }
    }
}
