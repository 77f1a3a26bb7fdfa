//! Drag Context
//!
//! The board-wide drag state: leptos-sortable signals carrying a typed
//! Column/Task payload, shared with every component via context.

use leptos::prelude::*;
use leptos_sortable::DndSignals;

use crate::models::DragPayload;

/// Drag signals specialized to board payloads
pub type BoardDnd = DndSignals<DragPayload>;

/// Create the drag signals and provide them to the component tree
pub fn provide_dnd() -> BoardDnd {
    let dnd = BoardDnd::new();
    provide_context(dnd);
    dnd
}

/// Get the drag signals from context
pub fn use_dnd() -> BoardDnd {
    expect_context::<BoardDnd>()
}
