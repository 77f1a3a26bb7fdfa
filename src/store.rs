//! Global Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The rendering
//! layer never mutates collections directly; it goes through these helpers,
//! which delegate to the pure operations on `BoardState`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{BoardState, BoardStore};
use crate::models::{ColumnId, TaskId};

/// Create the store and provide it to the component tree
pub fn provide_board_store() -> BoardStore {
    let store = Store::new(BoardState::new());
    provide_context(store);
    store
}

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_column(store: &BoardStore) {
    store.update(|board| board.add_column());
}

pub fn store_rename_column(store: &BoardStore, id: ColumnId, title: String) {
    store.update(|board| board.rename_column(id, title));
}

pub fn store_remove_column(store: &BoardStore, id: ColumnId) {
    store.update(|board| board.remove_column(id));
}

pub fn store_add_task(store: &BoardStore, column_id: ColumnId) {
    store.update(|board| board.add_task(column_id));
}

pub fn store_edit_task(store: &BoardStore, id: TaskId, content: String) {
    store.update(|board| board.edit_task(id, content));
}

pub fn store_remove_task(store: &BoardStore, id: TaskId) {
    store.update(|board| board.remove_task(id));
}

pub fn store_reorder_columns(store: &BoardStore, active: ColumnId, over: ColumnId) {
    store.update(|board| board.reorder_columns(active, over));
}

pub fn store_move_task_over_task(store: &BoardStore, active: TaskId, over: TaskId) {
    store.update(|board| board.move_task_over_task(active, over));
}

pub fn store_move_task_over_column(store: &BoardStore, active: TaskId, column: ColumnId) {
    store.update(|board| board.move_task_over_column(active, column));
}
