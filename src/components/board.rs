//! Board Component
//!
//! Top-level Kanban board: owns the store and the drag context, handles
//! drops, and renders the horizontal column strip plus the drag overlay.

use leptos::prelude::*;
use leptos_sortable::{bind_global_listeners, DragOverlay};

use crate::board::BoardStateStoreFields;
use crate::components::ColumnContainer;
use crate::dnd::provide_dnd;
use crate::models::{Column, ColumnId, DragPayload};
use crate::store::{provide_board_store, store_add_column, store_reorder_columns, use_board_store};

/// The whole board: column strip, add-column affordance, drag overlay
#[component]
pub fn Board() -> impl IntoView {
    let store = provide_board_store();
    let dnd = provide_dnd();

    // One drop handler for the whole board. Task moves are applied live
    // during drag-over, so on drop only column reordering is left to do.
    // An over of None means the drag was cancelled; captured state is
    // already discarded and the board stays as it was.
    bind_global_listeners(dnd, move |active, over| match (active, over) {
        (DragPayload::Column(column), Some(DragPayload::Column(over_column))) => {
            web_sys::console::log_1(
                &format!(
                    "[DND] Drop: column {} over column {}",
                    column.id.0, over_column.id.0
                )
                .into(),
            );
            store_reorder_columns(&store, column.id, over_column.id);
        }
        (DragPayload::Column(_), _) => {}
        (DragPayload::Task(task), _) => {
            web_sys::console::log_1(&format!("[DND] Drop: task {}", task.id.0).into());
        }
    });

    let columns = move || store.columns().get();

    view! {
        <div class="board">
            <div class="board-columns">
                <For
                    each=columns
                    // Key on every mutable field so a rename re-renders
                    key=|column| (column.id, column.title.clone())
                    children=move |column| {
                        view! { <ColumnContainer column=column /> }
                    }
                />
            </div>

            <button class="add-column-btn" on:click=move |_| store_add_column(&store)>
                "+ Add column"
            </button>

            <Show when=move || dnd.active.get().is_some()>
                <DragOverlay x=dnd.pointer_x y=dnd.pointer_y>
                    {move || match dnd.active.get() {
                        Some(DragPayload::Column(column)) => {
                            view! { <ColumnGhost column=column /> }.into_any()
                        }
                        Some(DragPayload::Task(task)) => {
                            view! {
                                <div class="task-card ghost">
                                    <p class="task-content">{task.content.clone()}</p>
                                </div>
                            }
                            .into_any()
                        }
                        None => view! { <div></div> }.into_any(),
                    }}
                </DragOverlay>
            </Show>
        </div>
    }
}

/// Floating copy of a column shown in the overlay while it is dragged
#[component]
fn ColumnGhost(column: Column) -> impl IntoView {
    let store = use_board_store();
    let id: ColumnId = column.id;

    let tasks = move || store.read().tasks_in(id);

    view! {
        <div class="board-column ghost">
            <div class="column-header">
                <span class="column-title">{column.title.clone()}</span>
            </div>
            <div class="column-tasks">
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| {
                        view! {
                            <div class="task-card">
                                <p class="task-content">{task.content.clone()}</p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
