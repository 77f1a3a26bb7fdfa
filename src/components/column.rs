//! Column Component
//!
//! One column of the board: inline-editable title, delete with cascade,
//! vertical task list, add-task footer. The header arms a column drag;
//! while dragged the whole container renders as a dimmed placeholder.

use leptos::prelude::*;
use leptos_sortable::{make_on_drag_leave, make_on_mousedown};
use wasm_bindgen::JsCast;

use crate::board::BoardStateStoreFields;
use crate::components::TaskCard;
use crate::dnd::use_dnd;
use crate::models::{Column, DragPayload};
use crate::store::{
    store_add_task, store_move_task_over_column, store_remove_column, store_rename_column,
    use_board_store,
};

#[component]
pub fn ColumnContainer(column: Column) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_dnd();

    let id = column.id;
    let title = column.title.clone();

    let (edit_mode, set_edit_mode) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let on_mousedown = make_on_mousedown(dnd, DragPayload::Column(column.clone()));
    let on_mouseleave = make_on_drag_leave(dnd);

    let enter_payload = column.clone();
    let on_mouseenter = move |_ev: web_sys::MouseEvent| match dnd.active.get_untracked() {
        Some(DragPayload::Column(active)) => {
            if active.id != id {
                dnd.over.set(Some(DragPayload::Column(enter_payload.clone())));
            }
        }
        Some(DragPayload::Task(active)) => {
            // Live reassignment: the task adopts this column, its position
            // in the list only changes if it later crosses a task card
            dnd.over.set(Some(DragPayload::Column(enter_payload.clone())));
            store_move_task_over_column(&store, active.id, id);
        }
        None => {}
    };

    let is_dragging =
        move || matches!(dnd.active.get(), Some(DragPayload::Column(ref c)) if c.id == id);
    let is_drop_target =
        move || matches!(dnd.over.get(), Some(DragPayload::Column(ref c)) if c.id == id);

    let column_class = move || {
        let mut c = String::from("board-column");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let tasks = move || {
        store
            .tasks()
            .read()
            .iter()
            .filter(|t| t.column_id == id)
            .cloned()
            .collect::<Vec<_>>()
    };
    let task_count = move || tasks().len();

    let edit_title = title.clone();
    let start_edit = move |_ev: web_sys::MouseEvent| {
        // A completed drag fires a trailing click; don't open the editor
        if edit_mode.get_untracked() || dnd.just_ended.get_untracked() {
            return;
        }
        set_draft.set(edit_title.clone());
        set_edit_mode.set(true);
    };

    let commit = move || {
        store_rename_column(&store, id, draft.get_untracked());
        set_edit_mode.set(false);
    };

    view! {
        <div
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="column-header" on:mousedown=on_mousedown on:click=start_edit>
                <div class="column-header-left">
                    <span class="task-count">{task_count}</span>
                    {move || if edit_mode.get() {
                        view! {
                            <input
                                type="text"
                                class="column-title-input"
                                autofocus=true
                                prop:value=move || draft.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_draft.set(input.value());
                                }
                                on:blur=move |_| commit()
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        commit();
                                    }
                                }
                            />
                        }.into_any()
                    } else {
                        view! { <span class="column-title">{title.clone()}</span> }.into_any()
                    }}
                </div>
                <button
                    class="column-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_remove_column(&store, id);
                    }
                >
                    "×"
                </button>
            </div>

            <div class="column-tasks">
                <For
                    each=tasks
                    // Key on every mutable field so edits and moves re-render
                    key=|task| (task.id, task.column_id, task.content.clone())
                    children=move |task| {
                        view! { <TaskCard task=task /> }
                    }
                />
            </div>

            <button class="add-task-btn" on:click=move |_| store_add_task(&store, id)>
                "+ Add task"
            </button>
        </div>
    }
}
