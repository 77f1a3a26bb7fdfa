//! Task Card Component
//!
//! A single task: free-text content with click-to-edit, hover delete,
//! and drag support. Hovering a card during a task drag moves the active
//! task next to this one (adopting this card's column).

use leptos::prelude::*;
use leptos_sortable::make_on_mousedown;
use wasm_bindgen::JsCast;

use crate::dnd::use_dnd;
use crate::models::{DragPayload, Task};
use crate::store::{store_edit_task, store_move_task_over_task, store_remove_task, use_board_store};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_dnd();

    let id = task.id;
    let content = task.content.clone();

    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let on_mousedown = make_on_mousedown(dnd, DragPayload::Task(task.clone()));

    let enter_payload = task.clone();
    let on_mouseenter = move |_ev: web_sys::MouseEvent| {
        set_mouse_is_over.set(true);
        if let Some(DragPayload::Task(active)) = dnd.active.get_untracked() {
            if active.id != id {
                dnd.over.set(Some(DragPayload::Task(enter_payload.clone())));
                store_move_task_over_task(&store, active.id, id);
            }
        }
    };
    // Only task drags care about leaving a card; during a column drag the
    // enclosing column stays the over target
    let on_mouseleave = move |_ev: web_sys::MouseEvent| {
        set_mouse_is_over.set(false);
        if matches!(dnd.active.get_untracked(), Some(DragPayload::Task(_))) {
            dnd.over.set(None);
        }
    };

    let is_dragging =
        move || matches!(dnd.active.get(), Some(DragPayload::Task(ref t)) if t.id == id);
    let is_drop_target =
        move || matches!(dnd.over.get(), Some(DragPayload::Task(ref t)) if t.id == id);

    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let edit_content = content.clone();
    let start_edit = move |_ev: web_sys::MouseEvent| {
        // A completed drag fires a trailing click; don't open the editor
        if edit_mode.get_untracked() || dnd.just_ended.get_untracked() {
            return;
        }
        set_draft.set(edit_content.clone());
        set_edit_mode.set(true);
        set_mouse_is_over.set(false);
    };

    let commit = move || {
        store_edit_task(&store, id, draft.get_untracked());
        set_edit_mode.set(false);
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=start_edit
        >
            {move || if edit_mode.get() {
                view! {
                    <textarea
                        class="task-edit"
                        placeholder="Enter task content"
                        autofocus=true
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_draft.set(area.value());
                        }
                        on:blur=move |_| commit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            // Plain Enter keeps inserting newlines
                            if ev.key() == "Enter" && ev.shift_key() {
                                commit();
                            }
                        }
                    ></textarea>
                }.into_any()
            } else {
                view! { <p class="task-content">{content.clone()}</p> }.into_any()
            }}

            <Show when=move || mouse_is_over.get() && !edit_mode.get()>
                <button
                    class="task-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_remove_task(&store, id);
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
