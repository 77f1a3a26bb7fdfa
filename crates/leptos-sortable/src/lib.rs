//! Leptos Sortable
//!
//! Pointer-driven drag-and-drop for sortable Leptos lists.
//! Uses a movement threshold to distinguish click from drag, and carries a
//! typed payload so drop handlers can match on what is being dragged.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels before a pending press becomes a drag
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a finished drag keeps suppressing the follow-up click
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals carrying a typed drag payload.
///
/// All fields are arena-allocated signals, so the whole struct is `Copy` and
/// can be passed into event closures by value.
pub struct DndSignals<T: Send + Sync + 'static> {
    /// Payload armed by mousedown but not yet past the movement threshold
    pub pending: RwSignal<Option<T>>,
    /// Payload currently being dragged
    pub active: RwSignal<Option<T>>,
    /// Payload currently under the pointer during a drag
    pub over: RwSignal<Option<T>>,
    /// Pointer position at mousedown, for threshold detection
    pub start_x: RwSignal<i32>,
    pub start_y: RwSignal<i32>,
    /// Live pointer position while dragging, drives the overlay
    pub pointer_x: RwSignal<i32>,
    pub pointer_y: RwSignal<i32>,
    /// Set briefly after a drop so the trailing click can be ignored
    pub just_ended: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

impl<T: Send + Sync + 'static> DndSignals<T> {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
            active: RwSignal::new(None),
            over: RwSignal::new(None),
            start_x: RwSignal::new(0),
            start_y: RwSignal::new(0),
            pointer_x: RwSignal::new(0),
            pointer_y: RwSignal::new(0),
            just_ended: RwSignal::new(false),
        }
    }
}

impl<T: Send + Sync + 'static> Default for DndSignals<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// End the drag: discard captured state and open the click-suppression window
pub fn end_drag<T: Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.pending.set(None);
    dnd.active.set(None);
    dnd.over.set(None);
    dnd.just_ended.set(true);

    let just_ended = dnd.just_ended;
    spawn_local(async move {
        TimeoutFuture::new(CLICK_SUPPRESS_MS).await;
        just_ended.set(false);
    });
}

/// Mousedown handler factory for draggable elements.
///
/// Arms a pending drag with the given payload. Presses on inputs, textareas
/// and buttons are ignored so inline editing never starts a drag.
pub fn make_on_mousedown<T>(
    dnd: DndSignals<T>,
    payload: T,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending.set(Some(payload.clone()));
        dnd.start_x.set(ev.client_x());
        dnd.start_y.set(ev.client_y());
    }
}

/// Mouseleave handler factory clearing the over target
pub fn make_on_drag_leave<T>(
    dnd: DndSignals<T>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.active.get_untracked().is_some() {
            dnd.over.set(None);
        }
    }
}

/// Install document-level mousemove and mouseup listeners.
///
/// Mousemove promotes a pending press to an active drag once the pointer has
/// moved past the threshold, and keeps the live pointer position current for
/// overlay rendering. Mouseup reports the drop through `on_drop(active, over)`;
/// an `over` of `None` means the drag was released over nothing and the caller
/// should treat it as cancelled. Call once per drag context.
pub fn bind_global_listeners<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T, Option<T>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.active.get_untracked().is_some() {
            dnd.pointer_x.set(ev.client_x());
            dnd.pointer_y.set(ev.client_y());
            return;
        }

        let Some(pending) = dnd.pending.get_untracked() else {
            return;
        };
        let dx = (ev.client_x() - dnd.start_x.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.pointer_x.set(ev.client_x());
            dnd.pointer_y.set(ev.client_y());
            dnd.active.set(Some(pending));
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let active = dnd.active.get_untracked();
        let over = dnd.over.get_untracked();

        dnd.pending.set(None);

        if let Some(active) = active {
            end_drag(&dnd);
            on_drop(active, over);
        } else {
            // Plain click, let it fire naturally on the element
            dnd.active.set(None);
            dnd.over.set(None);
        }
    });

    // Escape cancels the drag outright, nothing is reported
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.active.get_untracked().is_some() {
            end_drag(&dnd);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}

/// Move `items[from]` so it ends up at index `to` (remove, then insert)
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Floating copy of the dragged element, rendered at the pointer position
/// outside the normal layout flow.
#[component]
pub fn DragOverlay(
    #[prop(into)] x: Signal<i32>,
    #[prop(into)] y: Signal<i32>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="drag-overlay"
            style=move || format!(
                "position: fixed; left: {}px; top: {}px; pointer-events: none; z-index: 1000;",
                x.get() + 8,
                y.get() + 8,
            )
        >
            {children()}
        </div>
    }
}
