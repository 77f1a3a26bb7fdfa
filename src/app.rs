//! Kanban Board App
//!
//! Main application component.

use leptos::prelude::*;

use crate::components::Board;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Board />
        </div>
    }
}
