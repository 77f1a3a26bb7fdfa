//! UI Components
//!
//! Reusable Leptos components.

mod board;
mod column;
mod task_card;

pub use board::Board;
pub use column::ColumnContainer;
pub use task_card::TaskCard;
