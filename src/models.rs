//! Board Models
//!
//! Column and task records plus their id newtypes. Ids are allocated from
//! per-kind monotonic counters (see `board`), so a ColumnId and a TaskId can
//! never be confused and uniqueness holds by construction.

use serde::{Deserialize, Serialize};

/// Identifier of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub u64);

/// Identifier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// A named, ordered grouping of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

/// A unit of work with free-text content, belonging to exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

/// What is being dragged. Drag handlers match on this exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Column(Column),
    Task(Task),
}
