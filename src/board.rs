//! Board State
//!
//! Owns the two ordered collections and every mutation the UI can perform.
//! Vec order is display order: columns left-to-right, tasks top-to-bottom
//! within their column. Operations are total, a missing id is a silent no-op.

use reactive_stores::Store;

use crate::models::{Column, ColumnId, Task, TaskId};
use leptos_sortable::array_move;

/// The whole board, with field-level reactivity when held in a `Store`
#[derive(Debug, Clone, Default, Store)]
pub struct BoardState {
    /// Columns in display order
    pub columns: Vec<Column>,
    /// Tasks across all columns; relative order within a column is the
    /// display order of that column
    pub tasks: Vec<Task>,
    /// Monotonic id counters, one per entity kind, never reused
    pub next_column_id: u64,
    pub next_task_id: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new column with a fresh id and a default title
    pub fn add_column(&mut self) {
        self.next_column_id += 1;
        self.columns.push(Column {
            id: ColumnId(self.next_column_id),
            title: format!("Column {}", self.columns.len() + 1),
        });
    }

    /// Replace the title of the matching column. Empty titles are accepted.
    pub fn rename_column(&mut self, id: ColumnId, title: String) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.title = title;
        }
    }

    /// Remove a column and every task that belongs to it
    pub fn remove_column(&mut self, id: ColumnId) {
        self.columns.retain(|c| c.id != id);
        self.tasks.retain(|t| t.column_id != id);
    }

    /// Append a new task with a fresh id and a default content.
    /// The column id is not validated; an orphan task simply never renders.
    pub fn add_task(&mut self, column_id: ColumnId) {
        self.next_task_id += 1;
        self.tasks.push(Task {
            id: TaskId(self.next_task_id),
            column_id,
            content: format!("Task {}", self.tasks.len() + 1),
        });
    }

    /// Replace the content of the matching task
    pub fn edit_task(&mut self, id: TaskId, content: String) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.content = content;
        }
    }

    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Move the active column to the position the over column occupies
    pub fn reorder_columns(&mut self, active: ColumnId, over: ColumnId) {
        if active == over {
            return;
        }
        let from = self.columns.iter().position(|c| c.id == active);
        let to = self.columns.iter().position(|c| c.id == over);
        if let (Some(from), Some(to)) = (from, to) {
            array_move(&mut self.columns, from, to);
        }
    }

    /// A task was dragged over another task: adopt the over task's column
    /// and move adjacent to it in the task list
    pub fn move_task_over_task(&mut self, active: TaskId, over: TaskId) {
        if active == over {
            return;
        }
        let from = self.tasks.iter().position(|t| t.id == active);
        let to = self.tasks.iter().position(|t| t.id == over);
        if let (Some(from), Some(to)) = (from, to) {
            self.tasks[from].column_id = self.tasks[to].column_id;
            array_move(&mut self.tasks, from, to);
        }
    }

    /// A task was dragged over a column surface: adopt that column.
    /// List position is left unchanged.
    pub fn move_task_over_column(&mut self, active: TaskId, column: ColumnId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == active) {
            task.column_id = column;
        }
    }

    /// Tasks of one column, in display order
    pub fn tasks_in(&self, column_id: ColumnId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with `n` columns (ids 1..=n) and no tasks
    fn board_with_columns(n: usize) -> BoardState {
        let mut board = BoardState::new();
        for _ in 0..n {
            board.add_column();
        }
        board
    }

    fn column_ids(board: &BoardState) -> Vec<u64> {
        board.columns.iter().map(|c| c.id.0).collect()
    }

    fn task_ids(board: &BoardState) -> Vec<u64> {
        board.tasks.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_add_column_defaults() {
        let board = board_with_columns(2);
        assert_eq!(column_ids(&board), vec![1, 2]);
        assert_eq!(board.columns[0].title, "Column 1");
        assert_eq!(board.columns[1].title, "Column 2");
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut board = board_with_columns(2);
        board.remove_column(ColumnId(2));
        board.add_column();
        assert_eq!(column_ids(&board), vec![1, 3]);
    }

    #[test]
    fn test_rename_column_targets_only_that_column() {
        let mut board = board_with_columns(2);
        board.rename_column(ColumnId(1), "Doing".to_string());
        assert_eq!(board.columns[0].title, "Doing");
        assert_eq!(board.columns[1].title, "Column 2");

        // Absent id is a no-op
        board.rename_column(ColumnId(99), "Ghost".to_string());
        assert_eq!(board.columns[0].title, "Doing");
        assert_eq!(board.columns[1].title, "Column 2");
    }

    #[test]
    fn test_remove_column_cascades_to_its_tasks() {
        let mut board = board_with_columns(2);
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(2));
        board.add_task(ColumnId(1));

        board.remove_column(ColumnId(1));

        assert_eq!(column_ids(&board), vec![2]);
        assert_eq!(task_ids(&board), vec![2]);
        assert_eq!(board.tasks[0].column_id, ColumnId(2));
    }

    #[test]
    fn test_add_task_then_remove_column_scenario() {
        let mut board = board_with_columns(2);
        board.add_task(ColumnId(1));
        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.tasks[0].content, "Task 1");
        assert_eq!(board.tasks[0].column_id, ColumnId(1));

        board.remove_column(ColumnId(1));
        assert_eq!(column_ids(&board), vec![2]);
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn test_edit_task_targets_only_that_task() {
        let mut board = board_with_columns(1);
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(1));

        board.edit_task(TaskId(1), "write the report".to_string());
        assert_eq!(board.tasks[0].content, "write the report");
        assert_eq!(board.tasks[1].content, "Task 2");

        board.edit_task(TaskId(99), "ghost".to_string());
        assert_eq!(board.tasks[0].content, "write the report");
    }

    #[test]
    fn test_edit_task_accepts_empty_content() {
        let mut board = board_with_columns(1);
        board.add_task(ColumnId(1));
        board.edit_task(TaskId(1), String::new());
        assert_eq!(board.tasks[0].content, "");
    }

    #[test]
    fn test_remove_task() {
        let mut board = board_with_columns(1);
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(1));
        board.remove_task(TaskId(1));
        assert_eq!(task_ids(&board), vec![2]);

        board.remove_task(TaskId(99));
        assert_eq!(task_ids(&board), vec![2]);
    }

    #[test]
    fn test_reorder_columns_moves_active_to_over_position() {
        let mut board = board_with_columns(3);
        board.reorder_columns(ColumnId(1), ColumnId(3));
        assert_eq!(column_ids(&board), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_columns_backward() {
        let mut board = board_with_columns(3);
        board.reorder_columns(ColumnId(3), ColumnId(1));
        assert_eq!(column_ids(&board), vec![3, 1, 2]);
    }

    #[test]
    fn test_reorder_columns_self_is_noop() {
        let mut board = board_with_columns(3);
        board.reorder_columns(ColumnId(2), ColumnId(2));
        assert_eq!(column_ids(&board), vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_columns_missing_id_is_noop() {
        let mut board = board_with_columns(2);
        board.reorder_columns(ColumnId(1), ColumnId(99));
        assert_eq!(column_ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_move_task_over_task_reassigns_and_places_adjacent() {
        let mut board = board_with_columns(2);
        board.add_task(ColumnId(1)); // task 1
        board.add_task(ColumnId(2)); // task 2
        board.add_task(ColumnId(2)); // task 3

        board.move_task_over_task(TaskId(1), TaskId(3));

        let moved = board.tasks.iter().find(|t| t.id == TaskId(1)).unwrap();
        assert_eq!(moved.column_id, ColumnId(2));
        // Task 1 took task 3's slot in the flat list
        assert_eq!(task_ids(&board), vec![2, 3, 1]);
        // Column 2 now holds all three, column 1 none
        assert_eq!(board.tasks_in(ColumnId(1)).len(), 0);
        assert_eq!(board.tasks_in(ColumnId(2)).len(), 3);
    }

    #[test]
    fn test_move_task_over_task_same_column_reorders() {
        let mut board = board_with_columns(1);
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(1));

        board.move_task_over_task(TaskId(3), TaskId(1));
        assert_eq!(task_ids(&board), vec![3, 1, 2]);
    }

    #[test]
    fn test_move_task_over_column_reassigns_without_reordering() {
        let mut board = board_with_columns(2);
        board.add_task(ColumnId(1)); // task 1
        board.add_task(ColumnId(1)); // task 2
        board.add_task(ColumnId(2)); // task 3

        board.move_task_over_column(TaskId(1), ColumnId(2));

        let moved = board.tasks.iter().find(|t| t.id == TaskId(1)).unwrap();
        assert_eq!(moved.column_id, ColumnId(2));
        // Flat order untouched
        assert_eq!(task_ids(&board), vec![1, 2, 3]);
        assert_eq!(
            board.tasks_in(ColumnId(2)).iter().map(|t| t.id.0).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_tasks_in_preserves_relative_order() {
        let mut board = board_with_columns(2);
        board.add_task(ColumnId(1));
        board.add_task(ColumnId(2));
        board.add_task(ColumnId(1));

        let in_one = board.tasks_in(ColumnId(1));
        assert_eq!(in_one.iter().map(|t| t.id.0).collect::<Vec<_>>(), vec![1, 3]);
    }
}
