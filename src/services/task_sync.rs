//! Contest task list editing
//!
//! An edit submits the full task list. It is diffed against what is stored:
//! tasks only in the new list are added, tasks only in the old list are
//! removed, and tasks in both keep their row and take the new label.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::ContestTask;

/// Task entry in an edit request
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct TaskAssignment {
    pub task_id: Uuid,
    pub label: String,
}

/// Changes needed to turn the stored task list into the submitted one
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub added: Vec<TaskAssignment>,
    pub removed: Vec<Uuid>,
    /// Kept tasks whose label changed
    pub relabeled: Vec<TaskAssignment>,
}

impl TaskChanges {
    pub fn plan(existing: &[ContestTask], incoming: &[TaskAssignment]) -> Self {
        let stored: HashMap<Uuid, &str> = existing
            .iter()
            .map(|t| (t.task_id, t.label.as_str()))
            .collect();
        let submitted: HashMap<Uuid, &str> = incoming
            .iter()
            .map(|t| (t.task_id, t.label.as_str()))
            .collect();

        let removed = existing
            .iter()
            .filter(|t| !submitted.contains_key(&t.task_id))
            .map(|t| t.task_id)
            .collect();

        let mut changes = Self {
            removed,
            ..Self::default()
        };
        for task in incoming {
            match stored.get(&task.task_id) {
                None => changes.added.push(task.clone()),
                Some(&label) if label != task.label => changes.relabeled.push(task.clone()),
                Some(_) => {}
            }
        }

        changes
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.relabeled.is_empty()
    }
}
