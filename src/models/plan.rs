use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: usize,
    pub description: String,
    pub completed: bool,
}

/// The side hustle idea plus its starter tasks. At most one live plan per
/// session; a new generation replaces the whole thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub idea: String,
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Build a plan from an idea and ordered task descriptions. Task ids
    /// are the zero-based position in the list; everything starts unchecked.
    pub fn new(idea: impl Into<String>, descriptions: Vec<String>) -> Self {
        let tasks = descriptions
            .into_iter()
            .enumerate()
            .map(|(id, description)| Task {
                id,
                description,
                completed: false,
            })
            .collect();
        Self {
            idea: idea.into(),
            tasks,
        }
    }

    pub fn task(&self, task_id: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// New plan with the matching task's completion flag inverted. Identical
    /// to `self` when no task carries `task_id`.
    pub fn with_task_toggled(&self, task_id: usize) -> Plan {
        let tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == task_id {
                    Task {
                        completed: !t.completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        Plan {
            idea: self.idea.clone(),
            tasks,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Completion percentage in `0.0..=100.0`. A plan with zero tasks is 0.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        (self.completed_count() as f64 / self.tasks.len() as f64) * 100.0
    }
}
