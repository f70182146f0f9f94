use std::collections::HashSet;

use crewboard_protocol::Day;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::task::Task;
use crate::model::team::TeamMember;

/// A phase groups related tasks inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub project_id: String,
    pub start: Day,
    pub end: Day,
    pub created: Day,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub start: Day,
    pub end: Day,
    pub created: Day,
    pub phases: Vec<Phase>,
}

/// A demand is a flat container of tasks without phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demand {
    pub id: String,
    pub title: String,
    pub start: Day,
    pub end: Day,
    pub created: Day,
    pub tasks: Vec<Task>,
}

/// Top-level work-package container, either a project or a demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkPackage {
    Project(Project),
    Demand(Demand),
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("task {id}: start {start} is after end {end}")]
    InvertedRange { id: String, start: Day, end: Day },
    #[error("duplicate task id: {0}")]
    DuplicateId(String),
}

/// Everything the layout engine consumes: the work-package hierarchy plus
/// the team. Holds no derived state — layouts are recomputed from scratch
/// on every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub packages: Vec<WorkPackage>,
    pub members: Vec<TeamMember>,
}

impl Board {
    /// Flatten the hierarchy into the flat task list the layout functions
    /// take. Tasks under a demand are tagged `demand = true`.
    pub fn tasks(&self) -> Vec<Task> {
        let mut out = Vec::new();
        for package in &self.packages {
            match package {
                WorkPackage::Project(project) => {
                    for phase in &project.phases {
                        out.extend(phase.tasks.iter().cloned());
                    }
                }
                WorkPackage::Demand(demand) => {
                    out.extend(demand.tasks.iter().map(|t| {
                        let mut t = t.clone();
                        t.demand = true;
                        t
                    }));
                }
            }
        }
        out
    }

    /// Reject malformed data at the ingestion boundary so the layout layer
    /// never sees it: inverted date ranges and duplicate task ids.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for task in self.tasks() {
            if task.start > task.end {
                return Err(BoardError::InvertedRange {
                    id: task.id,
                    start: task.start,
                    end: task.end,
                });
            }
            if !seen.insert(task.id.clone()) {
                return Err(BoardError::DuplicateId(task.id));
            }
        }
        Ok(())
    }

    /// Move one task to another kanban column. Unknown ids are ignored.
    pub fn set_task_status(&mut self, task_id: &str, status: &str) {
        self.for_each_task(|task| {
            if task.id == task_id {
                task.status = status.to_string();
            }
        });
    }

    /// Retag every task in one kanban column to another column name. Used
    /// both when renaming a column and when draining it into another.
    pub fn retag_status(&mut self, from: &str, to: &str) {
        self.for_each_task(|task| {
            if task.status == from {
                task.status = to.to_string();
            }
        });
    }

    fn for_each_task(&mut self, mut f: impl FnMut(&mut Task)) {
        for package in &mut self.packages {
            match package {
                WorkPackage::Project(project) => {
                    for phase in &mut project.phases {
                        phase.tasks.iter_mut().for_each(&mut f);
                    }
                }
                WorkPackage::Demand(demand) => {
                    demand.tasks.iter_mut().for_each(&mut f);
                }
            }
        }
    }
}
