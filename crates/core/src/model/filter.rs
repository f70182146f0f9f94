use crate::model::task::Task;
use crate::model::team::{TeamMember, member_name};

/// Multi-select filters from the toolbar. An empty selection means "no
/// restriction" for that facet; facets combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Matches either the task title or its project/demand code.
    pub cards: Vec<String>,
    /// Matches the owner's display name (the unassigned label included).
    pub responsibles: Vec<String>,
    pub priorities: Vec<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.responsibles.is_empty() && self.priorities.is_empty()
    }

    pub fn matches(&self, task: &Task, members: &[TeamMember]) -> bool {
        let card_ok = self.cards.is_empty()
            || self.cards.iter().any(|c| *c == task.title)
            || self.cards.iter().any(|c| *c == task.project_id);

        let owner_name = member_name(members, task.owner()).unwrap_or("");
        let responsible_ok =
            self.responsibles.is_empty() || self.responsibles.iter().any(|r| r == owner_name);

        let priority_ok = self.priorities.is_empty()
            || task
                .priority
                .as_deref()
                .is_some_and(|p| self.priorities.iter().any(|f| f == p));

        card_ok && responsible_ok && priority_ok
    }

    pub fn apply(&self, tasks: &[Task], members: &[TeamMember]) -> Vec<Task> {
        if self.is_empty() {
            return tasks.to_vec();
        }
        tasks
            .iter()
            .filter(|t| self.matches(t, members))
            .cloned()
            .collect()
    }
}

/// Distinct card options for the filter dropdown: every task title and every
/// non-empty project code, sorted and deduplicated.
pub fn card_options(tasks: &[Task]) -> Vec<String> {
    let mut options: Vec<String> = tasks
        .iter()
        .flat_map(|t| {
            [t.title.clone(), t.project_id.clone()]
                .into_iter()
                .filter(|s| !s.is_empty())
        })
        .collect();
    options.sort();
    options.dedup();
    options
}

/// Distinct responsible names appearing on the given tasks, sorted.
pub fn responsible_options(tasks: &[Task], members: &[TeamMember]) -> Vec<String> {
    let mut options: Vec<String> = tasks
        .iter()
        .filter_map(|t| member_name(members, t.owner()))
        .map(String::from)
        .collect();
    options.sort();
    options.dedup();
    options
}
