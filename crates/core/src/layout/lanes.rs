use std::collections::HashMap;

use crewboard_protocol::{Day, LaneAssignment};

use crate::model::Task;

/// Stack one owner's tasks into the fewest lanes such that no two tasks in
/// a lane share a calendar day.
///
/// Greedy first-fit over tasks sorted by `(start ascending, duration
/// descending)`; the tie-break puts long-running tasks in lower lanes.
/// Each lane keeps a watermark — the end day of its latest task — and a
/// task fits a lane only when the watermark is strictly before its start
/// (ending on day N does not block a start on day N+1).
///
/// Independent of the visible window: switching the date range never
/// restacks anything.
pub fn pack_lanes(tasks: &[Task]) -> HashMap<String, LaneAssignment> {
    pack_refs(&tasks.iter().collect::<Vec<_>>())
}

/// Lane assignments for every owner on the board, the unassigned bucket
/// included. Owners are taken from the tasks themselves after sentinel
/// normalization.
pub fn pack_lanes_by_owner(tasks: &[Task]) -> HashMap<String, HashMap<String, LaneAssignment>> {
    let mut groups: HashMap<String, Vec<&Task>> = HashMap::new();
    for task in tasks {
        groups.entry(task.owner().to_string()).or_default().push(task);
    }
    groups
        .into_iter()
        .map(|(owner, group)| (owner, pack_refs(&group)))
        .collect()
}

fn pack_refs(tasks: &[&Task]) -> HashMap<String, LaneAssignment> {
    let mut sorted: Vec<&Task> = tasks.to_vec();
    // Stable sort keeps input order for full ties.
    sorted.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.duration_days().cmp(&a.duration_days()))
    });

    // One watermark per lane: the end day of the latest task placed there.
    let mut watermarks: Vec<Day> = Vec::new();
    let mut lanes: HashMap<String, usize> = HashMap::with_capacity(sorted.len());

    for task in sorted {
        let lane = match watermarks.iter().position(|w| *w < task.start) {
            Some(i) => {
                watermarks[i] = task.end;
                i
            }
            None => {
                watermarks.push(task.end);
                watermarks.len() - 1
            }
        };
        lanes.insert(task.id.clone(), lane);
    }

    // Minimum 1 so proportional-height math downstream never divides by zero.
    let lane_count = watermarks.len().max(1);
    lanes
        .into_iter()
        .map(|(id, lane)| (id, LaneAssignment { lane, lane_count }))
        .collect()
}
