use crewboard_protocol::{ColumnSpan, DateColumn, Day, Granularity, Locale};
use serde::{Deserialize, Serialize};

use crate::calendar::date_columns;
use crate::layout::{pack_lanes_by_owner, project_span};
use crate::model::{MemberOrder, Task, TeamMember, UNASSIGNED_ID, order_members};

/// One task placed on the grid: which columns it spans and which lane it
/// stacks into within its owner's row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedCard {
    pub task_id: String,
    pub span: ColumnSpan,
    pub lane: usize,
}

/// One owner's row of the workload grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRow {
    pub member: TeamMember,
    /// Maximum overlap depth for this owner; at least 1. Drives the row's
    /// proportional height.
    pub lane_count: usize,
    pub cards: Vec<PlacedCard>,
}

/// Complete plain-data layout of the workload view. The renderer combines
/// column indices and lanes into pixel geometry; nothing here knows about
/// pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadLayout {
    pub columns: Vec<DateColumn>,
    pub rows: Vec<MemberRow>,
}

/// Lay out the workload grid for one visible window.
///
/// Lane packing runs over each owner's full task set, not just the tasks
/// intersecting the window — changing granularity or anchor only changes
/// which lanes are visible, never how tasks stack. Tasks outside the window
/// produce no card. Members without the reserved unassigned entry get one
/// appended so unowned tasks always have a row.
pub fn layout_workload(
    tasks: &[Task],
    members: &[TeamMember],
    granularity: Granularity,
    anchor: Day,
    locale: Locale,
    order: MemberOrder,
) -> WorkloadLayout {
    let columns = date_columns(granularity, anchor, locale);
    let lanes_by_owner = pack_lanes_by_owner(tasks);

    let mut ordered = order_members(members, order);
    if !ordered.iter().any(|m| m.id == UNASSIGNED_ID) {
        ordered.push(TeamMember::unassigned(locale));
    }

    let rows = ordered
        .into_iter()
        .map(|member| {
            let lanes = lanes_by_owner.get(member.id.as_str());
            let lane_count = lanes
                .and_then(|l| l.values().next())
                .map_or(1, |a| a.lane_count);

            let cards = tasks
                .iter()
                .filter(|t| t.owner() == member.id)
                .filter_map(|t| {
                    let span = project_span(t.start, t.end, &columns)?;
                    let lane = lanes.and_then(|l| l.get(&t.id)).map_or(0, |a| a.lane);
                    Some(PlacedCard {
                        task_id: t.id.clone(),
                        span,
                        lane,
                    })
                })
                .collect();

            MemberRow {
                member,
                lane_count,
                cards,
            }
        })
        .collect();

    WorkloadLayout { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Day {
        Day::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn task(id: &str, owner: Option<&str>, start: Day, end: Day) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            project_id: String::new(),
            hours: 8.0,
            owner_id: owner.map(String::from),
            start,
            end,
            priority: None,
            status: "toDo".into(),
            created: start,
            demand: false,
        }
    }

    fn members() -> Vec<TeamMember> {
        vec![
            TeamMember {
                id: "joaozinho".into(),
                name: "joãozinho".into(),
            },
            TeamMember {
                id: "pietrinho".into(),
                name: "pietrinho".into(),
            },
        ]
    }

    #[test]
    fn rows_follow_member_order_with_unassigned_appended() {
        let layout = layout_workload(
            &[],
            &members(),
            Granularity::Day,
            day(6),
            Locale::En,
            MemberOrder::Ascending,
        );
        let ids: Vec<&str> = layout.rows.iter().map(|r| r.member.id.as_str()).collect();
        assert_eq!(ids, ["joaozinho", "pietrinho", UNASSIGNED_ID]);
        for row in &layout.rows {
            assert_eq!(row.lane_count, 1);
            assert!(row.cards.is_empty());
        }
    }

    #[test]
    fn cards_carry_span_and_lane() {
        let tasks = vec![
            task("a", Some("pietrinho"), day(6), day(6)),
            task("b", Some("pietrinho"), day(6), day(7)),
            task("c", Some("pietrinho"), day(8), day(8)),
        ];
        let layout = layout_workload(
            &tasks,
            &members(),
            Granularity::Day,
            day(6),
            Locale::En,
            MemberOrder::Ascending,
        );
        let row = &layout.rows[1];
        assert_eq!(row.member.id, "pietrinho");
        assert_eq!(row.lane_count, 2);
        assert_eq!(row.cards.len(), 3);

        let card = |id: &str| {
            row.cards
                .iter()
                .find(|c| c.task_id == id)
                .unwrap_or_else(|| panic!("missing card {id}"))
        };
        assert_eq!(card("b").lane, 0);
        assert_eq!(card("a").lane, 1);
        assert_eq!(card("c").lane, 0);
        assert_eq!(card("b").span.start_col, 0);
        assert_eq!(card("b").span.end_col, 1);
        assert_eq!(card("c").span.start_col, 2);
    }

    #[test]
    fn unowned_tasks_land_in_the_unassigned_row() {
        let tasks = vec![task("loose", None, day(7), day(7))];
        let layout = layout_workload(
            &tasks,
            &members(),
            Granularity::Day,
            day(6),
            Locale::Pt,
            MemberOrder::Ascending,
        );
        let last = layout.rows.last().unwrap();
        assert_eq!(last.member.id, UNASSIGNED_ID);
        assert_eq!(last.member.name, "Sem responsável");
        assert_eq!(last.cards.len(), 1);
    }

    #[test]
    fn window_change_does_not_restack() {
        // "a" and "b" overlap two weeks after the day window of Oct 6.
        // Lane depth still reflects them; no cards are produced.
        let tasks = vec![
            task("a", Some("pietrinho"), day(20), day(25)),
            task("b", Some("pietrinho"), day(22), day(28)),
        ];
        let layout = layout_workload(
            &tasks,
            &members(),
            Granularity::Day,
            day(6),
            Locale::En,
            MemberOrder::Ascending,
        );
        let row = &layout.rows[1];
        assert!(row.cards.is_empty());
        assert_eq!(row.lane_count, 2);
    }
}
