//! Integration test: load the demo board fixture and lay it out in both
//! views, verifying columns, spans, lane stacking, and kanban grouping
//! end to end.

use crewboard_core::model::{Board, MemberOrder, UNASSIGNED_ID};
use crewboard_core::views::{SortKey, layout_kanban, layout_workload, tasks_in_week};
use crewboard_core::{period_heading, project_span};
use crewboard_protocol::{Day, Granularity, Locale};

fn demo_board() -> Board {
    let raw = include_str!("fixtures/demo-board.json");
    serde_json::from_str(raw).expect("failed to parse demo board fixture")
}

fn day(d: u32) -> Day {
    Day::from_ymd_opt(2025, 10, d).expect("valid fixture date")
}

#[test]
fn fixture_parses_and_validates() {
    let board = demo_board();
    board.validate().expect("demo board should be well-formed");

    let tasks = board.tasks();
    assert_eq!(tasks.len(), 6);
    // Project task keeps demand = false; demand tasks get tagged.
    assert!(!tasks[0].demand);
    assert!(tasks[1..].iter().all(|t| t.demand));
    assert_eq!(tasks[5].owner(), UNASSIGNED_ID);
}

#[test]
fn workload_layout_of_the_demo_week() {
    let board = demo_board();
    let tasks = board.tasks();

    // Anchor mid-week; 2025-10-08 is a Wednesday.
    let layout = layout_workload(
        &tasks,
        &board.members,
        Granularity::Day,
        day(8),
        Locale::En,
        MemberOrder::Ascending,
    );

    assert_eq!(layout.columns.len(), 5);
    assert_eq!(layout.columns[0].label, "MONDAY, 6");
    assert_eq!(layout.columns[0].start, day(6));
    assert_eq!(layout.columns[4].start, day(10));

    let row_ids: Vec<&str> = layout.rows.iter().map(|r| r.member.id.as_str()).collect();
    assert_eq!(
        row_ids,
        ["joaozinho", "pietrinho", "robertinho", UNASSIGNED_ID]
    );

    // joãozinho: one four-day task, Mon–Thu.
    let joao = &layout.rows[0];
    assert_eq!(joao.lane_count, 1);
    assert_eq!(joao.cards.len(), 1);
    assert_eq!(joao.cards[0].span.start_col, 0);
    assert_eq!(joao.cards[0].span.end_col, 3);

    // pietrinho: the documented stacking scenario. task-2 [Mon,Tue] is
    // longer than task-3 [Mon,Mon] so it takes lane 0; task-4 [Wed,Wed]
    // starts after lane 0's Tuesday watermark and reuses it.
    let pietr = &layout.rows[1];
    assert_eq!(pietr.lane_count, 2);
    let card = |id: &str| {
        pietr
            .cards
            .iter()
            .find(|c| c.task_id == id)
            .unwrap_or_else(|| panic!("missing card {id}"))
    };
    assert_eq!(card("task-2").lane, 0);
    assert_eq!(card("task-3").lane, 1);
    assert_eq!(card("task-4").lane, 0);
    assert_eq!(card("task-4").span.start_col, 2);
    assert_eq!(card("task-4").span.count(), 1);

    // The unowned task lies outside this week: a row with no cards.
    let unassigned = &layout.rows[3];
    assert!(unassigned.cards.is_empty());
    assert_eq!(unassigned.lane_count, 1);
}

#[test]
fn month_view_clips_long_tasks_to_their_months() {
    let board = demo_board();
    let tasks = board.tasks();
    let layout = layout_workload(
        &tasks,
        &board.members,
        Granularity::Month,
        day(8),
        Locale::En,
        MemberOrder::Ascending,
    );
    assert_eq!(layout.columns.len(), 12);

    // Every October task projects onto the October column alone.
    for row in &layout.rows {
        for card in &row.cards {
            assert_eq!(card.span.start_col, 9);
            assert_eq!(card.span.end_col, 9);
        }
    }
}

#[test]
fn kanban_groups_the_visible_week() {
    let board = demo_board();
    let tasks = board.tasks();

    let week = tasks_in_week(&tasks, day(8));
    // task-6 (Oct 20–21) falls outside the week of Oct 6–12.
    assert_eq!(week.len(), 5);

    let columns: Vec<String> = ["toDo", "sprint", "doing", "done"]
        .into_iter()
        .map(String::from)
        .collect();
    let layout = layout_kanban(&week, &columns, SortKey::Priority, &board.members);

    let sizes: Vec<usize> = layout.columns.iter().map(|c| c.tasks.len()).collect();
    assert_eq!(sizes, [2, 1, 1, 1]);
    // Priority sort: urgent task-3 before medium task-1.
    assert_eq!(layout.columns[0].tasks[0].id, "task-3");
    assert_eq!(layout.columns[0].tasks[1].id, "task-1");
}

#[test]
fn projection_and_heading_in_portuguese() {
    let board = demo_board();
    let tasks = board.tasks();

    let layout = layout_workload(
        &tasks,
        &board.members,
        Granularity::Week,
        day(8),
        Locale::Pt,
        MemberOrder::Ascending,
    );
    // Week view of October 2025: W1 is the week of Sep 29.
    assert_eq!(layout.columns[0].label, "W1 (29 set - 5 out)");

    // task-6 intersects W4 (Oct 20–26) only.
    let span = project_span(day(20), day(21), &layout.columns).expect("task-6 visible in week view");
    assert_eq!(span.start_col, 3);
    assert_eq!(span.end_col, 3);

    assert_eq!(
        period_heading(Granularity::Week, day(8), Locale::Pt),
        "outubro 2025"
    );
}
