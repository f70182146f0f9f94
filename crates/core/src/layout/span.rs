use crewboard_protocol::{ColumnSpan, DateColumn, Day};

/// Project a task's day interval onto the visible columns.
///
/// Returns the inclusive column index range the task occupies, clamped to
/// the window edges, or `None` when the interval misses the window entirely
/// (or `columns` is empty). Never indexes outside `columns`.
pub fn project_span(start: Day, end: Day, columns: &[DateColumn]) -> Option<ColumnSpan> {
    let view_start = columns.first()?.start;
    let view_end = columns.last()?.end;

    if end < view_start || start > view_end {
        return None;
    }

    let visible_start = start.max(view_start);
    let visible_end = end.min(view_end);

    // First column that reaches the clamped start, last column that begins
    // before the clamped end. Both exist: the miss case is handled above.
    let start_col = columns.iter().position(|c| c.end >= visible_start)?;
    let end_col = columns.iter().rposition(|c| c.start <= visible_end)?;

    // Gapped windows (week columns skipping days outside the month) can
    // cross the indices over; collapse to a single column.
    if start_col > end_col {
        return Some(ColumnSpan {
            start_col: end_col,
            end_col,
        });
    }

    Some(ColumnSpan { start_col, end_col })
}
