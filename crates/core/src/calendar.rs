use crewboard_protocol::{DateColumn, Day, Granularity, Locale};

/// Partition the visible period around `anchor` into ordered, non-overlapping
/// date columns. Total over any anchor; no side effects.
pub fn date_columns(granularity: Granularity, anchor: Day, locale: Locale) -> Vec<DateColumn> {
    match granularity {
        Granularity::Day => day_columns(anchor, locale),
        Granularity::Week => week_columns(anchor, locale),
        Granularity::Month => month_columns(anchor, locale),
    }
}

/// Five single-day columns, Monday through Friday of the anchor's week.
fn day_columns(anchor: Day, locale: Locale) -> Vec<DateColumn> {
    let monday = anchor.start_of_week();
    (0..5)
        .map(|i| {
            let day = monday.add_days(i);
            let weekday = locale.weekday_long(day.weekday()).to_uppercase();
            DateColumn {
                start: day,
                end: day,
                label: format!("{weekday}, {}", day.day_of_month()),
            }
        })
        .collect()
}

/// Five Monday–Sunday columns starting at the week containing the 1st of
/// the anchor's month.
fn week_columns(anchor: Day, locale: Locale) -> Vec<DateColumn> {
    let first_of_month = anchor.start_of_month();
    let mut current = first_of_month.start_of_week();
    // Skip a leading week that ends before the month even starts.
    if current < first_of_month && current.add_days(6) < first_of_month {
        current = current.add_days(7);
    }

    (0..5)
        .map(|i| {
            let start = current;
            let end = start.add_days(6);
            current = current.add_days(7);
            DateColumn {
                label: format!("W{} ({})", i + 1, week_range_label(start, end, locale)),
                start,
                end,
            }
        })
        .collect()
}

/// Human range for a week column, collapsing the month name when both ends
/// share a month: `1 - 7 set` vs `29 set - 5 out`.
fn week_range_label(start: Day, end: Day, locale: Locale) -> String {
    let start_month = locale.month_short(start.month());
    let end_month = locale.month_short(end.month());
    if start_month == end_month {
        format!(
            "{} - {} {start_month}",
            start.day_of_month(),
            end.day_of_month()
        )
    } else {
        format!(
            "{} {start_month} - {} {end_month}",
            start.day_of_month(),
            end.day_of_month()
        )
    }
}

/// Twelve full-month columns covering the anchor's calendar year.
fn month_columns(anchor: Day, locale: Locale) -> Vec<DateColumn> {
    let january = anchor.start_of_year();
    (0..12)
        .map(|i| {
            let start = january.add_months(i);
            let end = start.add_months(1).add_days(-1);
            DateColumn {
                label: locale.month_long(start.month()).to_string(),
                start,
                end,
            }
        })
        .collect()
}

/// Toolbar heading for the visible period.
pub fn period_heading(granularity: Granularity, anchor: Day, locale: Locale) -> String {
    match granularity {
        Granularity::Day => {
            let start = anchor.start_of_week();
            let end = start.add_days(4);
            format!(
                "{} {} - {} {}, {}",
                locale.month_short(start.month()),
                start.day_of_month(),
                locale.month_short(end.month()),
                end.day_of_month(),
                end.year()
            )
        }
        Granularity::Week => {
            format!("{} {}", locale.month_long(anchor.month()), anchor.year())
        }
        Granularity::Month => anchor.year().to_string(),
    }
}
