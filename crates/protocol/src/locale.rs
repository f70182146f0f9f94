use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Display language for column labels and headings.
///
/// The board ships the same two languages as its UI translations; callers
/// map whatever language tag they hold onto one of these via [`Locale::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_SHORT_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_SHORT_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

impl Locale {
    /// Resolve a BCP-47-ish language tag (`"pt-BR"`, `"en-US"`, ...) to a
    /// supported locale. Anything that isn't Portuguese falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("pt") {
            Locale::Pt
        } else {
            Locale::En
        }
    }

    pub fn weekday_long(self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Locale::En => WEEKDAYS_EN[idx],
            Locale::Pt => WEEKDAYS_PT[idx],
        }
    }

    /// Long month name; `month` is 1-based. Out-of-range input yields `""`.
    pub fn month_long(self, month: u32) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_EN,
            Locale::Pt => &MONTHS_PT,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Short month name; `month` is 1-based. Out-of-range input yields `""`.
    pub fn month_short(self, month: u32) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_SHORT_EN,
            Locale::Pt => &MONTHS_SHORT_PT,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Display name for the reserved owner that has no team member.
    pub fn unassigned_label(self) -> &'static str {
        match self {
            Locale::En => "Unassigned",
            Locale::Pt => "Sem responsável",
        }
    }
}
