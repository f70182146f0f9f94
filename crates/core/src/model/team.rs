use crewboard_protocol::Locale;
use serde::{Deserialize, Serialize};

/// Reserved owner id for tasks without an assigned member.
pub const UNASSIGNED_ID: &str = "unassigned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

impl TeamMember {
    /// The reserved member representing the unassigned bucket.
    pub fn unassigned(locale: Locale) -> Self {
        TeamMember {
            id: UNASSIGNED_ID.into(),
            name: locale.unassigned_label().into(),
        }
    }
}

/// Sort direction for the responsible column of the workload view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberOrder {
    #[default]
    Ascending,
    Descending,
}

/// Order members by display name, keeping the unassigned member last
/// regardless of direction. Returns a new list; the input is untouched.
pub fn order_members(members: &[TeamMember], order: MemberOrder) -> Vec<TeamMember> {
    let mut named: Vec<TeamMember> = members
        .iter()
        .filter(|m| m.id != UNASSIGNED_ID)
        .cloned()
        .collect();
    named.sort_by(|a, b| {
        let cmp = a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match order {
            MemberOrder::Ascending => cmp,
            MemberOrder::Descending => cmp.reverse(),
        }
    });
    named.extend(members.iter().filter(|m| m.id == UNASSIGNED_ID).cloned());
    named
}

/// Display name for an owner id, if it belongs to a known member.
pub fn member_name<'a>(members: &'a [TeamMember], id: &str) -> Option<&'a str> {
    members
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Vec<TeamMember> {
        vec![
            TeamMember {
                id: "robertinho".into(),
                name: "robertinho".into(),
            },
            TeamMember {
                id: UNASSIGNED_ID.into(),
                name: "sem responsavel".into(),
            },
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
    fn unassigned_sorts_last_ascending() {
        let ordered = order_members(&team(), MemberOrder::Ascending);
        let ids: Vec<&str> = ordered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            ["joaozinho", "pietrinho", "robertinho", UNASSIGNED_ID]
        );
    }

    #[test]
    fn unassigned_sorts_last_descending() {
        let ordered = order_members(&team(), MemberOrder::Descending);
        let ids: Vec<&str> = ordered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            ["robertinho", "pietrinho", "joaozinho", UNASSIGNED_ID]
        );
    }

    #[test]
    fn name_lookup() {
        let members = team();
        assert_eq!(member_name(&members, "pietrinho"), Some("pietrinho"));
        assert_eq!(member_name(&members, "nobody"), None);
    }
}
