//! The staff-facing monthly availability overview.

use serde::Serialize;
use uuid::Uuid;

use kt_core::{DayStatus, MemberRef};
use kt_time::{Date, YearMonth};

use crate::schedule_map::ScheduleMap;

/// One roster line in the overview header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Member identifier.
    pub uuid: Uuid,
    /// Display name.
    pub name: String,
}

/// One member's status on one day of the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDayStatus {
    /// Member identifier.
    pub uuid: Uuid,
    /// Display name.
    pub name: String,
    /// Recorded availability, unset serialized as `null`.
    pub status: DayStatus,
}

/// One day row: the OK tally plus every member's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTally {
    /// The day this row describes.
    pub date: Date,
    /// Number of members marked OK.
    pub ok_count: u32,
    /// Per-member statuses, in roster order.
    pub members: Vec<MemberDayStatus>,
}

/// Whole-month availability of the contract-member roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyOverview {
    /// Calendar year.
    pub year: u16,
    /// Calendar month, 1 through 12.
    pub month: u8,
    /// Roster in display order.
    pub members: Vec<RosterEntry>,
    /// One row per day of the month, in order.
    pub days: Vec<DayTally>,
}

/// Folds every member's schedule into the per-day tallies for one month.
///
/// Members appear ordered by display name. Every day of the month gets a
/// row, and every member appears in every row; days without an entry
/// carry an unset status, so the shape is rectangular for the table
/// renderer.
#[must_use]
pub fn monthly_overview(month: YearMonth, roster: &[(MemberRef, ScheduleMap)]) -> MonthlyOverview {
    let mut ordered: Vec<&(MemberRef, ScheduleMap)> = roster.iter().collect();
    ordered.sort_by(|a, b| a.0.full_name.cmp(&b.0.full_name));

    let members = ordered
        .iter()
        .map(|(member, _)| RosterEntry {
            uuid: member.uuid,
            name: member.full_name.clone(),
        })
        .collect();

    let days = month
        .days()
        .map(|date| {
            let mut ok_count = 0;
            let statuses = ordered
                .iter()
                .map(|(member, schedules)| {
                    let status = schedules.status_of(date);
                    if status == DayStatus::Ok {
                        ok_count += 1;
                    }
                    MemberDayStatus {
                        uuid: member.uuid,
                        name: member.full_name.clone(),
                        status,
                    }
                })
                .collect();
            DayTally {
                date,
                ok_count,
                members: statuses,
            }
        })
        .collect();

    MonthlyOverview {
        year: month.year(),
        month: month.month(),
        members,
        days,
    }
}

// ───────────────────────────── Tests ─────────────────────────────
