//! Timetable coverage metrics.
//!
//! Summarizes how much of the requested teaching load a run placed.
//! The assigner does not optimize any of these; they are reported so
//! callers can judge a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Requested | Sum of `classes_per_week` over considered pairs |
//! | Scheduled | Number of slots placed |
//! | Fill Rate | Scheduled / Requested |
//! | Faculty Load | Sessions per faculty member |
//! | Room Utilization | Sessions per room / grid cells |

use std::collections::BTreeMap;

use crate::models::{Grid, ResultSet};

/// Coverage indicators for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Sessions requested across all considered (batch, subject) pairs.
    pub requested_sessions: u32,
    /// Sessions actually placed.
    pub scheduled_sessions: u32,
    /// scheduled / requested (1.0 when nothing was requested).
    pub fill_rate: f64,
    /// Pairs that reached their weekly target.
    pub complete_pairs: usize,
    /// Pairs that fell short, including those never attempted.
    pub under_scheduled_pairs: usize,
    /// Sessions per faculty member.
    pub sessions_by_faculty: BTreeMap<String, u32>,
    /// Booked fraction of the grid per classroom (0.0..1.0).
    pub classroom_utilization: BTreeMap<String, f64>,
}

impl CoverageReport {
    /// Computes coverage of `result` over `grid`.
    pub fn calculate(result: &ResultSet, grid: &Grid) -> Self {
        let requested = result
            .summaries
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.target));
        let scheduled = u32::try_from(result.slot_count()).unwrap_or(u32::MAX);
        let complete = result.summaries.iter().filter(|s| s.is_complete()).count();

        let mut sessions_by_faculty: BTreeMap<String, u32> = BTreeMap::new();
        let mut room_sessions: BTreeMap<String, u32> = BTreeMap::new();
        for slot in &result.slots {
            let n = sessions_by_faculty.entry(slot.faculty_id.clone()).or_insert(0);
            *n = n.saturating_add(1);
            let n = room_sessions.entry(slot.classroom_id.clone()).or_insert(0);
            *n = n.saturating_add(1);
        }

        let cells = grid.len();
        let classroom_utilization = room_sessions
            .into_iter()
            .map(|(id, n)| {
                let util = if cells == 0 {
                    0.0
                } else {
                    f64::from(n) / cells as f64
                };
                (id, util)
            })
            .collect();

        let fill_rate = if requested == 0 {
            1.0
        } else {
            f64::from(scheduled) / f64::from(requested)
        };

        Self {
            requested_sessions: requested,
            scheduled_sessions: scheduled,
            fill_rate,
            complete_pairs: complete,
            under_scheduled_pairs: result.summaries.len() - complete,
            sessions_by_faculty,
            classroom_utilization,
        }
    }

    /// Whether at least `min_fill_rate` of requested sessions were placed.
    pub fn meets_fill_rate(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }

    /// Faculty members whose session count exceeds `cap`.
    pub fn faculty_over(&self, cap: u32) -> Vec<&str> {
        self.sessions_by_faculty
            .iter()
            .filter(|&(_, &n)| n > cap)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
