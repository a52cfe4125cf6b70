// src/specs/players.rs
//! Reading *spec* for the roster tables of a match report.
//!
//! Purpose:
//! - Walk the flattened report text line by line and recover one `PlayerRecord`
//!   per roster line: number, name, goals, then any `HH:MM` discipline stamps.
//! - Track the current side from the team markers (`A` / `B`, name on the next line).
//!
//! Shape of a roster block (one value per line):
//! ```text
//! A                 <- team marker
//! Lions             <- team name
//! 7                 <- jersey number
//! J. Doe            <- name
//! 3                 <- goals
//! 10:15             <- discipline stamps, zero or more
//! 12:40
//! ```
//!
//! The scan is an explicit two-phase machine (`Idle` / `PlayerHeader`) driven by
//! the pure `step` function; `extract` only applies the effects.
//!
//! Non-Responsibilities:
//! - **No trailer handling inside the scan.** The final record of a report is the
//!   totals row; `PlayerExtraction::into_roster` removes it, exactly once.
//! - **No column shaping.** See `normalize.rs`.

use std::fmt;

use crate::config::consts::{PERIOD_MARKERS, TEAM_MARKERS};
use crate::core::sanitize::{is_timestamp, parse_bare_number, parse_goals};
use crate::records::PlayerRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Cursor sits on a bare number; the block behind it is not read yet.
    PlayerHeader(u32),
}

/// Recoverable oddities met while scanning. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// Goals position held neither an integer nor a period marker.
    UnexpectedGoals { number: u32, line: usize, found: String },
    /// A number with no room left for its name and goals lines.
    Truncated { number: u32, line: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnexpectedGoals { number, line, found } => write!(
                f,
                "player {number}: expected goals on line {}, found {found:?}",
                line + 1
            ),
            Anomaly::Truncated { number, line } => write!(
                f,
                "player {number}: block on line {} cut short by end of input",
                line + 1
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Team(String),
    Record(PlayerRecord),
    Anomaly(Anomaly),
}

/// Result of one transition: where the cursor goes, which phase follows,
/// and what the driver should do with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: usize,
    pub phase: Phase,
    pub effect: Effect,
}

impl Step {
    fn idle(next: usize, effect: Effect) -> Self {
        Self { next, phase: Phase::Idle, effect }
    }
}

fn line_at<S: AsRef<str>>(lines: &[S], i: usize) -> Option<&str> {
    lines.get(i).map(|l| l.as_ref().trim())
}

/// Single transition from `cursor` in `phase`. `team` is the side currently in effect.
pub fn step<S: AsRef<str>>(lines: &[S], cursor: usize, phase: Phase, team: &str) -> Step {
    match phase {
        Phase::Idle => step_idle(lines, cursor),
        Phase::PlayerHeader(number) => step_player(lines, cursor, number, team),
    }
}

fn step_idle<S: AsRef<str>>(lines: &[S], at: usize) -> Step {
    let Some(line) = line_at(lines, at) else {
        return Step::idle(lines.len(), Effect::None);
    };

    if TEAM_MARKERS.contains(&line) {
        return match line_at(lines, at + 1) {
            Some(name) => Step::idle(at + 2, Effect::Team(s!(name))),
            // Marker on the last line: nothing left to name.
            None => Step::idle(at + 1, Effect::None),
        };
    }

    if let Some(number) = parse_bare_number(line) {
        return Step { next: at, phase: Phase::PlayerHeader(number), effect: Effect::None };
    }

    Step::idle(at + 1, Effect::None)
}

fn step_player<S: AsRef<str>>(lines: &[S], at: usize, number: u32, team: &str) -> Step {
    let (Some(name), Some(goals_line)) = (line_at(lines, at + 1), line_at(lines, at + 2)) else {
        return Step::idle(at + 1, Effect::Anomaly(Anomaly::Truncated { number, line: at }));
    };

    match parse_goals(goals_line) {
        Some(goals) => {
            let mut next = at + 3;
            let mut discipline_events = Vec::new();
            while let Some(l) = line_at(lines, next) {
                if !is_timestamp(l) { break; }
                discipline_events.push(s!(l));
                next += 1;
            }
            Step::idle(
                next,
                Effect::Record(PlayerRecord {
                    team: s!(team),
                    number,
                    name: s!(name),
                    goals,
                    discipline_events,
                }),
            )
        }
        // Section headers like "2° tempo" land exactly where goals would be.
        None if PERIOD_MARKERS.contains(&goals_line) => Step::idle(at + 1, Effect::None),
        None => Step::idle(
            at + 1,
            Effect::Anomaly(Anomaly::UnexpectedGoals {
                number,
                line: at + 2,
                found: s!(goals_line),
            }),
        ),
    }
}

/// Raw scan output. The last record is the report's totals row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerExtraction {
    records: Vec<PlayerRecord>,
    pub anomalies: Vec<Anomaly>,
}

/// Player list with the trailer already split off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterBundle {
    pub players: Vec<PlayerRecord>,
    pub trailer: Option<PlayerRecord>,
    pub anomalies: Vec<Anomaly>,
}

impl PlayerExtraction {
    /// Everything the scan emitted, trailer included.
    pub fn raw(&self) -> &[PlayerRecord] { &self.records }

    /// Drop the trailing totals row. Consumes the extraction so it can only happen once.
    pub fn into_roster(self) -> RosterBundle {
        let mut players = self.records;
        let trailer = players.pop();
        if let Some(t) = &trailer {
            logd!(
                "Players: dropped trailer number={} name={:?} goals={} events={}",
                t.number, t.name, t.goals, t.discipline_events.len()
            );
        }
        RosterBundle { players, trailer, anomalies: self.anomalies }
    }
}

/// Run the scan over the whole document.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> PlayerExtraction {
    let mut out = PlayerExtraction::default();
    let mut team = s!();
    let mut cursor = 0usize;
    let mut phase = Phase::Idle;

    while cursor < lines.len() {
        let st = step(lines, cursor, phase, &team);
        match st.effect {
            Effect::None => {}
            Effect::Team(name) => {
                logd!("Players: team marker line={} team={:?}", cursor + 1, name);
                team = name;
            }
            Effect::Record(record) => out.records.push(record),
            Effect::Anomaly(anomaly) => {
                match &anomaly {
                    Anomaly::UnexpectedGoals { .. } => logw!("Players: {anomaly}"),
                    Anomaly::Truncated { .. } => logd!("Players: {anomaly}"),
                }
                out.anomalies.push(anomaly);
            }
        }
        cursor = st.next;
        phase = st.phase;
    }

    logd!(
        "Players: scanned {} lines, {} records, {} anomalies",
        lines.len(), out.records.len(), out.anomalies.len()
    );
    out
}

/// Distinct team names in first-seen order.
pub fn distinct_teams(players: &[PlayerRecord]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for p in players {
        if !out.contains(&p.team.as_str()) {
            out.push(&p.team);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(team: &str, number: u32, name: &str, goals: i32, events: &[&str]) -> PlayerRecord {
        PlayerRecord {
            team: s!(team),
            number,
            name: s!(name),
            goals,
            discipline_events: events.iter().map(|e| s!(*e)).collect(),
        }
    }

    #[test]
    fn no_markers_no_numbers_yields_nothing() {
        let lines = ["Referto di gara", "Giocatori", "Reti", "", "   "];
        let out = extract(&lines);
        assert!(out.raw().is_empty());
        assert!(out.anomalies.is_empty());
    }

    #[test]
    fn two_players_with_and_without_events() {
        let lines = ["A", "Lions", "7", "J. Doe", "3", "10:15", "12:40", "8", "K. Roe", "0"];
        let out = extract(&lines);
        assert_eq!(
            out.raw(),
            &[
                rec("Lions", 7, "J. Doe", 3, &["10:15", "12:40"]),
                rec("Lions", 8, "K. Roe", 0, &[]),
            ]
        );
    }

    #[test]
    fn lines_are_trimmed_on_use() {
        let lines = [" A ", "  Lions\r", " 7", "J. Doe  ", " 3 ", " 10:15\r"];
        let out = extract(&lines);
        assert_eq!(out.raw(), &[rec("Lions", 7, "J. Doe", 3, &["10:15"])]);
    }

    #[test]
    fn trailer_is_removed_exactly_once() {
        let lines = ["A", "Lions", "7", "J. Doe", "3", "8", "K. Roe", "0", "1", "Totali", "3"];
        let out = extract(&lines);
        let raw_len = out.raw().len();
        let raw_head: Vec<PlayerRecord> = out.raw()[..raw_len - 1].to_vec();

        let roster = out.into_roster();
        assert_eq!(roster.players, raw_head);
        assert_eq!(roster.trailer.as_ref().map(|t| t.name.as_str()), Some("Totali"));
    }

    #[test]
    fn empty_extraction_has_no_trailer() {
        let roster = extract::<&str>(&[]).into_roster();
        assert!(roster.players.is_empty());
        assert!(roster.trailer.is_none());
    }

    #[test]
    fn team_switch_applies_to_following_players() {
        let lines = ["A", "Lions", "7", "J. Doe", "1", "B", "Tigers", "9", "M. Poe", "2"];
        let out = extract(&lines);
        let teams: Vec<&str> = out.raw().iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Lions", "Tigers"]);
        assert_eq!(distinct_teams(out.raw()), vec!["Lions", "Tigers"]);
    }

    #[test]
    fn period_marker_is_silent_and_advances_one_line() {
        let lines = ["A", "Lions", "15", "Timeout", "2° tempo", "7", "J. Doe", "3"];
        let st = step(&lines, 2, Phase::PlayerHeader(15), "Lions");
        assert_eq!(st, Step { next: 3, phase: Phase::Idle, effect: Effect::None });

        let out = extract(&lines);
        assert!(out.anomalies.is_empty());
        assert_eq!(out.raw(), &[rec("Lions", 7, "J. Doe", 3, &[])]);
    }

    #[test]
    fn second_extra_marker_is_silent_too() {
        let lines = ["30", "Fine", "2° extra"];
        let out = extract(&lines);
        assert!(out.anomalies.is_empty());
        assert!(out.raw().is_empty());
    }

    #[test]
    fn unexpected_goals_is_reported_and_parsing_continues() {
        let lines = ["A", "Lions", "4", "Allenatore", "Bianchi", "7", "J. Doe", "3"];
        let out = extract(&lines);
        assert_eq!(
            out.anomalies,
            vec![Anomaly::UnexpectedGoals { number: 4, line: 4, found: s!("Bianchi") }]
        );
        assert_eq!(out.raw(), &[rec("Lions", 7, "J. Doe", 3, &[])]);
    }

    #[test]
    fn number_at_end_of_input_is_truncated() {
        let lines = ["A", "Lions", "7", "J. Doe"];
        let out = extract(&lines);
        assert!(out.raw().is_empty());
        assert_eq!(out.anomalies, vec![Anomaly::Truncated { number: 7, line: 2 }]);
    }

    #[test]
    fn team_marker_on_last_line_is_ignored() {
        let lines = ["A", "Lions", "7", "J. Doe", "3", "B"];
        let out = extract(&lines);
        assert_eq!(out.raw(), &[rec("Lions", 7, "J. Doe", 3, &[])]);
        assert!(out.anomalies.is_empty());
    }

    #[test]
    fn idle_moves_to_header_without_advancing() {
        let lines = ["12", "Name", "1"];
        let st = step(&lines, 0, Phase::Idle, "");
        assert_eq!(st, Step { next: 0, phase: Phase::PlayerHeader(12), effect: Effect::None });
    }

    #[test]
    fn events_stop_at_first_non_timestamp() {
        let lines = ["5", "A. Neri", "2", "08:00", "Squalifica", "09:30"];
        let st = step(&lines, 0, Phase::PlayerHeader(5), "Lions");
        assert_eq!(st.next, 4);
        match st.effect {
            Effect::Record(r) => assert_eq!(r.discipline_events, vec!["08:00"]),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn anomaly_messages_use_one_based_lines() {
        let a = Anomaly::UnexpectedGoals { number: 4, line: 4, found: s!("x") };
        assert_eq!(a.to_string(), "player 4: expected goals on line 5, found \"x\"");
    }
}
