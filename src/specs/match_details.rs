// src/specs/match_details.rs
//! Reading *spec* for the report header: league, match number, scores, venue,
//! date and referees.
//!
//! Every field hangs off a literal trigger somewhere in a line. The value is
//! either the next line, the next two lines joined as `"X - Y"`, or the last
//! token of the trigger line itself. `RULES` lists them in precedence order.

use crate::config::consts::*;
use crate::core::sanitize::last_token;
use crate::records::{DetailField, MatchDetails};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NextLine,
    NextTwoJoined,
    LastToken,
}

pub struct Trigger {
    pub needle: &'static str,
    pub field: DetailField,
    pub rule: Rule,
}

/// First match per line wins; a later line matching the same field overwrites it.
pub const RULES: &[Trigger] = &[
    Trigger { needle: LEAGUE_IDENTIFIER, field: DetailField::League, rule: Rule::NextLine },
    Trigger { needle: TRIGGER_MATCH_NUMBER, field: DetailField::MatchNumber, rule: Rule::LastToken },
    Trigger { needle: TRIGGER_FINAL_SCORE, field: DetailField::FinalScore, rule: Rule::NextLine },
    Trigger { needle: TRIGGER_LOCATION, field: DetailField::Location, rule: Rule::NextLine },
    Trigger { needle: TRIGGER_DATE, field: DetailField::Date, rule: Rule::NextLine },
    Trigger { needle: TRIGGER_FIRST_PERIOD, field: DetailField::FirstPeriodScore, rule: Rule::NextTwoJoined },
    Trigger { needle: TRIGGER_SEVEN_M, field: DetailField::SevenMThrowsGoals, rule: Rule::NextTwoJoined },
    Trigger { needle: TRIGGER_ARBITRO_1, field: DetailField::Arbitro1, rule: Rule::NextLine },
    Trigger { needle: TRIGGER_ARBITRO_2, field: DetailField::Arbitro2, rule: Rule::NextLine },
];

/// Value for `rule` at line `i`, or None when the lookahead runs off the end.
fn apply<S: AsRef<str>>(rule: Rule, lines: &[S], i: usize, line: &str) -> Option<String> {
    let next = |k: usize| lines.get(i + k).map(|l| l.as_ref().trim());
    match rule {
        Rule::NextLine => next(1).map(|v| s!(v)),
        Rule::NextTwoJoined => {
            let (a, b) = (next(1)?, next(2)?);
            Some(join!(a, PAIR_SEPARATOR, b))
        }
        Rule::LastToken => Some(s!(last_token(line))),
    }
}

/// One pass over `lines`. `teams` seeds Team_A / Team_B (missing ones stay empty).
pub fn extract<S: AsRef<str>>(lines: &[S], teams: &[&str]) -> MatchDetails {
    let mut details = MatchDetails {
        team_a: teams.first().map(|t| s!(*t)).unwrap_or_default(),
        team_b: teams.get(1).map(|t| s!(*t)).unwrap_or_default(),
        ..MatchDetails::default()
    };

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        let Some(trigger) = RULES.iter().find(|t| line.contains(t.needle)) else {
            continue;
        };
        match apply(trigger.rule, lines, i, line) {
            Some(value) => details.set(trigger.field, value),
            None => logd!(
                "Details: {:?} trigger on line {} has no value (end of input)",
                trigger.field, i + 1
            ),
        }
    }

    if teams.len() < 2 {
        logw!("Details: expected two teams, found {}", teams.len());
    }
    details
}
