// src/normalize.rs
use crate::records::{NormalizedPlayerRecord, PlayerRecord};

/// Spread discipline events over `k` slots, `k` being the widest record.
/// Returns `k` with the records; short records get trailing `None`s.
/// Needs the whole document's players at once.
pub fn normalize(players: &[PlayerRecord]) -> (usize, Vec<NormalizedPlayerRecord>) {
    let k = players
        .iter()
        .map(|p| p.discipline_events.len())
        .max()
        .unwrap_or(0);

    let out = players
        .iter()
        .map(|p| {
            let mut discipline: Vec<Option<String>> =
                p.discipline_events.iter().cloned().map(Some).collect();
            discipline.resize(k, None);
            NormalizedPlayerRecord {
                team: p.team.clone(),
                number: p.number,
                name: p.name.clone(),
                goals: p.goals,
                discipline,
            }
        })
        .collect();

    (k, out)
}
