// src/convert.rs
// One document, start to finish: lines → records → XML string.

use crate::error::Result;
use crate::normalize::normalize;
use crate::records::{MatchDetails, NormalizedPlayerRecord, PlayerRecord, RecordSet};
use crate::source::LineSource;
use crate::specs::{match_details, players};
use crate::specs::players::Anomaly;
use crate::xml::render_match_document;

/// What happened while reading one document, beyond the XML itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub players: usize,
    pub discipline_columns: usize,
    pub teams: Vec<String>,
    /// The row dropped as the totals line, if any.
    pub trailer: Option<PlayerRecord>,
    pub anomalies: Vec<Anomaly>,
}

#[derive(Clone, Debug)]
pub struct Conversion {
    pub xml: String,
    pub details: MatchDetails,
    pub players: Vec<NormalizedPlayerRecord>,
    pub report: ConversionReport,
}

pub fn convert_lines<S: AsRef<str>>(lines: &[S]) -> Result<Conversion> {
    let roster = players::extract(lines).into_roster();

    let teams: Vec<String> = players::distinct_teams(&roster.players)
        .into_iter()
        .map(String::from)
        .collect();
    let team_refs: Vec<&str> = teams.iter().map(String::as_str).collect();
    let details = match_details::extract(lines, &team_refs);

    let (k, normalized) = normalize(&roster.players);

    let xml = render_match_document(
        &RecordSet::from_details(&details),
        &RecordSet::from_players(k, &normalized),
    )?;

    let report = ConversionReport {
        players: normalized.len(),
        discipline_columns: k,
        teams,
        trailer: roster.trailer,
        anomalies: roster.anomalies,
    };
    Ok(Conversion { xml, details, players: normalized, report })
}

pub fn convert_source(src: &dyn LineSource) -> Result<Conversion> {
    let lines = src.read_lines()?;
    logd!("Convert: {} lines from {}", lines.len(), src.path().display());
    let out = convert_lines(&lines)?;
    logd!(
        "Convert: {} players, {} discipline columns, {} anomalies",
        out.report.players, out.report.discipline_columns, out.report.anomalies.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_drops_trailer_and_seeds_teams() {
        let lines = [
            "Data", "12/11/2023",
            "A", "Lions", "7", "J. Doe", "3", "10:15", "12:40", "8", "K. Roe", "0",
            "B", "Tigers", "9", "M. Poe", "2", "20:00",
            "1", "Totali", "2",
        ];
        let out = convert_lines(&lines).unwrap();

        assert_eq!(out.report.players, 3);
        assert_eq!(out.report.teams, vec!["Lions", "Tigers"]);
        assert_eq!(out.report.discipline_columns, 2);
        assert_eq!(out.report.trailer.as_ref().map(|t| t.name.as_str()), Some("Totali"));
        assert_eq!(out.details.team_a, "Lions");
        assert_eq!(out.details.team_b, "Tigers");
        assert_eq!(out.details.date, "12/11/2023");

        assert_eq!(out.xml.matches("<Player>").count(), 3);
        assert!(!out.xml.contains("Totali"));
        assert_eq!(out.xml.matches("<Discipline_2>").count(), 1);
        assert!(out.xml.starts_with("<HandballMatch>\n  <MatchDetails>"));
    }

    #[test]
    fn anomalies_flow_into_report_without_failing() {
        let lines = ["A", "Lions", "4", "Allenatore", "Bianchi", "7", "J. Doe", "3", "1", "Totali", "3"];
        let out = convert_lines(&lines).unwrap();
        assert_eq!(out.report.anomalies.len(), 1);
        assert_eq!(out.report.players, 1);
    }

    #[test]
    fn document_without_players_still_renders() {
        let out = convert_lines(&["Referto", "Data", "01/01/2024"]).unwrap();
        assert_eq!(out.report.players, 0);
        assert!(out.xml.contains("<PlayerPerformances/>"));
        assert!(out.xml.contains("<Date>01/01/2024</Date>"));
    }
}
