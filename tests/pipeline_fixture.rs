// tests/pipeline_fixture.rs
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use hb_report::convert::{convert_lines, convert_source};
use hb_report::source::{split_lines, TextFile};
use hb_report::specs::players::{self, Anomaly};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_report.txt")
}

fn fixture_lines() -> Vec<String> {
    let text = std::fs::read_to_string(fixture_path()).unwrap();
    split_lines(&text)
}

#[test]
fn fixture_converts_to_expected_document() {
    let out = convert_source(&TextFile::new(fixture_path())).unwrap();

    let expected = "\
<HandballMatch>
  <MatchDetails>
    <Detail>
      <League>Serie A2 Maschile - Girone B</League>
      <Match_Number>4521</Match_Number>
      <Final_Score>12 - 9</Final_Score>
      <Location>Palaberta, Ancona</Location>
      <Date>12/11/2023</Date>
      <Team_A>Pallamano Ancona</Team_A>
      <Team_B>Handball Pesaro</Team_B>
      <First_Period_Score>7 - 4</First_Period_Score>
      <Seven_m_Throws_Goals>2/1 - 3/2</Seven_m_Throws_Goals>
      <Arbitro_1>Rossi Mario</Arbitro_1>
      <Arbitro_2>Verdi Luca</Arbitro_2>
    </Detail>
  </MatchDetails>
  <PlayerPerformances>
    <Player>
      <Team>Pallamano Ancona</Team>
      <Number>2</Number>
      <Name>Bianchi Luca</Name>
      <Goals>5</Goals>
      <Discipline_1>10:15</Discipline_1>
    </Player>
    <Player>
      <Team>Pallamano Ancona</Team>
      <Number>7</Number>
      <Name>Conti Marco</Name>
      <Goals>3</Goals>
    </Player>
    <Player>
      <Team>Pallamano Ancona</Team>
      <Number>9</Number>
      <Name>Esposito Andrea</Name>
      <Goals>0</Goals>
      <Discipline_1>22:40</Discipline_1>
      <Discipline_2>41:05</Discipline_2>
    </Player>
    <Player>
      <Team>Pallamano Ancona</Team>
      <Number>11</Number>
      <Name>Ferri Paolo</Name>
      <Goals>4</Goals>
    </Player>
    <Player>
      <Team>Handball Pesaro</Team>
      <Number>3</Number>
      <Name>Gallo Simone</Name>
      <Goals>6</Goals>
      <Discipline_1>33:12</Discipline_1>
    </Player>
    <Player>
      <Team>Handball Pesaro</Team>
      <Number>5</Number>
      <Name>Longo Davide</Name>
      <Goals>2</Goals>
    </Player>
    <Player>
      <Team>Handball Pesaro</Team>
      <Number>8</Number>
      <Name>Marini Stefano</Name>
      <Goals>1</Goals>
      <Discipline_1>05:30</Discipline_1>
      <Discipline_2>18:00</Discipline_2>
      <Discipline_3>52:10</Discipline_3>
    </Player>
  </PlayerPerformances>
</HandballMatch>
";
    assert_eq!(out.xml, expected);
    assert_eq!(out.report.players, 7);
    assert_eq!(out.report.discipline_columns, 3);
    assert_eq!(out.report.teams, vec!["Pallamano Ancona", "Handball Pesaro"]);
}

#[test]
fn dropped_trailer_is_the_totals_row() {
    let lines = fixture_lines();
    let raw = players::extract(&lines);
    let raw_len = raw.raw().len();
    let roster = raw.into_roster();

    assert_eq!(roster.players.len(), raw_len - 1);
    let trailer = roster.trailer.expect("fixture ends with a totals row");
    assert_eq!(trailer.name, "Totali");

    let last_team = &roster.players.last().unwrap().team;
    let team_goals: i32 = roster
        .players
        .iter()
        .filter(|p| &p.team == last_team)
        .map(|p| p.goals)
        .sum();
    assert_eq!(trailer.goals, team_goals);
}

#[test]
fn header_numbers_surface_as_anomalies() {
    // Half-time score lines look like jersey numbers to the roster scan.
    let out = convert_lines(&fixture_lines()).unwrap();
    assert_eq!(
        out.report.anomalies,
        vec![
            Anomaly::UnexpectedGoals { number: 7, line: 13, found: "7m. tiri/reti".into() },
            Anomaly::UnexpectedGoals { number: 4, line: 14, found: "2/1".into() },
        ]
    );
}

#[test]
fn period_marker_inside_roster_is_skipped() {
    let out = convert_lines(&fixture_lines()).unwrap();
    assert!(out.players.iter().all(|p| p.number != 18));
    assert!(!out.xml.contains("Time-out"));
}
