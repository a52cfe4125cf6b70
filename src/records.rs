// src/records.rs
//
// Typed records recovered from one match report, plus the uniform
// headers + rows shape the XML writer consumes.

use crate::config::consts::DISCIPLINE_PREFIX;

/// One roster line: number, name, goals and every discipline time stamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub team: String,
    pub number: u32,
    pub name: String,
    pub goals: i32,
    pub discipline_events: Vec<String>,
}

/// Named metadata fields, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailField {
    League,
    MatchNumber,
    FinalScore,
    Location,
    Date,
    TeamA,
    TeamB,
    FirstPeriodScore,
    SevenMThrowsGoals,
    Arbitro1,
    Arbitro2,
}

impl DetailField {
    pub const ALL: [DetailField; 11] = [
        DetailField::League,
        DetailField::MatchNumber,
        DetailField::FinalScore,
        DetailField::Location,
        DetailField::Date,
        DetailField::TeamA,
        DetailField::TeamB,
        DetailField::FirstPeriodScore,
        DetailField::SevenMThrowsGoals,
        DetailField::Arbitro1,
        DetailField::Arbitro2,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DetailField::League => "League",
            DetailField::MatchNumber => "Match_Number",
            DetailField::FinalScore => "Final_Score",
            DetailField::Location => "Location",
            DetailField::Date => "Date",
            DetailField::TeamA => "Team_A",
            DetailField::TeamB => "Team_B",
            DetailField::FirstPeriodScore => "First_Period_Score",
            DetailField::SevenMThrowsGoals => "Seven_m_Throws_Goals",
            DetailField::Arbitro1 => "Arbitro_1",
            DetailField::Arbitro2 => "Arbitro_2",
        }
    }
}

/// Match metadata. Scores stay composite strings ("28 - 25").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchDetails {
    pub league: String,
    pub match_number: String,
    pub final_score: String,
    pub location: String,
    pub date: String,
    pub team_a: String,
    pub team_b: String,
    pub first_period_score: String,
    pub seven_m_throws_goals: String,
    pub arbitro_1: String,
    pub arbitro_2: String,
}

impl MatchDetails {
    pub fn get(&self, field: DetailField) -> &str {
        match field {
            DetailField::League => &self.league,
            DetailField::MatchNumber => &self.match_number,
            DetailField::FinalScore => &self.final_score,
            DetailField::Location => &self.location,
            DetailField::Date => &self.date,
            DetailField::TeamA => &self.team_a,
            DetailField::TeamB => &self.team_b,
            DetailField::FirstPeriodScore => &self.first_period_score,
            DetailField::SevenMThrowsGoals => &self.seven_m_throws_goals,
            DetailField::Arbitro1 => &self.arbitro_1,
            DetailField::Arbitro2 => &self.arbitro_2,
        }
    }

    pub fn set(&mut self, field: DetailField, value: String) {
        let slot = match field {
            DetailField::League => &mut self.league,
            DetailField::MatchNumber => &mut self.match_number,
            DetailField::FinalScore => &mut self.final_score,
            DetailField::Location => &mut self.location,
            DetailField::Date => &mut self.date,
            DetailField::TeamA => &mut self.team_a,
            DetailField::TeamB => &mut self.team_b,
            DetailField::FirstPeriodScore => &mut self.first_period_score,
            DetailField::SevenMThrowsGoals => &mut self.seven_m_throws_goals,
            DetailField::Arbitro1 => &mut self.arbitro_1,
            DetailField::Arbitro2 => &mut self.arbitro_2,
        };
        *slot = value;
    }
}

/// Player row after discipline events were spread over `discipline_1..k`.
/// `discipline.len()` is the same `k` for every record of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedPlayerRecord {
    pub team: String,
    pub number: u32,
    pub name: String,
    pub goals: i32,
    pub discipline: Vec<Option<String>>,
}

pub type Row = Vec<Option<String>>;

/// Uniformly shaped records: every row has exactly `headers.len()` cells.
/// `None` cells are absent fields and produce no element on output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RecordSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn push(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.headers.len(), "ragged row in RecordSet");
        self.rows.push(row);
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Single-row set for the metadata section. Empty strings stay present.
    pub fn from_details(details: &MatchDetails) -> Self {
        let headers = DetailField::ALL.iter().map(|f| s!(f.tag())).collect();
        let mut set = Self::new(headers);
        set.push(
            DetailField::ALL
                .iter()
                .map(|&f| Some(s!(details.get(f))))
                .collect(),
        );
        set
    }

    /// Player section: Team, Number, Name, Goals, Discipline_1..k.
    pub fn from_players(k: usize, players: &[NormalizedPlayerRecord]) -> Self {
        let mut set = Self::new(player_headers(k));
        for p in players {
            let mut row: Row = Vec::with_capacity(4 + k);
            row.push(Some(p.team.clone()));
            row.push(Some(p.number.to_string()));
            row.push(Some(p.name.clone()));
            row.push(Some(p.goals.to_string()));
            row.extend(p.discipline.iter().cloned());
            set.push(row);
        }
        set
    }
}

pub fn player_headers(k: usize) -> Vec<String> {
    let mut headers = vec![s!("Team"), s!("Number"), s!("Name"), s!("Goals")];
    headers.extend((1..=k).map(|i| format!("{DISCIPLINE_PREFIX}{i}")));
    headers
}
