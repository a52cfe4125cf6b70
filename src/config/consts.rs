// src/config/consts.rs

// Report markers
pub const TEAM_MARKERS: [&str; 2] = ["A", "B"];
pub const PERIOD_MARKERS: [&str; 2] = ["2° tempo", "2° extra"];
pub const LEAGUE_IDENTIFIER: &str = "FEDERAZIONE ITALIANA GIUOCO HANDBALL";
pub const TIMESTAMP_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}";

// Match detail triggers
pub const TRIGGER_MATCH_NUMBER: &str = "Numero gara";
pub const TRIGGER_FINAL_SCORE: &str = "Risultato finale";
pub const TRIGGER_LOCATION: &str = "Località";
pub const TRIGGER_DATE: &str = "Data";
pub const TRIGGER_FIRST_PERIOD: &str = "1° tempo";
pub const TRIGGER_SEVEN_M: &str = "7m. tiri/reti";
pub const TRIGGER_ARBITRO_1: &str = "Arbitro 1";
pub const TRIGGER_ARBITRO_2: &str = "Arbitro 2";
pub const PAIR_SEPARATOR: &str = " - ";

// Output document
pub const ROOT_TAG: &str = "HandballMatch";
pub const DETAILS_TAG: &str = "MatchDetails";
pub const DETAIL_TAG: &str = "Detail";
pub const PLAYERS_TAG: &str = "PlayerPerformances";
pub const PLAYER_TAG: &str = "Player";
pub const DISCIPLINE_PREFIX: &str = "Discipline_";
pub const INDENT_WIDTH: usize = 2;

// Batch
pub const SOURCE_EXTENSIONS: [&str; 2] = ["pdf", "txt"];
pub const OUTPUT_EXTENSION: &str = "xml";
pub const DEFAULT_OUT_DIR: &str = "out";

// Concurrency
pub const WORKERS: usize = 4;
