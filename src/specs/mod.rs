//! # Report “specs” module
//!
//! This module hosts the **line-level extraction specifications** for match report
//! documents. Each spec focuses on one part of the report and encodes *where the
//! ground truth sits in the line stream* and *how to pick it up robustly*.
//!
//! ## What lives here
//! - **Pure scanning** over a document's ordered text lines (no I/O).
//! - **Marker and trigger precedence** (e.g., a team marker wins over a bare number
//!   on the same line; only the first matching trigger applies per line).
//! - **Tolerant extraction**: lines are trimmed before comparison, unexpected shapes
//!   become anomalies instead of failures.
//! - **Light shaping** of results into small “bundle” structs (players + trailer +
//!   anomalies) or directly into `records` types.
//!
//! ## What does **not** live here
//! - **Reading documents** (`source::LineSource`) or **writing XML** (`xml`).
//! - **Column shaping** of discipline events (`normalize`).
//! - **Batch orchestration** (`runner`).
//!
//! ## Typical call chain
//! ```text
//! runner → convert::convert_source → specs::players::extract
//!                                  ↘ specs::match_details::extract(lines, teams)
//! ```
//!
//! ## Current specs
//! - `players` – roster rows: team, number, name, goals and discipline time stamps,
//!   with the totals trailer split off.
//! - `match_details` – one metadata record from trigger lines (league, date,
//!   officials, half-time score, …), seeded with the team names from `players`.
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline line arrays and the text fixture
//!   under `tests/fixtures/`.
pub mod match_details;
pub mod players;
