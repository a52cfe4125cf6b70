// src/xml.rs
use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::consts::{DETAILS_TAG, DETAIL_TAG, INDENT_WIDTH, PLAYERS_TAG, PLAYER_TAG, ROOT_TAG};
use crate::error::Result;
use crate::records::RecordSet;

/* ---------------- Writing ---------------- */

fn leaf<W: Write>(w: &mut Writer<W>, tag: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        w.write_event(Event::Empty(BytesStart::new(tag)))?;
    } else {
        w.write_event(Event::Start(BytesStart::new(tag)))?;
        w.write_event(Event::Text(BytesText::new(value)))?;
        w.write_event(Event::End(BytesEnd::new(tag)))?;
    }
    Ok(())
}

/// Write `<section><unit><Header>value</Header>…</unit>…</section>` at the writer's
/// current depth. Cells that are `None` get no element.
pub fn write_record_set<W: Write>(
    w: &mut Writer<W>,
    set: &RecordSet,
    section_tag: &str,
    unit_tag: &str,
) -> Result<()> {
    if set.is_empty() {
        w.write_event(Event::Empty(BytesStart::new(section_tag)))?;
        return Ok(());
    }

    w.write_event(Event::Start(BytesStart::new(section_tag)))?;
    for row in &set.rows {
        w.write_event(Event::Start(BytesStart::new(unit_tag)))?;
        for (header, cell) in set.headers.iter().zip(row) {
            if let Some(value) = cell {
                leaf(w, header, value)?;
            }
        }
        w.write_event(Event::End(BytesEnd::new(unit_tag)))?;
    }
    w.write_event(Event::End(BytesEnd::new(section_tag)))?;
    Ok(())
}

fn new_writer() -> Writer<Vec<u8>> {
    Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH)
}

fn into_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Standalone subtree for one record set.
pub fn render_record_set(set: &RecordSet, section_tag: &str, unit_tag: &str) -> Result<String> {
    let mut w = new_writer();
    write_record_set(&mut w, set, section_tag, unit_tag)?;
    Ok(into_string(w.into_inner()))
}

/// Full output document: metadata section, then players, under one root.
pub fn render_match_document(details: &RecordSet, players: &RecordSet) -> Result<String> {
    let mut w = new_writer();
    w.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
    write_record_set(&mut w, details, DETAILS_TAG, DETAIL_TAG)?;
    write_record_set(&mut w, players, PLAYERS_TAG, PLAYER_TAG)?;
    w.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    let mut out = into_string(w.into_inner());
    out.push('\n');
    Ok(out)
}
