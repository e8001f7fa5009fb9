//! Delimited-text import/export for card decks.
//!
//! The dialect: one record per line, two fields split at the first comma,
//! fields optionally wrapped in `"…"` with `""` as the escaped quote, and
//! literal newlines allowed inside a quoted field. Records with no
//! delimiter or an empty face are skipped, never reported as errors.

use crate::Card;

/// Parse raw text into cards, in input order.
///
/// Physical lines are accumulated into one logical record until the number
/// of `"` characters seen is even; an odd count means a quoted field is
/// still open, so the next line (with a literal newline) belongs to the
/// same record. Input ending inside an open quote drops the partial record.
///
/// Never fails: malformed input just yields fewer cards.
pub fn parse_cards(text: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut buf = String::new();
    let mut quotes = 0usize;

    for line in text.trim().split('\n') {
        if buf.is_empty() {
            if line.trim().is_empty() {
                continue;
            }
        } else {
            buf.push('\n');
        }
        buf.push_str(line);
        quotes += line.matches('"').count();

        if quotes % 2 == 0 {
            if let Some(card) = split_record(&buf) {
                cards.push(card);
            }
            buf.clear();
            quotes = 0;
        }
    }

    cards
}

/// Render cards back to the same dialect `parse_cards` reads.
pub fn render_cards(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&render_field(&card.front));
        out.push(',');
        out.push_str(&render_field(&card.back));
        out.push('\n');
    }
    out
}

fn split_record(record: &str) -> Option<Card> {
    let at = delimiter_position(record)?;
    let front = unescape_field(&record[..at]);
    let back = unescape_field(&record[at + 1..]);
    if front.is_empty() || back.is_empty() {
        return None;
    }
    Some(Card::new(front, back))
}

/// First comma that sits outside a quoted run.
fn delimiter_position(record: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (i, ch) in record.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

/// Trim, drop one pair of surrounding quotes if both are present, then
/// collapse doubled quotes.
fn unescape_field(raw: &str) -> String {
    let mut field = raw.trim();
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field = &field[1..field.len() - 1];
    }
    field.replace("\"\"", "\"")
}

fn render_field(text: &str) -> String {
    let needs_quotes = text.contains(['"', ',', '\n']) || text != text.trim();
    if needs_quotes {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
