use super::model::{Portfolio, Row};

// ---------------------------------------------------------------------------
// CSV scanner
// ---------------------------------------------------------------------------

/// Parse raw CSV text into a [`Portfolio`].
///
/// Behaviour contract (shared with the data sources feeding this app):
/// * leading/trailing whitespace of the whole text is stripped, then the
///   text is split into lines on `\n`
/// * a `"` toggles quote state and is never part of the field content;
///   a `,` splits fields only outside a quoted span
/// * every field is trimmed of surrounding whitespace
/// * no header row is assumed or skipped, no column count is enforced
///
/// This scanner never fails: unbalanced quotes just toggle state and
/// produce a best-effort split.
pub fn parse_csv(text: &str) -> Portfolio {
    let rows = text.trim().split('\n').map(parse_line).collect();
    Portfolio::from_rows(rows)
}

/// Split one line into trimmed fields, honouring quoted spans.
fn parse_line(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    Row::new(fields)
}
