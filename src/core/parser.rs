use crate::core::{FieldPair, Record, RecordSet};
use crate::utils::error::{CheckError, Result};
use std::borrow::Cow;

/// Extracts the selected tokens from a single line.
///
/// `line_number` is 1-based and only used for the record and for diagnostics.
pub fn parse_line(source: &str, line: &str, line_number: usize, fields: FieldPair) -> Result<Record> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let malformed = || CheckError::MalformedLine {
        path: source.to_string(),
        line: line_number,
        found: tokens.len(),
        required: fields.required_tokens(),
    };

    let first = tokens.get(fields.first.wrapping_sub(1)).ok_or_else(malformed)?;
    let second = tokens.get(fields.second.wrapping_sub(1)).ok_or_else(malformed)?;

    Ok(Record::new(line_number, *first, *second))
}

/// Rewrites `\r\n` and lone `\r` terminators to `\n`.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Parses every line of `content`; a blank line has no tokens and is malformed.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn parse_records(source: &str, content: &str, fields: FieldPair) -> Result<RecordSet> {
    let records = normalize_line_endings(content)
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(source, line, idx + 1, fields))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} records from {}", records.len(), source);
    Ok(RecordSet::new(source, records))
}
