//! The row-block parser: converts the raw `content query` dump into records.

use crate::models::record::CallRecord;

const ROW_MARKER: &str = "Row:";

/// Parse a raw call-log dump into records, preserving device-reported order.
///
/// A new record begins on any line containing `Row:`; the record being
/// accumulated (even one with zero fields) is flushed first, and the marker
/// line itself contributes no fields. Any other line containing `=` is
/// split on the first `=` into a trimmed key/value pair, so values keep
/// embedded `=` characters; inserting a key twice keeps the last value.
/// Lines matching neither pattern are ignored, as are field lines appearing
/// before the first row marker. End of input flushes the record in
/// progress, so the final block needs no closing delimiter.
///
/// Malformed or truncated input never fails; at worst it yields fewer or
/// emptier records.
pub fn parse_call_log(raw: &str) -> Vec<CallRecord> {
    let mut records = Vec::new();
    let mut current: Option<CallRecord> = None;

    for line in raw.lines() {
        if line.contains(ROW_MARKER) {
            if let Some(rec) = current.take() {
                records.push(rec);
            }
            current = Some(CallRecord::new());
        } else if let Some((key, value)) = line.split_once('=') {
            if let Some(rec) = current.as_mut() {
                rec.insert(key.trim(), value.trim());
            }
        }
    }

    if let Some(rec) = current {
        records.push(rec);
    }

    records
}
