use crate::tables::match_operator;
use crate::{Cursor, LexemeKind, ScanResult};

use super::spanning;

/// Longest operator spelling at the cursor.
pub fn scan_operator<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    let op = match_operator(cursor.rest())?;
    let mut probe = *cursor;
    probe.advance_n(op.byte_len());
    Some(spanning(cursor, &probe, LexemeKind::Operator(op)))
}
