use crate::chars::{is_ident_continue, is_ident_start};
use crate::tables::lookup_keyword;
use crate::{Cursor, LexemeKind, ScanResult};

use super::spanning;

/// Identifier or keyword: maximal munch over identifier bytes, then a
/// keyword table lookup on the result.
pub fn scan_identifier<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    if !is_ident_start(cursor.current()) {
        return None;
    }
    let mut probe = *cursor;
    probe.advance();
    probe.eat_while(is_ident_continue);

    let kind = lookup_keyword(probe.slice_from(cursor.pos()))
        .map_or(LexemeKind::Identifier, LexemeKind::Keyword);
    Some(spanning(cursor, &probe, kind))
}
