// File: src/core/table.rs

/// Every scored letter in alphabet order, final forms right after their base letter.
pub const LETTER_TABLE: [(char, u32); 27] = [
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6),
    ('ז', 7), ('ח', 8), ('ט', 9), ('י', 10), ('כ', 11), ('ך', 11),
    ('ל', 12), ('מ', 13), ('ם', 13), ('נ', 14), ('ן', 14), ('ס', 15),
    ('ע', 16), ('פ', 17), ('ף', 17), ('צ', 18), ('ץ', 18), ('ק', 19),
    ('ר', 20), ('ש', 21), ('ת', 22),
];

// The 27 letters occupy U+05D0 (alef) through U+05EA (tav) with no gaps.
const FIRST_LETTER: u32 = 'א' as u32;

/// `LETTER_TABLE` re-indexed by code point offset from alef.
const VALUES_BY_CODE_POINT: [u32; 27] = index_by_code_point();

const fn index_by_code_point() -> [u32; 27] {
    let mut values = [0; 27];
    let mut i = 0;
    while i < LETTER_TABLE.len() {
        let (letter, value) = LETTER_TABLE[i];
        values[(letter as u32 - FIRST_LETTER) as usize] = value;
        i += 1;
    }
    values
}

/// Linear value of a single code point. Anything outside the table is worth 0,
/// so arbitrary pasted text can be scored without errors.
pub fn value_of(c: char) -> u32 {
    (c as u32)
        .checked_sub(FIRST_LETTER)
        .and_then(|offset| VALUES_BY_CODE_POINT.get(offset as usize))
        .copied()
        .unwrap_or(0)
}

pub fn letters() -> impl Iterator<Item = (char, u32)> {
    LETTER_TABLE.iter().copied()
}
