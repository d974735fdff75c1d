// src/core/gematria.rs
// Hebrew numerals → integers. Letters are summed by value; geresh/gershayim and
// ASCII quote marks are decoration. Plain ASCII digits are accepted as well.

fn letter_value(ch: char) -> Option<u32> {
    let v = match ch {
        'א' => 1, 'ב' => 2, 'ג' => 3, 'ד' => 4, 'ה' => 5,
        'ו' => 6, 'ז' => 7, 'ח' => 8, 'ט' => 9,
        'י' => 10, 'כ' | 'ך' => 20, 'ל' => 30, 'מ' | 'ם' => 40,
        'נ' | 'ן' => 50, 'ס' => 60, 'ע' => 70, 'פ' | 'ף' => 80, 'צ' | 'ץ' => 90,
        'ק' => 100, 'ר' => 200, 'ש' => 300, 'ת' => 400,
        _ => return None,
    };
    Some(v)
}

fn is_decoration(ch: char) -> bool {
    matches!(ch, '\'' | '"' | '׳' | '״' | '`') || ch.is_whitespace()
}

/// Integer value of a Hebrew numeral such as `א`, `יב`, `ט"ו`, `ב'`.
/// `None` for empty input or any character that isn't a numeral letter.
pub fn to_int(token: &str) -> Option<u32> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok();
    }

    let mut total = 0u32;
    let mut seen = false;
    for ch in token.chars() {
        if is_decoration(ch) {
            continue;
        }
        total = total.checked_add(letter_value(ch)?)?;
        seen = true;
    }
    seen.then_some(total)
}
