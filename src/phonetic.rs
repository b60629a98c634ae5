//! Metaphone keys for "did you mean" suggestions.
//!
//! Only ASCII letters take part; everything else is skipped and case is
//! ignored. Two names with the same key are considered near-homophones.

fn is_vowel(c: u8) -> bool {
    matches!(c, b'A' | b'E' | b'I' | b'O' | b'U')
}

fn is_front_vowel(c: Option<u8>) -> bool {
    matches!(c, Some(b'E' | b'I' | b'Y'))
}

/// Computes the Metaphone key of `word`.
pub fn metaphone(word: &str) -> String {
    let letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect();
    let at = |i: usize| letters.get(i).copied();

    let mut key = String::with_capacity(letters.len());
    let Some(&first) = letters.first() else {
        return key;
    };

    // Initial letter exceptions
    let mut i = match (first, at(1)) {
        (b'A', Some(b'E')) => {
            key.push('E');
            2
        }
        (b'G' | b'K' | b'P', Some(b'N')) => {
            key.push('N');
            2
        }
        (b'W', Some(b'R')) => {
            key.push('R');
            2
        }
        (b'W', Some(b'H')) => {
            key.push('W');
            2
        }
        (b'X', _) => {
            key.push('S');
            1
        }
        (c, _) if is_vowel(c) => {
            key.push(c as char);
            1
        }
        _ => 0,
    };

    while i < letters.len() {
        let c = letters[i];
        let prev = i.checked_sub(1).and_then(at);
        let next = at(i + 1);
        let after = at(i + 2);

        if prev == Some(c) && c != b'C' {
            i += 1;
            continue;
        }

        match c {
            b'B' => {
                if !(prev == Some(b'M') && next.is_none()) {
                    key.push('B');
                }
            }
            b'C' => {
                if next == Some(b'H') {
                    key.push(if prev == Some(b'S') { 'K' } else { 'X' });
                } else if next == Some(b'I') && after == Some(b'A') {
                    key.push('X');
                } else if is_front_vowel(next) {
                    if prev != Some(b'S') {
                        key.push('S');
                    }
                } else {
                    key.push('K');
                }
            }
            b'D' => {
                if next == Some(b'G') && is_front_vowel(after) {
                    key.push('J');
                } else {
                    key.push('T');
                }
            }
            b'G' => {
                let silent_gh = next == Some(b'H') && after.is_some_and(|a| !is_vowel(a));
                let silent_gn = next == Some(b'N')
                    && (after.is_none()
                        || (after == Some(b'E') && at(i + 3) == Some(b'D') && at(i + 4).is_none()));
                let silent_dg = prev == Some(b'D') && is_front_vowel(next);

                if !(silent_gh || silent_gn || silent_dg) {
                    key.push(if is_front_vowel(next) { 'J' } else { 'K' });
                }
            }
            b'H' => {
                let after_vowel = prev.is_some_and(is_vowel) && !next.is_some_and(is_vowel);
                let modifier = matches!(prev, Some(b'C' | b'S' | b'P' | b'T' | b'G'));
                if !after_vowel && !modifier {
                    key.push('H');
                }
            }
            b'K' => {
                if prev != Some(b'C') {
                    key.push('K');
                }
            }
            b'P' => key.push(if next == Some(b'H') { 'F' } else { 'P' }),
            b'Q' => key.push('K'),
            b'S' => {
                if next == Some(b'H') || (next == Some(b'I') && matches!(after, Some(b'O' | b'A'))) {
                    key.push('X');
                } else {
                    key.push('S');
                }
            }
            b'T' => {
                if next == Some(b'I') && matches!(after, Some(b'O' | b'A')) {
                    key.push('X');
                } else if next == Some(b'H') {
                    key.push('0');
                } else if !(next == Some(b'C') && after == Some(b'H')) {
                    key.push('T');
                }
            }
            b'V' => key.push('F'),
            b'W' | b'Y' => {
                if next.is_some_and(is_vowel) {
                    key.push(c as char);
                }
            }
            b'X' => key.push_str("KS"),
            b'Z' => key.push('S'),
            b'F' | b'J' | b'L' | b'M' | b'N' | b'R' => key.push(c as char),
            // Vowels only count in first position
            _ => {}
        }
        i += 1;
    }

    key
}
