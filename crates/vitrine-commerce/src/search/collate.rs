//! Locale-aware string comparison for name sorting.
//!
//! Strings are compared on their base letters first, so accented letters
//! sort next to their unaccented forms ("écran" between "dock" and "fan").
//! Ties on base letters are broken by accents, then by raw code points.

use std::cmp::Ordering;

/// Compare two strings the way a French-locale collator would.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let base = base_letters(a).cmp(base_letters(b));
    if base != Ordering::Equal {
        return base;
    }

    let accents = a
        .chars()
        .map(accent_rank)
        .cmp(b.chars().map(accent_rank));
    accents.then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(fold_char)
}

/// Strip diacritics and expand ligatures, lowercasing on the way.
fn fold_char(c: char) -> FoldedChars {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => FoldedChars::one('a'),
        'ç' => FoldedChars::one('c'),
        'è' | 'é' | 'ê' | 'ë' => FoldedChars::one('e'),
        'ì' | 'í' | 'î' | 'ï' => FoldedChars::one('i'),
        'ñ' => FoldedChars::one('n'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => FoldedChars::one('o'),
        'ù' | 'ú' | 'û' | 'ü' => FoldedChars::one('u'),
        'ý' | 'ÿ' => FoldedChars::one('y'),
        'æ' => FoldedChars::two('a', 'e'),
        'œ' => FoldedChars::two('o', 'e'),
        'ß' => FoldedChars::two('s', 's'),
        other => FoldedChars::one(other),
    }
}

fn accent_rank(c: char) -> u8 {
    match c.to_lowercase().next().unwrap_or(c) {
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'ý' => 1,
        'à' | 'è' | 'ì' | 'ò' | 'ù' => 2,
        'â' | 'ê' | 'î' | 'ô' | 'û' => 3,
        'ä' | 'ë' | 'ï' | 'ö' | 'ü' | 'ÿ' => 4,
        'ã' | 'õ' | 'ñ' => 5,
        'å' => 6,
        'ç' => 7,
        'ø' => 8,
        _ => 0,
    }
}

/// Up to two replacement characters for one input character.
struct FoldedChars {
    chars: [char; 2],
    len: usize,
    pos: usize,
}

impl FoldedChars {
    fn one(c: char) -> Self {
        Self {
            chars: [c, '\0'],
            len: 1,
            pos: 0,
        }
    }

    fn two(a: char, b: char) -> Self {
        Self {
            chars: [a, b],
            len: 2,
            pos: 0,
        }
    }
}

impl Iterator for FoldedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.pos < self.len {
            let c = self.chars[self.pos];
            self.pos += 1;
            Some(c)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        assert_eq!(locale_compare("apple", "banana"), Ordering::Less);
        assert_eq!(locale_compare("b", "a"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let mut names = vec!["fan", "écran", "dock", "ecran"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["dock", "ecran", "écran", "fan"]);
    }

    #[test]
    fn test_ligature_expands() {
        assert_eq!(locale_compare("cœur", "coeus"), Ordering::Less);
        assert_eq!(locale_compare("cœur", "coeua"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("xbox", "xbox series x"), Ordering::Less);
    }
}
