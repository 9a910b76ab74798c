// Character classification: which characters cannot stand first in a word

// ---------------------------------------------------------------------------
// Predicate trait
// ---------------------------------------------------------------------------

/// Script-specific test for characters that cannot begin a word.
///
/// A matched span whose first corpus character is such a mark would cut a
/// word in the middle of a diacritic cluster, so the matcher rejects it.
///
/// Any `Fn(char) -> bool` is a predicate, which lets callers plug in their
/// own script tables without a wrapper type.
pub trait CombiningMarkPredicate {
    /// Returns `true` if `c` cannot be the first character of a word.
    fn is_non_initial(&self, c: char) -> bool;
}

impl<F> CombiningMarkPredicate for F
where
    F: Fn(char) -> bool,
{
    fn is_non_initial(&self, c: char) -> bool {
        self(c)
    }
}

// ---------------------------------------------------------------------------
// Stock predicates
// ---------------------------------------------------------------------------

/// Accepts every character as word-initial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCombiningMarks;

impl CombiningMarkPredicate for NoCombiningMarks {
    fn is_non_initial(&self, _c: char) -> bool {
        false
    }
}

/// Thai vowel signs and tone marks that attach to a preceding consonant.
///
/// Covers the following vowels (ะ า ำ), the above/below vowels
/// (U+0E31, U+0E34..U+0E3A), lakkhangyao (U+0E45) and the tone marks and
/// signs from maitaikhu to yamakkan (U+0E47..U+0E4E).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThaiNonInitial;

impl CombiningMarkPredicate for ThaiNonInitial {
    fn is_non_initial(&self, c: char) -> bool {
        is_thai_non_initial(c)
    }
}

/// Returns `true` for Thai characters that can only follow a consonant.
pub fn is_thai_non_initial(c: char) -> bool {
    matches!(
        c,
        '\u{0E30}' // SARA A
            | '\u{0E31}' // MAI HAN-AKAT
            | '\u{0E32}' // SARA AA
            | '\u{0E33}' // SARA AM
            | '\u{0E34}'..='\u{0E3A}' // SARA I .. PHINTHU
            | '\u{0E45}' // LAKKHANGYAO
            | '\u{0E47}'..='\u{0E4E}' // MAITAIKHU .. YAMAKKAN
    )
}

/// Generic nonspacing combining marks from the common Unicode blocks.
///
/// This is a range table rather than a full general-category lookup; it
/// covers the diacritic blocks used by Latin, Greek, Cyrillic, the major
/// Indic scripts and Thai/Lao.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeCombiningMarks;

impl CombiningMarkPredicate for UnicodeCombiningMarks {
    fn is_non_initial(&self, c: char) -> bool {
        is_combining_mark(c)
    }
}

/// Check whether a character falls in one of the combining-mark ranges.
pub fn is_combining_mark(c: char) -> bool {
    let cp = c as u32;
    (0x0300..=0x036F).contains(&cp)          // Combining Diacritical Marks
        || (0x0483..=0x0489).contains(&cp)   // Cyrillic combining
        || (0x0591..=0x05BD).contains(&cp)   // Hebrew points
        || (0x064B..=0x065F).contains(&cp)   // Arabic harakat
        || (0x0900..=0x0903).contains(&cp)   // Devanagari signs
        || (0x093A..=0x094F).contains(&cp)   // Devanagari vowel signs, virama
        || (0x0981..=0x0983).contains(&cp)   // Bengali signs
        || (0x09BC..=0x09D7).contains(&cp)   // Bengali vowel signs
        || (0x0B3C..=0x0B57).contains(&cp)   // Oriya vowel signs
        || (0x0BBE..=0x0BD7).contains(&cp)   // Tamil vowel signs
        || is_thai_non_initial(c)
        || (0x0EB1..=0x0EBC).contains(&cp)   // Lao vowel signs
        || (0x0EC8..=0x0ECD).contains(&cp)   // Lao tone marks
        || (0x1AB0..=0x1AFF).contains(&cp)   // Combining Diacritical Marks Extended
        || (0x1DC0..=0x1DFF).contains(&cp)   // Combining Diacritical Marks Supplement
        || (0x20D0..=0x20FF).contains(&cp)   // Combining marks for symbols
        || (0xFE20..=0xFE2F).contains(&cp) // Combining half marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_combining_marks_accepts_everything() {
        assert!(!NoCombiningMarks.is_non_initial('a'));
        assert!(!NoCombiningMarks.is_non_initial('\u{0301}'));
        assert!(!NoCombiningMarks.is_non_initial('\u{0E34}'));
    }

    #[test]
    fn thai_consonants_are_initial() {
        assert!(!ThaiNonInitial.is_non_initial('\u{0E01}')); // ko kai
        assert!(!ThaiNonInitial.is_non_initial('\u{0E2D}')); // o ang
        assert!(!ThaiNonInitial.is_non_initial('\u{0E40}')); // sara e (leading vowel)
    }

    #[test]
    fn thai_dependent_vowels_and_tones_are_non_initial() {
        assert!(ThaiNonInitial.is_non_initial('\u{0E30}')); // sara a
        assert!(ThaiNonInitial.is_non_initial('\u{0E32}')); // sara aa
        assert!(ThaiNonInitial.is_non_initial('\u{0E34}')); // sara i
        assert!(ThaiNonInitial.is_non_initial('\u{0E38}')); // sara u
        assert!(ThaiNonInitial.is_non_initial('\u{0E48}')); // mai ek
        assert!(ThaiNonInitial.is_non_initial('\u{0E4C}')); // thanthakhat
        assert!(!ThaiNonInitial.is_non_initial('\u{0E46}')); // maiyamok
        assert!(!ThaiNonInitial.is_non_initial('a'));
    }

    #[test]
    fn unicode_combining_marks() {
        assert!(UnicodeCombiningMarks.is_non_initial('\u{0301}')); // acute
        assert!(UnicodeCombiningMarks.is_non_initial('\u{093F}')); // devanagari i
        assert!(UnicodeCombiningMarks.is_non_initial('\u{0E49}')); // thai mai tho
        assert!(!UnicodeCombiningMarks.is_non_initial('e'));
        assert!(!UnicodeCombiningMarks.is_non_initial('\u{00E9}')); // precomposed é
        assert!(!UnicodeCombiningMarks.is_non_initial('\u{0915}')); // devanagari ka
    }

    #[test]
    fn closures_are_predicates() {
        let hyphen = |c: char| c == '-';
        assert!(hyphen.is_non_initial('-'));
        assert!(!hyphen.is_non_initial('a'));
    }

    #[test]
    fn trait_objects_delegate() {
        let boxed: Box<dyn CombiningMarkPredicate> = Box::new(ThaiNonInitial);
        assert!(boxed.is_non_initial('\u{0E31}'));
        assert!(!boxed.is_non_initial('\u{0E01}'));
    }
}
