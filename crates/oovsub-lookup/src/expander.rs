// Widen a corpus-side match to the whole vocabulary word around it

use std::ops::Range;

/// Expand `span` left and right until the separator (or either end of the
/// corpus) is reached, returning the range of the enclosing word.
///
/// The separator itself is never part of the result. Runs in time
/// proportional to the length of the enclosing word.
pub fn expand_to_word(corpus: &[char], span: Range<usize>, separator: char) -> Range<usize> {
    let mut start = span.start.min(corpus.len());
    let mut end = span.end.clamp(start, corpus.len());

    while start > 0 && corpus[start - 1] != separator {
        start -= 1;
    }
    while end < corpus.len() && corpus[end] != separator {
        end += 1;
    }
    start..end
}
