// Kasai's LCP construction

/// Compute the LCP array of `text` from its suffix array and rank array.
///
/// Suffixes are visited in text order, not SA order: the match length `h`
/// found for the suffix at `i` drops by at most one for the suffix at
/// `i + 1`, so the total work is linear.
///
/// `sa` and `rank` must be inverse permutations of `0..text.len()`.
/// `lcp[0]` is always 0.
pub fn kasai_lcp<T: PartialEq>(text: &[T], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0; n];
    let mut h = 0usize;

    for i in 0..n {
        let r = rank[i];
        if r == 0 {
            // No predecessor to compare against.
            h = 0;
            continue;
        }
        let j = sa[r - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[r] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
