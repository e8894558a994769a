// Single-edit similarity predicate
//
// A fast, single-pass check used to scan a dictionary for words that are
// "one edit away" from a query. It is deliberately not a Levenshtein
// computation: a pair whose lengths differ by exactly one is accepted as long
// as the aligned scan does not hit a second mismatch.

/// Returns `true` if `query` and `candidate` are considered similar.
///
/// Rules, in order:
/// 1. Identical words are never similar.
/// 2. Words whose lengths differ by more than one character are not similar.
/// 3. The words are scanned left to right with independent cursors. On a
///    mismatch the difference count is incremented, and if the lengths
///    differ only the cursor of the longer word advances (the mismatch is
///    treated as an insertion into the longer word). A second mismatch
///    rejects the pair.
/// 4. The pair is similar if exactly one mismatch was counted, or if the
///    lengths differ by exactly one.
///
/// Lengths and positions are counted in `char`s.
///
/// ```
/// use wordbook_core::similarity::is_similar;
///
/// assert!(is_similar("cat", "bat"));
/// assert!(is_similar("cat", "cats"));
/// assert!(!is_similar("cat", "cat"));
/// assert!(!is_similar("cat", "dog"));
/// ```
pub fn is_similar(query: &str, candidate: &str) -> bool {
    if query == candidate {
        return false;
    }

    let a: Vec<char> = query.chars().collect();
    let b: Vec<char> = candidate.chars().collect();
    let len_diff = a.len().abs_diff(b.len());
    if len_diff > 1 {
        return false;
    }

    let mut differences = 0usize;
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            continue;
        }

        differences += 1;
        if differences > 1 {
            return false;
        }
        // Hold the shorter word's cursor for one step.
        if a.len() > b.len() {
            i += 1;
        } else if a.len() < b.len() {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    differences == 1 || len_diff == 1
}
