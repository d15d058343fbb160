/// Whitespace-tolerant, case-insensitive string equality.
///
/// Characters present in both strings compare ASCII case-insensitively;
/// positions past the shorter string must hold whitespace in the longer one.
/// This lets a padded string-table window like `"2.53  "` match the query
/// label `"2.53"` without allocating a trimmed copy. All domain strings are
/// ASCII identifiers, so no locale-aware folding is needed.
pub fn equals_fold(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    for i in 0..a.len().max(b.len()) {
        match (a.get(i), b.get(i)) {
            (Some(&x), Some(&y)) => {
                if !x.eq_ignore_ascii_case(&y) {
                    return false;
                }
            }
            (Some(&x), None) => {
                if !x.is_ascii_whitespace() {
                    return false;
                }
            }
            (None, Some(&y)) => {
                if !y.is_ascii_whitespace() {
                    return false;
                }
            }
            (None, None) => unreachable!(),
        }
    }
    true
}
