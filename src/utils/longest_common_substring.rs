/// Finds the longest contiguous run of characters shared by `a` and `b`.
///
/// Returns `None` when either input is empty or when the two strings share no
/// character at all. When several runs share the maximum length, the first one
/// found while scanning `b` (outer) against `a` (inner) wins, and the result is
/// taken from `a`.
///
/// Runs in `O(len(a) * len(b))` time and keeps only two rows of the dynamic
/// programming matrix, so extra space is `O(len(a))`.
///
/// # Example
/// ```
/// use word_profiler::longest_common_substring;
///
/// assert_eq!(
///     longest_common_substring("abcdef", "zcdefg"),
///     Some("cdef".to_string())
/// );
/// assert_eq!(longest_common_substring("abc", "xyz"), None);
/// ```
pub fn longest_common_substring(a: &str, b: &str) -> Option<String> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (end, length) = longest_common_run(&a_chars, &b_chars)?;

    Some(a_chars[end + 1 - length..=end].iter().collect())
}

/// Variant of [`longest_common_substring`] for callers holding optional strings.
/// An absent argument yields `None`, the same as an empty one.
pub fn longest_common_substring_opt(a: Option<&str>, b: Option<&str>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => longest_common_substring(a, b),
        _ => None,
    }
}

/// Length, in characters, of the longest common substring. Zero when there is
/// no match or either input is empty.
pub fn longest_common_substring_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    longest_common_run(&a_chars, &b_chars).map_or(0, |(_, length)| length)
}

/// Returns `(end column in a, run length)` of the first maximal run, or `None`
/// if no character matches.
fn longest_common_run(a: &[char], b: &[char]) -> Option<(usize, usize)> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    // Rows follow positions in `b`, columns follow positions in `a`
    let mut previous_row = vec![0usize; a.len()];
    let mut current_row = vec![0usize; a.len()];

    let mut max_length = 0;
    let mut end = 0;

    for &b_char in b {
        for (j, &a_char) in a.iter().enumerate() {
            if a_char == b_char {
                current_row[j] = if j == 0 { 1 } else { previous_row[j - 1] + 1 };

                // Strictly greater: the first maximum in scan order is kept
                if current_row[j] > max_length {
                    max_length = current_row[j];
                    end = j;
                }
            } else {
                current_row[j] = 0;
            }
        }

        // Every cell of the current row is rewritten on the next pass
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    if max_length == 0 {
        None
    } else {
        Some((end, max_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_end_column_and_length() {
        let a: Vec<char> = "xxabcx".chars().collect();
        let b: Vec<char> = "abc".chars().collect();
        assert_eq!(longest_common_run(&a, &b), Some((4, 3)));
    }

    #[test]
    fn test_run_keeps_first_maximum() {
        // "cd" is completed while scanning b before "ab" reaches the same length
        let a: Vec<char> = "abxcd".chars().collect();
        let b: Vec<char> = "cdab".chars().collect();
        assert_eq!(longest_common_run(&a, &b), Some((4, 2)));
    }

    #[test]
    fn test_run_without_match() {
        let a: Vec<char> = "abc".chars().collect();
        let b: Vec<char> = "xyz".chars().collect();
        assert_eq!(longest_common_run(&a, &b), None);
    }
}
