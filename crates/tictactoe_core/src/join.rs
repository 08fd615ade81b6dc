//! Human-readable "a, b, or c" lists.

/// Joins items as `"5"`, `"2 or 5"` or `"1, 2, or 5"`.
pub fn join_or<T: ToString>(items: &[T], delimiter: &str, conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, last] => format!("{} {} {}", first.to_string(), conjunction, last.to_string()),
        [init @ .., last] => {
            let left = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(delimiter);
            format!("{}{}{} {}", left, delimiter, conjunction, last.to_string())
        }
    }
}

/// [`join_or`] with `", "` and `"or"`.
pub fn join_or_default<T: ToString>(items: &[T]) -> String {
    join_or(items, ", ", "or")
}
