use crate::constants::value;

/// Joins configured values the way they are emitted on the wire (`"a, b, c"`).
pub(crate) fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    let mut joined = String::with_capacity(values.iter().map(|v| v.as_ref().len() + 2).sum());
    for (idx, item) in values.iter().enumerate() {
        if idx > 0 {
            joined.push_str(value::LIST_SEPARATOR);
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// True when the values consist of exactly one `*` entry.
pub(crate) fn is_lone_wildcard<S: AsRef<str>>(values: &[S]) -> bool {
    matches!(values, [only] if only.as_ref() == value::WILDCARD)
}

/// Rejects bytes that would split or truncate a header line.
pub(crate) fn is_header_value_safe(value: &str) -> bool {
    !value.bytes().any(|byte| matches!(byte, b'\r' | b'\n' | b'\0'))
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
