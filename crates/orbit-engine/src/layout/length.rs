//! CSS length reading.

use crate::api::env::Insets;

/// Read a CSS length the way `parseFloat` would: the longest leading numeric
/// prefix wins and any unit suffix is ignored. `auto`, empty and non-finite
/// values read as `None`.
pub fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("auto") {
        return None;
    }

    let mut ends: Vec<usize> = value.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
    ends.reverse();
    ends.into_iter()
        .filter_map(|end| value[..end].parse::<f32>().ok())
        .find(|v| v.is_finite())
}

/// Expand an `inset` shorthand (1 to 4 values) into per-edge offsets.
///
/// Follows the CSS box-edge convention: `a` applies to all edges, `a b` is
/// vertical then horizontal, `a b c` is top, horizontal, bottom, and
/// `a b c d` is top, right, bottom, left.
pub fn parse_inset_shorthand(value: &str) -> Option<Insets> {
    let parts: Vec<Option<f32>> = value.split_whitespace().map(parse_length).collect();
    let (top, right, bottom, left) = match parts.as_slice() {
        [all] => (*all, *all, *all, *all),
        [v, h] => (*v, *h, *v, *h),
        [t, h, b] => (*t, *h, *b, *h),
        [t, r, b, l] => (*t, *r, *b, *l),
        _ => return None,
    };
    Some(Insets { top, right, bottom, left })
}
