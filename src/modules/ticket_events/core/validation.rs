pub const DEFAULT_TITLE: &str = "Ticketverkauf";

/// Format-only check for `YYYY-MM-DD`. Calendar validity is not checked, so
/// `2024-02-30` passes.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn normalize_title(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => DEFAULT_TITLE.to_string(),
    }
}
