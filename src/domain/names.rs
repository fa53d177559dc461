/// Worm names: at least two characters, an uppercase ASCII letter first, then
/// letters, spaces and quotes.
pub fn is_valid_worm_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    name.chars().count() >= 2
        && chars.all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '\'' || c == '"')
}

/// Team names: at least two letters, the first uppercase.
pub fn is_valid_team_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    name.chars().count() >= 2 && chars.all(|c| c.is_ascii_alphabetic())
}
