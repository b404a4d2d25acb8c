// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// League name → directory-safe stem. Falls back to `league` when
/// nothing usable is left.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("league") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  45'\t+2' \n"), "45' +2'");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn filenames_are_safe() {
        assert_eq!(sanitize_filename("Premier League"), "Premier_League");
        assert_eq!(sanitize_filename("  Spanish  La Liga "), "Spanish_La_Liga");
        assert_eq!(sanitize_filename("Ligue 1 / Uber Eats"), "Ligue_1_Uber_Eats");
        assert_eq!(sanitize_filename("///"), "league");
    }
}
