//! Concept identity: turning free-text labels into comparable keys.

/// Normalize a label into a stable slug.
///
/// The result is lowercase, uses `-` as the only separator and never starts or
/// ends with one. `&` and `@` are spelled out so "R&D" and "R and D" agree.
/// Labels that differ only in case or punctuation collapse to the same key and
/// are treated as the same concept.
pub fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_dash = false;

    for ch in label.chars() {
        let substitution = match ch {
            '&' => Some("and"),
            '@' => Some("at"),
            _ => None,
        };

        if let Some(word) = substitution {
            push_separator(&mut out, &mut pending_dash);
            out.push_str(word);
            pending_dash = true;
            continue;
        }

        if ch.is_alphanumeric() {
            if pending_dash {
                push_separator(&mut out, &mut pending_dash);
            }
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

fn push_separator(out: &mut String, pending_dash: &mut bool) {
    if !out.is_empty() {
        out.push('-');
    }
    *pending_dash = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_joins_words() {
        assert_eq!(normalize("Rain"), "rain");
        assert_eq!(normalize("Heavy Rain"), "heavy-rain");
    }

    #[test]
    fn test_collapses_whitespace_and_punctuation() {
        assert_eq!(normalize("  Heavy   Rain!! "), "heavy-rain");
        assert_eq!(normalize("Cause -- Effect"), "cause-effect");
        assert_eq!(normalize("a.b_c"), "a-b-c");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("RAIN"), normalize("rain"));
        assert_eq!(normalize("Rain Water"), normalize("rain water"));
    }

    #[test]
    fn test_spells_out_symbols() {
        assert_eq!(normalize("R&D"), "r-and-d");
        assert_eq!(normalize("R & D"), "r-and-d");
        assert_eq!(normalize("Meet @ Noon"), "meet-at-noon");
    }

    #[test]
    fn test_keeps_digits_and_unicode_letters() {
        assert_eq!(normalize("Route 66"), "route-66");
        assert_eq!(normalize("Überblick Straße"), "überblick-straße");
    }

    #[test]
    fn test_symbol_only_label_is_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
