/// Joins class fragments with single spaces, skipping empty ones.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// `on` when `cond` holds, `off` otherwise.
pub fn pick<'a>(cond: bool, on: &'a str, off: &'a str) -> &'a str {
    if cond {
        on
    } else {
        off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_fragments() {
        assert_eq!(cn(["a", "", "  ", " b ", "c d"]), "a b c d");
        assert_eq!(cn([] as [&str; 0]), "");
    }

    #[test]
    fn pick_selects_branch() {
        assert_eq!(pick(true, "x", "y"), "x");
        assert_eq!(pick(false, "x", "y"), "y");
    }
}
