use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Replaces a leading home directory with `~` for display.
///
/// This is a plain text prefix match: with home `/home/al`, both
/// `/home/al/x` and `/home/alice` are shortened (`~/x`, `~ice`).
pub fn display_name<'a>(path: &'a str, home: Option<&Path>) -> Cow<'a, str> {
    let Some(home) = home.and_then(Path::to_str) else {
        return Cow::Borrowed(path);
    };
    // a trailing slash on $HOME is not part of the prefix
    let home = match home.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => home,
    };
    if home.is_empty() {
        return Cow::Borrowed(path);
    }

    match path.strip_prefix(home) {
        Some(rest) => Cow::Owned(format!("~{}", rest)),
        None => Cow::Borrowed(path),
    }
}

/// Writes the numbered listing: at most `max_shown` entries, then a
/// line counting the ones left out.
pub fn render_listing<W: Write>(
    out: &mut W,
    matches: &[String],
    home: Option<&Path>,
    max_shown: usize,
) -> std::io::Result<()> {
    for (i, path) in matches.iter().take(max_shown).enumerate() {
        writeln!(out, "{} {}", i, display_name(path, home))?;
    }
    if matches.len() > max_shown {
        writeln!(out, "({} more not shown.)", matches.len() - max_shown)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(matches: &[String], max_shown: usize) -> String {
        let mut buf = Vec::new();
        render_listing(&mut buf, matches, Some(Path::new("/home/alice")), max_shown).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn paths(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/tmp/f{}", i)).collect()
    }

    #[test]
    fn collapses_home_prefix() {
        let home = Some(Path::new("/home/alice"));
        assert_eq!(display_name("/home/alice/report.pdf", home), "~/report.pdf");
        assert_eq!(display_name("/home/alice", home), "~");
        assert_eq!(display_name("/tmp/report.txt", home), "/tmp/report.txt");
    }

    #[test]
    fn collapses_text_prefix_of_sibling_directories() {
        let home = Some(Path::new("/home/alice"));
        assert_eq!(display_name("/home/alice2/x", home), "~2/x");
    }

    #[test]
    fn trailing_slash_on_home_is_ignored() {
        let home = Some(Path::new("/home/alice/"));
        assert_eq!(display_name("/home/alice/x", home), "~/x");
    }

    #[test]
    fn root_home_collapses_leading_slash() {
        assert_eq!(display_name("/tmp/x", Some(Path::new("/"))), "~tmp/x");
    }

    #[test]
    fn missing_home_collapses_nothing() {
        assert_eq!(display_name("/tmp/x", None), "/tmp/x");
        assert_eq!(display_name("/tmp/x", Some(Path::new(""))), "/tmp/x");
    }

    #[test]
    fn lists_with_indices() {
        let matches = vec![
            "/home/alice/report.pdf".to_string(),
            "/tmp/report.txt".to_string(),
        ];
        assert_eq!(listing(&matches, 32), "0 ~/report.pdf\n1 /tmp/report.txt\n");
    }

    #[test]
    fn exactly_max_has_no_remainder_line() {
        let out = listing(&paths(32), 32);
        assert_eq!(out.lines().count(), 32);
        assert!(out.ends_with("31 /tmp/f31\n"));
    }

    #[test]
    fn truncates_and_counts_remainder() {
        let out = listing(&paths(40), 32);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 33);
        assert_eq!(lines[31], "31 /tmp/f31");
        assert_eq!(lines[32], "(8 more not shown.)");
    }
}
