//! Line scanner for intent text.

/// One meaningful line of intent text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// An unindented line ending in `:`. Carries the name without the colon.
    Section(&'a str),
    /// `key: value`, split on the first colon. Surrounding quotes are removed
    /// from the value.
    Entry { key: &'a str, value: &'a str },
}

/// Iterate the meaningful lines of `text`.
///
/// Comments and blank lines are dropped, as are lines with no colon at all.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().filter_map(classify)
}

fn classify(raw: &str) -> Option<Line<'_>> {
    let line = strip_comment(raw);
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let indented = line.starts_with(char::is_whitespace);
    if !indented && let Some(name) = trimmed.strip_suffix(':') {
        return Some(Line::Section(name.trim()));
    }

    let (key, value) = trimmed.split_once(':')?;
    Some(Line::Entry {
        key: key.trim(),
        value: unquote(value.trim()),
    })
}

/// Cut a line at the first `#` that starts a comment.
///
/// A `#` starts a comment at the beginning of the line or after whitespace,
/// and never inside quotes, so `color: "#FF0000"` keeps its value.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    let mut after_space = true;
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' && after_space => return &line[..i],
            None => {}
        }
        after_space = c.is_whitespace();
    }
    line
}

pub(crate) fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}
