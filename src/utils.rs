//! Utilities shared by the writers: label escaping for Newick output and a
//! small chaining text sink over any [Write].

use std::io::{self, Write};

/// Characters that force a label to be single-quoted in Newick output.
const QUOTE_TRIGGERS: &[char] = &[',', ';', '\t', '\n', '\r', '(', ')', ':', '[', ']', '\''];

// ============================================================================
// Label escaping (pub)
// ============================================================================
/// Checks if a label is enclosed in single quotes.
///
/// # Examples
/// ```
/// # use ngesh::utils::is_single_quoted;
/// assert_eq!(is_single_quoted("Tupinamba"), false);
/// assert_eq!(is_single_quoted("'Old Tupi'"), true);
/// ```
pub fn is_single_quoted(label: &str) -> bool {
    label.starts_with('\'') && label.ends_with('\'') && label.len() >= 2
}

/// Checks if a label can be written as-is:
/// - wrapped in single quotes with each internal single quote doubled, or
/// - free of spaces and special characters
///
/// # Examples
/// ```
/// # use ngesh::utils::is_escaped;
/// assert_eq!(is_escaped("Guarani"), true);
/// assert_eq!(is_escaped("Mbya Guarani"), false);
/// assert_eq!(is_escaped("Mbya_Guarani"), true);
/// assert_eq!(is_escaped("'Mbya Guarani'"), true);
/// assert_eq!(is_escaped("'Ka''apor'"), true);
/// assert_eq!(is_escaped("'Ka'apor'"), false);
/// ```
pub fn is_escaped(label: &str) -> bool {
    if is_single_quoted(label) {
        // Every internal single quote must come in a pair
        let inner = &label[1..label.len() - 1];
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch == '\'' && chars.next() != Some('\'') {
                return false;
            }
        }
        true
    } else {
        !label.chars().any(|c| c == ' ' || QUOTE_TRIGGERS.contains(&c))
    }
}

/// Escapes a label for safe use in Newick strings.
///
/// Labels containing special characters (punctuation, delimiters) are
/// wrapped in single quotes, doubling internal single quotes.
/// Otherwise spaces are replaced with underscores.
/// Labels that are already escaped are returned as-is.
///
/// # Examples
/// ```
/// # use ngesh::utils::escape_label;
/// assert_eq!(escape_label("Guarani"), "Guarani");
/// assert_eq!(escape_label("Mbya Guarani"), "Mbya_Guarani");
/// assert_eq!(escape_label("Tupi (Old)"), "'Tupi (Old)'");
/// assert_eq!(escape_label("Ka'apor"), "'Ka''apor'");
/// assert_eq!(escape_label("'Ka''apor'"), "'Ka''apor'");
/// ```
pub fn escape_label(label: &str) -> String {
    if is_escaped(label) {
        return label.to_string();
    }

    if label.chars().any(|c| QUOTE_TRIGGERS.contains(&c)) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.replace(' ', "_")
    }
}

// =#========================================================================#=
// TEXT SINK
// =#========================================================================#=
/// Thin wrapper over a [Write] with chainable helpers for the small set of
/// tokens the writers emit.
pub(crate) struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps the given output.
    pub(crate) fn new(out: W) -> Self {
        TextSink { out }
    }

    /// Flushes and returns the wrapped output.
    pub(crate) fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    /// Appends a string slice, returning itself for chaining.
    pub(crate) fn write_str(&mut self, s: &str) -> io::Result<&mut Self> {
        self.out.write_all(s.as_bytes())?;
        Ok(self)
    }

    /// Appends a byte slice, returning itself for chaining.
    pub(crate) fn write_all(&mut self, buf: &[u8]) -> io::Result<&mut Self> {
        self.out.write_all(buf)?;
        Ok(self)
    }

    /// Appends anything displayable, returning itself for chaining.
    pub(crate) fn write_display<D: std::fmt::Display + ?Sized>(&mut self, value: &D) -> io::Result<&mut Self> {
        write!(self.out, "{}", value)?;
        Ok(self)
    }

    /// Appends a space character (' '), returning itself for chaining.
    pub(crate) fn space(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b" ")?;
        Ok(self)
    }

    /// Appends a newline character ('\n'), returning itself for chaining.
    pub(crate) fn newline(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b"\n")?;
        Ok(self)
    }

    /// Appends a comma (','), returning itself for chaining.
    pub(crate) fn comma(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b",")?;
        Ok(self)
    }

    /// Appends a semicolon (';'), returning itself for chaining.
    pub(crate) fn semicolon(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b";")?;
        Ok(self)
    }

    /// Appends an equals sign ('='), returning itself for chaining.
    pub(crate) fn equals(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b"=")?;
        Ok(self)
    }
}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sink_chaining() {
        let mut sink = TextSink::new(Vec::new());
        sink.write_str("ntax").unwrap().equals().unwrap().write_display(&3).unwrap().semicolon().unwrap();
        sink.newline().unwrap().write_all(b"a").unwrap().comma().unwrap().space().unwrap();
        let out = sink.finish().unwrap();
        assert_eq!(out, b"ntax=3;\na, ");
    }

    #[test]
    fn test_escape_keeps_already_quoted() {
        assert_eq!(escape_label("'Proto Language'"), "'Proto Language'");
        assert_eq!(escape_label("Proto Language"), "Proto_Language");
    }
}
