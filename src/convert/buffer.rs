//! Output buffer with whitespace-aware joining.

/// Rendered text accumulated during one conversion.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    /// Text produced so far.
    out: String,
}

impl OutputBuffer {
    /// What: Append `text`, merging whitespace at the boundary with the current tail.
    ///
    /// Inputs:
    /// - `text`: Fragment to append; empty fragments are ignored.
    ///
    /// Details:
    /// - Tail is whitespace and `text` starts with a space or tab: trailing spaces/tabs are
    ///   dropped first, so boundaries never produce runs of spaces.
    /// - Tail and `text` both start a new line: trailing whitespace is trimmed and exactly one
    ///   blank line is kept before the rest of `text`.
    /// - Otherwise `text` is appended unchanged.
    pub fn append(&mut self, text: &str) {
        let Some(first) = text.chars().next() else {
            return;
        };
        match self.out.chars().next_back() {
            Some(last) if last.is_whitespace() && matches!(first, ' ' | '\t') => {
                let keep = self.out.trim_end_matches([' ', '\t']).len();
                self.out.truncate(keep);
                self.out.push_str(text);
            }
            Some('\n') if first == '\n' => {
                let keep = self.out.trim_end().len();
                self.out.truncate(keep);
                self.out.push_str("\n\n");
                self.out.push_str(text.trim_start_matches('\n'));
            }
            _ => self.out.push_str(text),
        }
    }

    /// Append `text` verbatim, bypassing boundary merging.
    pub fn push_raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// True when the buffer is empty or its last character is a newline.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    /// Borrow the rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the rendered text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Collapse every whitespace run (spaces, tabs, newlines) into a single space.
#[must_use]
pub fn squeeze_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

/// Prefix every line of `text` with one tab, keeping the line structure.
#[must_use]
pub fn indent_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
