//! Header block rendering and detection

/// Ordered license text lines, independent of any comment style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    lines: Vec<String>,
}

/// MPL-2.0 notice used when no header is configured
pub fn default_lines() -> Vec<String> {
    vec![
        "This Source Code Form is subject to the terms of the Mozilla Public".to_string(),
        "License, v. 2.0. If a copy of the MPL was not distributed with this".to_string(),
        "file, You can obtain one at http://mozilla.org/MPL/2.0/.".to_string(),
    ]
}

impl Default for HeaderBlock {
    fn default() -> Self {
        Self::new(default_lines())
    }
}

impl HeaderBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Header lines from a text file body. Trailing newline does not add a line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Header lines with `"<prefix> "` in front of each
    pub fn render(&self, prefix: &str) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{} {}", prefix, line))
            .collect()
    }

    /// Rendered header, one blank line, then `original` verbatim, joined with `\n`
    pub fn stamp(&self, prefix: &str, original: &str) -> String {
        let mut parts = self.render(prefix);
        parts.push(String::new());
        parts.push(original.to_string());
        parts.join("\n")
    }

    /// Whether `content` already opens with this header rendered for `prefix`.
    ///
    /// Compares the first N lines of `content` against the N rendered lines.
    pub fn is_present(&self, prefix: &str, content: &str) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        let rendered = self.render(prefix);
        let mut existing = content.split('\n');
        rendered.iter().all(|expected| {
            existing
                .next()
                .map(|line| line.strip_suffix('\r').unwrap_or(line) == expected)
                .unwrap_or(false)
        })
    }
}
