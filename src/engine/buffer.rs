//! Text buffer backing the main text area.

/// The visible text content. The program only ever appends; the user may edit
/// the string directly through the text widget via [`TextBuffer::text_mut`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` followed by a newline.
    pub fn append_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}
