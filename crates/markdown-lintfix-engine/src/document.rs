/// A Markdown file held as an ordered list of lines.
///
/// Lines are stored without their terminator; rendering puts exactly one
/// `\n` after every line. `\r\n`, a lone `\r` and `\n` all end a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits text into lines the way a line reader keeping line ends would:
    /// `"a\n"` is one line, `"a\n\n"` is two, `""` is none.
    pub fn from_text(text: &str) -> Self {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines = unified
            .split_inclusive('\n')
            .map(|line| line.strip_suffix('\n').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
