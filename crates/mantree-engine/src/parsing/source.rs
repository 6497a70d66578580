use mantree_syntax::LogicalLine;

/// Position in the page's logical lines. Handlers that need look-ahead
/// (tagged paragraphs, macro definitions) consume lines through it.
#[derive(Debug, Clone)]
pub struct LineCursor {
    lines: Vec<LogicalLine>,
    position: usize,
}

impl LineCursor {
    pub fn new(lines: Vec<LogicalLine>) -> Self {
        Self { lines, position: 0 }
    }

    pub fn peek(&self) -> Option<&LogicalLine> {
        self.lines.get(self.position)
    }

    pub fn pop(&mut self) -> Option<LogicalLine> {
        let line = self.lines.get(self.position).cloned()?;
        self.position += 1;
        Some(line)
    }
}
