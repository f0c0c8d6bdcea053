use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::{Input, TextArea};

const PLACEHOLDER: &str = "Type a task and press Enter...";

/// The multi-line field new tasks are typed into.
///
/// `TextArea` does the editing; drawing is done here so the field matches
/// the rest of the window.
pub(crate) struct TaskInput {
    textarea: TextArea<'static>,
}

impl TaskInput {
    pub(crate) fn new() -> Self {
        TaskInput {
            textarea: TextArea::default(),
        }
    }

    pub(crate) fn input(&mut self, input: impl Into<Input>) -> bool {
        self.textarea.input(input)
    }

    pub(crate) fn paste(&mut self, text: &str) {
        // terminals disagree on paste line breaks; a bare \r is common
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = text.lines();
        if let Some(first) = lines.next() {
            self.textarea.insert_str(first);
        }
        for line in lines {
            self.textarea.insert_newline();
            self.textarea.insert_str(line);
        }
    }

    pub(crate) fn contents(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Takes the trimmed contents as a new task. The field is emptied even
    /// when nothing but whitespace was typed.
    pub(crate) fn submit(&mut self) -> Option<String> {
        let text = self.contents().trim().to_owned();
        self.clear();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub(crate) fn clear(&mut self) {
        self.textarea = TextArea::default();
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL).title("new task")
    }

    /// First text line shown, so that the cursor line stays visible.
    fn first_visible(&self, height: u16) -> usize {
        let (row, _) = self.textarea.cursor();
        (row + 1).saturating_sub(usize::from(height.max(1)))
    }

    /// First character column shown, so that the cursor column stays visible.
    /// The cursor may sit one past the end of the line, hence the `+ 1`.
    fn first_visible_col(&self, width: u16) -> usize {
        let (_, col) = self.textarea.cursor();
        (col + 1).saturating_sub(usize::from(width.max(1)))
    }

    /// Terminal cell the cursor should sit on when the field fills `area`.
    pub(crate) fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let inner = Self::block().inner(area);
        let (row, col) = self.textarea.cursor();
        let y = row - self.first_visible(inner.height);
        let x = col - self.first_visible_col(inner.width);
        let x = u16::try_from(x).unwrap_or(u16::MAX);
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        (
            inner.x + x.min(inner.width.saturating_sub(1)),
            inner.y + y.min(inner.height.saturating_sub(1)),
        )
    }
}

impl Widget for &TaskInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(Color::White).fg(Color::Black);
        let block = TaskInput::block();
        let inner = block.inner(area);
        block.render(area, buf);
        buf.set_style(inner, style);

        let lines = self.textarea.lines();
        let paragraph = if lines.len() == 1 && lines[0].is_empty() {
            Paragraph::new(PLACEHOLDER).style(style.fg(Color::DarkGray))
        } else {
            let first = self.first_visible(inner.height);
            let first_col = self.first_visible_col(inner.width);
            let text: Text = lines[first..]
                .iter()
                .map(|line| Line::from(line.chars().skip(first_col).collect::<String>()))
                .collect::<Vec<_>>()
                .into();
            Paragraph::new(text).style(style)
        };
        paragraph.render(inner, buf);
    }
}
