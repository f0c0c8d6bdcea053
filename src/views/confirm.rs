use crate::types::RowHandle;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Yes/no question asked before a task is deleted.
pub(crate) struct ConfirmDelete {
    pub(crate) handle: RowHandle,
    pub(crate) text: String,
}

impl ConfirmDelete {
    pub(crate) fn new(handle: RowHandle, text: impl Into<String>) -> Self {
        ConfirmDelete {
            handle,
            text: text.into(),
        }
    }

    pub(crate) fn prompt(&self) -> String {
        format!("Delete {}?", self.text)
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

impl Widget for &ConfirmDelete {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(80, 40, area);
        Clear.render(area, buf);
        let block = Block::default()
            .title("Really Delete?")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black).fg(Color::White));
        let lines = vec![
            Line::from(self.prompt()),
            Line::from(""),
            Line::styled("[y]es / [n]o", Style::default().add_modifier(Modifier::BOLD)),
        ];
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_sits_inside_the_screen() {
        let screen = Rect::new(0, 0, 40, 20);
        let popup = centered_rect(80, 40, screen);
        assert_eq!(popup.width, 32);
        assert_eq!(popup.height, 8);
        assert!(popup.x >= screen.x && popup.right() <= screen.right());
        assert!(popup.y >= screen.y && popup.bottom() <= screen.bottom());
    }

    #[test]
    fn render_paints_popup_background() {
        let mut tasks = crate::types::TaskList::new();
        let handle = tasks.append("Walk dog".into()).handle;
        let dialog = ConfirmDelete::new(handle, "Walk dog");
        assert_eq!(dialog.prompt(), "Delete Walk dog?");

        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        dialog.render(area, &mut buf);
        let popup = centered_rect(80, 40, area);
        assert_eq!(buf.get(popup.x + 1, popup.y + 1).bg, Color::Black);
        assert_eq!(buf.get(0, 0).bg, Color::Reset);
    }
}
