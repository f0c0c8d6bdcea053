use crate::{style::ColorScheme, types::RowHandle};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

/// One scroll gesture; terminals only report which way the wheel turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollInput {
    Up,
    Down,
}

impl ScrollInput {
    /// Step count to move by, negative towards the top.
    fn units(self) -> i32 {
        match self {
            ScrollInput::Up => -1,
            ScrollInput::Down => 1,
        }
    }
}

struct Row {
    handle: RowHandle,
    text: String,
    scheme: ColorScheme,
}

impl Row {
    fn height(&self, padding: u16) -> u16 {
        let lines = self.text.lines().count().max(1);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(padding.saturating_mul(2))
    }
}

/// Scrollable viewport over the task rows.
///
/// The view is the only owner of its rows; everything else goes through
/// `add_row`, `remove_row` and `restyle`. Offsets and heights are in terminal
/// lines.
pub(crate) struct ListView {
    rows: Vec<Row>,
    padding: u16,
    step: u16,
    offset: u16,
    region: u16,
    width: u16,
    height: u16,
}

impl ListView {
    pub(crate) fn new(padding: u16, step: u16) -> Self {
        ListView {
            rows: Vec::new(),
            padding,
            step,
            offset: 0,
            region: 0,
            width: 0,
            height: 0,
        }
    }

    pub(crate) fn add_row(&mut self, handle: RowHandle, text: String, scheme: ColorScheme) {
        self.rows.push(Row {
            handle,
            text,
            scheme,
        });
        self.on_window_resize();
    }

    pub(crate) fn remove_row(&mut self, handle: RowHandle) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.handle != handle);
        let removed = self.rows.len() != before;
        if removed {
            self.on_window_resize();
        }
        removed
    }

    pub(crate) fn restyle(&mut self, handle: RowHandle, scheme: ColorScheme) -> bool {
        match self.rows.iter_mut().find(|row| row.handle == handle) {
            Some(row) => {
                row.scheme = scheme;
                true
            }
            None => false,
        }
    }

    /// Recomputes the scroll region so it bounds exactly the current rows.
    pub(crate) fn on_window_resize(&mut self) {
        self.region = self
            .rows
            .iter()
            .fold(0u16, |acc, row| acc.saturating_add(row.height(self.padding)));
        self.clamp();
    }

    pub(crate) fn on_viewport_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    pub(crate) fn scroll(&mut self, input: ScrollInput) {
        let delta = i32::from(self.step) * input.units();
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(next).unwrap_or(0);
    }

    pub(crate) fn offset(&self) -> u16 {
        self.offset
    }

    pub(crate) fn scroll_region(&self) -> u16 {
        self.region
    }

    /// Width every row is drawn at: the viewport minus the scrollbar column.
    pub(crate) fn row_width(&self) -> u16 {
        self.width.saturating_sub(1)
    }

    /// The row under viewport line `y`, if any.
    pub(crate) fn row_at(&self, y: u16) -> Option<RowHandle> {
        if y >= self.height {
            return None;
        }
        let line = u32::from(self.offset) + u32::from(y);
        let mut top = 0u32;
        for row in &self.rows {
            top += u32::from(row.height(self.padding));
            if line < top {
                return Some(row.handle);
            }
        }
        None
    }

    fn max_offset(&self) -> u16 {
        self.region.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> Vec<(RowHandle, &str, ColorScheme)> {
        self.rows
            .iter()
            .map(|row| (row.handle, row.text.as_str(), row.scheme))
            .collect()
    }
}

impl Widget for &ListView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row_width = area.width.saturating_sub(1);
        let offset = u32::from(self.offset);
        let end = offset + u32::from(area.height);
        let mut top = 0u32;
        for row in &self.rows {
            if top >= end {
                break;
            }
            let bottom = top + u32::from(row.height(self.padding));
            let style = row.scheme.style();
            for line in top.max(offset)..bottom.min(end) {
                let y = area.y + u16::try_from(line - offset).unwrap_or(0);
                let line_area = Rect::new(area.x, y, row_width, 1);
                buf.set_style(line_area, style);
                let text = (line - top)
                    .checked_sub(u32::from(self.padding))
                    .and_then(|i| row.text.lines().nth(i as usize));
                if let Some(text) = text {
                    Paragraph::new(text)
                        .style(style)
                        .alignment(Alignment::Center)
                        .render(line_area, buf);
                }
            }
            top = bottom;
        }

        if self.region > area.height {
            let mut state = ScrollbarState::new(usize::from(self.region))
                .position(usize::from(self.offset))
                .viewport_content_length(usize::from(area.height));
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .render(area, buf, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{style::Palette, types::TaskList};
    use ratatui::style::Color;

    fn view(texts: &[&str], width: u16, height: u16) -> (ListView, Vec<RowHandle>) {
        let palette = Palette::default();
        let mut tasks = TaskList::new();
        let mut view = ListView::new(1, 1);
        view.on_viewport_resize(width, height);
        let mut handles = Vec::new();
        for text in texts {
            let task = tasks.append(text.to_string());
            view.add_row(task.handle, task.text.clone(), palette.scheme_for(task.position));
            handles.push(task.handle);
        }
        (view, handles)
    }

    fn render(view: &ListView, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf
    }

    #[test]
    fn region_bounds_all_rows() {
        let (view, _) = view(&["a", "b\nc"], 20, 10);
        // 3 lines for the one-liner, 4 for the two-liner
        assert_eq!(view.scroll_region(), 7);
    }

    #[test]
    fn rows_alternate_background() {
        let (view, _) = view(&["a", "b", "c"], 10, 9);
        let buf = render(&view, 10, 9);
        let palette = Palette::default();
        for y in 0..9u16 {
            let expected = palette.scheme_for(usize::from(y / 3)).bg;
            assert_eq!(buf.get(0, y).bg, expected, "line {y}");
        }
    }

    #[test]
    fn rows_span_viewport_width_after_resize() {
        let (mut view, _) = view(&["a"], 10, 3);
        let even = Palette::default().scheme_for(0).bg;

        let buf = render(&view, 10, 3);
        assert_eq!(buf.get(8, 0).bg, even);
        assert_eq!(view.row_width(), 9);

        view.on_viewport_resize(30, 3);
        let buf = render(&view, 30, 3);
        assert_eq!(buf.get(28, 0).bg, even);
        assert_eq!(view.row_width(), 29);
    }

    #[test]
    fn scroll_moves_by_step_and_clamps() {
        let (mut view, _) = view(&["a", "b", "c"], 10, 5);
        assert_eq!(view.scroll_region(), 9);

        view.scroll(ScrollInput::Up);
        assert_eq!(view.offset(), 0);

        for _ in 0..10 {
            view.scroll(ScrollInput::Down);
        }
        assert_eq!(view.offset(), 4);

        view.scroll(ScrollInput::Up);
        assert_eq!(view.offset(), 3);
        view.scroll(ScrollInput::Down);
        assert_eq!(view.offset(), 4);
    }

    #[test]
    fn content_shorter_than_viewport_never_scrolls() {
        let (mut view, _) = view(&["a"], 10, 20);
        view.scroll(ScrollInput::Down);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn scrolled_render_shifts_rows_up() {
        let (mut view, _) = view(&["a", "b", "c"], 10, 5);
        view.scroll(ScrollInput::Down);
        view.scroll(ScrollInput::Down);
        let buf = render(&view, 10, 5);
        let palette = Palette::default();
        // line 0 of the viewport is line 2 of the content, the end of row 0
        assert_eq!(buf.get(0, 0).bg, palette.scheme_for(0).bg);
        assert_eq!(buf.get(0, 1).bg, palette.scheme_for(1).bg);
    }

    #[test]
    fn row_at_accounts_for_offset() {
        let (mut view, handles) = view(&["a", "b", "c"], 10, 5);
        assert_eq!(view.row_at(0), Some(handles[0]));
        assert_eq!(view.row_at(3), Some(handles[1]));
        view.scroll(ScrollInput::Down);
        view.scroll(ScrollInput::Down);
        assert_eq!(view.row_at(1), Some(handles[1]));
        assert_eq!(view.row_at(4), Some(handles[2]));
        assert_eq!(view.row_at(5), None);
    }

    #[test]
    fn row_at_past_last_row_is_none() {
        let (view, _) = view(&["a"], 10, 10);
        assert_eq!(view.row_at(3), None);
    }

    #[test]
    fn remove_row_keeps_others_in_order() {
        let (mut view, handles) = view(&["a", "b", "c"], 10, 5);
        assert!(view.remove_row(handles[1]));
        assert!(!view.remove_row(handles[1]));
        let texts: Vec<_> = view.rows().into_iter().map(|(_, text, _)| text).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(view.scroll_region(), 6);
    }

    #[test]
    fn removal_clamps_offset() {
        let (mut view, handles) = view(&["a", "b", "c"], 10, 5);
        for _ in 0..4 {
            view.scroll(ScrollInput::Down);
        }
        view.remove_row(handles[2]);
        assert_eq!(view.offset(), 1);
    }

    #[test]
    fn restyle_changes_only_target_row() {
        let (mut view, handles) = view(&["a", "b"], 10, 6);
        let red = ColorScheme::new(Color::Red, Color::White);
        assert!(view.restyle(handles[1], red));
        let rows = view.rows();
        assert_eq!(rows[1].2, red);
        assert_eq!(rows[0].2, Palette::default().scheme_for(0));
    }
}
