use ratatui::style::{Color, Style};

/// Background and foreground of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorScheme {
    pub(crate) bg: Color,
    pub(crate) fg: Color,
}

impl ColorScheme {
    pub(crate) const fn new(bg: Color, fg: Color) -> Self {
        ColorScheme { bg, fg }
    }

    pub(crate) fn style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }
}

/// Two schemes alternating down the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette([ColorScheme; 2]);

impl Palette {
    pub(crate) const fn new(even: ColorScheme, odd: ColorScheme) -> Self {
        Palette([even, odd])
    }

    pub(crate) fn scheme_for(&self, position: usize) -> ColorScheme {
        self.0[position % 2]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(
            ColorScheme::new(Color::Gray, Color::Black),
            ColorScheme::new(Color::DarkGray, Color::White),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_alternate_by_parity() {
        let palette = Palette::default();
        let even = palette.scheme_for(0);
        let odd = palette.scheme_for(1);
        assert_ne!(even, odd);
        for position in 0..10 {
            let expected = if position % 2 == 0 { even } else { odd };
            assert_eq!(palette.scheme_for(position), expected);
        }
    }

    #[test]
    fn style_carries_both_colors() {
        let scheme = ColorScheme::new(Color::Gray, Color::Black);
        let style = scheme.style();
        assert_eq!(style.bg, Some(Color::Gray));
        assert_eq!(style.fg, Some(Color::Black));
    }
}
