use ratatui::style::{Color, Modifier, Style};

/// Colour used for emphasized text such as fetched advice.
pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0xc1, 0x07);

/// Palette for one presentation mode. Every widget takes its colours from here,
/// so flipping the dark flag restyles the whole page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
    pub button_bg: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Theme {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(33, 37, 41),
            muted: Color::Rgb(108, 117, 125),
            border: Color::Rgb(173, 181, 189),
            accent: Color::Rgb(0, 123, 255),
            error: Color::Rgb(220, 53, 69),
            button_bg: Color::Rgb(222, 226, 230),
        }
    }

    pub const fn dark() -> Self {
        Theme {
            bg: Color::Rgb(24, 26, 31),
            fg: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(130, 137, 151),
            border: Color::Rgb(62, 68, 81),
            accent: Color::Rgb(97, 175, 239),
            error: Color::Rgb(224, 108, 117),
            button_bg: Color::Rgb(40, 44, 52),
        }
    }

    pub const fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style of a clickable button. `failed` is the failure style of the
    /// submit button after a rejected submission.
    pub fn button(&self, focused: bool, failed: bool) -> Style {
        let mut style = if failed {
            Style::default().fg(self.bg).bg(self.error)
        } else {
            Style::default().fg(self.fg).bg(self.button_bg)
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }

    pub fn emphasis(&self) -> Style {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::ITALIC)
    }
}
