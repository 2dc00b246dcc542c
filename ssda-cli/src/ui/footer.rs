use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;

/// Footer widget showing keyboard hints
pub struct Footer<'a> {
    help_visible: bool,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(help_visible: bool, theme: &'a Theme) -> Self {
        Self {
            help_visible,
            theme,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints: &[(&str, &str)] = if self.help_visible {
            &[("Esc", "Close help"), ("q", "Quit")]
        } else {
            &[("?", "Help"), ("q", "Quit")]
        };

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.len() as u16;

            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }
        }
    }
}
