use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};
use ssda_core::{Category, FileStats, format_size, size_percentage};

use super::bar_chart::render_bar;
use super::theme::Theme;

/// Per-category share of the scanned bytes
pub struct CompositionView<'a> {
    stats: &'a FileStats,
    theme: &'a Theme,
}

impl<'a> CompositionView<'a> {
    pub fn new(stats: &'a FileStats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }
}

impl Widget for CompositionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Memory Composition ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 40 || inner.height < 1 {
            return;
        }

        let total = self.stats.totals.total;
        let label_width: u16 = 12;
        let tail_width: u16 = 20; // percentage + size
        let bar_width = inner.width.saturating_sub(label_width + tail_width) as usize;

        for (i, category) in Category::ALL.iter().enumerate() {
            if i as u16 >= inner.height {
                return;
            }
            let y = inner.y + i as u16;
            let size = self.stats.totals.get(*category);
            let pct = size_percentage(size, total);
            let color = self.theme.category_color(*category);

            buf.set_string(
                inner.x,
                y,
                category.label(),
                Style::default().fg(self.theme.fg),
            );
            buf.set_string(
                inner.x + label_width,
                y,
                render_bar(pct, bar_width),
                Style::default().fg(color).bg(self.theme.bar_empty),
            );
            buf.set_string(
                inner.x + label_width + bar_width as u16 + 1,
                y,
                format!("{:>6.2}% {:>10}", pct, format_size(size)),
                Style::default().fg(self.theme.fg_dim),
            );
        }

        let total_y = inner.y + Category::ALL.len() as u16;
        if total_y < inner.y + inner.height {
            buf.set_string(
                inner.x,
                total_y,
                format!("Total size: {}", format_size(total)),
                Style::default()
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}
