use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Widget},
};
use ssda_core::{FileStats, format_size, size_percentage, truncate_path};

use super::theme::Theme;

/// Label used for files without an extension
pub const NO_EXTENSION: &str = "(no extension)";

/// Largest folders by directly contained bytes
pub struct TopFoldersView<'a> {
    stats: &'a FileStats,
    limit: usize,
    theme: &'a Theme,
}

impl<'a> TopFoldersView<'a> {
    pub fn new(stats: &'a FileStats, limit: usize, theme: &'a Theme) -> Self {
        Self {
            stats,
            limit,
            theme,
        }
    }
}

impl Widget for TopFoldersView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Top {} Largest Folders ", self.limit))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 {
            return;
        }

        let folders = self.stats.top_folders(self.limit);
        if folders.is_empty() {
            buf.set_string(inner.x, inner.y, "No files found", Style::default().fg(self.theme.fg_dim));
            return;
        }

        let size_width = 11;
        let path_width = (inner.width as usize).saturating_sub(size_width + 4);
        for (i, folder) in folders.iter().enumerate().take(inner.height as usize) {
            let y = inner.y + i as u16;
            let path = folder.path.to_string_lossy();
            buf.set_string(
                inner.x,
                y,
                format!("{}. {}", i + 1, truncate_path(&path, path_width)),
                Style::default().fg(self.theme.fg),
            );
            buf.set_string(
                inner.x + inner.width - size_width as u16,
                y,
                format!("{:>11}", format_size(folder.size)),
                Style::default().fg(self.theme.fg_dim),
            );
        }
    }
}

/// Largest extensions inside the Other category
pub struct TopExtensionsView<'a> {
    stats: &'a FileStats,
    limit: usize,
    theme: &'a Theme,
}

impl<'a> TopExtensionsView<'a> {
    pub fn new(stats: &'a FileStats, limit: usize, theme: &'a Theme) -> Self {
        Self {
            stats,
            limit,
            theme,
        }
    }
}

impl Widget for TopExtensionsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Top Extensions (Other) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 36 {
            return;
        }

        let total = self.stats.totals.total;
        let rows = self
            .stats
            .top_other_extensions(self.limit)
            .into_iter()
            .filter(|e| e.size > 0);
        for (i, ext) in rows.enumerate().take(inner.height as usize) {
            let y = inner.y + i as u16;
            let label = if ext.extension.is_empty() {
                NO_EXTENSION
            } else {
                ext.extension.as_str()
            };
            buf.set_string(
                inner.x,
                y,
                format!("• {}", truncate_path(label, 14)),
                Style::default().fg(self.theme.fg),
            );
            buf.set_string(
                inner.x + inner.width - 19,
                y,
                format!(
                    "{:>6.2}% {:>11}",
                    size_percentage(ext.size, total),
                    format_size(ext.size)
                ),
                Style::default().fg(self.theme.fg_dim),
            );
        }
    }
}
