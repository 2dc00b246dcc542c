use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use ssda_core::{format_count, format_size, truncate_path};

use crate::app::{AppMode, AppState};

use super::progress::progress_indicator;
use super::theme::Theme;

/// Header widget showing title, path, and status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let title = "SSD Analyzer";
        let title_style = Style::default()
            .fg(self.theme.teal)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, title, title_style);
        buf.set_string(
            area.x + 14,
            area.y,
            "─",
            Style::default().fg(self.theme.border),
        );

        let status = match self.state.mode {
            AppMode::Scanning => progress_indicator(self.state),
            AppMode::Done => match (&self.state.stats, &self.state.result) {
                (Some(stats), Some(result)) => format!(
                    "DONE  {} files, {}",
                    format_count(result.files_processed),
                    format_size(stats.totals.total)
                ),
                (Some(stats), None) => format!("DONE  {}", format_size(stats.totals.total)),
                _ => "DONE".to_string(),
            },
            AppMode::Failed => "FAILED".to_string(),
        };

        let path = self.state.root_path.to_string_lossy();
        let max_path_len = (area.width as usize).saturating_sub(status.chars().count() + 20);
        buf.set_string(
            area.x + 16,
            area.y,
            truncate_path(&path, max_path_len),
            Style::default().fg(self.theme.fg),
        );

        let status_style = match self.state.mode {
            AppMode::Scanning => Style::default().fg(self.theme.yellow),
            AppMode::Done => Style::default().fg(self.theme.green),
            AppMode::Failed => Style::default().fg(self.theme.red),
        };
        let status_x = (area.x + area.width).saturating_sub(status.chars().count() as u16 + 2);
        buf.set_string(status_x, area.y, &status, status_style);
    }
}
