use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};
use ssda_core::{Category, ScanPhase, format_count, format_size};

use crate::app::{AppMode, AppState};

use super::bar_chart::render_bar;
use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Progress widget shown during scanning
pub struct ProgressView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> ProgressView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ProgressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 20 {
            return;
        }

        let scan = &self.state.scan;
        let spinner = SPINNER[self.state.spinner_frame % SPINNER.len()];
        let spinner_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(inner.x, inner.y, spinner.to_string(), spinner_style);

        let phase = scan.phase.unwrap_or(ScanPhase::NotStarted);
        let status = format!(
            " {}...  {:.1}% complete",
            phase.label(),
            self.state.progress_fraction() * 100.0
        );
        buf.set_string(
            inner.x + 2,
            inner.y,
            &status,
            Style::default().fg(self.theme.fg),
        );

        let processed = scan.latest.as_ref().map(|s| s.processed).unwrap_or(0);
        let counts = if scan.total_files > 0 {
            format!(
                "{} / {} files",
                format_count(processed),
                format_count(scan.total_files)
            )
        } else {
            "counting files...".to_string()
        };
        buf.set_string(
            inner.x,
            inner.y + 1,
            &counts,
            Style::default().fg(self.theme.fg_muted),
        );

        // Categories seen by the most recent reporting worker
        let Some(latest) = &scan.latest else {
            return;
        };
        let header = format!("worker #{} so far:", latest.worker);
        if inner.height > 3 {
            buf.set_string(
                inner.x,
                inner.y + 3,
                &header,
                Style::default().fg(self.theme.fg_dim),
            );
        }
        for (i, category) in Category::ALL.iter().enumerate() {
            let y = inner.y + 4 + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = format!(
                "  {:<11}{:>10}",
                category.label(),
                format_size(latest.totals.get(*category))
            );
            buf.set_string(
                inner.x,
                y,
                &line,
                Style::default().fg(self.theme.category_color(*category)),
            );
        }
    }
}

/// Compact progress indicator for header
pub fn progress_indicator(state: &AppState) -> String {
    let spinner = SPINNER[state.spinner_frame % SPINNER.len()];
    format!("{} {:.1}%", spinner, state.progress_fraction() * 100.0)
}

/// One-line progress bar under the header
pub fn render_progress_bar(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    if area.width < 20 {
        return;
    }

    let percentage = match state.mode {
        AppMode::Scanning => state.progress_fraction() * 100.0,
        AppMode::Done => 100.0,
        AppMode::Failed => 0.0,
    };
    let label = format!("{:>5.1}%", percentage);
    let bar_width = area.width.saturating_sub(label.len() as u16 + 3) as usize;
    let bar = render_bar(percentage, bar_width);

    let color = match state.mode {
        AppMode::Failed => theme.red,
        _ => theme.green,
    };
    buf.set_string(area.x + 1, area.y, &bar, Style::default().fg(color).bg(theme.bar_empty));
    buf.set_string(
        area.x + area.width - label.len() as u16 - 1,
        area.y,
        &label,
        Style::default().fg(theme.fg_dim),
    );
}
