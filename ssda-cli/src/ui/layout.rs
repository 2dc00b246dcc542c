use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout
pub struct AppLayout {
    pub header: Rect,
    pub progress_bar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Progress bar
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            progress_bar: chunks[1],
            body: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Body split used once results are available
pub struct ResultsLayout {
    pub composition: Rect,
    pub folders: Rect,
    pub extensions: Rect,
}

impl ResultsLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // 5 categories + total + borders
                Constraint::Min(3),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        Self {
            composition: rows[0],
            folders: columns[0],
            extensions: columns[1],
        }
    }
}

/// Calculate centered rectangle for overlays
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect::new(x, y, width, height)
}
