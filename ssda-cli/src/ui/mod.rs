pub mod bar_chart;
mod composition;
mod footer;
mod header;
mod help;
mod layout;
mod progress;
mod theme;
mod top_lists;

pub use composition::CompositionView;
pub use footer::Footer;
pub use header::Header;
pub use help::HelpView;
pub use layout::{AppLayout, ResultsLayout};
pub use progress::{ProgressView, render_progress_bar};
pub use theme::Theme;
pub use top_lists::{NO_EXTENSION, TopExtensionsView, TopFoldersView};
