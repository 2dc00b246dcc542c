/// Unicode partial block characters for smooth bars
const BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Render a bar of `width` cells filled to `percentage` (0-100)
pub fn render_bar(percentage: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let percentage = percentage.clamp(0.0, 100.0);
    let filled_width = (percentage / 100.0) * width as f64;
    let full_blocks = (filled_width.floor() as usize).min(width);
    let partial = ((filled_width - full_blocks as f64) * 8.0).round() as usize;

    let mut bar = String::with_capacity(width * 3); // Unicode chars can be multi-byte
    bar.extend(std::iter::repeat_n(BLOCKS[8], full_blocks));

    if full_blocks < width && partial > 0 {
        bar.push(BLOCKS[partial.min(8)]);
    }

    let current_len = bar.chars().count();
    bar.extend(std::iter::repeat_n(' ', width - current_len));
    bar
}

/// Plain ASCII bar for non-terminal output, e.g. `=====-----`
pub fn render_text_bar(percentage: f64, width: usize) -> String {
    let percentage = percentage.clamp(0.0, 100.0);
    let filled = ((percentage / 100.0) * width as f64) as usize;
    format!("{}{}", "=".repeat(filled), "-".repeat(width - filled))
}
