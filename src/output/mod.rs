pub mod formatter;
pub mod theme;

pub use formatter::{
    bar_width_for_terminal, format_bar, format_json, format_percent, format_report, format_tsv,
    should_use_colors,
};
pub use theme::Palette;
