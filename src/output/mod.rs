pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_percentage, format_summary, should_use_colors,
};
