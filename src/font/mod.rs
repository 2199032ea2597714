//! Font file discovery and metadata extraction

pub mod metadata;
pub mod scan;
pub mod weight;

pub use metadata::{has_font_extension, read_font_file, FONT_EXTENSIONS};
pub use scan::{find_font_files, scan_fonts};
pub use weight::{determine_weight, is_italic_font};
