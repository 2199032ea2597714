use std::fs;
use std::path::Path;

use tracing::debug;
use ttf_parser::{name_id, Face};

use super::weight::{determine_weight, is_italic_font};
use crate::error::{Error, Result};
use crate::models::FontFile;
use crate::utils::file::get_file_extension;

/// Extensions the scanner treats as font candidates
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Whether the file name carries a font extension (any case)
pub fn has_font_extension(path: &Path) -> bool {
    get_file_extension(path).is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.as_str()))
}

/// Parse the first face of a font file
pub fn read_font_file(path: &Path) -> Result<FontFile> {
    let data = fs::read(path)?;
    let face = Face::parse(&data, 0)
        .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?;

    let family = face_name(&face, &[name_id::TYPOGRAPHIC_FAMILY, name_id::FAMILY])
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| Error::Font(format!("{}: no family name", path.display())))?;
    let style = face_name(&face, &[name_id::TYPOGRAPHIC_SUBFAMILY, name_id::SUBFAMILY])
        .unwrap_or_else(|| "Regular".to_string());

    // Without an OS/2 table the style name is all we have to go on
    let (weight, italic) = if face.tables().os2.is_some() {
        (face.weight().to_number(), face.is_italic() || face.is_oblique())
    } else {
        (determine_weight(&style), is_italic_font(&style))
    };

    debug!(
        "Metadata extracted - Family: {}, Style: {}, Weight: {}, Italic: {}",
        family, style, weight, italic
    );

    Ok(FontFile {
        path: path.to_path_buf(),
        family,
        style,
        weight,
        italic,
    })
}

/// First Unicode name record matching one of `ids`, in priority order
fn face_name(face: &Face, ids: &[u16]) -> Option<String> {
    ids.iter().find_map(|id| {
        face.names()
            .into_iter()
            .filter(|name| name.name_id == *id && name.is_unicode())
            .find_map(|name| name.to_string())
    })
}
