//! Fixtures shared by the integration tests.

use std::fs;
use std::path::Path;

/// Build the smallest TrueType file the parser accepts: `head`, `hhea`,
/// `maxp` and a Windows/Unicode `name` table carrying `family` and `style`.
pub fn minimal_font(family: &str, style: &str) -> Vec<u8> {
    let mut head = Vec::new();
    head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    head.extend_from_slice(&0u32.to_be_bytes()); // font revision
    head.extend_from_slice(&0u32.to_be_bytes()); // checksum adjustment
    head.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magic
    head.extend_from_slice(&0u16.to_be_bytes()); // flags
    head.extend_from_slice(&1000u16.to_be_bytes()); // units per em
    head.extend_from_slice(&[0u8; 16]); // created, modified
    head.extend_from_slice(&[0u8; 8]); // bounding box
    head.extend_from_slice(&0u16.to_be_bytes()); // mac style
    head.extend_from_slice(&8u16.to_be_bytes()); // lowest rec ppem
    head.extend_from_slice(&2i16.to_be_bytes()); // direction hint
    head.extend_from_slice(&0u16.to_be_bytes()); // index to loc format
    head.extend_from_slice(&0u16.to_be_bytes()); // glyph data format
    assert_eq!(head.len(), 54);

    let mut hhea = Vec::new();
    hhea.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    hhea.extend_from_slice(&800i16.to_be_bytes()); // ascender
    hhea.extend_from_slice(&(-200i16).to_be_bytes()); // descender
    hhea.extend_from_slice(&0i16.to_be_bytes()); // line gap
    hhea.extend_from_slice(&[0u8; 24]);
    hhea.extend_from_slice(&1u16.to_be_bytes()); // number of h metrics
    assert_eq!(hhea.len(), 36);

    let mut maxp = Vec::new();
    maxp.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    maxp.extend_from_slice(&1u16.to_be_bytes()); // glyph count

    let name = name_table(&[(1, family), (2, style)]);

    // Table records must be sorted by tag.
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head),
        (b"hhea", hhea),
        (b"maxp", maxp),
        (b"name", name),
    ];

    let mut font = Vec::new();
    font.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // TrueType
    font.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    font.extend_from_slice(&64u16.to_be_bytes()); // search range
    font.extend_from_slice(&2u16.to_be_bytes()); // entry selector
    font.extend_from_slice(&0u16.to_be_bytes()); // range shift

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        font.extend_from_slice(&0u32.to_be_bytes()); // checksum
        font.extend_from_slice(&(offset as u32).to_be_bytes());
        font.extend_from_slice(&(data.len() as u32).to_be_bytes());

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    font.extend_from_slice(&body);
    font
}

fn name_table(records: &[(u16, &str)]) -> Vec<u8> {
    let encoded: Vec<Vec<u8>> = records
        .iter()
        .map(|(_, text)| text.encode_utf16().flat_map(u16::to_be_bytes).collect())
        .collect();

    let mut table = Vec::new();
    table.extend_from_slice(&0u16.to_be_bytes()); // format
    table.extend_from_slice(&(records.len() as u16).to_be_bytes());
    table.extend_from_slice(&((6 + 12 * records.len()) as u16).to_be_bytes());

    let mut string_offset = 0u16;
    for ((name_id, _), bytes) in records.iter().zip(&encoded) {
        table.extend_from_slice(&3u16.to_be_bytes()); // Windows
        table.extend_from_slice(&1u16.to_be_bytes()); // Unicode BMP
        table.extend_from_slice(&0x0409u16.to_be_bytes()); // en-US
        table.extend_from_slice(&name_id.to_be_bytes());
        table.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
        table.extend_from_slice(&string_offset.to_be_bytes());
        string_offset += bytes.len() as u16;
    }
    for bytes in &encoded {
        table.extend_from_slice(bytes);
    }
    table
}

pub fn write_font(path: &Path, family: &str, style: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, minimal_font(family, style)).unwrap();
}

pub fn write_garbage(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"this is not a font file").unwrap();
}
