/// Determine the weight value from a subfamily name
pub fn determine_weight(subfamily: &str) -> u16 {
    let s = subfamily.to_lowercase().replace([' ', '-', '_'], "");

    // Compound names first, so "extrabold" is not read as "bold"
    match s.as_str() {
        s if s.contains("hairline") || s.contains("thin") => 100,
        s if s.contains("extralight") || s.contains("ultralight") => 200,
        s if s.contains("semilight") || s.contains("demilight") => 350,
        s if s.contains("light") => 300,
        s if s.contains("medium") => 500,
        s if s.contains("semibold") || s.contains("demibold") => 600,
        s if s.contains("extrabold") || s.contains("ultrabold") => 800,
        s if s.contains("bold") => 700,
        s if s.contains("extrablack") || s.contains("ultrablack") => 950,
        s if s.contains("black") || s.contains("heavy") => 900,
        _ => 400,
    }
}

/// Check if a font is italic based on its subfamily name
pub fn is_italic_font(subfamily: &str) -> bool {
    let subfamily_lower = subfamily.to_lowercase();
    subfamily_lower.contains("italic") || subfamily_lower.contains("oblique")
}
