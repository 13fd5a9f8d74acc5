use vgafb_common::*;

/// A font where every byte encodes its glyph and row, so transposition mistakes show up.
fn test_font(geometry: FontGeometry) -> Vec<u8> {
    let height = geometry.height();
    let mut data = Vec::new();
    for ch in 0..GLYPH_COUNT {
        for row in 0..height {
            data.push((ch as u8).wrapping_mul(16).wrapping_add(row as u8));
        }
    }
    data
}

#[test]
fn geometry() {
    assert_eq!(FontGeometry::from_height(8), Ok(FontGeometry::Vga8x8));
    assert_eq!(FontGeometry::from_height(16), Ok(FontGeometry::Vga8x16));
    assert_eq!(FontGeometry::from_height(12), Err(Error::UnsupportedFontHeight(12)));
    assert_eq!(FontGeometry::Vga8x8.font_len(), 2048);
    assert_eq!(FontGeometry::Vga8x16.font_len(), 4096);
}

#[test]
fn rejects_truncated_font() {
    let mut data = test_font(FontGeometry::Vga8x16);
    data.pop();
    assert_eq!(
        RawFont::parse(&data, FontGeometry::Vga8x16),
        Err(Error::FontSizeMismatch { expected: 4096, actual: 4095 })
    );
    let data = test_font(FontGeometry::Vga8x8);
    assert!(RawFont::parse(&data, FontGeometry::Vga8x16).is_err());
}

#[test]
fn transposes_glyphs() {
    let data = test_font(FontGeometry::Vga8x16);
    let font = RawFont::parse(&data, FontGeometry::Vga8x16).unwrap();
    assert_eq!(font.glyph(1), &data[16..32]);

    let table = FontTable::new(&font, 1).unwrap();
    assert_eq!(table.height(), 16);
    for ch in 0..GLYPH_COUNT {
        for line in 0..16 {
            assert_eq!(table.pixels(ch as u8, line), data[ch * 16 + line]);
        }
    }
}

#[test]
fn stretches_rows() {
    let data = test_font(FontGeometry::Vga8x8);
    let font = RawFont::parse(&data, FontGeometry::Vga8x8).unwrap();
    let table = FontTable::new(&font, 2).unwrap();
    assert_eq!(table.height(), 16);
    assert_eq!(table.rows()[6], table.rows()[7]);
    assert_eq!(table.pixels(b'A', 7), font.glyph(b'A')[3]);

    assert_eq!(FontTable::new(&font, 0), Err(Error::InvalidScale(0)));
    assert_eq!(FontTable::new(&font, MAX_SCALE + 1), Err(Error::InvalidScale(MAX_SCALE + 1)));
}

#[test]
fn emits_font_source() {
    let data = test_font(FontGeometry::Vga8x8);
    let font = RawFont::parse(&data, FontGeometry::Vga8x8).unwrap();
    let table = FontTable::new(&font, 1).unwrap();
    let source = font_table_source(&table, "FONT_DATA").unwrap();

    assert!(source.starts_with("// This file is generated by `vgafb_tablegen`.\n"));
    assert!(source.contains("pub const FONT_DATA: [[u8; 256]; 8] = [\n"));
    assert!(source.contains("    [ 0x00,0x10,0x20,"));
    assert!(source.ends_with("];\n"));

    let rows: Vec<_> = source.lines().filter(|x| x.starts_with("    [ ")).collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|x| x.matches("0x").count() == GLYPH_COUNT));

    assert_eq!(
        font_table_source(&table, "font"),
        Err(Error::InvalidTableName("font".to_string()))
    );
}
