use crate::{
    blend::{BlendTable, TableSet},
    error::{Error, Result},
    font::{FontTable, GLYPH_COUNT},
};

const VALUES_PER_LINE: usize = 8;

/// How the table set is nested in the emitted literal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TableLayout {
    /// `[[u32; 256]; 64]`
    #[default]
    Nested,
    /// `[u32; 256 * 64]`
    Flat,
}

fn push_words(accum: &mut String, words: &[u32]) {
    for line in words.chunks(VALUES_PER_LINE) {
        let line: Vec<_> = line.iter().map(|word| format!("0x{word:06x}")).collect();
        accum.push_str(&line.join(", "));
        accum.push_str(",\n");
    }
}

fn push_pair_comment(accum: &mut String, table: &BlendTable) {
    let blend = table.blend();
    accum.push_str(&format!(
        "// FG RGB = {:03b}, BG RGB = {:03b}\n",
        blend.fg.index(),
        blend.bg.index()
    ));
}

/// Renders the table set as an array literal expression, suitable for `include!`.
pub fn rgb_maps_source(tables: &TableSet, layout: TableLayout) -> String {
    let mut accum = String::from("[\n");
    for table in tables.tables() {
        push_pair_comment(&mut accum, table);
        match layout {
            TableLayout::Nested => {
                accum.push_str("[\n");
                push_words(&mut accum, table.words());
                accum.push_str("],\n");
            }
            TableLayout::Flat => push_words(&mut accum, table.words()),
        }
    }
    accum.push_str("];");
    accum
}

fn is_const_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_uppercase() || ch == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_')
}

/// Renders a font table as a standalone Rust source file defining `name`.
pub fn font_table_source(table: &FontTable, name: &str) -> Result<String> {
    if !is_const_name(name) {
        return Err(Error::InvalidTableName(name.to_string()));
    }

    let height = table.height();
    let mut accum = String::new();
    accum.push_str("// This file is generated by `vgafb_tablegen`.\n");
    accum.push_str("// Do not edit it manually.\n");
    accum.push('\n');
    if table.scale() != 1 {
        accum.push_str(&format!(
            "/// Font data with every glyph row repeated {} times.\n",
            table.scale()
        ));
    }
    accum.push_str(&format!("pub const {name}: [[u8; {GLYPH_COUNT}]; {height}] = [\n"));
    for row in table.rows() {
        let bytes: Vec<_> = row.iter().map(|byte| format!("0x{byte:02x}")).collect();
        accum.push_str(&format!("    [ {} ],\n", bytes.join(",")));
    }
    accum.push_str("];\n");
    Ok(accum)
}
