use crate::manifest::{FontManifest, Manifest};
use anyhow::*;
use log::{debug, info};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use vgafb_common::{
    font_table_source, rgb_maps_source, FontGeometry, FontTable, RawFont, TableLayout, TableSet,
};

/// A generated table waiting to be written out.
#[derive(Clone, Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

pub fn make_rgb_maps(layout: TableLayout) -> String {
    info!("Generating RGB maps ({layout:?} layout)...");
    let tables = TableSet::generate();
    for table in tables.tables() {
        let blend = table.blend();
        debug!("Generated blend table for {} on {}", blend.fg, blend.bg);
    }
    rgb_maps_source(&tables, layout)
}

pub fn make_font(input: &Path, height: usize, scale: usize, name: &str) -> Result<String> {
    info!("Generating font table {name} from {}...", input.display());
    let geometry = FontGeometry::from_height(height)?;
    let data = std::fs::read(input)
        .with_context(|| format!("Could not read font file {}", input.display()))?;
    let font = RawFont::parse(&data, geometry)
        .with_context(|| format!("Malformed font file {}", input.display()))?;
    let table = FontTable::new(&font, scale)?;
    debug!("Font table {name} has {} scan lines", table.height());
    Ok(font_table_source(&table, name)?)
}

fn make_font_entry(font: &FontManifest) -> Result<GeneratedFile> {
    let contents = make_font(&font.input, font.height, font.scale, &font.name)?;
    Ok(GeneratedFile { path: font.output.clone(), contents })
}

/// Generates every table in a manifest without touching the filesystem outputs.
pub fn plan_manifest(manifest: &Manifest) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    if let Some(rgb_maps) = &manifest.rgb_maps {
        let contents = make_rgb_maps(rgb_maps.layout.into());
        files.push(GeneratedFile { path: rgb_maps.output.clone(), contents });
    }
    for font in &manifest.font {
        files.push(make_font_entry(font)?);
    }
    Ok(files)
}

pub fn write_file(file: &GeneratedFile) -> Result<()> {
    debug!("Writing {} bytes to {}", file.contents.len(), file.path.display());
    if let Some(parent) = file.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {}", parent.display()))?;
        }
    }
    File::create(&file.path)
        .and_then(|mut out| out.write_all(file.contents.as_bytes()))
        .with_context(|| format!("Could not write {}", file.path.display()))?;
    Ok(())
}

/// Generates and writes everything listed in the manifest at `path`.
pub fn build_manifest(path: &Path) -> Result<()> {
    let root = path.parent().unwrap_or_else(|| Path::new(""));
    let manifest = Manifest::load(path)?.rebase(root);

    // Nothing is written until every table generated successfully.
    let files = plan_manifest(&manifest)?;
    for file in &files {
        write_file(file)?;
    }
    info!("Wrote {} generated files.", files.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::manifest::{LayoutRepr, RgbMapsManifest};

    #[test]
    fn plans_rgb_maps() {
        let manifest = Manifest {
            rgb_maps: Some(RgbMapsManifest {
                output: PathBuf::from("out/maps.txt"),
                layout: LayoutRepr::Nested,
            }),
            font: vec![],
        };
        let files = plan_manifest(&manifest).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("out/maps.txt"));
        assert_eq!(files[0].contents, rgb_maps_source(&TableSet::generate(), TableLayout::Nested));
    }

    #[test]
    fn missing_font_fails_the_whole_plan() {
        let manifest = Manifest {
            rgb_maps: Some(RgbMapsManifest {
                output: PathBuf::from("out/maps.txt"),
                layout: LayoutRepr::Flat,
            }),
            font: vec![FontManifest {
                input: PathBuf::from("/nonexistent/vgafb_tablegen/font.fnt"),
                output: PathBuf::from("out/font.rs"),
                height: 16,
                scale: 1,
                name: "FONT_DATA".to_string(),
            }],
        };
        let err = plan_manifest(&manifest).unwrap_err();
        assert!(format!("{err:?}").contains("Could not read font file"));
    }

    #[test]
    fn rejects_unsupported_height_before_reading() {
        let err = make_font(Path::new("/nonexistent/font.fnt"), 12, 1, "FONT").unwrap_err();
        assert!(err.to_string().contains("unsupported font height 12"));
    }
}
