use anyhow::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use vgafb_common::TableLayout;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutRepr {
    #[default]
    Nested,
    Flat,
}
impl From<LayoutRepr> for TableLayout {
    fn from(value: LayoutRepr) -> Self {
        match value {
            LayoutRepr::Nested => TableLayout::Nested,
            LayoutRepr::Flat => TableLayout::Flat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RgbMapsManifest {
    pub output: PathBuf,
    #[serde(default)]
    pub layout: LayoutRepr,
}

fn default_height() -> usize {
    16
}
fn default_scale() -> usize {
    1
}
fn default_name() -> String {
    "FONT_DATA".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontManifest {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_scale")]
    pub scale: usize,
    #[serde(default = "default_name")]
    pub name: String,
}

/// The set of tables to generate in one `build` run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub rgb_maps: Option<RgbMapsManifest>,
    #[serde(default)]
    pub font: Vec<FontManifest>,
}
impl Manifest {
    pub fn parse(source: &str) -> Result<Manifest> {
        let manifest: Manifest = toml::from_str(source)?;
        if manifest.rgb_maps.is_none() && manifest.font.is_empty() {
            bail!("Manifest does not list any tables to generate.");
        }
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Manifest> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read manifest {}", path.display()))?;
        Manifest::parse(&source)
            .with_context(|| format!("Could not parse manifest {}", path.display()))
    }

    /// Makes all paths in the manifest relative to `root`.
    pub fn rebase(mut self, root: &Path) -> Manifest {
        if let Some(rgb_maps) = &mut self.rgb_maps {
            rgb_maps.output = root.join(&rgb_maps.output);
        }
        for font in &mut self.font {
            font.input = root.join(&font.input);
            font.output = root.join(&font.output);
        }
        self
    }
}
