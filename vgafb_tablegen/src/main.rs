use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io::Write, path::PathBuf};
use vgafb_common::TableLayout;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes the foreground/background colour blend tables
    RgbMaps {
        /// Emit a single `[u32; 256 * 64]` array instead of 64 nested arrays
        #[arg(long)]
        flat: bool,
        /// Output file (defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Converts a raw 256 glyph bitmap font into a scan line table
    Font {
        input: PathBuf,
        #[arg(long, default_value_t = 16)]
        height: usize,
        /// Repeat every glyph row this many times
        #[arg(long, default_value_t = 1)]
        scale: usize,
        #[arg(long, default_value = "FONT_DATA")]
        name: String,
        /// Output file (defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generates every table listed in a TOML manifest
    Build { manifest: PathBuf },
}

fn emit(contents: String, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => generate::write_file(&generate::GeneratedFile { path, contents }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Could not write to standard output")
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None => emit(generate::make_rgb_maps(TableLayout::Nested), None)?,
        Some(Commands::RgbMaps { flat, output }) => {
            let layout = if flat { TableLayout::Flat } else { TableLayout::Nested };
            emit(generate::make_rgb_maps(layout), output)?
        }
        Some(Commands::Font { input, height, scale, name, output }) => {
            emit(generate::make_font(&input, height, scale, &name)?, output)?
        }
        Some(Commands::Build { manifest }) => generate::build_manifest(&manifest)?,
    }
    Ok(())
}
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        eprintln!("Error encountered: {:?}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_rgb_maps() {
        let cli = Cli::try_parse_from(["vgafb_tablegen"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_font_arguments() {
        let cli = Cli::try_parse_from([
            "vgafb_tablegen", "font", "cp850.fnt", "--height", "8", "--scale", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Font { input, height, scale, name, output }) => {
                assert_eq!(input, PathBuf::from("cp850.fnt"));
                assert_eq!(height, 8);
                assert_eq!(scale, 2);
                assert_eq!(name, "FONT_DATA");
                assert!(output.is_none());
            }
            _ => panic!("expected font command"),
        }
    }
}
