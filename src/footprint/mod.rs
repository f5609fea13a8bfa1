mod ids;
pub mod kicad_mod;

pub use ids::{RandomUuids, SequentialUuids, UuidSource};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{GeneratorConfig, OutputConfig};
use crate::error::{FootprintError, Result};
use crate::logo::{build_icon, Artwork, IconElements};

/// Paths of the files written by [`write_library`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub icon: PathBuf,
    pub text: PathBuf,
}

/// Builds the icon geometry and writes both logo footprints into the
/// library directory, creating it if needed and overwriting existing files.
///
/// # Errors
///
/// Returns a configuration error if `config` or `artwork` is invalid, and
/// `FootprintError::Io` if the directory or a file cannot be written.
pub fn write_library(
    artwork: &Artwork,
    config: &GeneratorConfig,
    output: &OutputConfig,
    ids: &mut impl UuidSource,
) -> Result<(GeneratedFiles, IconElements)> {
    let icon = build_icon(artwork, config)?;

    let dir = output.library_dir();
    fs::create_dir_all(&dir).map_err(|source| FootprintError::Io {
        path: dir.clone(),
        source,
    })?;

    let icon_path = dir.join(format!("{}.kicad_mod", kicad_mod::ICON_NAME));
    write_file(&icon_path, &kicad_mod::icon_footprint(&icon, ids))?;

    let text_path = dir.join(format!("{}.kicad_mod", kicad_mod::TEXT_NAME));
    write_file(&text_path, &kicad_mod::text_footprint(config, ids))?;

    Ok((
        GeneratedFiles {
            icon: icon_path,
            text: text_path,
        },
        icon,
    ))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| FootprintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "generated");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("logo_footprint_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_both_files() {
        let root = scratch_dir("write");
        let output = OutputConfig::new(&root);
        let mut ids = SequentialUuids::default();

        let (files, icon) = write_library(
            &Artwork::default(),
            &GeneratorConfig::default(),
            &output,
            &mut ids,
        )
        .unwrap();

        assert!(files
            .icon
            .ends_with("TrailCurrentFootprints.pretty/TrailCurrentLogo_Icon.kicad_mod"));
        let icon_text = fs::read_to_string(&files.icon).unwrap();
        let line_count: usize = icon
            .mountain_segments
            .iter()
            .map(|run| run.len() - 1)
            .sum();
        assert_eq!(icon_text.matches("(fp_line").count(), line_count);
        assert_eq!(icon_text.matches("(fp_poly").count(), 2);

        let text = fs::read_to_string(&files.text).unwrap();
        assert!(text.contains("(fp_text user \"TrailCurrent\""));

        // A second run overwrites in place.
        write_library(
            &Artwork::default(),
            &GeneratorConfig::default(),
            &output,
            &mut ids,
        )
        .unwrap();
        assert_ne!(fs::read_to_string(&files.icon).unwrap(), icon_text);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn unwritable_directory_is_an_io_error() {
        let root = scratch_dir("blocked");
        fs::create_dir_all(&root).unwrap();
        // A plain file where the library directory should go.
        let blocker = root.join("fp");
        fs::write(&blocker, "").unwrap();
        let output = OutputConfig::new(blocker.join("nested"));

        let err = write_library(
            &Artwork::default(),
            &GeneratorConfig::default(),
            &output,
            &mut SequentialUuids::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FootprintError::Io { .. }));

        let _ = fs::remove_dir_all(&root);
    }
}
