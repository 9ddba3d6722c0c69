use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::chart::ChartFormat;

/// Creates `dir` and all missing parents; an existing directory is kept.
pub(crate) fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
        info!("Created output directory {}", dir.display());
    }
    Ok(())
}

pub(crate) fn chart_path(dir: &Path, chart_name: &str, format: ChartFormat) -> PathBuf {
    dir.join(format!("{chart_name}.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_dirs_once() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("figures").join("v2");

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        fs::write(dir.join("keep.txt"), "x").unwrap();
        ensure_output_dir(&dir).unwrap();
        assert!(dir.join("keep.txt").exists());
    }

    #[test]
    fn file_name_matches_format() {
        let dir = Path::new("figures");

        assert_eq!(
            chart_path(dir, "sssp_comparison_sparse", ChartFormat::Png),
            Path::new("figures/sssp_comparison_sparse.png")
        );
        assert_eq!(
            chart_path(dir, "dense_long_path", ChartFormat::Svg),
            Path::new("figures/dense_long_path.svg")
        );
    }
}
