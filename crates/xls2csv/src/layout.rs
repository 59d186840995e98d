//! Output path layout

use std::path::{Path, PathBuf};

use xls2csv_core::Config;

/// Directory receiving every sheet of `input`: the configured subdirectory
/// if set, otherwise the input path without its extension.
pub fn output_dir(input: &Path, config: &Config) -> PathBuf {
    match config.subdir() {
        Some(subdir) => subdir.to_path_buf(),
        None => input.with_extension(""),
    }
}

/// `<dir>/<sheet><ext>`
pub fn sheet_path(dir: &Path, sheet: &str, ext: &str) -> PathBuf {
    dir.join(format!("{sheet}{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dir_from_input_stem() {
        let config = Config::builder().build().unwrap();
        assert_eq!(
            output_dir(Path::new("data/Protein.xls"), &config),
            PathBuf::from("data/Protein")
        );
        assert_eq!(
            output_dir(Path::new("archive.v2.xlsx"), &config),
            PathBuf::from("archive.v2")
        );
    }

    #[test]
    fn test_dir_from_subdir() {
        let config = Config::builder().subdir(Some("out")).build().unwrap();
        assert_eq!(
            output_dir(Path::new("data/Protein.xls"), &config),
            PathBuf::from("out")
        );
    }

    #[test]
    fn test_sheet_path() {
        assert_eq!(
            sheet_path(Path::new("out"), "phospho updated 111213", ".csv"),
            PathBuf::from("out/phospho updated 111213.csv")
        );
    }
}
