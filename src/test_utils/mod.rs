mod webserver;

use std::io::Write;

use tempfile::{TempDir, TempPath};

pub use self::webserver::MockWebserver;

pub fn create_temp_file_with_suffix(suffix: &str, content: &str) -> TempPath {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Unable to create test file.");

    write!(file, "{}", content).expect("Unable to write content to test file.");

    file.into_temp_path()
}

pub fn create_empty_temp_file() -> TempPath {
    tempfile::Builder::new()
        .tempfile()
        .expect("Unable to create test file.")
        .into_temp_path()
}

/// Create a temporary directory containing the given `(file name, content)` pairs.
pub fn create_temp_dir_with_files(files: &[(&str, &str)]) -> TempDir {
    let directory = tempfile::tempdir().expect("Unable to create test directory.");

    for (name, content) in files {
        std::fs::write(directory.path().join(name), content)
            .expect("Unable to write content to test file.");
    }

    directory
}
