use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Output of `npm create vite@latest -- --template react`, trimmed down.
pub fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/vite-react")
}

#[allow(dead_code)]
pub fn copy_fixture(dst: &Path) {
    let src = fixture();
    for entry in WalkDir::new(&src) {
        let entry = entry.unwrap();
        let to = dst.join(entry.path().strip_prefix(&src).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(to).unwrap();
        } else {
            fs::copy(entry.path(), to).unwrap();
        }
    }
}
