use std::path::{Path, PathBuf};

const ASSEMBLY_DIR: &str = "assembly";
const HEX_DIR: &str = "hex";

/// Where assembly sources and the assembler's hex dumps live, relative to a
/// base directory.
///
/// For a base name `tty_test` the source is `assembly/tty_test.s` and the dump
/// is `hex/tty_test.hex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base_dir: PathBuf,
}

impl Layout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn assembly_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(ASSEMBLY_DIR).join(format!("{name}.s"))
    }

    pub fn hex_dir(&self) -> PathBuf {
        self.base_dir.join(HEX_DIR)
    }

    pub fn hex_path(&self, name: &str) -> PathBuf {
        self.hex_dir().join(format!("{name}.hex"))
    }
}
