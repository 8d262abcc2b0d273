use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

// @module: File and directory utilities

/// Prefix shared by both artifact file names
pub const ARTIFACT_PREFIX: &str = "Ficha_Técnica_";

/// Permission bits of written artifacts on unix
#[cfg(unix)]
pub const ARTIFACT_MODE: u32 = 0o644;

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Artifact path `<output_dir>/Ficha_Técnica_<base_name>.<extension>`
    pub fn generate_output_path<P: AsRef<Path>>(output_dir: P, base_name: &str, extension: &str) -> PathBuf {
        output_dir
            .as_ref()
            .join(format!("{}{}.{}", ARTIFACT_PREFIX, base_name, extension))
    }

    /// Write bytes to a file. The parent directory must already exist.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
        fs::write(path, content)
    }

    /// Write bytes through a temporary file in the target directory and move it
    /// onto the target name once fully written. On failure the target is left
    /// untouched and the temporary file is removed. The target directory must
    /// already exist.
    pub fn write_atomically<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content)?;
        Self::set_shared_permissions(temp.as_file())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    // Temporary files are created owner-only; artifacts get the usual rw-r--r--
    #[cfg(unix)]
    fn set_shared_permissions(file: &fs::File) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(ARTIFACT_MODE))
    }

    #[cfg(not(unix))]
    fn set_shared_permissions(_file: &fs::File) -> io::Result<()> {
        Ok(())
    }
}
