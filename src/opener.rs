/*!
 * Opening generated files with the platform's default viewer.
 *
 * The implementation is picked once, when the controller is built, so the rest
 * of the application only sees the `FileOpener` trait.
 */

use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use log::debug;

/// Capability to show a file to the user
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files by spawning a launcher program with the path as last argument
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandOpener {
    /// `cmd /C start "" <path>`
    pub const fn windows() -> Self {
        Self { program: "cmd", args: &["/C", "start", ""] }
    }

    /// `open <path>`
    pub const fn macos() -> Self {
        Self { program: "open", args: &[] }
    }

    /// `xdg-open <path>`
    pub const fn xdg() -> Self {
        Self { program: "xdg-open", args: &[] }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }
}

impl FileOpener for CommandOpener {
    fn open(&self, path: &Path) -> Result<()> {
        debug!("Opening {:?} with {}", path, self.program);
        let status = Command::new(self.program)
            .args(self.args)
            .arg(path)
            .status()
            .with_context(|| format!("Não foi possível abrir o arquivo: {:?}", path))?;

        if !status.success() {
            return Err(anyhow!("Não foi possível abrir o arquivo: {:?} ({})", path, status));
        }
        Ok(())
    }
}

/// Opener used when opening is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl FileOpener for NoopOpener {
    fn open(&self, path: &Path) -> Result<()> {
        debug!("Not opening {:?}", path);
        Ok(())
    }
}

/// The launcher for the platform this binary was built for
#[cfg(target_os = "windows")]
pub fn platform_opener() -> Box<dyn FileOpener> {
    Box::new(CommandOpener::windows())
}

/// The launcher for the platform this binary was built for
#[cfg(target_os = "macos")]
pub fn platform_opener() -> Box<dyn FileOpener> {
    Box::new(CommandOpener::macos())
}

/// The launcher for the platform this binary was built for
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn platform_opener() -> Box<dyn FileOpener> {
    Box::new(CommandOpener::xdg())
}
