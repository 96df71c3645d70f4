// src/display/viewer.rs

//! Hand a rendered document to the platform's default viewer.

use std::fmt::Debug;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::info;

/// Something that can present a written document to the user.
///
/// [`SystemViewer`] is the production implementation; tests substitute a
/// recording one.
pub trait Viewer: Debug {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens documents with the platform opener (`xdg-open`, `open` or
/// `cmd /C start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_viewer(path)
    }
}

/// Spawn the system opener for `path` and return without waiting for the
/// viewer to exit.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg("start").arg("").arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("opening {:?} in the system viewer", path))?;

    info!(path = ?path, "opened rendering in viewer");
    Ok(())
}
