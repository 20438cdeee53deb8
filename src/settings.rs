//! Server settings module
//!
//! Everything the server needs to run is fixed at compile time: the port, the
//! name of the served directory, and the index file name. The only value
//! resolved at runtime is the working directory, which anchors the serve root.
//! There are no CLI flags, environment variables, or config files.

use std::net::SocketAddr;
use std::path::PathBuf;

/// TCP port the server listens on, all interfaces
pub const PORT: u16 = 8080;

/// Directory under the working directory that files are served from
pub const SERVE_DIR: &str = "bench";

/// File served when a request resolves to a directory
pub const INDEX_FILE: &str = "index.html";

/// Immutable settings computed once at startup and shared across connections
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub serve_root: PathBuf,
}

impl Settings {
    /// Resolve the serve root from the current working directory.
    ///
    /// Fails only if the working directory cannot be determined. The serve
    /// root itself is not checked for existence; requests against a missing
    /// directory yield 404.
    pub fn resolve() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
            serve_root: cwd.join(SERVE_DIR),
        })
    }
}
