use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub static HOST: &str = "localhost";
pub static PORT: u16 = 8000;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

impl Config {
    /// Fixed host and port, serving the directory the server was built from.
    ///
    /// That directory is baked in at compile time, so a binary copied to a
    /// machine without it fails here instead of serving its working directory.
    pub fn get() -> Result<Self> {
        Ok(Self {
            host: HOST.into(),
            port: PORT,
            root: Self::canonical_root(env!("CARGO_MANIFEST_DIR"))?,
        })
    }

    pub fn with_root<P: AsRef<Path>>(host: &str, port: u16, root: P) -> Result<Self> {
        Ok(Self {
            host: host.into(),
            port,
            root: Self::canonical_root(root)?,
        })
    }

    fn canonical_root<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
        let root = root.as_ref();

        root.canonicalize()
            .with_context(|| format!("Could not resolve root directory {}", root.display()))
    }
}
