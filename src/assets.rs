//! Static files embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::error::{KksError, Result};

/// Embedded assets directory.
static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Name of the Kakoune integration script.
pub const INIT_SCRIPT: &str = "init.kak";

/// Load an embedded text file by name.
pub fn load(name: &str) -> Result<&'static str> {
    let file = ASSETS_DIR.get_file(name).ok_or_else(|| {
        KksError::Other(anyhow::anyhow!("embedded asset '{}' not found", name))
    })?;

    file.contents_utf8()
        .ok_or_else(|| KksError::Other(anyhow::anyhow!("embedded asset '{}' is not UTF-8", name)))
}

/// The Kakoune script printed by `kks init`.
pub fn init_script() -> Result<&'static str> {
    load(INIT_SCRIPT)
}
