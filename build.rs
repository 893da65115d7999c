//! Build script for spdump.
//!
//! Copies the credentials template into the user's local data directory so a
//! fresh install has an example `config.toml` next to where the binary looks
//! for one.

use std::{env, fs, path::PathBuf};

/// Copies `config.example.toml` from the crate root to
/// `<local data dir>/spdump/config.example.toml`.
///
/// A missing template only produces a cargo warning; failing to create the
/// target directory or to write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=config.example.toml");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.example.toml");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spdump");
    fs::create_dir_all(&out_dir)?;

    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("config.example.toml"), contents)?;
    } else {
        println!(
            "cargo:warning=config.example.toml not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
