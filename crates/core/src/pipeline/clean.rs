use std::{fs::remove_file, path::Path};

use anyhow::{Context, Result};

use crate::io::glob_images;

/// Removes previously generated images from `output_dir`. Returns how many.
pub fn clean(output_dir: &Path) -> Result<usize> {
    if !output_dir.exists() {
        println!("Skipped {} (not found)", output_dir.display());
        return Ok(0);
    }

    let images = glob_images(output_dir)?;
    for path in &images {
        remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    println!("Removed {} images from {}", images.len(), output_dir.display());
    Ok(images.len())
}
