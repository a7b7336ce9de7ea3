//! Discovery of page files in the content directory.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Lists page files directly inside `dir` whose extension is one of `extensions`.
///
/// Hidden files (names starting with `.`) and subdirectories are skipped. Names are returned
/// relative to `dir`, which is how the hierarchy refers to pages.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn find_documents(dir: &Path, extensions: &[String]) -> io::Result<BTreeSet<String>> {
    let mut documents = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if has_extension(&name, extensions) {
            documents.insert(name);
        }
    }
    Ok(documents)
}

fn has_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
