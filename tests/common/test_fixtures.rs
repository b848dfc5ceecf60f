//! Test fixtures for scaffolding scenarios.

use std::path::{Path, PathBuf};

/// A representative template `package.json`, as a real template repository
/// would ship it.
pub fn template_manifest_body() -> &'static str {
    r#"{
  "name": "template-name",
  "version": "1.0.0",
  "description": "template description",
  "author": "template author",
  "license": "MIT",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  },
  "dependencies": {
    "react": "^18.0.0",
    "react-dom": "^18.0.0"
  }
}"#
}

/// Write a minimal template project (manifest plus one source file) into
/// `dir` and return the manifest path.
pub fn write_template_project(dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir.join("src"))?;
    std::fs::write(dir.join("src").join("index.js"), "console.log('hello');\n")?;

    let manifest_path = dir.join("package.json");
    std::fs::write(&manifest_path, template_manifest_body())?;
    Ok(manifest_path)
}
