use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Manifest filename looked up by default.
pub const DEFAULT_FILENAME: &str = "ngwrite.toml";

/// Manifest written by `ngwrite init`.
pub const STARTER_MANIFEST: &str = r#"[project]
name = "my-app"

[symbols]
provideRouter = "@angular/router"

[components.AppComponent]
selector = "app-root"
standalone = true
templateUrl = "./app.component.html"
styleUrls = ["./app.component.css"]
changeDetection = "OnPush"

[components.HomeComponent]
selector = "app-home"
standalone = true
template = "<h1>Home</h1>"

[application]
providers = ["provideRouter(routes)"]

[[routes]]
path = ""
component = "HomeComponent"
"#;

/// A parsed manifest together with the path it was read from.
pub struct ManifestFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_manifest_parses() {
        let manifest: Manifest = STARTER_MANIFEST.parse().unwrap();
        assert_eq!(manifest.project.name, "my-app");
        assert_eq!(manifest.components.len(), 2);
        assert_eq!(manifest.routes.len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let err = ManifestFile::open("/definitely/not/here/ngwrite.toml")
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
