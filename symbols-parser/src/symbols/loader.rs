//! Resource loading
//!
//! Catalogue text comes from an external collaborator: a directory of `.txt`
//! resources on disk, or an in-memory table supplied by the embedder. Both sit
//! behind [ResourceLoader] so the parser can be driven from plain strings in tests.
//!
//! Loading is the only fallible step in building a catalogue. Callers that want
//! the soft "missing means empty" behavior go through
//! [Catalogue::from_resource](crate::symbols::catalogue::Catalogue::from_resource).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file extension for catalogue resources.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Error that can occur when loading resource text
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("resource not found: {filename}")]
    NotFound { filename: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("resource is not valid UTF-8: {path}")]
    Decode { path: PathBuf },
}

/// Looks up catalogue text by resource name.
pub trait ResourceLoader: Send + Sync {
    fn load_text(&self, filename: &str) -> Result<String, LoaderError>;
}

/// Loads `<root>/<filename>.<extension>` from a resource directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
    extension: String,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different resource extension (given without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path a resource name resolves to, or `None` when the name cannot name a
    /// resource (empty, or containing a path separator).
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            return None;
        }
        let file = if self.extension.is_empty() {
            filename.to_string()
        } else {
            format!("{}.{}", filename, self.extension)
        };
        Some(self.root.join(file))
    }

    /// Names of the resources available in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>, LoaderError> {
        let entries = fs::read_dir(&self.root).map_err(|source| LoaderError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| LoaderError::Io {
                    path: self.root.clone(),
                    source,
                })?
                .path();
            if !path.is_file() {
                continue;
            }
            let matches_extension = match path.extension() {
                Some(ext) => ext.to_string_lossy() == self.extension,
                None => self.extension.is_empty(),
            };
            if !matches_extension {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ResourceLoader for DirectoryLoader {
    fn load_text(&self, filename: &str) -> Result<String, LoaderError> {
        let path = self.resolve(filename).ok_or_else(|| LoaderError::NotFound {
            filename: filename.to_string(),
        })?;

        let bytes = fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoaderError::NotFound {
                    filename: filename.to_string(),
                }
            } else {
                LoaderError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        String::from_utf8(bytes).map_err(|_| LoaderError::Decode { path })
    }
}

/// In-memory resources keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, filename: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(filename.into(), text.into());
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load_text(&self, filename: &str) -> Result<String, LoaderError> {
        self.resources
            .get(filename)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound {
                filename: filename.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resource_dir(files: &[(&str, &[u8])]) -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).expect("write resource");
        }
        dir
    }

    #[test]
    fn test_directory_loads_txt_resource() {
        let dir = resource_dir(&[("Shapes.txt", b"square\ncircle\n")]);
        let loader = DirectoryLoader::new(dir.path());
        assert_eq!(loader.load_text("Shapes").unwrap(), "square\ncircle\n");
    }

    #[test]
    fn test_directory_missing_resource_is_not_found() {
        let dir = resource_dir(&[]);
        let loader = DirectoryLoader::new(dir.path());
        assert!(matches!(
            loader.load_text("Missing"),
            Err(LoaderError::NotFound { .. })
        ));
    }

    #[test]
    fn test_directory_rejects_path_like_names() {
        let dir = resource_dir(&[("Shapes.txt", b"square")]);
        let loader = DirectoryLoader::new(dir.path());
        for name in ["", "..", "../Shapes", "nested/Shapes"] {
            assert!(
                matches!(loader.load_text(name), Err(LoaderError::NotFound { .. })),
                "expected NotFound for {name:?}"
            );
        }
    }

    #[test]
    fn test_directory_invalid_utf8_is_decode_error() {
        let dir = resource_dir(&[("Broken.txt", &[0xff, 0xfe, 0x00])]);
        let loader = DirectoryLoader::new(dir.path());
        assert!(matches!(
            loader.load_text("Broken"),
            Err(LoaderError::Decode { .. })
        ));
    }

    #[test]
    fn test_directory_custom_extension() {
        let dir = resource_dir(&[("Shapes.symbols", b"square")]);
        let loader = DirectoryLoader::new(dir.path()).with_extension(".symbols");
        assert_eq!(loader.extension(), "symbols");
        assert_eq!(loader.load_text("Shapes").unwrap(), "square");
    }

    #[test]
    fn test_directory_list_filters_by_extension() {
        let dir = resource_dir(&[
            ("Shapes.txt", b"square"),
            ("Arrows.txt", b"up"),
            ("notes.md", b"ignored"),
        ]);
        let loader = DirectoryLoader::new(dir.path());
        assert_eq!(loader.list().unwrap(), vec!["Arrows", "Shapes"]);
    }

    #[test]
    fn test_directory_list_missing_root_is_io_error() {
        let loader = DirectoryLoader::new("/definitely/not/a/resource/dir");
        assert!(matches!(loader.list(), Err(LoaderError::Io { .. })));
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with_resource("Shapes", "square");
        assert_eq!(loader.load_text("Shapes").unwrap(), "square");
        assert!(matches!(
            loader.load_text("Arrows"),
            Err(LoaderError::NotFound { .. })
        ));
    }
}
