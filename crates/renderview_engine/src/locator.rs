//! Template location: resolving a reference to its source text.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Resolves template references against a root directory.
///
/// A reference is a relative path; `/` and `\` separators are both accepted.
/// References are checked before any filesystem access: a reference that is
/// absolute or contains a `..` component is rejected, so a template can never
/// be read from outside the root.
pub struct TemplateLocator {
    root: PathBuf,
}

impl TemplateLocator {
    /// Create a locator for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a reference and read the template text as UTF-8.
    pub fn locate(&self, reference: &str) -> RenderResult<String> {
        let relative = self.normalize(reference)?;

        if !self.root.is_dir() {
            return Err(RenderError::NotFound(self.root.clone()));
        }

        let path = self.root.join(relative);
        debug!("Reading template from {:?}", path);

        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RenderError::NotFound(path)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(RenderError::AccessDenied(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Normalize separators and reject references that escape the root.
    fn normalize(&self, reference: &str) -> RenderResult<PathBuf> {
        if reference.trim().is_empty() {
            return Err(RenderError::InvalidReference(reference.to_string()));
        }

        let unified = reference.replace('\\', "/");
        let mut normalized = PathBuf::new();

        for component in Path::new(&unified).components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(RenderError::InvalidReference(reference.to_string()));
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(RenderError::InvalidReference(reference.to_string()));
        }

        Ok(normalized)
    }
}
