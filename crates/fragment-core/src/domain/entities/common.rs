use super::DomainError;
use std::fmt;

/// A workspace path guaranteed to be relative and `/`-separated.
///
/// Invariant: never absolute, never contains `\`, empty or `.` segments.
/// Enforced at construction so tree keys compare equal regardless of how
/// the caller spelled them (`./libs//ui/` and `libs/ui` are the same path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref();
        if raw.starts_with('/') || has_drive_prefix(raw) {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }
        Ok(Self(normalize(raw)))
    }

    /// Build a path from user input, dropping any leading `/`.
    ///
    /// Used for `--directory`, which is always taken relative to the
    /// project source root.
    pub fn lenient(path: impl AsRef<str>) -> Self {
        Self(normalize(path.as_ref()))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = normalize(segment.as_ref());
        match (self.0.is_empty(), segment.is_empty()) {
            (true, _) => Self(segment),
            (_, true) => self.clone(),
            _ => Self(format!("{}/{}", self.0, segment)),
        }
    }

    /// Parent directory, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(match self.0.rfind('/') {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self(String::new()),
        })
    }

    /// Last segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        name.rfind('.')
            .filter(|idx| *idx > 0)
            .map(|idx| &name[idx + 1..])
    }

    /// Replace the extension of the last segment.
    pub fn with_extension(&self, ext: &str) -> Self {
        match self.extension() {
            Some(old) => Self(format!("{}{}", &self.0[..self.0.len() - old.len()], ext)),
            None => Self(format!("{}.{}", self.0, ext)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> String {
    raw.replace('\\', "/")
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
