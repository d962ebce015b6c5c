//! Dot paths for nested map access.
//!
//! A [`DotPath`] is an ordered list of key segments, each naming one level
//! of descent. Paths are produced by splitting a text key on every `.`;
//! splitting is literal, so empty segments are kept (`"a..b"` has three
//! segments, the middle one being the empty text key). Each segment is
//! coerced like any other [`Key`], so `"items.0"` descends into key `0`.
//!
//! Whether a key containing dots is a path at all is decided by the
//! caller through [`PathMode`], never by the key's content.
//!
//! # Usage
//!
//! ```rust
//! use nestmap::{DotPath, Key, PathMode};
//!
//! let path = DotPath::parse("user.profile.name");
//! assert_eq!(path.len(), 3);
//!
//! // In literal mode a dotted key is one atomic segment
//! let literal = DotPath::resolve(&Key::from("user.profile"), PathMode::Literal);
//! assert_eq!(literal.len(), 1);
//!
//! // Build incrementally
//! let path = DotPath::root("items").push(0)?.push("title")?;
//! assert_eq!(path.to_string(), "items.0.title");
//! # Ok::<(), nestmap::MapError>(())
//! ```

use std::fmt;

use super::{Key, MapError};

/// How a text key containing `.` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// The key is one atomic key, dots included
    #[default]
    Literal,
    /// A text key containing `.` addresses nested maps
    Dotted,
}

impl PathMode {
    /// Returns true when dotted keys are split into paths
    pub fn is_dotted(self) -> bool {
        matches!(self, PathMode::Dotted)
    }
}

impl From<bool> for PathMode {
    fn from(dot_syntax: bool) -> Self {
        if dot_syntax {
            PathMode::Dotted
        } else {
            PathMode::Literal
        }
    }
}

/// An owned, non-empty sequence of key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotPath {
    segments: Vec<Key>,
}

impl DotPath {
    /// Creates a single-segment path.
    pub fn root(key: impl Into<Key>) -> Self {
        Self {
            segments: vec![key.into()],
        }
    }

    /// Splits `input` on every `.` into segments.
    ///
    /// ```rust
    /// # use nestmap::{DotPath, Key};
    /// let path = DotPath::parse("a..b");
    /// let segments: Vec<&Key> = path.segments().collect();
    /// assert_eq!(segments, vec![&Key::from("a"), &Key::from(""), &Key::from("b")]);
    /// ```
    pub fn parse(input: &str) -> Self {
        Self {
            segments: input.split('.').map(Key::from).collect(),
        }
    }

    /// Builds the path addressed by `key` under `mode`.
    ///
    /// Integer keys and keys without dots are always single segments.
    pub fn resolve(key: &Key, mode: PathMode) -> Self {
        match key {
            Key::Text(s) if mode.is_dotted() && s.contains('.') => Self::parse(s),
            _ => Self::root(key.clone()),
        }
    }

    /// Builds a path from explicit segments.
    ///
    /// # Errors
    /// Returns [`MapError::InvalidPath`] if there are no segments or a text
    /// segment contains a dot.
    pub fn from_segments<I, K>(segments: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let segments: Vec<Key> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(MapError::InvalidPath {
                path: "(empty path)".to_string(),
            });
        }
        if let Some(bad) = segments.iter().find(|k| k.is_dotted()) {
            return Err(MapError::InvalidPath {
                path: format!("segment '{bad}' cannot contain dots"),
            });
        }
        Ok(Self { segments })
    }

    /// Appends a segment.
    ///
    /// # Errors
    /// Returns [`MapError::InvalidPath`] if the segment is text containing a dot.
    pub fn push(mut self, segment: impl Into<Key>) -> Result<Self, MapError> {
        let segment = segment.into();
        if segment.is_dotted() {
            return Err(MapError::InvalidPath {
                path: format!("segment '{segment}' cannot contain dots"),
            });
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &Key> {
        self.segments.iter()
    }

    /// Returns the number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for single-segment paths, which need no descent.
    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns the first segment.
    pub fn head(&self) -> &Key {
        &self.segments[0]
    }

    /// Returns every segment but the last, and the last.
    pub fn split_last(&self) -> (&[Key], &Key) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last),
            None => unreachable!("DotPath always has at least one segment"),
        }
    }

    /// Returns the parent path, or `None` for single-segment paths.
    pub fn parent(&self) -> Option<DotPath> {
        if self.is_single() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Renders the first `depth` segments, used for error messages.
    pub(crate) fn prefix_string(&self, depth: usize) -> String {
        self.segments[..depth.min(self.segments.len())]
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix_string(self.segments.len()))
    }
}

impl From<Key> for DotPath {
    fn from(key: Key) -> Self {
        Self::root(key)
    }
}
