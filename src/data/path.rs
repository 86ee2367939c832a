use std::fmt::{self, Display, Formatter};

use crate::Key;

/// A single step in a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Descend into the value held for this key.
    Key(Key),
    /// Fan out over every child of the current value.
    Wildcard,
}

impl Segment {
    /// Parses a single segment. `*` is the wildcard, anything else is a [`Key`] (with canonical
    /// integers normalised).
    pub fn parse(raw: &str) -> Segment {
        match raw {
            "*" => Segment::Wildcard,
            _ => Segment::Key(Key::parse(raw)),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key}"),
            Segment::Wildcard => write!(f, "*"),
        }
    }
}

/// A sequence of lookup [`Segment`]s, applied left to right.
///
/// Paths are usually parsed from dot-delimited strings, but can also be built from a sequence of
/// segments supplied directly, in which case dots within a segment are part of the key:
/// ```
/// use support_lib::data::{Path, Segment};
/// use support_lib::Key;
///
/// let parsed = Path::from("users.*.name");
/// assert_eq!(parsed.len(), 3);
/// assert_eq!(parsed.segments()[1], Segment::Wildcard);
///
/// let literal = Path::from(["config", "app.name"]);
/// assert_eq!(literal.segments()[1], Segment::Key(Key::from("app.name")));
/// ```
///
/// An empty string, or [`None`], is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates an empty path.
    pub const fn new() -> Path {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parses a dot-delimited path. The empty string is the empty path.
    pub fn parse(dotted: &str) -> Path {
        if dotted.is_empty() {
            return Path::new();
        }
        dotted.split('.').map(Segment::parse).collect()
    }

    /// Returns the segments of this path, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments in this path.
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if any segment of this path is a wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.segments.contains(&Segment::Wildcard)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::parse(&value)
    }
}

impl From<&String> for Path {
    fn from(value: &String) -> Self {
        Path::parse(value)
    }
}

impl<P: Into<Path>> From<Option<P>> for Path {
    fn from(value: Option<P>) -> Self {
        value.map_or_else(Path::new, Into::into)
    }
}

impl From<&Path> for Path {
    fn from(value: &Path) -> Self {
        value.clone()
    }
}

/// A single literal segment, never split and never a wildcard.
impl From<Key> for Path {
    fn from(value: Key) -> Self {
        Path {
            segments: vec![Segment::Key(value)],
        }
    }
}

impl From<Vec<Segment>> for Path {
    fn from(value: Vec<Segment>) -> Self {
        Path { segments: value }
    }
}

impl From<&[&str]> for Path {
    fn from(value: &[&str]) -> Self {
        value.iter().map(|raw| Segment::parse(raw)).collect()
    }
}

impl From<Vec<&str>> for Path {
    fn from(value: Vec<&str>) -> Self {
        Path::from(value.as_slice())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(value: [&str; N]) -> Self {
        Path::from(value.as_slice())
    }
}
