use std::fmt;

/// Text synthesized in front of each list item.
///
/// Every marker begins with a newline so that each item starts its own line
/// once the host flattens runs into a single text stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Bullet,
    Ordinal(u64),
}

impl Marker {
    pub const BULLET: char = '\u{2022}';
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullet => write!(f, "\n{} ", Self::BULLET),
            Self::Ordinal(n) => write!(f, "\n{n}. "),
        }
    }
}
