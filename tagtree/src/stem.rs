//! Stem - compact string type for tree content.

use compact_str::CompactString;
use facet::Facet;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Compact string type used for tag names, attribute names and values, and
/// text payloads.
///
/// Strings up to 24 bytes are stored inline, so most tag and attribute
/// names never touch the heap.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Facet)]
#[facet(transparent)]
pub struct Stem(CompactString);

impl Stem {
    pub fn new() -> Self {
        Self(CompactString::default())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push_str(&mut self, s: &str) {
        self.0.push_str(s);
    }
}

impl Deref for Stem {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Stem {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Stem {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Stem {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Stem {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl From<&str> for Stem {
    fn from(s: &str) -> Self {
        Self(CompactString::new(s))
    }
}

impl From<&String> for Stem {
    fn from(s: &String) -> Self {
        Self(CompactString::new(s))
    }
}

impl From<String> for Stem {
    fn from(s: String) -> Self {
        Self(CompactString::from(s))
    }
}

impl From<CompactString> for Stem {
    fn from(s: CompactString) -> Self {
        Self(s)
    }
}

impl From<std::borrow::Cow<'_, str>> for Stem {
    fn from(s: std::borrow::Cow<'_, str>) -> Self {
        Self(CompactString::from(s))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Stem>();
    assert_sync::<Stem>();
};
