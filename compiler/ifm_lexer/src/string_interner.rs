//! Interning for owned token lexemes.

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;

lazy_static! {
    static ref INTERNER: Mutex<HashSet<Arc<str>>> = Mutex::new(HashSet::new());
}

/// A reference-counted, interned lexeme
///
/// IFM maps repeat a tiny vocabulary (`room`, `dir`, `n`, blank runs), so
/// owned tokens share one allocation per distinct lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternedString(Arc<str>);

impl InternedString {
    /// Intern `s`, reusing the existing allocation if it was seen before
    pub fn new(s: &str) -> Self {
        // The set is never left half-updated, so a poisoned lock is still usable.
        let mut set = INTERNER.lock().unwrap_or_else(PoisonError::into_inner);
        match set.get(s) {
            Some(existing) => InternedString(Arc::clone(existing)),
            None => {
                let arc: Arc<str> = Arc::from(s);
                set.insert(Arc::clone(&arc));
                InternedString(arc)
            }
        }
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both handles share one allocation
    pub fn ptr_eq(&self, other: &InternedString) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for InternedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for InternedString {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for InternedString {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InternedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_interning() {
        let s1 = InternedString::new("northeast");
        let s2 = InternedString::new("northeast");

        // Both should point to the same underlying string
        assert!(s1.ptr_eq(&s2));

        // Different strings should be different
        let s3 = InternedString::new("southwest");
        assert!(!s1.ptr_eq(&s3));
    }

    #[test]
    fn test_compares_with_str() {
        let s = InternedString::from("room");
        assert_eq!(s, "room");
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "room");
    }
}
