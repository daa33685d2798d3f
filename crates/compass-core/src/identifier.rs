//! Interned external element identifiers.
//!
//! Diagram authoring tools assign every element an opaque identifier (usually a
//! UUID string). Each diagram interns the identifiers of its own elements when
//! it is built, so lookups compare symbols and the interned strings are
//! released together with the diagram.

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// An external identifier interned by one [`Identifiers`] table.
///
/// Symbols from different tables are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

/// Interner for the external identifiers of one diagram.
///
/// # Examples
///
/// ```
/// use compass_core::identifier::Identifiers;
///
/// let mut identifiers = Identifiers::default();
/// let id = identifiers.intern("8f1c2a40-class-person");
/// assert_eq!(identifiers.get("8f1c2a40-class-person"), Some(id));
/// assert_eq!(identifiers.resolve(id), Some("8f1c2a40-class-person"));
/// assert_eq!(identifiers.get("never-seen"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Identifiers {
    interner: DefaultStringInterner,
}

impl Identifiers {
    /// Interns `value` and returns its identifier.
    pub fn intern(&mut self, value: &str) -> Id {
        Id(self.interner.get_or_intern(value))
    }

    /// Returns the identifier for `value` if it was interned before.
    ///
    /// Never grows the table, so lookups driven by untrusted input are
    /// bounded by the identifiers the diagram actually uses.
    pub fn get(&self, value: &str) -> Option<Id> {
        self.interner.get(value).map(Id)
    }

    /// The string an identifier was interned from.
    pub fn resolve(&self, id: Id) -> Option<&str> {
        self.interner.resolve(id.0)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }
}
