//! Port signatures.
//!
//! A [`Signature`] describes the value type(s) a port accepts or produces. It
//! is an ordered, non-empty list of entries, each naming a registered module
//! type and carrying a free-form description of the parameter.
//!
//! Signatures have a canonical text form, `(pkgA:TypeA,pkgB:TypeB)`, which is
//! stable across processes and used wherever a signature has to be persisted
//! or compared by identity. Descriptions are not part of that form.

use itertools::Itertools ;
use nonempty_collections::NEVec ;
use thiserror::Error ;

use crate::module_key::{ ModuleKey, ModuleKeyParseError };



/// Description given to entries built from a bare type.
pub const NO_DESCRIPTION: &str = "<no description>" ;

/// Error produced when parsing a canonical signature string.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum SignatureParseError {
    /// The text is not wrapped in `(` and `)`.
    #[error( "Signature '{0}' must be enclosed in parentheses" )] MissingParentheses( String ),
    /// The text contains no entries, e.g. `()`.
    #[error( "Signature '{0}' has no entries" )] Empty( String ),
    /// One of the entries is not a valid `package:name` key.
    #[error( "Invalid signature entry: {0}" )] InvalidEntry( #[from] ModuleKeyParseError ),
}

/// A single `(type, description)` pair of a [`Signature`].
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct SignatureEntry {
    value_type: ModuleKey,
    description: String,
}

impl SignatureEntry {

    /// Creates an entry with an explicit description.
    pub fn new( value_type: ModuleKey, description: impl Into<String> ) -> Self {
        Self { value_type, description: description.into() }
    }

    /// The module type this entry refers to.
    #[inline] pub fn value_type( &self ) -> &ModuleKey { &self.value_type }

    /// Human readable description of the parameter.
    #[inline] pub fn description( &self ) -> &str { &self.description }

}

impl From<ModuleKey> for SignatureEntry {
    fn from( value_type: ModuleKey ) -> Self { Self::new( value_type, NO_DESCRIPTION ) }
}

/// Ordered, non-empty sequence of typed entries describing a port.
///
/// Two signatures are equal when their entries are pairwise equal, descriptions
/// included. Use [`ModuleRegistry::are_specs_matched`] to decide whether one
/// signature is assignable to another.
///
/// ```
/// use module_registry::{ ModuleKey, Signature };
///
/// let float = ModuleKey::new( "basic", "Float" );
/// let int = ModuleKey::new( "basic", "Integer" );
/// let signature = Signature::from_types([ float.clone(), int.clone() ]).unwrap();
///
/// let text = signature.to_string();
/// assert_eq!( text, "(basic:Float,basic:Integer)" );
///
/// let parsed: Signature = text.parse().unwrap();
/// assert_eq!( parsed.types(), vec![ &float, &int ]);
/// ```
///
/// [`ModuleRegistry::are_specs_matched`]: crate::ModuleRegistry::are_specs_matched
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct Signature {
    entries: NEVec<SignatureEntry>,
}

impl Signature {

    /// Creates a signature holding a single entry.
    pub fn new( entry: impl Into<SignatureEntry> ) -> Self {
        Self { entries: NEVec::new( entry.into() )}
    }

    /// Creates a signature holding a single undescribed type.
    pub fn single( value_type: ModuleKey ) -> Self { Self::new( value_type ) }

    /// Builds a signature from entries, returning `None` if there are none.
    pub fn from_entries( entries: impl IntoIterator<Item = SignatureEntry> ) -> Option<Self> {
        let mut entries = entries.into_iter();
        let mut collected = NEVec::new( entries.next()? );
        entries.for_each(| entry | collected.push( entry ));
        Some( Self { entries: collected })
    }

    /// Builds a signature from undescribed types, returning `None` if there are none.
    pub fn from_types( types: impl IntoIterator<Item = ModuleKey> ) -> Option<Self> {
        Self::from_entries( types.into_iter().map( SignatureEntry::from ))
    }

    /// Appends another entry to the signature.
    pub fn with_entry( mut self, entry: impl Into<SignatureEntry> ) -> Self {
        self.entries.push( entry.into() );
        self
    }

    /// Iterates over the entries in order.
    pub fn entries( &self ) -> impl Iterator<Item = &SignatureEntry> {
        self.entries.iter().into_iter()
    }

    /// The first entry. Every signature has at least one.
    #[inline] pub fn first( &self ) -> &SignatureEntry { self.entries.first() }

    /// Number of entries.
    pub fn arity( &self ) -> usize { self.entries().count() }

    /// The ordered value types of the signature.
    pub fn types( &self ) -> Vec<&ModuleKey> {
        self.entries().map( SignatureEntry::value_type ).collect()
    }

    /// Returns `true` if the signature consists of exactly one entry of type `value_type`.
    pub fn is_single( &self, value_type: &ModuleKey ) -> bool {
        self.arity() == 1 && self.first().value_type() == value_type
    }

    /// Renders the canonical `(package:Name,...)` form.
    pub fn to_sigstring( &self ) -> String { self.to_string() }

    /// Renders a `(Name,...)` form without packages.
    ///
    /// Meant for display only: it cannot be parsed back into a signature.
    pub fn to_short_sigstring( &self ) -> String {
        format!( "({})", self.entries().map(| entry | entry.value_type().name() ).join( "," ))
    }

    /// Parses the canonical form. See [`FromStr`]( std::str::FromStr ).
    ///
    /// # Errors
    /// See [`SignatureParseError`].
    pub fn from_sigstring( text: &str ) -> Result<Self, SignatureParseError> { text.parse() }

}

impl std::fmt::Display for Signature {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        write!( f, "({})", self.entries().map( SignatureEntry::value_type ).join( "," ))
    }
}

impl std::str::FromStr for Signature {
    type Err = SignatureParseError ;

    fn from_str( text: &str ) -> Result<Self, Self::Err> {
        let inner = text.trim()
            .strip_prefix( '(' )
            .and_then(| rest | rest.strip_suffix( ')' ))
            .ok_or_else(|| SignatureParseError::MissingParentheses( text.to_string() ))?;
        if inner.trim().is_empty() {
            return Err( SignatureParseError::Empty( text.to_string() ));
        }
        let types = inner.split( ',' )
            .map(| item | item.trim().parse::<ModuleKey>() )
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_types( types ).ok_or_else(|| SignatureParseError::Empty( text.to_string() ))
    }
}

impl From<ModuleKey> for Signature {
    fn from( value_type: ModuleKey ) -> Self { Self::single( value_type ) }
}
