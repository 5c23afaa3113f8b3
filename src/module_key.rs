//! Identity of a registered module type.
//!
//! A module type is identified by the package that registered it together with
//! its local name. The same key is used as the *value type* inside port
//! signatures, so a signature entry names a registered module type directly.

use thiserror::Error ;



/// Error produced when parsing a `package:name` key.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum ModuleKeyParseError {
    /// The text has no `:` separating the package from the name.
    #[error( "Missing package separator in '{0}'" )] MissingSeparator( String ),
    /// Either the package or the name is empty.
    #[error( "Empty package or name in '{0}'" )] EmptyComponent( String ),
}

/// Unique key of a registered module type: `(package, name)`.
///
/// The canonical text form is `package:name`. Package identifiers may contain
/// dots (e.g. `org.example.basic`) but module names never contain `:`, so
/// parsing splits on the last separator.
///
/// ```
/// use module_registry::ModuleKey ;
///
/// let key: ModuleKey = "org.example.basic:Float".parse().unwrap();
/// assert_eq!( key.package(), "org.example.basic" );
/// assert_eq!( key.name(), "Float" );
/// assert_eq!( key.to_string(), "org.example.basic:Float" );
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub struct ModuleKey {
    package: String,
    name: String,
}

impl ModuleKey {

    /// Creates a key from a package identifier and a module name.
    pub fn new( package: impl Into<String>, name: impl Into<String> ) -> Self {
        Self { package: package.into(), name: name.into() }
    }

    /// Identifier of the package that registered the type.
    #[inline] pub fn package( &self ) -> &str { &self.package }

    /// Local name of the type within its package.
    #[inline] pub fn name( &self ) -> &str { &self.name }

}

impl std::fmt::Display for ModuleKey {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        write!( f, "{}:{}", self.package, self.name )
    }
}

impl std::str::FromStr for ModuleKey {
    type Err = ModuleKeyParseError ;

    fn from_str( text: &str ) -> Result<Self, Self::Err> {
        let ( package, name ) = text.rsplit_once( ':' )
            .ok_or_else(|| ModuleKeyParseError::MissingSeparator( text.to_string() ))?;
        if package.is_empty() || name.is_empty() {
            return Err( ModuleKeyParseError::EmptyComponent( text.to_string() ));
        }
        Ok( Self::new( package, name ))
    }
}

impl<P: Into<String>, N: Into<String>> From<( P, N )> for ModuleKey {
    fn from(( package, name ): ( P, N )) -> Self { Self::new( package, name ) }
}
