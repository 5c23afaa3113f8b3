//! Registry configuration.
//!
//! The registry needs to know three well-known types: the root every module
//! type descends from, the wildcard type that matches anything in a signature,
//! and the constant type whose descendants can be set as parameters. They are
//! named here rather than hard-coded so that a host can run the registry with
//! its own basic package.

use crate::module_key::ModuleKey ;



/// Package identifier of the classic basic package.
pub const DEFAULT_BASIC_PACKAGE: &str = "edu.utah.sci.vistrails.basic" ;

/// Well-known types of a [`ModuleRegistry`]( crate::ModuleRegistry ).
///
/// The root type is created by the registry itself inside `basic_package`.
/// The wildcard and constant types are only referenced by key and are
/// typically registered by the basic package's loader.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct RegistryConfig {
    basic_package: String,
    root_name: String,
    wildcard: ModuleKey,
    constant: ModuleKey,
}

impl RegistryConfig {

    /// Configuration rooted at `root_name` in `basic_package`, with wildcard
    /// `Variant` and constant `Constant` in the same package.
    pub fn new( basic_package: impl Into<String>, root_name: impl Into<String> ) -> Self {
        let basic_package = basic_package.into();
        Self {
            wildcard: ModuleKey::new( basic_package.clone(), "Variant" ),
            constant: ModuleKey::new( basic_package.clone(), "Constant" ),
            root_name: root_name.into(),
            basic_package,
        }
    }

    /// Sets the type that matches any other type in a signature.
    pub fn with_wildcard( mut self, wildcard: ModuleKey ) -> Self {
        self.wildcard = wildcard ;
        self
    }

    /// Sets the type whose descendants count as settable values.
    pub fn with_constant( mut self, constant: ModuleKey ) -> Self {
        self.constant = constant ;
        self
    }

    /// Package that owns the root type.
    #[inline] pub fn basic_package( &self ) -> &str { &self.basic_package }

    /// Key of the root type.
    pub fn root( &self ) -> ModuleKey { ModuleKey::new( self.basic_package.clone(), self.root_name.clone() ) }

    /// Key of the wildcard type.
    #[inline] pub fn wildcard( &self ) -> &ModuleKey { &self.wildcard }

    /// Key of the constant type.
    #[inline] pub fn constant( &self ) -> &ModuleKey { &self.constant }

}

impl Default for RegistryConfig {
    fn default() -> Self { Self::new( DEFAULT_BASIC_PACKAGE, "Module" ) }
}
