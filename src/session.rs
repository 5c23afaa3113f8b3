//! Registration sessions.

use crate::descriptor::ModuleDescriptor ;
use crate::module_key::ModuleKey ;
use crate::options::ModuleOptions ;
use crate::port::Port ;
use crate::registry::{ ModuleRegistry, RegistryError };
use crate::signature::Signature ;



/// Registration context of one package.
///
/// A package's [`initialize`]( crate::Package::initialize ) receives a
/// session instead of the registry. Types registered through it are keyed
/// under the session's package, so loaders only name their own types. Types of
/// other packages, used as parents or in signatures, are named by full key.
///
/// ```
/// use module_registry::{ ModuleOptions, ModuleRegistry, Signature };
///
/// # fn main() -> Result<(), module_registry::RegistryError> {
/// let mut registry = ModuleRegistry::new();
/// let root = registry.root().clone();
///
/// let mut session = registry.session( "org.example.text" );
/// session.add_module( "Text", &root, ModuleOptions::new() )?;
/// let text = session.key( "Text" );
/// session.add_output_port( "Text", "value", Signature::single( text ), false )?;
///
/// assert_eq!( registry.package_modules( "org.example.text" ), Some([ "Text".to_string() ].as_slice() ));
/// # Ok(())
/// # }
/// ```
#[derive( Debug )]
pub struct LoaderSession<'r> {
    registry: &'r mut ModuleRegistry,
    package: String,
}

impl<'r> LoaderSession<'r> {

    pub(crate) fn new( registry: &'r mut ModuleRegistry, package: String ) -> Self {
        Self { registry, package }
    }

    /// The package this session registers into.
    #[inline] pub fn package( &self ) -> &str { &self.package }

    /// Key of the type `name` in this session's package.
    pub fn key( &self, name: &str ) -> ModuleKey { ModuleKey::new( self.package.as_str(), name ) }

    /// Read access to the registry, e.g. to look up other packages' types.
    #[inline] pub fn registry( &self ) -> &ModuleRegistry { self.registry }

    /// Registers `name` in this package as a child of `parent`.
    ///
    /// # Errors
    /// As [`ModuleRegistry::add_module`].
    pub fn add_module( &mut self, name: &str, parent: &ModuleKey, options: ModuleOptions ) -> Result<&ModuleDescriptor, RegistryError> {
        let key = self.key( name );
        self.registry.add_module( key, parent, options )
    }

    /// Registers `name` in this package under the single registered type among `bases`.
    ///
    /// # Errors
    /// As [`ModuleRegistry::add_module_with_bases`].
    pub fn add_module_with_bases(
        &mut self,
        name: &str,
        bases: impl IntoIterator<Item = ModuleKey>,
        options: ModuleOptions,
    ) -> Result<&ModuleDescriptor, RegistryError> {
        let key = self.key( name );
        self.registry.add_module_with_bases( key, bases, options )
    }

    /// Adds an input port to the type `module` of this package.
    ///
    /// # Errors
    /// As [`ModuleRegistry::add_input_port`].
    pub fn add_input_port(
        &mut self,
        module: &str,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<Port, RegistryError> {
        let key = self.key( module );
        self.registry.add_input_port( &key, name, signature, optional, widget_hint )
    }

    /// Adds an output port to the type `module` of this package.
    ///
    /// # Errors
    /// As [`ModuleRegistry::add_output_port`].
    pub fn add_output_port( &mut self, module: &str, name: &str, signature: Signature, optional: bool ) -> Result<Port, RegistryError> {
        let key = self.key( module );
        self.registry.add_output_port( &key, name, signature, optional )
    }

}
