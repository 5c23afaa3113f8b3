//! The module registry.
//!
//! [`ModuleRegistry`] is the catalog an editor and its package loaders share.
//! It owns the [`HierarchyTree`], indexes every type under the package that
//! registered it and validates signatures against the registered types.
//! Every successful mutation is announced to subscribers once it has been
//! committed, see [`ModuleRegistry::subscribe`].
//!
//! The registry holds no "current package" state: loaders register through a
//! [`LoaderSession`]( crate::LoaderSession ) which fills in their package.

use std::collections::HashMap ;
use crossbeam_channel::Receiver ;
use itertools::Itertools ;
use parking_lot::Mutex ;
use thiserror::Error ;

use crate::appearance::{ ModuleColor, ModuleFringe, OptionsError };
use crate::compatibility::{ self, TypeLattice };
use crate::config::RegistryConfig ;
use crate::descriptor::{ ModuleDescriptor, PortError };
use crate::events::{ EventBus, RegistryEvent };
use crate::hasher::{ ModuleHasher, StructuralHasher };
use crate::hierarchy::{ HierarchyError, HierarchyTree };
use crate::module_function::ModuleConfiguration ;
use crate::module_key::ModuleKey ;
use crate::options::ModuleOptions ;
use crate::port::{ Endpoint, Port };
use crate::session::LoaderSession ;
use crate::signature::{ Signature, SignatureParseError };

mod legacy ;
mod package_removal ;
mod ports ;

pub use legacy::UNKNOWN_PACKAGE ;
pub use ports::{ MethodGroup, PortGroup, PortOrder };



/// Errors returned by [`ModuleRegistry`] operations.
#[derive( Debug, Clone, PartialEq, Error )]
pub enum RegistryError {
    /// A structural rule of the hierarchy was violated.
    #[error( transparent )] Hierarchy( #[from] HierarchyError ),
    /// A port with the same name already exists on that side of the module.
    #[error( transparent )] Port( #[from] PortError ),
    /// The color or fringe given at registration is out of range.
    #[error( "Invalid module options: {0}" )] InvalidOptions( #[from] OptionsError ),
    /// A signature string could not be parsed.
    #[error( "Invalid signature: {0}" )] SignatureParse( #[from] SignatureParseError ),
    /// Not exactly one of the declared bases is a registered module type.
    #[error( "Cannot register {key}: expected exactly one registered base, found {candidates:?}" )]
    EliminateMixinFailure { key: ModuleKey, candidates: Vec<ModuleKey> },
    /// The package was never loaded, or it does not define the module.
    #[error( "Module '{name}' of package '{package}' is not available" )]
    MissingModulePackage { package: String, name: String },
    /// A bare module name matches types of several packages.
    #[error( "Module name '{name}' is ambiguous, candidates: {candidates:?}" )]
    AmbiguousName { name: String, candidates: Vec<ModuleKey> },
    /// A signature refers to a type that is neither registered nor the wildcard.
    #[error( "Signature type {0} is not registered" )] UnregisteredValueType( ModuleKey ),
    /// A legacy port kind other than `input` or `output`.
    #[error( "Unknown port kind '{0}', expected 'input' or 'output'" )] UnknownPortKind( String ),
}

impl RegistryError {
    pub(crate) fn missing_module( key: &ModuleKey ) -> Self {
        Self::MissingModulePackage { package: key.package().to_string(), name: key.name().to_string() }
    }
}

/// Catalog of module types, their ports and their inheritance.
///
/// ```
/// use module_registry::{ Endpoint, ModuleKey, ModuleOptions, ModuleRegistry, Signature };
///
/// # fn main() -> Result<(), module_registry::RegistryError> {
/// let mut registry = ModuleRegistry::new();
/// let root = registry.root().clone();
///
/// let number = ModuleKey::new( "math", "Number" );
/// let integer = ModuleKey::new( "math", "Integer" );
/// registry.add_module( number.clone(), &root, ModuleOptions::new() )?;
/// registry.add_module( integer.clone(), &number, ModuleOptions::new() )?;
///
/// let sink = registry.add_input_port( &number, "value", Signature::single( number.clone() ), false, None )?;
/// let source = registry.add_output_port( &integer, "result", Signature::single( integer.clone() ), false )?;
/// assert!( registry.ports_can_connect( &source, &sink ));
/// assert_eq!( sink.endpoint(), Endpoint::Destination );
///
/// let hierarchy = registry.get_module_hierarchy( &integer )?;
/// assert_eq!( hierarchy.iter().map(| d | d.name() ).collect::<Vec<_>>(), [ "Integer", "Number", "Module" ]);
/// # Ok(())
/// # }
/// ```
#[derive( Debug )]
pub struct ModuleRegistry {
    config: RegistryConfig,
    tree: HierarchyTree,
    packages: HashMap<String, Vec<String>>,
    legacy_names: Mutex<HashMap<String, ModuleKey>>,
    events: EventBus,
}

impl ModuleRegistry {

    /// Creates a registry holding only the default root type.
    pub fn new() -> Self { Self::with_config( RegistryConfig::default() ) }

    /// Creates a registry holding only the root type named by `config`.
    pub fn with_config( config: RegistryConfig ) -> Self {
        let root = config.root();
        let packages = HashMap::from([( root.package().to_string(), vec![ root.name().to_string() ])]);
        Self {
            tree: HierarchyTree::new( root ),
            packages,
            config,
            legacy_names: Mutex::default(),
            events: EventBus::default(),
        }
    }

    /// The well-known types this registry was created with.
    #[inline] pub fn config( &self ) -> &RegistryConfig { &self.config }
    /// Key of the root type.
    #[inline] pub fn root( &self ) -> &ModuleKey { self.tree.root() }
    /// The underlying hierarchy.
    #[inline] pub fn tree( &self ) -> &HierarchyTree { &self.tree }

    /// Opens a registration session for `package`.
    pub fn session( &mut self, package: impl Into<String> ) -> LoaderSession<'_> {
        LoaderSession::new( self, package.into() )
    }

    /// Returns a receiver for every event committed from now on.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe( &mut self ) -> Receiver<RegistryEvent> { self.events.subscribe() }

    /// Registers `key` as a child of `parent`.
    ///
    /// The options are validated before the hierarchy is touched.
    ///
    /// # Errors
    /// [`RegistryError::InvalidOptions`], or a [`HierarchyError`] when `key`
    /// already exists or `parent` is not registered.
    pub fn add_module( &mut self, key: ModuleKey, parent: &ModuleKey, options: ModuleOptions ) -> Result<&ModuleDescriptor, RegistryError> {
        let ( color, fringe ) = options.resolve_appearance()?;
        let descriptor = self.tree.register( key.clone(), parent )?;
        descriptor.set_abstract( options.is_abstract );
        descriptor.set_color( color );
        descriptor.set_fringe( fringe );
        descriptor.set_configuration_widget( options.configuration_widget );
        descriptor.set_hasher( options.hasher );
        self.packages.entry( key.package().to_string() ).or_default().push( key.name().to_string() );
        tracing::debug!( module = %key, parent = %parent, "Registered module" );
        self.events.publish( &RegistryEvent::ModuleAdded( key ));
        Ok( descriptor )
    }

    /// Registers `key` under the single registered type among `bases`.
    ///
    /// Bases that are not registered module types (mixins) are ignored.
    ///
    /// # Errors
    /// [`RegistryError::EliminateMixinFailure`] if zero or several bases are
    /// registered, otherwise as [`add_module`]( Self::add_module ).
    pub fn add_module_with_bases(
        &mut self,
        key: ModuleKey,
        bases: impl IntoIterator<Item = ModuleKey>,
        options: ModuleOptions,
    ) -> Result<&ModuleDescriptor, RegistryError> {
        let candidates = bases.into_iter()
            .filter(| base | self.tree.contains( base ))
            .unique()
            .collect::<Vec<_>>();
        match <[ModuleKey; 1]>::try_from( candidates ) {
            Ok([ parent ]) => self.add_module( key, &parent, options ),
            Err( candidates ) => Err( RegistryError::EliminateMixinFailure { key, candidates }),
        }
    }

    /// Adds an input port to `key`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered,
    /// [`RegistryError::UnregisteredValueType`] if the signature names an
    /// unknown type and [`RegistryError::Port`] if `key` already defines an
    /// input port called `name`.
    pub fn add_input_port(
        &mut self,
        key: &ModuleKey,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<Port, RegistryError> {
        self.add_port( key, Endpoint::Destination, name, signature, optional, widget_hint )
    }

    /// Adds an output port to `key`.
    ///
    /// # Errors
    /// As [`add_input_port`]( Self::add_input_port ).
    pub fn add_output_port( &mut self, key: &ModuleKey, name: &str, signature: Signature, optional: bool ) -> Result<Port, RegistryError> {
        self.add_port( key, Endpoint::Source, name, signature, optional, None )
    }

    fn add_port(
        &mut self,
        key: &ModuleKey,
        endpoint: Endpoint,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<Port, RegistryError> {
        if !self.tree.contains( key ) { return Err( RegistryError::missing_module( key )) }
        self.check_value_types( &signature )?;
        let entry = self.tree.add_port( key, endpoint, name, signature, optional, widget_hint )?
            .ok_or_else(|| RegistryError::missing_module( key ))?;
        tracing::debug!( module = %key, port = name, %endpoint, signature = %entry.signature(), "Added port" );
        let ( module, port, signature ) = ( key.clone(), name.to_string(), entry.signature().clone() );
        self.events.publish( &match endpoint {
            Endpoint::Destination => RegistryEvent::InputPortAdded { module, port, signature },
            Endpoint::Source => RegistryEvent::OutputPortAdded { module, port, signature },
        });
        Ok( Port::from_entry( name, endpoint, &entry, key.name() ))
    }

    fn check_value_types( &self, signature: &Signature ) -> Result<(), RegistryError> {
        match signature.types().into_iter().find(| value_type | !self.tree.contains( value_type ) && !self.is_wildcard( value_type )) {
            Some( value_type ) => Err( RegistryError::UnregisteredValueType( value_type.clone() )),
            None => Ok(()),
        }
    }

    /// Removes the input port `name` defined on `key` itself.
    ///
    /// Returns `false`, logging a warning, if there is no such port. Ports
    /// inherited from ancestors are never touched.
    pub fn delete_input_port( &mut self, key: &ModuleKey, name: &str ) -> bool {
        self.delete_port( key, Endpoint::Destination, name )
    }

    /// Removes the output port `name` defined on `key` itself.
    ///
    /// Returns `false`, logging a warning, if there is no such port.
    pub fn delete_output_port( &mut self, key: &ModuleKey, name: &str ) -> bool {
        self.delete_port( key, Endpoint::Source, name )
    }

    fn delete_port( &mut self, key: &ModuleKey, endpoint: Endpoint, name: &str ) -> bool {
        let removed = self.tree.remove_port( key, endpoint, name );
        match removed {
            true => tracing::debug!( module = %key, port = name, %endpoint, "Deleted port" ),
            false => tracing::warn!( module = %key, port = name, %endpoint, "Cannot delete port: not defined on this module" ),
        }
        removed
    }

    /// Removes the leaf type `key` and returns its descriptor.
    ///
    /// # Errors
    /// A [`HierarchyError`] if `key` is unknown, is the root or still has children.
    pub fn delete_module( &mut self, key: &ModuleKey ) -> Result<ModuleDescriptor, RegistryError> {
        let descriptor = self.tree.unregister( key )?;
        if let Some( names ) = self.packages.get_mut( key.package() ) {
            names.retain(| name | name != key.name() );
        }
        tracing::debug!( module = %key, "Deleted module" );
        self.events.publish( &RegistryEvent::ModuleDeleted( key.clone() ));
        Ok( descriptor )
    }

    /// Returns `true` if `key` is registered.
    #[inline] pub fn has_module( &self, key: &ModuleKey ) -> bool { self.tree.contains( key ) }

    /// The descriptor of `key`, if registered.
    #[inline] pub fn get_descriptor( &self, key: &ModuleKey ) -> Option<&ModuleDescriptor> { self.tree.get( key ) }

    pub(crate) fn descriptor( &self, key: &ModuleKey ) -> Result<&ModuleDescriptor, RegistryError> {
        self.tree.get( key ).ok_or_else(|| {
            tracing::debug!( module = %key, "Module is not registered" );
            RegistryError::missing_module( key )
        })
    }

    /// The descriptor of `name` in `package`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if the package was never
    /// loaded or does not define `name`.
    pub fn get_descriptor_by_name( &self, package: &str, name: &str ) -> Result<&ModuleDescriptor, RegistryError> {
        if !self.packages.contains_key( package ) {
            tracing::debug!( package, module = name, "Cannot find package: it is not loaded" );
            return Err( RegistryError::MissingModulePackage { package: package.to_string(), name: name.to_string() });
        }
        self.descriptor( &ModuleKey::new( package, name ))
    }

    /// Descriptors from `key` up to and including the root.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_module_hierarchy( &self, key: &ModuleKey ) -> Result<Vec<&ModuleDescriptor>, RegistryError> {
        let descriptor = self.descriptor( key )?;
        Ok( self.tree.ancestors( descriptor.key() ).collect() )
    }

    /// Parses a canonical signature string and checks that every type in it
    /// is registered or is the wildcard.
    ///
    /// # Errors
    /// [`RegistryError::SignatureParse`] or [`RegistryError::UnregisteredValueType`].
    pub fn signature_from_sigstring( &self, text: &str ) -> Result<Signature, RegistryError> {
        let signature = Signature::from_sigstring( text )?;
        self.check_value_types( &signature )?;
        Ok( signature )
    }

    /// Returns `true` if every entry of `signature` is the constant type or
    /// one of its descendants, so the port can be set as a parameter.
    pub fn is_method_like( &self, signature: &Signature ) -> bool {
        signature.entries().all(| entry | self.is_same_or_ancestor( self.config.constant(), entry.value_type() ))
    }

    /// See [`compatibility::are_specs_matched`].
    pub fn are_specs_matched( &self, super_signature: &Signature, sub: &Signature ) -> bool {
        compatibility::are_specs_matched( self, super_signature, sub )
    }

    /// See [`compatibility::can_connect`].
    pub fn ports_can_connect( &self, a: &Port, b: &Port ) -> bool { compatibility::can_connect( self, a, b ) }

    /// See [`compatibility::is_port_sub_type`].
    pub fn is_port_sub_type( &self, super_port: &Port, sub: &Port ) -> bool {
        compatibility::is_port_sub_type( self, super_port, sub )
    }

    /// Box color registered for `key`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_module_color( &self, key: &ModuleKey ) -> Result<Option<&ModuleColor>, RegistryError> {
        Ok( self.descriptor( key )?.color() )
    }

    /// Box fringe registered for `key`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_module_fringe( &self, key: &ModuleKey ) -> Result<Option<&ModuleFringe>, RegistryError> {
        Ok( self.descriptor( key )?.fringe() )
    }

    /// Configuration widget hint registered for `key`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_configuration_widget( &self, key: &ModuleKey ) -> Result<Option<&str>, RegistryError> {
        Ok( self.descriptor( key )?.configuration_widget() )
    }

    /// Package that registered `key`.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_module_package( &self, key: &ModuleKey ) -> Result<&str, RegistryError> {
        Ok( self.descriptor( key )?.package() )
    }

    /// Cache signature of a configured module instance.
    ///
    /// Uses the hasher registered for the module's type, falling back to the
    /// structural hash when there is none or the type is not registered.
    pub fn module_signature( &self, module: &ModuleConfiguration ) -> u64 {
        match self.tree.get( &module.key ).and_then( ModuleDescriptor::hasher ) {
            Some( hasher ) => hasher.module_signature( module ),
            None => StructuralHasher.module_signature( module ),
        }
    }

    /// Identifiers of every package with an entry in the package index, sorted.
    pub fn packages( &self ) -> Vec<&str> {
        self.packages.keys().map( String::as_str ).sorted().collect()
    }

    /// Records `package` as loaded, even if it registered no types.
    pub(crate) fn mark_package_loaded( &mut self, package: &str ) {
        self.packages.entry( package.to_string() ).or_default();
    }

    /// Names of the types `package` registered, in registration order.
    pub fn package_modules( &self, package: &str ) -> Option<&[String]> {
        self.packages.get( package ).map( Vec::as_slice )
    }

}

impl Default for ModuleRegistry {
    fn default() -> Self { Self::new() }
}

/// Deep copy of the hierarchy, package index, configuration and legacy name
/// cache. The copy starts with no subscribers.
impl Clone for ModuleRegistry {
    fn clone( &self ) -> Self {
        Self {
            config: self.config.clone(),
            tree: self.tree.clone(),
            packages: self.packages.clone(),
            legacy_names: Mutex::new( self.legacy_names.lock().clone() ),
            events: EventBus::default(),
        }
    }
}

impl TypeLattice for ModuleRegistry {
    fn is_wildcard( &self, key: &ModuleKey ) -> bool { key == self.config.wildcard() }

    fn is_same_or_ancestor( &self, ancestor: &ModuleKey, descendant: &ModuleKey ) -> bool {
        ancestor == descendant || self.tree.ancestors( descendant ).any(| descriptor | descriptor.key() == ancestor )
    }
}
