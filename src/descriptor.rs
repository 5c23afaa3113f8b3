//! Module type descriptors.
//!
//! A [`ModuleDescriptor`] holds everything the registry knows about one module
//! type: its key, its parent in the hierarchy, the ports it defines itself and
//! its registration options. Ports inherited from ancestors are not copied
//! onto the descriptor; they are found by walking the hierarchy.
//!
//! The cumulative port count is the exception: it includes every ancestor's
//! ports so that [`is_abstract`]( ModuleDescriptor::is_abstract ) does not need
//! a hierarchy walk. The [`HierarchyTree`]( crate::HierarchyTree ) keeps it up
//! to date when ports are added or removed anywhere up the chain.

use std::collections::HashMap ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::appearance::{ ModuleColor, ModuleFringe };
use crate::hasher::ModuleHasher ;
use crate::module_key::ModuleKey ;
use crate::port::{ Endpoint, PortEntry };
use crate::signature::Signature ;



/// Error produced when adding a port to a descriptor.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum PortError {
    /// The descriptor already defines a port with this name on this side.
    #[error( "{module}: {endpoint} port '{port}' already exists, port overloading is not supported" )]
    DuplicatePort { module: ModuleKey, endpoint: Endpoint, port: String },
}

/// Everything the registry knows about one module type.
#[derive( Clone )]
pub struct ModuleDescriptor {
    key: ModuleKey,
    parent: Option<ModuleKey>,
    input_ports: HashMap<String, PortEntry>,
    output_ports: HashMap<String, PortEntry>,
    port_count: usize,
    is_abstract: bool,
    color: Option<ModuleColor>,
    fringe: Option<ModuleFringe>,
    configuration_widget: Option<String>,
    hasher: Option<Arc<dyn ModuleHasher>>,
}

impl ModuleDescriptor {

    /// Creates a descriptor with no ports and default options.
    ///
    /// `inherited_ports` is the cumulative port count of the parent, or 0 for the root.
    pub(crate) fn new( key: ModuleKey, parent: Option<ModuleKey>, inherited_ports: usize ) -> Self {
        Self {
            key,
            parent,
            input_ports: HashMap::new(),
            output_ports: HashMap::new(),
            port_count: inherited_ports,
            is_abstract: false,
            color: None,
            fringe: None,
            configuration_widget: None,
            hasher: None,
        }
    }

    /// Key of the type.
    #[inline] pub fn key( &self ) -> &ModuleKey { &self.key }
    /// Local name of the type.
    #[inline] pub fn name( &self ) -> &str { self.key.name() }
    /// Identifier of the package that registered the type.
    #[inline] pub fn package( &self ) -> &str { self.key.package() }
    /// Key of the parent type. `None` only for the root.
    #[inline] pub fn parent( &self ) -> Option<&ModuleKey> { self.parent.as_ref() }

    /// Number of ports defined on this type and all of its ancestors.
    #[inline] pub fn port_count( &self ) -> usize { self.port_count }
    /// Returns `true` if this type or any ancestor defines a port.
    #[inline] pub fn has_ports( &self ) -> bool { self.port_count > 0 }

    /// Returns `true` if the type was registered as abstract, or if neither it
    /// nor any of its ancestors defines a port.
    pub fn is_abstract( &self ) -> bool { self.is_abstract || !self.has_ports() }

    /// Box color, if one was registered.
    #[inline] pub fn color( &self ) -> Option<&ModuleColor> { self.color.as_ref() }
    /// Box fringe, if one was registered.
    #[inline] pub fn fringe( &self ) -> Option<&ModuleFringe> { self.fringe.as_ref() }
    /// Configuration widget hint, if one was registered.
    #[inline] pub fn configuration_widget( &self ) -> Option<&str> { self.configuration_widget.as_deref() }
    /// Custom cache signature strategy, if one was registered.
    #[inline] pub fn hasher( &self ) -> Option<&Arc<dyn ModuleHasher>> { self.hasher.as_ref() }

    /// Input ports defined on this type, keyed by name.
    #[inline] pub fn input_ports( &self ) -> &HashMap<String, PortEntry> { &self.input_ports }
    /// Output ports defined on this type, keyed by name.
    #[inline] pub fn output_ports( &self ) -> &HashMap<String, PortEntry> { &self.output_ports }

    /// The ports defined on this type on the given side.
    pub fn ports( &self, endpoint: Endpoint ) -> &HashMap<String, PortEntry> {
        match endpoint {
            Endpoint::Source => &self.output_ports,
            Endpoint::Destination => &self.input_ports,
        }
    }

    /// The input port `name` defined on this type.
    pub fn input_port( &self, name: &str ) -> Option<&PortEntry> { self.input_ports.get( name ) }
    /// The output port `name` defined on this type.
    pub fn output_port( &self, name: &str ) -> Option<&PortEntry> { self.output_ports.get( name ) }

    /// Configuration widget hint of the input port `name` defined on this type.
    pub fn input_port_widget( &self, name: &str ) -> Option<&str> {
        self.input_ports.get( name ).and_then( PortEntry::widget_hint )
    }

    pub(crate) fn set_abstract( &mut self, is_abstract: bool ) { self.is_abstract = is_abstract }
    pub(crate) fn set_color( &mut self, color: Option<ModuleColor> ) { self.color = color }
    pub(crate) fn set_fringe( &mut self, fringe: Option<ModuleFringe> ) { self.fringe = fringe }
    pub(crate) fn set_configuration_widget( &mut self, widget: Option<String> ) { self.configuration_widget = widget }
    pub(crate) fn set_hasher( &mut self, hasher: Option<Arc<dyn ModuleHasher>> ) { self.hasher = hasher }

    /// Adds an input port. Does not touch the port count; see [`HierarchyTree`]( crate::HierarchyTree ).
    pub(crate) fn add_input_port(
        &mut self,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<&PortEntry, PortError> {
        self.insert_port( Endpoint::Destination, name, signature, optional, widget_hint )
    }

    /// Adds an output port. Does not touch the port count; see [`HierarchyTree`]( crate::HierarchyTree ).
    pub(crate) fn add_output_port( &mut self, name: &str, signature: Signature, optional: bool ) -> Result<&PortEntry, PortError> {
        self.insert_port( Endpoint::Source, name, signature, optional, None )
    }

    fn insert_port(
        &mut self,
        endpoint: Endpoint,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<&PortEntry, PortError> {
        let key = &self.key ;
        let ports = match endpoint {
            Endpoint::Source => &mut self.output_ports,
            Endpoint::Destination => &mut self.input_ports,
        };
        if ports.contains_key( name ) {
            return Err( PortError::DuplicatePort { module: key.clone(), endpoint, port: name.to_string() });
        }
        // sort keys keep counting up after deletions so they stay unique per side
        let sort_key = ports.values().map( PortEntry::sort_key ).max().unwrap_or( 0 ) + 1 ;
        Ok( ports.entry( name.to_string() ).or_insert( PortEntry { signature, optional, sort_key, widget_hint }))
    }

    /// Removes a port defined on this type. Returns `false` if there is none.
    pub(crate) fn remove_port( &mut self, endpoint: Endpoint, name: &str ) -> bool {
        match endpoint {
            Endpoint::Source => self.output_ports.remove( name ).is_some(),
            Endpoint::Destination => self.input_ports.remove( name ).is_some(),
        }
    }

    pub(crate) fn adjust_port_count( &mut self, delta: isize ) {
        self.port_count = self.port_count.saturating_add_signed( delta );
    }

}

impl std::fmt::Debug for ModuleDescriptor {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "ModuleDescriptor" )
            .field( "key", &self.key )
            .field( "parent", &self.parent )
            .field( "input_ports", &self.input_ports )
            .field( "output_ports", &self.output_ports )
            .field( "port_count", &self.port_count )
            .field( "is_abstract", &self.is_abstract )
            .field( "color", &self.color )
            .field( "fringe", &self.fringe )
            .field( "configuration_widget", &self.configuration_widget )
            .field( "hasher", &self.hasher.as_ref().map(| _ | "<hasher>" ))
            .finish()
    }
}
