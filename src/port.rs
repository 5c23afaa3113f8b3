//! Port types.
//!
//! A module type owns its ports in two maps, one per [`Endpoint`]. Each stored
//! [`PortEntry`] carries the port's signature and registration metadata. The
//! registry hands out [`Port`] values as a self-contained view of a port for
//! the editor: the owning module's name, the endpoint and the sort key travel
//! with the signature.

use crate::module_function::{ ModuleFunction, ModuleParam };
use crate::signature::Signature ;



/// Which side of a module a port sits on.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum Endpoint {
    /// An output port: produces values.
    Source,
    /// An input port: consumes values.
    Destination,
}

impl Endpoint {
    /// The endpoint a connection from this one must end on.
    #[inline] pub fn opposite( self ) -> Self { match self {
        Self::Source => Self::Destination,
        Self::Destination => Self::Source,
    }}
}

impl std::fmt::Display for Endpoint {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        match self {
            Self::Source => write!( f, "output" ),
            Self::Destination => write!( f, "input" ),
        }
    }
}

/// A port as stored on its owning module descriptor.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PortEntry {
    pub(crate) signature: Signature,
    pub(crate) optional: bool,
    pub(crate) sort_key: usize,
    pub(crate) widget_hint: Option<String>,
}

impl PortEntry {

    /// The port's signature.
    #[inline] pub fn signature( &self ) -> &Signature { &self.signature }

    /// Whether the port may be left unconnected.
    #[inline] pub fn is_optional( &self ) -> bool { self.optional }

    /// Registration order of the port on its side of the module, starting at 1.
    #[inline] pub fn sort_key( &self ) -> usize { self.sort_key }

    /// Configuration widget hint. Only destination ports carry one.
    #[inline] pub fn widget_hint( &self ) -> Option<&str> { self.widget_hint.as_deref() }

}

/// A port of a module type, as seen by the editor.
///
/// Returned by the registry's port listings. It can also be built directly
/// with [`Port::new`] when a port has to be described before it is registered,
/// e.g. while importing old workflows.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Port {
    name: String,
    endpoint: Endpoint,
    signature: Signature,
    optional: bool,
    module_name: String,
    sort_key: usize,
}

impl Port {

    /// Creates a standalone, required port with no owning module.
    pub fn new( name: impl Into<String>, endpoint: Endpoint, signature: Signature ) -> Self {
        Self {
            name: name.into(),
            endpoint,
            signature,
            optional: false,
            module_name: String::new(),
            sort_key: 0,
        }
    }

    pub(crate) fn from_entry( name: &str, endpoint: Endpoint, entry: &PortEntry, module_name: &str ) -> Self {
        Self {
            name: name.to_string(),
            endpoint,
            signature: entry.signature.clone(),
            optional: entry.optional,
            module_name: module_name.to_string(),
            sort_key: entry.sort_key,
        }
    }

    /// Marks the port as optional.
    pub fn with_optional( mut self, optional: bool ) -> Self {
        self.optional = optional ;
        self
    }

    /// Port name, unique per module type and endpoint.
    #[inline] pub fn name( &self ) -> &str { &self.name }
    /// Which side of the module the port sits on.
    #[inline] pub fn endpoint( &self ) -> Endpoint { self.endpoint }
    /// The port's signature.
    #[inline] pub fn signature( &self ) -> &Signature { &self.signature }
    /// Whether the port may be left unconnected.
    #[inline] pub fn is_optional( &self ) -> bool { self.optional }
    /// Name of the module type that defines the port. Empty for standalone ports.
    #[inline] pub fn module_name( &self ) -> &str { &self.module_name }
    /// Registration order of the port on its module.
    #[inline] pub fn sort_key( &self ) -> usize { self.sort_key }

    /// Describes how this port is set as a function on a module.
    ///
    /// Output ports yield a function returning the first entry's type.
    /// Input ports yield one parameter per signature entry, named by the
    /// entry's description.
    pub fn module_function( &self ) -> ModuleFunction {
        match self.endpoint {
            Endpoint::Source => ModuleFunction {
                return_type: Some( self.signature.first().value_type().name().to_string() ),
                ..ModuleFunction::new( &self.name )
            },
            Endpoint::Destination => self.signature.entries().fold(
                ModuleFunction::new( &self.name ),
                | function, entry | function.with_param( ModuleParam::new( entry.value_type().name(), entry.description() )),
            ),
        }
    }

}
