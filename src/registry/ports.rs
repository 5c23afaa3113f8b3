use std::collections::HashMap ;
use itertools::Itertools ;

use crate::descriptor::ModuleDescriptor ;
use crate::module_function::ModuleFunction ;
use crate::module_key::ModuleKey ;
use crate::port::{ Endpoint, Port, PortEntry };
use crate::signature::Signature ;
use super::{ ModuleRegistry, RegistryError };



/// Order of ports in a listing.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Default )]
pub enum PortOrder {
    /// Alphabetical by port name.
    #[default] Name,
    /// In the order the ports were registered.
    Registration,
}

/// The ports one level of a hierarchy defines itself.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PortGroup {
    /// Name of the module type at this level.
    pub module_name: String,
    /// The ports that type defines, not including inherited ones.
    pub ports: Vec<Port>,
}

/// The settable methods one level of a hierarchy defines itself.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct MethodGroup {
    /// Name of the module type at this level.
    pub module_name: String,
    /// Method-like input ports of that type, by port name.
    pub methods: HashMap<String, ModuleFunction>,
}

impl ModuleRegistry {

    /// The output ports `descriptor` defines itself.
    pub fn source_ports_from_descriptor( &self, descriptor: &ModuleDescriptor, order: PortOrder ) -> Vec<Port> {
        ports_of( descriptor, Endpoint::Source, order )
    }

    /// The input ports `descriptor` defines itself.
    pub fn destination_ports_from_descriptor( &self, descriptor: &ModuleDescriptor, order: PortOrder ) -> Vec<Port> {
        ports_of( descriptor, Endpoint::Destination, order )
    }

    /// Output ports of `key` and its ancestors, one group per level, most derived first.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn all_source_ports( &self, key: &ModuleKey, order: PortOrder ) -> Result<Vec<PortGroup>, RegistryError> {
        self.port_groups( key, Endpoint::Source, order )
    }

    /// Input ports of `key` and its ancestors, one group per level, most derived first.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn all_destination_ports( &self, key: &ModuleKey, order: PortOrder ) -> Result<Vec<PortGroup>, RegistryError> {
        self.port_groups( key, Endpoint::Destination, order )
    }

    fn port_groups( &self, key: &ModuleKey, endpoint: Endpoint, order: PortOrder ) -> Result<Vec<PortGroup>, RegistryError> {
        Ok( self.get_module_hierarchy( key )?.into_iter()
            .map(| descriptor | PortGroup {
                module_name: descriptor.name().to_string(),
                ports: ports_of( descriptor, endpoint, order ),
            })
            .collect() )
    }

    /// Input ports of `key` whose signature is method-like, inherited ones
    /// included. A port redefined lower in the hierarchy hides the ancestor's.
    /// Ports of the most derived type come first, each level in registration order.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn method_ports( &self, key: &ModuleKey ) -> Result<Vec<Port>, RegistryError> {
        Ok( self.get_module_hierarchy( key )?.into_iter()
            .flat_map(| descriptor | ports_of( descriptor, Endpoint::Destination, PortOrder::Registration ))
            .unique_by(| port | port.name().to_string() )
            .filter(| port | self.is_method_like( port.signature() ))
            .collect() )
    }

    fn own_method_ports( &self, descriptor: &ModuleDescriptor ) -> Vec<Port> {
        ports_of( descriptor, Endpoint::Destination, PortOrder::Registration ).into_iter()
            .filter(| port | self.is_method_like( port.signature() ))
            .collect()
    }

    /// Every method a user can set on `key`: for each level of its hierarchy,
    /// most derived first, the functions built from that level's method ports.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn user_set_methods( &self, key: &ModuleKey ) -> Result<Vec<MethodGroup>, RegistryError> {
        Ok( self.get_module_hierarchy( key )?.into_iter()
            .map(| descriptor | MethodGroup {
                module_name: descriptor.name().to_string(),
                methods: self.own_method_ports( descriptor ).into_iter()
                    .map(| port | ( port.name().to_string(), port.module_function() ))
                    .collect(),
            })
            .collect() )
    }

    /// Signature of the input port `port` on `key`, taken from the most
    /// derived type of its hierarchy that defines it. `Ok( None )` if none does.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_input_port_spec( &self, key: &ModuleKey, port: &str ) -> Result<Option<&Signature>, RegistryError> {
        self.port_spec( key, Endpoint::Destination, port )
    }

    /// Signature of the output port `port` on `key` or its nearest ancestor defining it.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_output_port_spec( &self, key: &ModuleKey, port: &str ) -> Result<Option<&Signature>, RegistryError> {
        self.port_spec( key, Endpoint::Source, port )
    }

    fn port_spec( &self, key: &ModuleKey, endpoint: Endpoint, port: &str ) -> Result<Option<&Signature>, RegistryError> {
        Ok( self.get_module_hierarchy( key )?.into_iter()
            .find_map(| descriptor | descriptor.ports( endpoint ).get( port ))
            .map( PortEntry::signature ))
    }

    /// Returns `true` if `key` itself defines the input port `port`.
    pub fn has_input_port( &self, key: &ModuleKey, port: &str ) -> bool {
        self.get_descriptor( key ).is_some_and(| descriptor | descriptor.input_port( port ).is_some() )
    }

    /// Returns `true` if `key` itself defines the output port `port`.
    pub fn has_output_port( &self, key: &ModuleKey, port: &str ) -> bool {
        self.get_descriptor( key ).is_some_and(| descriptor | descriptor.output_port( port ).is_some() )
    }

    /// Configuration widget hint of the input port `port` defined on `key` itself.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if `key` is not registered.
    pub fn get_port_configure_widget_type( &self, key: &ModuleKey, port: &str ) -> Result<Option<&str>, RegistryError> {
        Ok( self.descriptor( key )?.input_port_widget( port ))
    }

}

fn ports_of( descriptor: &ModuleDescriptor, endpoint: Endpoint, order: PortOrder ) -> Vec<Port> {
    let entries = descriptor.ports( endpoint ).iter();
    let entries = match order {
        PortOrder::Name => entries.sorted_by(|( a, _ ), ( b, _ )| a.cmp( b )),
        PortOrder::Registration => entries.sorted_by_key(|( _, entry )| entry.sort_key() ),
    };
    entries
        .map(|( name, entry )| Port::from_entry( name, endpoint, entry, descriptor.name() ))
        .collect()
}
