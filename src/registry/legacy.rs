//! Resolution of bare module names found in old saved workflows, which
//! predate packages and name types without one.

use crate::descriptor::ModuleDescriptor ;
use crate::module_key::ModuleKey ;
use crate::port::{ Endpoint, Port };
use crate::signature::{ Signature, SignatureParseError };
use super::{ ModuleRegistry, RegistryError };



/// Package reported when a bare name matches no registered type.
pub const UNKNOWN_PACKAGE: &str = "<unknown package>" ;

impl ModuleRegistry {

    /// Resolves a module name without a package.
    ///
    /// Succeeds only if exactly one registered type has that name. Successful
    /// resolutions are cached; a cached type that has since been deleted is
    /// resolved again.
    ///
    /// # Errors
    /// [`RegistryError::MissingModulePackage`] if no type has that name and
    /// [`RegistryError::AmbiguousName`] if several do.
    pub fn get_descriptor_from_name_only( &self, name: &str ) -> Result<&ModuleDescriptor, RegistryError> {
        let mut cache = self.legacy_names.lock();
        if let Some( descriptor ) = cache.get( name ).and_then(| key | self.tree.get( key )) {
            return Ok( descriptor );
        }
        cache.remove( name );

        let mut matches = self.tree.keys().filter(| key | key.name() == name ).collect::<Vec<_>>();
        match matches.len() {
            0 => {
                tracing::debug!( module = name, "No registered module has this name" );
                Err( RegistryError::MissingModulePackage { package: UNKNOWN_PACKAGE.to_string(), name: name.to_string() })
            },
            1 => {
                let key = matches[ 0 ];
                cache.insert( name.to_string(), key.clone() );
                self.descriptor( key )
            },
            _ => {
                matches.sort();
                Err( RegistryError::AmbiguousName { name: name.to_string(), candidates: matches.into_iter().cloned().collect() })
            },
        }
    }

    /// Builds a port from an old-style description: a kind (`input` or
    /// `output`) and a signature of bare names such as `(Float,Integer)`.
    ///
    /// # Errors
    /// [`RegistryError::UnknownPortKind`], [`RegistryError::SignatureParse`]
    /// for a malformed signature, or any error of
    /// [`get_descriptor_from_name_only`]( Self::get_descriptor_from_name_only ).
    pub fn port_from_legacy_spec( &self, name: &str, kind: &str, signature: &str ) -> Result<Port, RegistryError> {
        let endpoint = match kind {
            "input" => Endpoint::Destination,
            "output" => Endpoint::Source,
            other => return Err( RegistryError::UnknownPortKind( other.to_string() )),
        };
        let inner = signature.trim()
            .strip_prefix( '(' )
            .and_then(| rest | rest.strip_suffix( ')' ))
            .ok_or_else(|| SignatureParseError::MissingParentheses( signature.to_string() ))?;
        if inner.trim().is_empty() {
            return Err( SignatureParseError::Empty( signature.to_string() ).into() );
        }
        let types = inner.split( ',' )
            .map(| item | self.get_descriptor_from_name_only( item.trim() ).map(| descriptor | descriptor.key().clone() ))
            .collect::<Result<Vec<ModuleKey>, _>>()?;
        Signature::from_types( types )
            .map(| signature | Port::new( name, endpoint, signature ))
            .ok_or_else(|| SignatureParseError::Empty( signature.to_string() ).into() )
    }

}
