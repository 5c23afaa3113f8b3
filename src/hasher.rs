//! Module signatures for execution caches.
//!
//! An execution cache decides whether a previously computed result can be
//! reused by comparing module signatures. By default the signature is a
//! structural hash of the module's type and configured functions; a module
//! type may register its own [`ModuleHasher`] instead, for instance to ignore
//! parameters that do not affect its output.

use std::hash::{ DefaultHasher, Hash, Hasher };

use crate::module_function::ModuleConfiguration ;



/// Strategy computing a cache signature from a module's configuration.
///
/// Implemented for any `Fn( &ModuleConfiguration ) -> u64` closure that is
/// `Send + Sync`, so a hasher can be registered inline:
///
/// ```
/// use module_registry::{ ModuleConfiguration, ModuleHasher };
///
/// let by_type_only = | module: &ModuleConfiguration | module.key.name().len() as u64 ;
/// # let module = ModuleConfiguration::new( module_registry::ModuleKey::new( "basic", "Float" ));
/// assert_eq!( by_type_only.module_signature( &module ), 5 );
/// ```
pub trait ModuleHasher: Send + Sync {
    /// Returns the signature of `module`.
    fn module_signature( &self, module: &ModuleConfiguration ) -> u64 ;
}

impl<F> ModuleHasher for F
where
    F: Fn( &ModuleConfiguration ) -> u64 + Send + Sync,
{
    fn module_signature( &self, module: &ModuleConfiguration ) -> u64 { self( module ) }
}

/// Default strategy: hashes the module key and every configured function,
/// parameters and values included, in order.
#[derive( Debug, Clone, Copy, Default )]
pub struct StructuralHasher ;

impl ModuleHasher for StructuralHasher {
    fn module_signature( &self, module: &ModuleConfiguration ) -> u64 {
        let mut hasher = DefaultHasher::new();
        module.hash( &mut hasher );
        hasher.finish()
    }
}
