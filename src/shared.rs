//! Cross-thread access to a registry.
//!
//! The registry is mutated by package loaders and the editor on one control
//! thread while readers, such as an execution engine validating a pipeline,
//! may run elsewhere. [`SharedRegistry`] puts the whole registry behind one
//! reader-writer lock; a worker that needs a stable view for a long time takes
//! a [`snapshot`]( SharedRegistry::snapshot ) instead of holding the lock.

use std::sync::Arc ;
use parking_lot::{ RwLock, RwLockReadGuard, RwLockWriteGuard };

use crate::registry::ModuleRegistry ;



/// A handle to a registry shared between threads.
///
/// Cloning the handle shares the same registry.
///
/// ```
/// use module_registry::{ ModuleKey, ModuleOptions, SharedRegistry };
///
/// let shared = SharedRegistry::default();
/// let snapshot = shared.snapshot();
///
/// let root = shared.read().root().clone();
/// shared.write().add_module( ModuleKey::new( "pkg", "Source" ), &root, ModuleOptions::new() ).unwrap();
///
/// assert!( shared.read().has_module( &ModuleKey::new( "pkg", "Source" )));
/// assert!( !snapshot.has_module( &ModuleKey::new( "pkg", "Source" )));
/// ```
#[derive( Debug, Clone, Default )]
pub struct SharedRegistry {
    inner: Arc<RwLock<ModuleRegistry>>,
}

impl SharedRegistry {

    /// Shares `registry`.
    pub fn new( registry: ModuleRegistry ) -> Self {
        Self { inner: Arc::new( RwLock::new( registry )) }
    }

    /// Locks the registry for reading. Any number of readers may hold the lock.
    pub fn read( &self ) -> RwLockReadGuard<'_, ModuleRegistry> { self.inner.read() }

    /// Locks the registry for writing, waiting for readers to finish.
    pub fn write( &self ) -> RwLockWriteGuard<'_, ModuleRegistry> { self.inner.write() }

    /// An independent copy of the registry's current state.
    pub fn snapshot( &self ) -> ModuleRegistry { self.inner.read().clone() }

}

impl From<ModuleRegistry> for SharedRegistry {
    fn from( registry: ModuleRegistry ) -> Self { Self::new( registry ) }
}
