//! Change notifications.
//!
//! Editors keep palettes and port lists in sync with the registry by
//! subscribing to [`RegistryEvent`]s. Each subscriber gets its own unbounded
//! channel; events are sent after the mutation they describe has been
//! committed and arrive in mutation order.

use crossbeam_channel::{ Receiver, Sender };

use crate::module_key::ModuleKey ;
use crate::signature::Signature ;



/// A committed change to a [`ModuleRegistry`]( crate::ModuleRegistry ).
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum RegistryEvent {
    /// A module type became available.
    ModuleAdded( ModuleKey ),
    /// A module type was removed.
    ModuleDeleted( ModuleKey ),
    /// Every type of the package was removed and the package forgotten.
    PackageDeleted( String ),
    /// An input port was added to a module type.
    InputPortAdded { module: ModuleKey, port: String, signature: Signature },
    /// An output port was added to a module type.
    OutputPortAdded { module: ModuleKey, port: String, signature: Signature },
}

#[derive( Debug, Default )]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<RegistryEvent>>,
}

impl EventBus {

    pub(crate) fn subscribe( &mut self ) -> Receiver<RegistryEvent> {
        let ( sender, receiver ) = crossbeam_channel::unbounded();
        self.subscribers.push( sender );
        receiver
    }

    /// Sends `event` to every live subscriber and forgets the ones whose receiver was dropped.
    pub(crate) fn publish( &mut self, event: &RegistryEvent ) {
        let before = self.subscribers.len();
        self.subscribers.retain(| subscriber | subscriber.send( event.clone() ).is_ok() );
        if self.subscribers.len() < before {
            tracing::trace!( dropped = before - self.subscribers.len(), "Pruned disconnected registry subscribers" );
        }
    }

}
