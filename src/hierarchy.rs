//! The module type hierarchy.
//!
//! [`HierarchyTree`] is an arena of [`ModuleDescriptor`]s keyed by
//! [`ModuleKey`]. Every node stores its parent's key and the ordered keys of
//! its children, so navigation in either direction is a map lookup and no
//! node holds a reference into another. The tree has exactly one root, the
//! base module type, and single inheritance: each other type has exactly one
//! parent.
//!
//! Cloning the tree yields a fully independent copy. Descriptors are copied
//! by value; only custom hashers, which are immutable strategies, are shared.

use std::collections::HashMap ;
use thiserror::Error ;

use crate::descriptor::{ ModuleDescriptor, PortError };
use crate::module_key::ModuleKey ;
use crate::port::{ Endpoint, PortEntry };
use crate::signature::Signature ;



/// Structural errors of the hierarchy.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum HierarchyError {
    /// A type with this key is already registered.
    #[error( "Module {0} already exists" )] AlreadyExists( ModuleKey ),
    /// The requested parent is not registered.
    #[error( "Cannot register {child}: parent {parent} is not registered" )]
    MissingParent { child: ModuleKey, parent: ModuleKey },
    /// The type still has children and cannot be removed.
    #[error( "Module {key} still has {children} child type(s)" )]
    HasChildren { key: ModuleKey, children: usize },
    /// The root type can never be removed.
    #[error( "The root module {0} cannot be removed" )] RootRemoval( ModuleKey ),
    /// No type with this key is registered.
    #[error( "Module {0} is not registered" )] NotRegistered( ModuleKey ),
}

#[derive( Debug, Clone )]
struct TreeNode {
    descriptor: ModuleDescriptor,
    children: Vec<ModuleKey>,
}

/// Single-rooted tree of module type descriptors.
#[derive( Debug, Clone )]
pub struct HierarchyTree {
    root: ModuleKey,
    nodes: HashMap<ModuleKey, TreeNode>,
}

impl HierarchyTree {

    /// Creates a tree holding only the root type.
    pub fn new( root: ModuleKey ) -> Self {
        let descriptor = ModuleDescriptor::new( root.clone(), None, 0 );
        let nodes = HashMap::from([( root.clone(), TreeNode { descriptor, children: Vec::new() })]);
        Self { root, nodes }
    }

    /// Key of the root type.
    #[inline] pub fn root( &self ) -> &ModuleKey { &self.root }

    /// Number of registered types, root included.
    #[inline] pub fn len( &self ) -> usize { self.nodes.len() }

    /// Always `false`: the root is registered for the tree's whole lifetime.
    #[inline] pub fn is_empty( &self ) -> bool { self.nodes.is_empty() }

    /// Returns `true` if `key` is registered.
    #[inline] pub fn contains( &self, key: &ModuleKey ) -> bool { self.nodes.contains_key( key ) }

    /// The descriptor registered under `key`.
    pub fn get( &self, key: &ModuleKey ) -> Option<&ModuleDescriptor> {
        self.nodes.get( key ).map(| node | &node.descriptor )
    }

    pub(crate) fn get_mut( &mut self, key: &ModuleKey ) -> Option<&mut ModuleDescriptor> {
        self.nodes.get_mut( key ).map(| node | &mut node.descriptor )
    }

    /// Every registered key, in no particular order.
    pub fn keys( &self ) -> impl Iterator<Item = &ModuleKey> { self.nodes.keys() }

    /// Keys of the direct children of `key`, in registration order.
    pub fn children( &self, key: &ModuleKey ) -> &[ModuleKey] {
        self.nodes.get( key ).map(| node | node.children.as_slice() ).unwrap_or_default()
    }

    /// Keys of every type below `key`, depth first, parents before children.
    /// `key` itself is not included.
    pub fn descendants( &self, key: &ModuleKey ) -> Vec<&ModuleKey> {
        let mut found = Vec::new();
        let mut pending: Vec<&ModuleKey> = self.children( key ).iter().rev().collect();
        while let Some( next ) = pending.pop() {
            found.push( next );
            pending.extend( self.children( next ).iter().rev() );
        }
        found
    }

    /// Inserts a new type `key` as the last child of `parent`.
    ///
    /// `key` must be new and `parent` must already be registered. The new
    /// descriptor starts with no ports of its own and inherits the parent's
    /// cumulative port count. Returns it for further configuration.
    ///
    /// # Errors
    /// [`HierarchyError::AlreadyExists`] or [`HierarchyError::MissingParent`].
    pub fn register( &mut self, key: ModuleKey, parent: &ModuleKey ) -> Result<&mut ModuleDescriptor, HierarchyError> {
        if self.nodes.contains_key( &key ) {
            return Err( HierarchyError::AlreadyExists( key ));
        }
        let parent_node = self.nodes.get_mut( parent )
            .ok_or_else(|| HierarchyError::MissingParent { child: key.clone(), parent: parent.clone() })?;
        parent_node.children.push( key.clone() );
        let descriptor = ModuleDescriptor::new( key.clone(), Some( parent.clone() ), parent_node.descriptor.port_count() );
        Ok( &mut self.nodes.entry( key ).or_insert( TreeNode { descriptor, children: Vec::new() }).descriptor )
    }

    /// Removes the leaf type `key`, returning its descriptor.
    ///
    /// # Errors
    /// [`HierarchyError::NotRegistered`], [`HierarchyError::RootRemoval`] or
    /// [`HierarchyError::HasChildren`]. The tree is unchanged on error.
    pub fn unregister( &mut self, key: &ModuleKey ) -> Result<ModuleDescriptor, HierarchyError> {
        let node = self.nodes.get( key ).ok_or_else(|| HierarchyError::NotRegistered( key.clone() ))?;
        if *key == self.root {
            return Err( HierarchyError::RootRemoval( key.clone() ));
        }
        if !node.children.is_empty() {
            return Err( HierarchyError::HasChildren { key: key.clone(), children: node.children.len() });
        }
        let node = self.nodes.remove( key ).ok_or_else(|| HierarchyError::NotRegistered( key.clone() ))?;
        if let Some( parent ) = node.descriptor.parent().and_then(| parent | self.nodes.get_mut( parent )) {
            parent.children.retain(| child | child != key );
        }
        Ok( node.descriptor )
    }

    /// Walks from `key` up to and including the root.
    ///
    /// Yields nothing if `key` is not registered.
    pub fn ancestors<'a>( &'a self, key: &ModuleKey ) -> Ancestors<'a> {
        Ancestors { tree: self, next: self.get( key ) }
    }

    /// Adds a port to `key` and raises the cumulative port count of `key` and
    /// every type below it.
    ///
    /// # Errors
    /// [`PortError::DuplicatePort`] if `key` already defines the port on that side.
    pub(crate) fn add_port(
        &mut self,
        key: &ModuleKey,
        endpoint: Endpoint,
        name: &str,
        signature: Signature,
        optional: bool,
        widget_hint: Option<String>,
    ) -> Result<Option<PortEntry>, PortError> {
        let Some( descriptor ) = self.get_mut( key ) else { return Ok( None ) };
        let entry = match endpoint {
            Endpoint::Destination => descriptor.add_input_port( name, signature, optional, widget_hint )?,
            Endpoint::Source => descriptor.add_output_port( name, signature, optional )?,
        }.clone();
        self.propagate_port_count( key, 1 );
        Ok( Some( entry ))
    }

    /// Removes a port defined on `key` itself and lowers the cumulative port
    /// counts accordingly. Returns `false` if `key` defines no such port.
    pub(crate) fn remove_port( &mut self, key: &ModuleKey, endpoint: Endpoint, name: &str ) -> bool {
        let removed = self.get_mut( key ).is_some_and(| descriptor | descriptor.remove_port( endpoint, name ));
        if removed { self.propagate_port_count( key, -1 ) }
        removed
    }

    fn propagate_port_count( &mut self, key: &ModuleKey, delta: isize ) {
        let affected = std::iter::once( key.clone() )
            .chain( self.descendants( key ).into_iter().cloned() )
            .collect::<Vec<_>>();
        for affected in &affected {
            if let Some( node ) = self.nodes.get_mut( affected ) { node.descriptor.adjust_port_count( delta ) }
        }
    }

}

/// Iterator over a type and its ancestors, most derived first.
///
/// Created by [`HierarchyTree::ancestors`].
#[derive( Debug, Clone )]
pub struct Ancestors<'a> {
    tree: &'a HierarchyTree,
    next: Option<&'a ModuleDescriptor>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ModuleDescriptor ;

    fn next( &mut self ) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().and_then(| parent | self.tree.get( parent ));
        Some( current )
    }
}
