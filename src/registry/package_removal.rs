use crate::events::RegistryEvent ;
use crate::hierarchy::HierarchyError ;
use crate::module_key::ModuleKey ;
use super::{ ModuleRegistry, RegistryError };



impl ModuleRegistry {

    /// Removes every type registered by `package`, then forgets the package.
    ///
    /// Types are deleted leaves first, so a chain `A1 <- A2 <- A3` inside the
    /// package is removed as `A3`, `A2`, `A1`. Every precondition is checked
    /// before the first deletion: on error the registry is unchanged.
    ///
    /// Returns the keys in the order they were deleted.
    ///
    /// # Errors
    /// - [`RegistryError::MissingModulePackage`] if the package is not loaded.
    /// - [`HierarchyError::RootRemoval`] if the package registered the root type.
    /// - [`HierarchyError::HasChildren`] if a type of another package derives
    ///   from one of the package's types.
    pub fn delete_package( &mut self, package: &str ) -> Result<Vec<ModuleKey>, RegistryError> {
        let order = self.package_removal_order( package )?;
        for key in &order { self.delete_module( key )?; }
        self.packages.remove( package );
        tracing::debug!( package, modules = order.len(), "Deleted package" );
        self.events.publish( &RegistryEvent::PackageDeleted( package.to_string() ));
        Ok( order )
    }

    /// Keys of the package's types in a children-before-parents order.
    fn package_removal_order( &self, package: &str ) -> Result<Vec<ModuleKey>, RegistryError> {
        let names = self.packages.get( package ).ok_or_else(|| RegistryError::MissingModulePackage {
            package: package.to_string(),
            name: String::new(),
        })?;
        let keys = names.iter().map(| name | ModuleKey::new( package, name.as_str() )).collect::<Vec<_>>();

        if keys.contains( self.root() ) {
            return Err( HierarchyError::RootRemoval( self.root().clone() ).into() );
        }
        if let Some(( key, foreign )) = keys.iter()
            .map(| key | ( key, self.tree.children( key ).iter().filter(| child | child.package() != package ).count() ))
            .find(|( _, foreign )| *foreign > 0 )
        {
            return Err( HierarchyError::HasChildren { key: key.clone(), children: foreign }.into() );
        }

        // every child of a package type is in the package, so the subtree
        // under each topmost type holds package types only
        Ok( keys.iter()
            .filter(| key | self.get_descriptor( key ).and_then(| descriptor | descriptor.parent() )
                .is_none_or(| parent | parent.package() != package ))
            .flat_map(| top | {
                let mut subtree = vec![ top.clone() ];
                subtree.extend( self.tree.descendants( top ).into_iter().cloned() );
                subtree.into_iter().rev()
            })
            .collect() )
    }

}
