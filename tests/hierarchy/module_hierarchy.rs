use std::collections::HashSet ;
use module_registry::{ ModuleKey, RegistryError };

#[test]
fn module_hierarchy_ends_at_root_without_duplicates() {

    let registry = fixture_registry!();

    for key in registry.tree().keys() {
        let hierarchy = registry.get_module_hierarchy( key ).unwrap();
        assert_eq!( hierarchy.first().map(| descriptor | descriptor.key() ), Some( key ));
        assert_eq!( hierarchy.last().map(| descriptor | descriptor.key() ), Some( registry.root() ));

        let unique = hierarchy.iter().map(| descriptor | descriptor.key() ).collect::<HashSet<_>>();
        assert_eq!( unique.len(), hierarchy.len() );
    }

}

#[test]
fn module_hierarchy_length_is_depth() {

    let registry = fixture_registry!();

    let names = | key: &ModuleKey | registry.get_module_hierarchy( key ).unwrap().iter()
        .map(| descriptor | descriptor.name().to_string() )
        .collect::<Vec<_>>();

    assert_eq!( names( &basic!( "Module" )), [ "Module" ]);
    assert_eq!( names( &basic!( "Variant" )), [ "Variant", "Module" ]);
    assert_eq!( names( &basic!( "Integer" )), [ "Integer", "Float", "Constant", "Module" ]);

}

#[test]
fn module_hierarchy_of_unknown_type_fails() {

    let registry = fixture_registry!();

    assert!( matches!(
        registry.get_module_hierarchy( &ModuleKey::new( "org.example", "Ghost" )),
        Err( RegistryError::MissingModulePackage { .. }),
    ));
    assert_eq!( registry.tree().ancestors( &ModuleKey::new( "org.example", "Ghost" )).count(), 0 );

}
