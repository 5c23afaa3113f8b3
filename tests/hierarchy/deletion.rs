use module_registry::{ HierarchyError, ModuleKey, ModuleOptions, RegistryError };

#[test]
fn deletion_of_parent_fails_until_children_are_gone() {

    let mut registry = fixture_registry!();

    match registry.delete_module( &basic!( "Float" )) {
        Err( RegistryError::Hierarchy( HierarchyError::HasChildren { key, children })) => {
            assert_eq!( key, basic!( "Float" ));
            assert_eq!( children, 1 );
        },
        other => panic!( "Expected HasChildren, got {:?}", other ),
    }
    assert!( registry.has_module( &basic!( "Float" )));

    registry.delete_module( &basic!( "Integer" )).unwrap();
    let removed = registry.delete_module( &basic!( "Float" )).unwrap();

    assert_eq!( removed.key(), &basic!( "Float" ));
    assert!( !registry.has_module( &basic!( "Float" )));
    assert_eq!( registry.tree().children( &basic!( "Constant" )), [ basic!( "String" )]);
    assert!( !registry.package_modules( module_registry::DEFAULT_BASIC_PACKAGE ).unwrap().contains( &"Float".to_string() ));

}

#[test]
fn deletion_of_root_fails() {

    let mut registry = module_registry::ModuleRegistry::new();

    assert!( matches!(
        registry.delete_module( &basic!( "Module" )),
        Err( RegistryError::Hierarchy( HierarchyError::RootRemoval( _ ))),
    ));

}

#[test]
fn deletion_of_unknown_type_fails() {

    let mut registry = fixture_registry!();

    assert!( matches!(
        registry.delete_module( &ModuleKey::new( "org.example", "Ghost" )),
        Err( RegistryError::Hierarchy( HierarchyError::NotRegistered( _ ))),
    ));

}

#[test]
fn deletion_frees_the_key() {

    let mut registry = fixture_registry!();
    let mesh = ModuleKey::new( "org.example", "Mesh" );

    registry.add_module( mesh.clone(), &basic!( "Module" ), ModuleOptions::new() ).unwrap();
    registry.delete_module( &mesh ).unwrap();
    registry.add_module( mesh.clone(), &basic!( "Variant" ), ModuleOptions::new() ).unwrap();

    assert_eq!( registry.get_descriptor( &mesh ).unwrap().parent(), Some( &basic!( "Variant" )));

}
