use module_registry::{
    Fringe, ModuleConfiguration, ModuleFunction, ModuleKey, ModuleOptions, ModuleParam,
    OptionsError, RegistryError, Signature,
};

#[test]
fn options_are_applied_to_the_descriptor() {

    let mut registry = fixture_registry!();
    let tuple = ModuleKey::new( "org.example", "Tuple" );

    registry.add_module( tuple.clone(), &basic!( "Module" ), ModuleOptions::new()
        .with_color( 1.0, 0.5, 0.0 )
        .with_configuration_widget( "TupleConfigurationWidget" )
        .abstract_module()
    ).unwrap();

    assert_eq!( registry.get_module_color( &tuple ).unwrap().map(| color | color.rgb() ), Some([ 1.0, 0.5, 0.0 ]));
    assert_eq!( registry.get_configuration_widget( &tuple ).unwrap(), Some( "TupleConfigurationWidget" ));
    assert!( registry.get_module_fringe( &tuple ).unwrap().is_none() );
    assert!( registry.get_descriptor( &tuple ).unwrap().is_abstract() );

}

#[test]
fn options_symmetric_fringe_is_mirrored() {

    let mut registry = fixture_registry!();
    let arrow = ModuleKey::new( "org.example", "Arrow" );

    registry.add_module( arrow.clone(), &basic!( "Module" ), ModuleOptions::new()
        .with_fringe( Fringe::Symmetric( vec![( 0.0, 0.0 ), ( 0.2, 0.25 ), ( 0.0, 1.0 )]))
    ).unwrap();

    let fringe = registry.get_module_fringe( &arrow ).unwrap().unwrap();
    assert_eq!( fringe.right(), [( 0.0, 0.0 ), ( 0.2, 0.25 ), ( 0.0, 1.0 )]);
    assert_eq!( fringe.left(), [( -0.0, 0.0 ), ( -0.2, 0.75 ), ( -0.0, 1.0 )]);

}

#[test]
fn options_asymmetric_fringe_is_kept() {

    let mut registry = fixture_registry!();
    let tab = ModuleKey::new( "org.example", "Tab" );
    let left = vec![( 0.0, 0.0 ), ( -0.1, 0.5 ), ( 0.0, 1.0 )];
    let right = vec![( 0.0, 0.0 ), ( 0.0, 1.0 )];

    registry.add_module( tab.clone(), &basic!( "Module" ), ModuleOptions::new()
        .with_fringe( Fringe::Asymmetric { left: left.clone(), right: right.clone() })
    ).unwrap();

    let fringe = registry.get_module_fringe( &tab ).unwrap().unwrap();
    assert_eq!( fringe.left(), left.as_slice() );
    assert_eq!( fringe.right(), right.as_slice() );

}

#[test]
fn options_invalid_values_leave_registry_untouched() {

    let mut registry = fixture_registry!();
    let broken = ModuleKey::new( "org.example", "Broken" );
    let before = registry.tree().len();

    match registry.add_module( broken.clone(), &basic!( "Module" ), ModuleOptions::new().with_color( 0.5, 1.5, 0.0 )) {
        Err( RegistryError::InvalidOptions( OptionsError::InvalidColor { index, .. })) => assert_eq!( index, 1 ),
        other => panic!( "Expected InvalidColor, got {:?}", other ),
    }
    assert!( matches!(
        registry.add_module( broken.clone(), &basic!( "Module" ), ModuleOptions::new().with_fringe( Fringe::Symmetric( vec![( -0.5, 0.5 )]))),
        Err( RegistryError::InvalidOptions( OptionsError::InvalidFringePoint { .. })),
    ));
    assert!( matches!(
        registry.add_module( broken.clone(), &basic!( "Module" ), ModuleOptions::new().with_fringe( Fringe::Symmetric( Vec::new() ))),
        Err( RegistryError::InvalidOptions( OptionsError::EmptyFringe )),
    ));

    assert!( !registry.has_module( &broken ));
    assert_eq!( registry.tree().len(), before );

}

#[test]
fn options_abstract_when_no_ports_in_chain() {

    let mut registry = fixture_registry!();

    assert!( registry.get_descriptor( &basic!( "Integer" )).unwrap().is_abstract() );

    registry.add_output_port( &basic!( "Constant" ), "self", Signature::single( basic!( "Constant" )), false ).unwrap();

    assert!( !registry.get_descriptor( &basic!( "Constant" )).unwrap().is_abstract() );
    assert!( !registry.get_descriptor( &basic!( "Integer" )).unwrap().is_abstract() );
    assert!( registry.get_descriptor( &basic!( "Variant" )).unwrap().is_abstract() );

}

#[test]
fn options_custom_hasher_replaces_structural_signature() {

    let mut registry = fixture_registry!();
    let random = ModuleKey::new( "org.example", "Random" );
    registry.add_module( random.clone(), &basic!( "Module" ), ModuleOptions::new()
        .with_hasher(| _: &ModuleConfiguration | 42_u64 )
    ).unwrap();

    let seeded = | key: ModuleKey, seed: &str | ModuleConfiguration::new( key )
        .with_function( ModuleFunction::new( "seed" ).with_param( ModuleParam::new( "Integer", "seed" ).with_value( seed )));

    assert_eq!( registry.module_signature( &seeded( random.clone(), "1" )), 42 );
    assert_eq!( registry.module_signature( &seeded( random, "2" )), 42 );

    let float = registry.module_signature( &seeded( basic!( "Float" ), "1" ));
    assert_eq!( float, registry.module_signature( &seeded( basic!( "Float" ), "1" )));
    assert_ne!( float, registry.module_signature( &seeded( basic!( "Float" ), "2" )));

    // unregistered types still get the structural signature
    let ghost = seeded( ModuleKey::new( "org.example", "Ghost" ), "1" );
    assert_eq!( registry.module_signature( &ghost ), module_registry::ModuleHasher::module_signature( &module_registry::StructuralHasher, &ghost ));

}
