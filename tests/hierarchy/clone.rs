use module_registry::{ ModuleKey, ModuleOptions, Signature };

#[test]
fn clone_is_independent_of_original() {

    let mut original = fixture_registry!();
    let mut copy = original.clone();

    original.add_module( ModuleKey::new( "org.example", "OnlyOriginal" ), &basic!( "Module" ), ModuleOptions::new() ).unwrap();
    original.delete_module( &basic!( "String" )).unwrap();
    original.add_input_port( &basic!( "Float" ), "value", Signature::single( basic!( "Float" )), false, None ).unwrap();

    copy.add_module( ModuleKey::new( "org.example", "OnlyCopy" ), &basic!( "Integer" ), ModuleOptions::new() ).unwrap();

    assert!( !copy.has_module( &ModuleKey::new( "org.example", "OnlyOriginal" )));
    assert!( copy.has_module( &basic!( "String" )));
    assert!( !copy.has_input_port( &basic!( "Float" ), "value" ));
    assert_eq!( copy.get_descriptor( &basic!( "Integer" )).unwrap().port_count(), 0 );
    assert!( copy.package_modules( "org.example" ).unwrap().contains( &"OnlyCopy".to_string() ));

    assert!( !original.has_module( &ModuleKey::new( "org.example", "OnlyCopy" )));
    assert_eq!( original.get_descriptor( &basic!( "Integer" )).unwrap().port_count(), 1 );
    assert_eq!( original.package_modules( "org.example" ), Some([ "OnlyOriginal".to_string() ].as_slice() ));

}

#[test]
fn clone_does_not_share_subscribers() {

    let mut original = fixture_registry!();
    let events = original.subscribe();
    let mut copy = original.clone();

    copy.add_module( ModuleKey::new( "org.example", "Quiet" ), &basic!( "Module" ), ModuleOptions::new() ).unwrap();
    assert!( events.try_recv().is_err() );

    let copy_events = copy.subscribe();
    original.add_module( ModuleKey::new( "org.example", "Loud" ), &basic!( "Module" ), ModuleOptions::new() ).unwrap();
    assert!( events.try_recv().is_ok() );
    assert!( copy_events.try_recv().is_err() );

}
