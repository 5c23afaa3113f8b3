use module_registry::{ are_specs_matched, ModuleKey, Signature, TypeLattice };

#[test]
fn matching_is_covariant_and_not_symmetric() {

    let registry = fixture_registry!();
    let float = Signature::single( basic!( "Float" ));
    let integer = Signature::single( basic!( "Integer" ));

    assert!( registry.are_specs_matched( &float, &integer ));
    assert!( !registry.are_specs_matched( &integer, &float ));
    assert!( registry.are_specs_matched( &float, &float ));

}

#[test]
fn matching_unrelated_types_fails() {

    let registry = fixture_registry!();
    let float = Signature::single( basic!( "Float" ));
    let string = Signature::single( basic!( "String" ));

    assert!( !registry.are_specs_matched( &float, &string ));
    assert!( !registry.are_specs_matched( &string, &float ));

}

#[test]
fn matching_lone_wildcard_ignores_arity() {

    let registry = fixture_registry!();
    let wildcard = Signature::single( basic!( "Variant" ));
    let pair = Signature::from_types([ basic!( "Float" ), basic!( "String" )]).unwrap();

    assert!( registry.are_specs_matched( &wildcard, &pair ));
    assert!( registry.are_specs_matched( &pair, &wildcard ));

}

#[test]
fn matching_entry_wildcard_does_not_rescue_arity() {

    let registry = fixture_registry!();
    let with_wildcard = Signature::from_types([ basic!( "Variant" ), basic!( "Float" )]).unwrap();
    let single = Signature::single( basic!( "Integer" ));
    let triple = Signature::from_types([ basic!( "Integer" ), basic!( "Integer" ), basic!( "Integer" )]).unwrap();

    assert!( !registry.are_specs_matched( &with_wildcard, &single ));
    assert!( !registry.are_specs_matched( &with_wildcard, &triple ));

}

#[test]
fn matching_entry_wildcard_passes_its_pair() {

    let registry = fixture_registry!();
    let accepted = Signature::from_types([ basic!( "Variant" ), basic!( "Float" )]).unwrap();
    let offered = Signature::from_types([ basic!( "String" ), basic!( "Integer" )]).unwrap();
    let mismatched = Signature::from_types([ basic!( "String" ), basic!( "String" )]).unwrap();

    assert!( registry.are_specs_matched( &accepted, &offered ));
    assert!( !registry.are_specs_matched( &accepted, &mismatched ));

}

#[test]
fn matching_against_custom_lattice() {

    // numbers form a chain by name length: "n" is the ancestor of "nn", and so on
    struct Chain ;
    impl TypeLattice for Chain {
        fn is_wildcard( &self, key: &ModuleKey ) -> bool { key.name() == "*" }
        fn is_same_or_ancestor( &self, ancestor: &ModuleKey, descendant: &ModuleKey ) -> bool {
            descendant.name().starts_with( ancestor.name() )
        }
    }

    let key = | name: &str | ModuleKey::new( "chain", name );
    let short = Signature::single( key( "n" ));
    let long = Signature::single( key( "nnn" ));

    assert!( are_specs_matched( &Chain, &short, &long ));
    assert!( !are_specs_matched( &Chain, &long, &short ));
    assert!( are_specs_matched( &Chain, &Signature::single( key( "*" )), &long ));

}

#[test]
fn method_like_signatures_hold_constants_only() {

    let registry = fixture_registry!();

    assert!( registry.is_method_like( &Signature::from_types([ basic!( "Float" ), basic!( "Integer" )]).unwrap() ));
    assert!( registry.is_method_like( &Signature::single( basic!( "Constant" ))));
    assert!( !registry.is_method_like( &Signature::single( basic!( "Variant" ))));
    assert!( !registry.is_method_like( &Signature::from_types([ basic!( "Float" ), basic!( "Module" )]).unwrap() ));

}
