use module_registry::{ ModuleKeyParseError, RegistryError, Signature, SignatureEntry, SignatureParseError, NO_DESCRIPTION };

#[test]
fn canonical_string_round_trip_matches_both_ways() {

    let registry = fixture_registry!();
    let original = Signature::from_types([ basic!( "Float" ), basic!( "Integer" )]).unwrap();

    let text = original.to_sigstring();
    assert_eq!( text, "(edu.utah.sci.vistrails.basic:Float,edu.utah.sci.vistrails.basic:Integer)" );

    let parsed = registry.signature_from_sigstring( &text ).unwrap();
    assert_eq!( parsed, original );
    assert!( registry.are_specs_matched( &original, &parsed ));
    assert!( registry.are_specs_matched( &parsed, &original ));

}

#[test]
fn canonical_string_drops_descriptions() {

    let described = Signature::new( SignatureEntry::new( basic!( "Float" ), "radius" ));
    let parsed: Signature = described.to_string().parse().unwrap();

    assert_eq!( parsed.types(), described.types() );
    assert_eq!( parsed.first().description(), NO_DESCRIPTION );
    assert_ne!( parsed, described );

}

#[test]
fn canonical_string_rejects_malformed_text() {

    assert!( matches!(
        "edu.utah.sci.vistrails.basic:Float".parse::<Signature>(),
        Err( SignatureParseError::MissingParentheses( _ )),
    ));
    assert!( matches!( "()".parse::<Signature>(), Err( SignatureParseError::Empty( _ ))));
    assert!( matches!(
        "(Float)".parse::<Signature>(),
        Err( SignatureParseError::InvalidEntry( ModuleKeyParseError::MissingSeparator( _ ))),
    ));
    assert!( matches!(
        "(pkg:Float,:Integer)".parse::<Signature>(),
        Err( SignatureParseError::InvalidEntry( ModuleKeyParseError::EmptyComponent( _ ))),
    ));

}

#[test]
fn canonical_string_checked_against_registry() {

    let registry = fixture_registry!();

    match registry.signature_from_sigstring( "(edu.utah.sci.vistrails.basic:Float,org.example:Mesh)" ) {
        Err( RegistryError::UnregisteredValueType( key )) => assert_eq!( key.to_string(), "org.example:Mesh" ),
        other => panic!( "Expected an unregistered type, got {:?}", other ),
    }
    assert!( registry.signature_from_sigstring( "(edu.utah.sci.vistrails.basic:Variant)" ).is_ok() );
    assert!( matches!( registry.signature_from_sigstring( "Float" ), Err( RegistryError::SignatureParse( _ ))));

}

#[test]
fn short_string_omits_packages() {

    let signature = Signature::single( basic!( "Float" )).with_entry( basic!( "String" ));
    assert_eq!( signature.to_short_sigstring(), "(Float,String)" );
    assert_eq!( signature.arity(), 2 );

}
