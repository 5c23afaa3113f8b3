use module_registry::{ load_package, load_packages, unload_package, HierarchyError, ModuleKey, PackageError, RegistryError };

use crate::FixturePackage ;

const MODULE: &str = "edu.utah.sci.vistrails.basic:Module" ;

#[test]
fn load_packages_orders_dependencies_first() {

    let mut registry = fixture_registry!();
    let packages = [
        FixturePackage::new( "org.example.c" ).depends_on( "org.example.b" ).with_module( "C", "org.example.b:B" ),
        FixturePackage::new( "org.example.b" ).depends_on( "org.example.a" ).with_module( "B", "org.example.a:A" ),
        FixturePackage::new( "org.example.a" ).with_module( "A", MODULE ),
    ];

    let ( loaded, errors ) = load_packages( &mut registry, &packages );
    assert_no_errors!( errors );
    assert_eq!( loaded, [ "org.example.a", "org.example.b", "org.example.c" ]);

    let hierarchy = registry.get_module_hierarchy( &ModuleKey::new( "org.example.c", "C" )).unwrap();
    assert_eq!( hierarchy.iter().map(| descriptor | descriptor.name() ).collect::<Vec<_>>(), [ "C", "B", "A", "Module" ]);

}

#[test]
fn load_packages_isolates_failures() {

    let mut registry = fixture_registry!();
    let packages = [
        FixturePackage::new( "org.example.base" ).with_module( "Base", MODULE ).failing(),
        FixturePackage::new( "org.example.derived" ).depends_on( "org.example.base" ).with_module( "Derived", "org.example.base:Base" ),
        FixturePackage::new( "org.example.other" ).with_module( "Other", MODULE ),
    ];

    let ( loaded, errors ) = load_packages( &mut registry, &packages );
    assert_eq!( loaded, [ "org.example.other" ]);
    assert_eq!( errors.len(), 2 );

    match &errors[ 0 ] {
        PackageError::Initialisation { package, source } => {
            assert_eq!( package, "org.example.base" );
            assert!( matches!( source, RegistryError::Hierarchy( HierarchyError::MissingParent { .. })));
        },
        other => panic!( "Expected Initialisation, got {:?}", other ),
    }
    assert_eq!( errors[ 1 ], PackageError::DependencyFailed {
        package: "org.example.derived".to_string(),
        dependency: "org.example.base".to_string(),
    });

    // the failed package leaves nothing behind
    assert!( !registry.has_module( &ModuleKey::new( "org.example.base", "Base" )));
    assert_eq!( registry.package_modules( "org.example.base" ), None );
    assert!( registry.has_module( &ModuleKey::new( "org.example.other", "Other" )));

}

#[test]
fn load_packages_detects_loops() {

    let mut registry = fixture_registry!();
    let packages = [
        FixturePackage::new( "org.example.a" ).depends_on( "org.example.b" ).with_module( "A", MODULE ),
        FixturePackage::new( "org.example.b" ).depends_on( "org.example.a" ).with_module( "B", MODULE ),
    ];

    let ( loaded, errors ) = load_packages( &mut registry, &packages );
    assert!( loaded.is_empty() );
    assert!( errors.contains( &PackageError::LoopDetected( "org.example.a".to_string() )));
    assert!( errors.iter().all(| error | !matches!( error, PackageError::Initialisation { .. })));
    assert!( !registry.has_module( &ModuleKey::new( "org.example.a", "A" )));

}

#[test]
fn load_packages_reports_missing_and_duplicate_packages() {

    let mut registry = fixture_registry!();
    let packages = [
        FixturePackage::new( "org.example.a" ).depends_on( "org.example.ghost" ),
        FixturePackage::new( "org.example.b" ).with_module( "B", MODULE ),
        FixturePackage::new( "org.example.b" ).with_module( "Shadow", MODULE ),
    ];

    let ( loaded, errors ) = load_packages( &mut registry, &packages );
    assert_eq!( loaded, [ "org.example.b" ]);
    assert!( errors.contains( &PackageError::DuplicatePackage( "org.example.b".to_string() )));
    assert!( errors.contains( &PackageError::MissingDependency {
        package: "org.example.a".to_string(),
        dependency: "org.example.ghost".to_string(),
    }));
    assert!( !registry.has_module( &ModuleKey::new( "org.example.b", "Shadow" )));

}

#[test]
fn load_packages_uses_already_loaded_dependencies() {

    let mut registry = fixture_registry!();
    load_package( &mut registry, &FixturePackage::new( "org.example.base" ).with_module( "Base", MODULE )).unwrap();

    let derived = FixturePackage::new( "org.example.derived" ).depends_on( "org.example.base" ).with_module( "Derived", "org.example.base:Base" );
    let ( loaded, errors ) = load_packages( &mut registry, [ &derived ]);
    assert_no_errors!( errors );
    assert_eq!( loaded, [ "org.example.derived" ]);

    let ( loaded, errors ) = load_packages( &mut registry, [ &derived ]);
    assert!( loaded.is_empty() );
    assert_eq!( errors, [ PackageError::DuplicatePackage( "org.example.derived".to_string() )]);

}

#[test]
fn load_package_checks_preconditions() {

    let mut registry = fixture_registry!();
    let derived = FixturePackage::new( "org.example.derived" ).depends_on( "org.example.base" ).with_module( "Derived", "org.example.base:Base" );

    assert_eq!( load_package( &mut registry, &derived ), Err( PackageError::MissingDependency {
        package: "org.example.derived".to_string(),
        dependency: "org.example.base".to_string(),
    }));

    let base = FixturePackage::new( "org.example.base" ).with_module( "Base", MODULE );
    load_package( &mut registry, &base ).unwrap();
    assert_eq!( load_package( &mut registry, &base ), Err( PackageError::DuplicatePackage( "org.example.base".to_string() )));
    load_package( &mut registry, &derived ).unwrap();

}

#[test]
fn unload_package_removes_its_types() {

    let mut registry = fixture_registry!();
    load_package( &mut registry, &FixturePackage::new( "org.example.a" )
        .with_module( "Shape", MODULE )
        .with_module( "Circle", "org.example.a:Shape" )).unwrap();

    let removed = unload_package( &mut registry, "org.example.a" ).unwrap();
    assert_eq!( removed, [ ModuleKey::new( "org.example.a", "Circle" ), ModuleKey::new( "org.example.a", "Shape" )]);

    // the package can be loaded again afterwards
    load_package( &mut registry, &FixturePackage::new( "org.example.a" ).with_module( "Shape", MODULE )).unwrap();
    assert!( registry.has_module( &ModuleKey::new( "org.example.a", "Shape" )));

}

#[test]
fn load_package_records_packages_without_types() {

    let mut registry = fixture_registry!();
    let empty = FixturePackage::new( "org.example.empty" );

    load_package( &mut registry, &empty ).unwrap();
    assert_eq!( registry.package_modules( "org.example.empty" ).map( <[String]>::is_empty ), Some( true ));
    assert_eq!( load_package( &mut registry, &empty ), Err( PackageError::DuplicatePackage( "org.example.empty".to_string() )));

    let dependant = FixturePackage::new( "org.example.dependant" ).depends_on( "org.example.empty" ).with_module( "Node", MODULE );
    load_package( &mut registry, &dependant ).unwrap();

    assert_eq!( unload_package( &mut registry, "org.example.empty" ), Ok( Vec::new() ));
    assert_eq!( registry.package_modules( "org.example.empty" ), None );

}
