/// Key of a type in the default basic package.
#[macro_export]
macro_rules! basic {
	( $name:literal ) => { module_registry::ModuleKey::new( module_registry::DEFAULT_BASIC_PACKAGE, $name ) };
}

/// A registry holding the basic value types:
///
/// ```text
/// Module
/// ├── Constant
/// │   ├── Float
/// │   │   └── Integer
/// │   └── String
/// └── Variant
/// ```
///
/// None of them define ports.
#[macro_export]
macro_rules! fixture_registry {
	() => {{
		let mut registry = module_registry::ModuleRegistry::new();
		for ( name, parent ) in [
			( "Constant", "Module" ),
			( "Variant", "Module" ),
			( "Float", "Constant" ),
			( "Integer", "Float" ),
			( "String", "Constant" ),
		] {
			registry.add_module(
				module_registry::ModuleKey::new( module_registry::DEFAULT_BASIC_PACKAGE, name ),
				&module_registry::ModuleKey::new( module_registry::DEFAULT_BASIC_PACKAGE, parent ),
				module_registry::ModuleOptions::new(),
			).expect( "basic types register" );
		}
		registry
	}};
}
