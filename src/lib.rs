//! A runtime registry of dataflow module types.
//!
//! A pipeline editor lets users wire *modules* together. Each module has a
//! type, contributed at runtime by a package, and each type has typed input and
//! output ports. `module_registry` keeps the catalog of those types: it tracks
//! their single-inheritance hierarchy, their ports and their display metadata,
//! and decides whether an output port may feed an input port.
//!
//! # Core Concepts
//!
//! - [`ModuleKey`]: The `(package, name)` identity of a module type. Keys also
//! 	serve as the value types inside signatures.
//!
//! - [`Signature`]: The ordered, non-empty list of value types a port accepts or
//! 	produces, with a canonical text form `(pkg:TypeA,pkg:TypeB)`.
//!
//! - [`ModuleDescriptor`]: Everything known about one type: its parent, the
//! 	ports it defines itself, whether it is abstract, and how it is drawn.
//!
//! - [`HierarchyTree`]: The single-rooted tree of descriptors. Every type
//! 	except the root has exactly one registered parent.
//!
//! - [`ModuleRegistry`]: The facade over all of the above. It validates
//! 	registrations, answers editor queries and announces changes as
//! 	[`RegistryEvent`]s.
//!
//! - [`Package`]: A batch of types loaded through a [`LoaderSession`] and
//! 	unloaded together, leaves first.
//!
//! # Port Compatibility
//!
//! An output port may feed an input port when the input's signature accepts
//! the output's: same arity, and each accepted type is the same as or an
//! ancestor of the offered type. The configured wildcard type matches
//! anything, and a signature made of a lone wildcard matches any signature.
//!
//! ```
//! use module_registry::{ Endpoint, ModuleKey, ModuleOptions, ModuleRegistry, Port, Signature };
//!
//! # fn main() -> Result<(), module_registry::RegistryError> {
//! let mut registry = ModuleRegistry::new();
//! let root = registry.root().clone();
//! let basic = root.package().to_string();
//!
//! // The basic value types.
//! let constant = registry.config().constant().clone();
//! let float = ModuleKey::new( basic.as_str(), "Float" );
//! let string = ModuleKey::new( basic.as_str(), "String" );
//! registry.add_module( constant.clone(), &root, ModuleOptions::new() )?;
//! registry.add_module( float.clone(), &constant, ModuleOptions::new() )?;
//! registry.add_module( string.clone(), &constant, ModuleOptions::new() )?;
//!
//! // A constant module with a settable value, and a subtype that adds nothing.
//! let value = registry.add_input_port( &constant, "value", Signature::single( float.clone() ), false, None )?;
//! let integer_const = ModuleKey::new( basic.as_str(), "IntegerConst" );
//! registry.add_module( integer_const.clone(), &constant, ModuleOptions::new() )?;
//!
//! assert!( !registry.get_descriptor( &constant ).unwrap().is_abstract() );
//! assert!( registry.method_ports( &integer_const )?.iter().any(| port | port.name() == "value" ));
//! assert!( registry.user_set_methods( &integer_const )?.iter()
//! 	.any(| level | level.methods.contains_key( "value" )));
//!
//! let float_out = Port::new( "out", Endpoint::Source, Signature::single( float ));
//! let string_out = Port::new( "out", Endpoint::Source, Signature::single( string ));
//! assert!( registry.ports_can_connect( &float_out, &value ));
//! assert!( !registry.ports_can_connect( &string_out, &value ));
//! # Ok(())
//! # }
//! ```
//!
//! # Packages
//!
//! Packages register their types through a [`LoaderSession`], which keys every
//! new type under the package's identifier. [`load_packages`] loads a batch in
//! dependency order and isolates failures: a package whose initialisation
//! fails is removed again, and only the packages depending on it are skipped.
//!
//! ```
//! use module_registry::{ load_packages, LoaderSession, ModuleOptions, ModuleRegistry, Package, RegistryError };
//!
//! struct Simple { identifier: &'static str, parent: Option<&'static str> }
//!
//! impl Package for Simple {
//! 	fn identifier( &self ) -> &str { self.identifier }
//! 	fn dependencies( &self ) -> Vec<String> {
//! 		self.parent.map(| parent | vec![ parent.to_string() ]).unwrap_or_default()
//! 	}
//! 	fn initialize( &self, session: &mut LoaderSession<'_> ) -> Result<(), RegistryError> {
//! 		let parent = match self.parent {
//! 			Some( parent ) => module_registry::ModuleKey::new( parent, "Base" ),
//! 			None => session.registry().root().clone(),
//! 		};
//! 		session.add_module( "Base", &parent, ModuleOptions::new() )?;
//! 		Ok(())
//! 	}
//! }
//!
//! let mut registry = ModuleRegistry::new();
//! let ( loaded, errors ) = load_packages( &mut registry, &[
//! 	Simple { identifier: "derived", parent: Some( "base" ) },
//! 	Simple { identifier: "base", parent: None },
//! ]);
//! assert_eq!( loaded, [ "base", "derived" ]);
//! assert!( errors.is_empty() );
//! ```
//!
//! # Concurrency
//!
//! [`ModuleRegistry`] is `Send + Sync` and every operation completes
//! synchronously. [`SharedRegistry`] wraps it in a reader-writer lock for
//! use across threads; [`SharedRegistry::snapshot`] hands out an independent
//! copy for workers that need a stable view.

mod appearance ;
mod compatibility ;
mod config ;
mod descriptor ;
mod events ;
mod hasher ;
mod hierarchy ;
mod module_function ;
mod module_key ;
mod options ;
mod package ;
mod port ;
mod registry ;
mod session ;
mod shared ;
mod signature ;
mod utils ;

#[doc( no_inline )]
pub use crossbeam_channel::Receiver ;

pub use appearance::{ Fringe, FringePoint, ModuleColor, ModuleFringe, OptionsError };
pub use compatibility::{ are_specs_matched, can_connect, is_port_sub_type, TypeLattice };
pub use config::{ RegistryConfig, DEFAULT_BASIC_PACKAGE };
pub use descriptor::{ ModuleDescriptor, PortError };
pub use events::RegistryEvent ;
pub use hasher::{ ModuleHasher, StructuralHasher };
pub use hierarchy::{ Ancestors, HierarchyError, HierarchyTree };
pub use module_function::{ ModuleConfiguration, ModuleFunction, ModuleParam };
pub use module_key::{ ModuleKey, ModuleKeyParseError };
pub use options::ModuleOptions ;
pub use package::{ load_package, load_packages, unload_package, Package, PackageError };
pub use port::{ Endpoint, Port, PortEntry };
pub use registry::{ MethodGroup, ModuleRegistry, PortGroup, PortOrder, RegistryError, UNKNOWN_PACKAGE };
pub use session::LoaderSession ;
pub use shared::SharedRegistry ;
pub use signature::{ Signature, SignatureEntry, SignatureParseError, NO_DESCRIPTION };
pub use utils::PartialSuccess ;
