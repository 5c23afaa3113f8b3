//! Package lifecycle.
//!
//! A package contributes a batch of module types. Loading runs its
//! [`Package::initialize`] inside a [`LoaderSession`] for its identifier;
//! unloading removes everything it registered with
//! [`ModuleRegistry::delete_package`].
//!
//! [`load_packages`] loads a whole set at once. Packages are ordered so that
//! every package loads after the packages it depends on, and a failing package
//! only takes down the packages that depend on it.

use std::collections::HashMap ;
use pipe_trait::Pipe ;
use thiserror::Error ;

use crate::module_key::ModuleKey ;
use crate::registry::{ ModuleRegistry, RegistryError };
use crate::session::LoaderSession ;
use crate::utils::PartialSuccess ;



/// A unit of module types loaded and unloaded together.
///
/// ```
/// use module_registry::{ load_package, LoaderSession, ModuleOptions, ModuleRegistry, Package, RegistryError };
///
/// struct Shapes ;
///
/// impl Package for Shapes {
///     fn identifier( &self ) -> &str { "org.example.shapes" }
///     fn initialize( &self, session: &mut LoaderSession<'_> ) -> Result<(), RegistryError> {
///         let root = session.registry().root().clone();
///         session.add_module( "Shape", &root, ModuleOptions::new().abstract_module() )?;
///         session.add_module( "Circle", &session.key( "Shape" ), ModuleOptions::new() )?;
///         Ok(())
///     }
/// }
///
/// let mut registry = ModuleRegistry::new();
/// load_package( &mut registry, &Shapes ).unwrap();
/// assert!( registry.get_descriptor_by_name( "org.example.shapes", "Circle" ).is_ok() );
/// ```
pub trait Package {
    /// Package identifier, the package half of every key it registers.
    fn identifier( &self ) -> &str ;

    /// Identifiers of the packages that must be loaded first.
    fn dependencies( &self ) -> Vec<String> { Vec::new() }

    /// Registers the package's types and ports.
    ///
    /// # Errors
    /// Any registration error. The loader removes whatever the package
    /// registered before failing.
    fn initialize( &self, session: &mut LoaderSession<'_> ) -> Result<(), RegistryError> ;
}

/// Errors produced while loading packages.
#[derive( Debug, Clone, PartialEq, Error )]
pub enum PackageError {
    /// The package is already loaded, or listed twice.
    #[error( "Package '{0}' is already loaded or listed twice" )] DuplicatePackage( String ),
    /// A dependency is neither loaded nor part of the batch.
    #[error( "Package '{package}' depends on '{dependency}', which is not available" )]
    MissingDependency { package: String, dependency: String },
    /// The package depends on itself, directly or transitively.
    #[error( "Loop detected loading: '{0}'" )] LoopDetected( String ),
    /// The package was skipped because a dependency failed to load.
    #[error( "Package '{package}' was skipped: dependency '{dependency}' failed to load" )]
    DependencyFailed { package: String, dependency: String },
    /// The package's own initialisation failed.
    #[error( "Failed to initialize package '{package}': {source}" )]
    Initialisation { package: String, #[source] source: RegistryError },
}

/// Loads a single package whose dependencies are already loaded.
///
/// # Errors
/// [`PackageError::DuplicatePackage`], [`PackageError::MissingDependency`] or
/// [`PackageError::Initialisation`]. On error the registry holds none of the
/// package's types.
pub fn load_package<P: Package + ?Sized>( registry: &mut ModuleRegistry, package: &P ) -> Result<(), PackageError> {
    let identifier = package.identifier();
    if registry.package_modules( identifier ).is_some() {
        return Err( PackageError::DuplicatePackage( identifier.to_string() ));
    }
    match package.dependencies().into_iter().find(| dependency | registry.package_modules( dependency ).is_none() ) {
        Some( dependency ) => Err( PackageError::MissingDependency { package: identifier.to_string(), dependency }),
        None => initialize( registry, package ),
    }
}

/// Loads `packages`, dependencies first.
///
/// A dependency is satisfied by a package of the batch or by one already
/// loaded in the registry. Packages that cannot be loaded are skipped and
/// reported; everything else is loaded.
///
/// Returns the identifiers of the packages loaded, in load order, together
/// with one error per package that was skipped or failed.
pub fn load_packages<'a, P, I>( registry: &mut ModuleRegistry, packages: I ) -> PartialSuccess<Vec<String>, PackageError>
where
    P: Package + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut loader = BatchLoader { states: HashMap::new(), loaded: Vec::new(), errors: Vec::new() };
    let mut order = Vec::new();
    for package in packages {
        let identifier = package.identifier().to_string();
        if loader.states.contains_key( &identifier ) || registry.package_modules( &identifier ).is_some() {
            loader.errors.push( PackageError::DuplicatePackage( identifier ));
            continue ;
        }
        loader.states.insert( identifier.clone(), PackageState::Unprocessed( package ));
        order.push( identifier );
    }

    order.iter().for_each(| identifier | { loader.load( registry, identifier ); });
    ( loader.loaded, loader.errors )
}

/// Removes every type `identifier` registered.
///
/// # Errors
/// As [`ModuleRegistry::delete_package`].
pub fn unload_package( registry: &mut ModuleRegistry, identifier: &str ) -> Result<Vec<ModuleKey>, RegistryError> {
    registry.delete_package( identifier )
}

fn initialize<P: Package + ?Sized>( registry: &mut ModuleRegistry, package: &P ) -> Result<(), PackageError> {
    let identifier = package.identifier();
    let result = registry.session( identifier ).pipe(| mut session | package.initialize( &mut session ));
    match result {
        Ok(()) => {
            registry.mark_package_loaded( identifier );
            tracing::debug!( package = identifier, "Loaded package" );
            Ok(())
        },
        Err( source ) => {
            tracing::warn!( package = identifier, error = %source, "Package failed to initialize" );
            if registry.package_modules( identifier ).is_some() {
                if let Err( err ) = registry.delete_package( identifier ) {
                    tracing::warn!( package = identifier, error = %err, "Could not remove the modules of a failed package" );
                }
            }
            Err( PackageError::Initialisation { package: identifier.to_string(), source })
        },
    }
}

enum PackageState<'a, P: ?Sized> {
    Unprocessed( &'a P ),
    Loaded,
    Failed,
    Borrowed,
}

struct BatchLoader<'a, P: ?Sized> {
    states: HashMap<String, PackageState<'a, P>>,
    loaded: Vec<String>,
    errors: Vec<PackageError>,
}

impl<P: Package + ?Sized> BatchLoader<'_, P> {

    /// Loads `identifier` after its dependencies. Returns `true` if it is loaded.
    fn load( &mut self, registry: &mut ModuleRegistry, identifier: &str ) -> bool {
        // NOTE: the entry is put back in every branch except a detected loop,
        // where the frame that first borrowed it marks it failed
        match self.states.insert( identifier.to_string(), PackageState::Borrowed ) {
            Some( PackageState::Loaded ) => {
                self.states.insert( identifier.to_string(), PackageState::Loaded );
                true
            },
            Some( PackageState::Failed ) | None => {
                self.states.insert( identifier.to_string(), PackageState::Failed );
                false
            },
            Some( PackageState::Borrowed ) => {
                self.errors.push( PackageError::LoopDetected( identifier.to_string() ));
                false
            },
            Some( PackageState::Unprocessed( package )) => {
                let outcome = self.load_dependencies( registry, package )
                    .and_then(|()| initialize( registry, package ));
                match outcome {
                    Ok(()) => {
                        self.states.insert( identifier.to_string(), PackageState::Loaded );
                        self.loaded.push( identifier.to_string() );
                        true
                    },
                    Err( err ) => {
                        self.states.insert( identifier.to_string(), PackageState::Failed );
                        self.errors.push( err );
                        false
                    },
                }
            },
        }
    }

    fn load_dependencies( &mut self, registry: &mut ModuleRegistry, package: &P ) -> Result<(), PackageError> {
        let identifier = package.identifier();
        for dependency in package.dependencies() {
            let satisfied = match self.states.contains_key( &dependency ) {
                true => self.load( registry, &dependency ),
                false if registry.package_modules( &dependency ).is_some() => true,
                false => return Err( PackageError::MissingDependency { package: identifier.to_string(), dependency }),
            };
            if !satisfied {
                return Err( PackageError::DependencyFailed { package: identifier.to_string(), dependency });
            }
        }
        Ok(())
    }

}
