//! Registration options of a module type.

use std::sync::Arc ;

use crate::appearance::{ Fringe, ModuleColor, ModuleFringe, OptionsError };
use crate::hasher::ModuleHasher ;



/// Optional settings applied to a module type when it is registered.
///
/// Built with chained `with_*` calls and validated by the registry before the
/// type is inserted, so invalid options never leave a half-configured type
/// behind.
///
/// ```
/// use module_registry::{ Fringe, ModuleOptions };
///
/// let options = ModuleOptions::new()
///     .with_color( 0.2, 0.4, 0.8 )
///     .with_fringe( Fringe::Symmetric( vec![( 0.0, 0.0 ), ( 0.25, 0.5 ), ( 0.0, 1.0 )]))
///     .with_configuration_widget( "TupleConfigurationWidget" );
/// # let _ = options ;
/// ```
#[derive( Clone, Default )]
#[must_use = "pass the options to ModuleRegistry::add_module"]
pub struct ModuleOptions {
    pub(crate) color: Option<[f64; 3]>,
    pub(crate) fringe: Option<Fringe>,
    pub(crate) is_abstract: bool,
    pub(crate) configuration_widget: Option<String>,
    pub(crate) hasher: Option<Arc<dyn ModuleHasher>>,
}

impl ModuleOptions {

    /// Options with every setting left at its default.
    pub fn new() -> Self { Self::default() }

    /// Sets the module box color. Components must lie in `[0, 1]`.
    pub fn with_color( mut self, red: f64, green: f64, blue: f64 ) -> Self {
        self.color = Some([ red, green, blue ]);
        self
    }

    /// Sets the module box fringe.
    pub fn with_fringe( mut self, fringe: Fringe ) -> Self {
        self.fringe = Some( fringe );
        self
    }

    /// Marks the type as abstract: it is listed but cannot be instantiated.
    pub fn abstract_module( mut self ) -> Self {
        self.is_abstract = true ;
        self
    }

    /// Names the widget the editor uses to configure the module.
    pub fn with_configuration_widget( mut self, widget: impl Into<String> ) -> Self {
        self.configuration_widget = Some( widget.into() );
        self
    }

    /// Replaces the default structural cache signature with a custom one.
    pub fn with_hasher( mut self, hasher: impl ModuleHasher + 'static ) -> Self {
        self.hasher = Some( Arc::new( hasher ));
        self
    }

    /// Validates and resolves the display options.
    pub(crate) fn resolve_appearance( &self ) -> Result<( Option<ModuleColor>, Option<ModuleFringe> ), OptionsError> {
        let color = self.color
            .map(|[ red, green, blue ]| ModuleColor::new( red, green, blue ))
            .transpose()?;
        let fringe = self.fringe.clone()
            .map( ModuleFringe::try_from )
            .transpose()?;
        Ok(( color, fringe ))
    }

}

impl std::fmt::Debug for ModuleOptions {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "ModuleOptions" )
            .field( "color", &self.color )
            .field( "fringe", &self.fringe )
            .field( "is_abstract", &self.is_abstract )
            .field( "configuration_widget", &self.configuration_widget )
            .field( "hasher", &self.hasher.as_ref().map(| _ | "<hasher>" ))
            .finish()
    }
}
