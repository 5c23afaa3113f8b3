//! Configured functions of a pipeline module.
//!
//! When a port's signature is method-like it can be set directly on a module
//! instead of being wired to another module's output. Such a setting is a
//! [`ModuleFunction`]: the port name plus one [`ModuleParam`] per signature
//! entry. A [`ModuleConfiguration`] is the set of functions configured on one
//! module in a pipeline, which is what execution caches hash.

/// One parameter of a [`ModuleFunction`].
#[derive( Debug, Clone, PartialEq, Eq, Hash, Default )]
pub struct ModuleParam {
    /// Name of the parameter's module type, e.g. `Float`.
    pub type_name: String,
    /// Parameter name, taken from the signature entry's description.
    pub name: String,
    /// Configured value in its textual form. Empty until the user sets it.
    pub value: String,
}

impl ModuleParam {
    /// Creates an unset parameter.
    pub fn new( type_name: impl Into<String>, name: impl Into<String> ) -> Self {
        Self { type_name: type_name.into(), name: name.into(), value: String::new() }
    }

    /// Sets the parameter's value.
    pub fn with_value( mut self, value: impl Into<String> ) -> Self {
        self.value = value.into();
        self
    }
}

/// A port exposed as a settable function on a module.
#[derive( Debug, Clone, PartialEq, Eq, Hash, Default )]
pub struct ModuleFunction {
    /// Name of the port this function sets.
    pub name: String,
    /// Type produced, for functions built from source ports.
    pub return_type: Option<String>,
    /// Parameters, for functions built from destination ports.
    pub params: Vec<ModuleParam>,
}

impl ModuleFunction {
    /// Creates a function with no parameters and no return type.
    pub fn new( name: impl Into<String> ) -> Self {
        Self { name: name.into(), return_type: None, params: Vec::new() }
    }

    /// Appends a parameter.
    pub fn with_param( mut self, param: ModuleParam ) -> Self {
        self.params.push( param );
        self
    }
}

/// The configuration of one module placed in a pipeline.
///
/// Identifies the module type by key and lists the functions configured on
/// it. Execution caches turn this into a signature with
/// [`ModuleRegistry::module_signature`]( crate::ModuleRegistry::module_signature ).
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct ModuleConfiguration {
    /// Type of the module.
    pub key: crate::ModuleKey,
    /// Functions configured on the module, in the order they were set.
    pub functions: Vec<ModuleFunction>,
}

impl ModuleConfiguration {
    /// Creates a configuration with no functions set.
    pub fn new( key: crate::ModuleKey ) -> Self { Self { key, functions: Vec::new() }}

    /// Appends a configured function.
    pub fn with_function( mut self, function: ModuleFunction ) -> Self {
        self.functions.push( function );
        self
    }
}
