//! In-process module registry exposing native functions to a dynamic host.
//!
//! A [`Module`] is a namespace of [`Method`]s. Each method receives its
//! positional arguments as host values and either returns one host value or
//! an [`ArgumentError`]. [`Module::cstrip`] builds the stock registration.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::args::parse_single_text;
use crate::config::{ModuleConfig, validate_identifier};
use crate::error::{ArgumentError, ConfigError};
use crate::whitespace::strip;

/// Signature of a native function callable from the host.
///
/// The first argument is the name the method was registered under, used in
/// error messages.
pub type NativeFn = fn(&str, &[Value]) -> Result<Value, ArgumentError>;

/// A named native function with its docstring.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: String,
    func: NativeFn,
}

impl Method {
    pub fn new(name: impl Into<String>, doc: impl Into<String>, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Invoke the method with positional `args`.
    pub fn call(&self, args: &[Value]) -> Result<Value, ArgumentError> {
        (self.func)(&self.name, args)
    }
}

/// A named collection of methods.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    doc: Option<String>,
    methods: Vec<Method>,
}

impl Module {
    /// Empty module. The name must be an identifier.
    pub fn new(name: impl Into<String>, doc: Option<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        validate_identifier("name", &name)?;
        Ok(Self {
            name,
            doc,
            methods: Vec::new(),
        })
    }

    /// The stock `cstrip` module with its single `strip` method.
    pub fn cstrip() -> Self {
        let defaults = ModuleConfig::default();
        let mut module = Self {
            name: defaults.name,
            doc: defaults.doc,
            methods: Vec::new(),
        };
        module.register(Method::new(
            defaults.method_name,
            defaults.method_doc,
            strip_method,
        ));
        module
    }

    /// Register the trimming method under the names in `config`.
    pub fn from_config(config: &ModuleConfig) -> Result<Self, ConfigError> {
        let mut module = Module::new(config.name.clone(), config.doc.clone())?;
        module.add_method(Method::new(
            config.method_name.clone(),
            config.method_doc.clone(),
            strip_method,
        ))?;
        Ok(module)
    }

    /// Add `method`, rejecting non-identifier or already-registered names.
    pub fn add_method(&mut self, method: Method) -> Result<(), ConfigError> {
        validate_identifier("method_name", &method.name)?;
        if self.method(&method.name).is_some() {
            return Err(ConfigError::DuplicateMethod(method.name));
        }
        self.register(method);
        Ok(())
    }

    fn register(&mut self, method: Method) {
        debug!(module = %self.name, method = %method.name, "module_registered");
        self.methods.push(method);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Look up `name` and call it. `None` when no such method exists.
    pub fn call(&self, name: &str, args: &[Value]) -> Option<Result<Value, ArgumentError>> {
        self.method(name).map(|method| method.call(args))
    }
}

/// Host wrapper around [`strip`]: one text argument in, one fresh text out.
pub fn strip_method(function: &str, args: &[Value]) -> Result<Value, ArgumentError> {
    let input = match parse_single_text(function, args) {
        Ok(input) => input,
        Err(err) => {
            warn!(function, error = %err, "strip_invalid_argument");
            return Err(err);
        }
    };

    let output = strip(input);
    trace!(
        function,
        input_len = input.len(),
        output_len = output.len(),
        "strip_success"
    );
    Ok(Value::String(output.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stock_module_shape() {
        let module = Module::cstrip();
        assert_eq!(module.name(), "cstrip");
        assert_eq!(module.doc(), None);
        assert_eq!(module.methods().len(), 1);

        let method = module.method("strip").expect("strip registered");
        assert_eq!(method.name(), "strip");
        assert_eq!(method.doc(), "Fast native strip function");
    }

    #[test]
    fn call_returns_fresh_text() {
        let module = Module::cstrip();
        let out = module
            .call("strip", &[json!("  hello world  ")])
            .expect("method exists");
        assert_eq!(out, Ok(json!("hello world")));
    }

    #[test]
    fn unknown_method_is_none() {
        let module = Module::cstrip();
        assert!(module.call("lstrip", &[json!("x")]).is_none());
    }

    #[test]
    fn error_names_registered_method() {
        let config = ModuleConfig {
            method_name: "trim".into(),
            ..Default::default()
        };
        let module = Module::from_config(&config).expect("valid config");
        let err = module
            .call("trim", &[])
            .expect("method exists")
            .expect_err("no arguments");
        assert_eq!(err.to_string(), "trim() takes exactly one argument (0 given)");
    }

    #[test]
    fn duplicate_method_rejected() {
        let mut module = Module::cstrip();
        let res = module.add_method(Method::new("strip", "again", strip_method));
        assert_eq!(res, Err(ConfigError::DuplicateMethod("strip".into())));
        assert_eq!(module.methods().len(), 1);
    }

    #[test]
    fn from_config_rejects_bad_method_name() {
        let config = ModuleConfig {
            method_name: "not.ident".into(),
            ..Default::default()
        };
        assert_eq!(
            Module::from_config(&config).map(|module| module.methods().len()),
            Err(ConfigError::InvalidName {
                field: "method_name",
                value: "not.ident".into(),
            })
        );
    }

    #[test]
    fn invalid_module_name_rejected() {
        let res = Module::new("no-dashes", None);
        assert!(matches!(
            res,
            Err(ConfigError::InvalidName { field: "name", .. })
        ));
    }

    #[test]
    fn extra_methods_can_share_the_module() {
        fn echo(function: &str, args: &[Value]) -> Result<Value, ArgumentError> {
            parse_single_text(function, args).map(|text| Value::String(text.to_owned()))
        }

        let mut module = Module::cstrip();
        module
            .add_method(Method::new("echo", "returns its argument", echo))
            .expect("distinct name");
        assert_eq!(
            module.call("echo", &[json!(" x ")]),
            Some(Ok(json!(" x ")))
        );
        assert_eq!(
            module.call("strip", &[json!(" x ")]),
            Some(Ok(json!("x")))
        );
    }
}
