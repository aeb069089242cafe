use crate::{
    constants::TEMPLATE_ROOT,
    error::{Result, TemplateError, TemplateErrorKind, ValidationError},
    ioutils::write_file,
    template::{
        bundle::{EmbeddedBundle, TemplateBundle},
        data::TemplateData,
        filters,
        path::BundlePath,
    },
};
use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::path::Path;

/// Renders bundled templates against [`TemplateData`].
///
/// Lookups go through the bundle's forward-slash address space; output
/// paths are host paths. The engine keeps no state between calls.
pub struct TemplateEngine {
    /// Base environment; cloned for every render
    env: Environment<'static>,
    bundle: Box<dyn TemplateBundle>,
}

impl TemplateEngine {
    /// Creates an engine over the templates compiled into the binary.
    pub fn new() -> Self {
        Self::with_bundle(EmbeddedBundle::new())
    }

    /// Creates an engine over an arbitrary bundle.
    pub fn with_bundle(bundle: impl TemplateBundle + 'static) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        filters::register(&mut env);

        Self { env, bundle: Box::new(bundle) }
    }

    /// Logical names of every template in the bundle.
    pub fn template_names(&self) -> Vec<String> {
        self.bundle.template_names()
    }

    /// Reads the template source for `name`.
    fn source(&self, name: &str) -> Result<&str, TemplateError> {
        let path = BundlePath::join(TEMPLATE_ROOT, name);
        debug!("Resolving template '{name}' at '{path}'");
        let bytes = self.bundle.read(&path).ok_or_else(|| {
            TemplateError::new(name, TemplateErrorKind::NotFound { path: path.to_string() })
        })?;
        std::str::from_utf8(bytes).map_err(|e| TemplateError::new(name, e.into()))
    }

    /// Compiles `name` into a fresh environment keyed by the template name.
    fn compile(&self, name: &str) -> Result<Environment<'static>, TemplateError> {
        let source = self.source(name)?;
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|e| TemplateError::new(name, TemplateErrorKind::Parse(e)))?;
        Ok(env)
    }

    /// Renders the template `name` with `data`.
    ///
    /// # Arguments
    /// * `name` - Logical template name, e.g. `go.mod.tmpl`
    /// * `data` - Variables available to the template
    ///
    /// # Returns
    /// * `Result<String, TemplateError>` - Rendered text, or the phase that failed
    pub fn render(&self, name: &str, data: &TemplateData) -> Result<String, TemplateError> {
        let env = self.compile(name)?;
        let tmpl = env
            .get_template(name)
            .map_err(|e| TemplateError::new(name, TemplateErrorKind::Parse(e)))?;
        tmpl.render(data).map_err(|e| TemplateError::new(name, TemplateErrorKind::Render(e)))
    }

    /// Renders `name` and writes the result to `output_path`, creating any
    /// missing parent directories. Existing files are overwritten.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        name: &str,
        data: &TemplateData,
        output_path: P,
    ) -> Result<()> {
        let content = self.render(name, data)?;
        write_file(&content, output_path.as_ref())
    }

    /// Checks that `name` exists and parses, without executing it.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        self.compile(name)?;
        Ok(())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
