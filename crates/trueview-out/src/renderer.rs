//! Template rendering for TrueView reports.
//!
//! Uses Handlebars for template rendering with custom helpers:
//! - percent: Format a 0-100 number as "87.3%"
//! - fixed: Format a number with fixed decimals
//! - truncate: Truncate string to max characters
//! - eq: Equality comparison for conditionals
//! - join: Join array with separator
//! - default: Fallback for null or empty values
//!
//! Output is plain text or Markdown, so HTML escaping is disabled.

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    Renderable,
};
use serde_json::Value;
use tracing::warn;

use crate::templates::TemplatesFile;

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: &TemplatesFile) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("percent", Box::new(PercentHelper));
        handlebars.register_helper("fixed", Box::new(FixedHelper));
        handlebars.register_helper("truncate", Box::new(TruncateHelper));
        handlebars.register_helper("eq", Box::new(EqHelper));
        handlebars.register_helper("join", Box::new(JoinHelper));
        handlebars.register_helper("default", Box::new(DefaultHelper));

        for (name, template) in &templates.templates {
            if let Err(e) = handlebars.register_template_string(name, &template.template) {
                warn!(template = %name, error = %e, "skipping template that failed to compile");
            }
        }

        TemplateRenderer { handlebars }
    }

    /// Renderer over the compiled-in templates
    pub fn builtin() -> Result<Self, String> {
        TemplatesFile::builtin().map(|t| Self::new(&t))
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, String> {
        if !self.handlebars.has_template(template_name) {
            return Err(format!("Unknown template: {}", template_name));
        }
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// Render a template string directly (not from file)
    pub fn render_string(&self, template: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| format!("Render error: {}", e))
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

/// Format a percentage that is already on the 0-100 scale (87.3 -> "87.3%")
struct PercentHelper;

impl HelperDef for PercentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).and_then(|v| v.value().as_f64()).unwrap_or(0.0);

        out.write(&format!("{:.1}%", value))?;
        Ok(())
    }
}

/// Fixed decimals, two unless told otherwise
struct FixedHelper;

impl HelperDef for FixedHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).and_then(|v| v.value().as_f64()).unwrap_or(0.0);
        let places = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(2) as usize;

        out.write(&format!("{:.*}", places, value))?;
        Ok(())
    }
}

/// Truncate a string to max characters with ellipsis
struct TruncateHelper;

impl HelperDef for TruncateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
        let max_chars = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(100) as usize;

        // Cut on a char boundary, explanations are not ASCII-only
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => {
                out.write(&text[..cut])?;
                out.write("...")?;
            }
            None => out.write(text)?,
        }
        Ok(())
    }
}

/// Equality comparison helper for conditionals
struct EqHelper;

impl HelperDef for EqHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let left = h.param(0).map(|v| v.value());
        let right = h.param(1).map(|v| v.value());

        let equal = match (left, right) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        };

        if equal {
            if let Some(template) = h.template() {
                template.render(r, ctx, rc, out)?;
            }
        } else if let Some(template) = h.inverse() {
            template.render(r, ctx, rc, out)?;
        }

        Ok(())
    }
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let array = h.param(0).and_then(|v| v.value().as_array());
        let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");

        if let Some(arr) = array {
            let strings: Vec<String> = arr
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            out.write(&strings.join(separator))?;
        }

        Ok(())
    }
}

/// Default value helper; empty strings count as missing
struct DefaultHelper;

impl HelperDef for DefaultHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).map(|v| v.value());
        let default = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

        match value {
            Some(Value::String(s)) if !s.is_empty() => out.write(s)?,
            Some(Value::String(_)) | Some(Value::Null) | None => out.write(default)?,
            Some(v) => out.write(&v.to_string())?,
        }

        Ok(())
    }
}
