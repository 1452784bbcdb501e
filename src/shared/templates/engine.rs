//! HTML page templates rendered with minijinja.
//!
//! Templates live under `templates/` at the crate root and are compiled into
//! the binary, so the server has no runtime dependency on its working
//! directory. Names ending in `.html` are auto-escaped.

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    (
        "citizen/home.html",
        include_str!("../../../templates/citizen/home.html"),
    ),
    (
        "citizen/login.html",
        include_str!("../../../templates/citizen/login.html"),
    ),
    (
        "citizen/signup.html",
        include_str!("../../../templates/citizen/signup.html"),
    ),
    (
        "portal/layout.html",
        include_str!("../../../templates/portal/layout.html"),
    ),
    (
        "portal/dashboard.html",
        include_str!("../../../templates/portal/dashboard.html"),
    ),
    (
        "portal/reports.html",
        include_str!("../../../templates/portal/reports.html"),
    ),
    (
        "portal/report_detail.html",
        include_str!("../../../templates/portal/report_detail.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a named template with any serializable context
pub fn render<S: Serialize>(template_name: &str, ctx: S) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_every_template_compiles() {
        let env = get_environment();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{} failed to load", name);
        }
    }

    #[test]
    fn test_unknown_template() {
        let result = render("definitely_not_a_real_template.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }
}
