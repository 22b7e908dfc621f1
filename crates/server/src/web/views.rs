//! Page rendering over a single minijinja environment.
//!
//! Templates are embedded at compile time and loaded once at startup.

use axum::response::Html;
use minijinja::Environment;

use super::error::PageError;

/// The set of server-rendered pages.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Load every embedded template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../../templates/base.html"))?;
        env.add_template("index.html", include_str!("../../templates/index.html"))?;
        env.add_template("add.html", include_str!("../../templates/add.html"))?;
        env.add_template("edit.html", include_str!("../../templates/edit.html"))?;
        env.add_template("search.html", include_str!("../../templates/search.html"))?;
        env.add_template("select.html", include_str!("../../templates/select.html"))?;
        env.add_template("error.html", include_str!("../../templates/error.html"))?;
        Ok(Self { env })
    }

    /// Render one template with the given context.
    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<Html<String>, PageError> {
        let html = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_load() {
        Pages::new().unwrap();
    }

    #[test]
    fn test_index_renders_empty_list() {
        let pages = Pages::new().unwrap();
        let movies: Vec<marquee_core::Movie> = Vec::new();
        let html = pages
            .render("index.html", context! { movies => movies })
            .unwrap();
        assert!(html.0.contains("No movies yet"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let pages = Pages::new().unwrap();
        let result = pages.render("nope.html", context! {});
        assert!(result.is_err());
    }
}
