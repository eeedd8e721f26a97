//! # Templates
//!
//! Every generated file is a template embedded in the binary at build time. Source
//! templates take exactly one variable, `module`, the Go module path of the new project.
//! It appears at import paths and in runtime messages. The `.env` template is the one
//! exception: it takes the whole [`ProjectDescriptor`].
//!
//! Templates are rendered with minijinja in strict mode, so a misspelled variable is a
//! render error instead of an empty string in the output. They contain no conditionals
//! and no loops: the shape of each generated file is fixed.
//!
//! ## Profiles
//!
//! - [`Profile::Full`]: gin + gorm + logrus service with config, routes, logger and
//!   database packages.
//! - [`Profile::Minimal`]: standard-library `net/http` server with a single route.

use crate::error::Result;
use crate::model::ProjectDescriptor;
use minijinja::{context, Environment, UndefinedBehavior};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A file the scaffolder writes, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTemplate {
    pub name: &'static str,
    pub path: &'static str,
    pub source: &'static str,
}

const ENV_TEMPLATE: &str = include_str!("env.tmpl");

static FULL_TEMPLATES: &[SourceTemplate] = &[
    SourceTemplate {
        name: "full/main.go",
        path: "main.go",
        source: include_str!("full/main.go.tmpl"),
    },
    SourceTemplate {
        name: "full/config.go",
        path: "infrastructure/config/config.go",
        source: include_str!("full/config.go.tmpl"),
    },
    SourceTemplate {
        name: "full/routes.go",
        path: "api/routes/routes.go",
        source: include_str!("full/routes.go.tmpl"),
    },
    SourceTemplate {
        name: "full/logger.go",
        path: "logger/logger.go",
        source: include_str!("full/logger.go.tmpl"),
    },
    SourceTemplate {
        name: "full/db.go",
        path: "infrastructure/database/db.go",
        source: include_str!("full/db.go.tmpl"),
    },
];

static MINIMAL_TEMPLATES: &[SourceTemplate] = &[
    SourceTemplate {
        name: "minimal/main.go",
        path: "main.go",
        source: include_str!("minimal/main.go.tmpl"),
    },
    SourceTemplate {
        name: "minimal/routes.go",
        path: "api/routes/routes.go",
        source: include_str!("minimal/routes.go.tmpl"),
    },
];

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Full,
    Minimal,
}

impl Profile {
    /// Source templates of this profile, in generation order.
    pub fn templates(self) -> &'static [SourceTemplate] {
        match self {
            Profile::Full => FULL_TEMPLATES,
            Profile::Minimal => MINIMAL_TEMPLATES,
        }
    }

    pub fn all() -> &'static [Profile] {
        &[Profile::Full, Profile::Minimal]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Full => "full",
            Profile::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Profile::all()
            .iter()
            .copied()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown profile '{}' (expected one of: {})",
                    s,
                    Profile::all()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl SourceTemplate {
    /// Renders the template with `module` substituted at every insertion point.
    pub fn render(&self, module: &str) -> Result<String> {
        let template = ENVIRONMENT.template_from_named_str(self.name, self.source)?;
        Ok(template.render(context! { module => module })?)
    }
}

/// Renders the `.env` file for a descriptor.
pub fn render_env_file(descriptor: &ProjectDescriptor) -> Result<String> {
    let template = ENVIRONMENT.template_from_named_str("env", ENV_TEMPLATE)?;
    Ok(template.render(descriptor)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = "example.com/acme/billing-svc";

    fn placeholder_count(source: &str) -> usize {
        source.matches("{{ module }}").count()
    }

    #[test]
    fn test_env_file_exact_lines() {
        let descriptor = ProjectDescriptor::new("app", "8080", "postgres://u:p@h/d");
        let rendered = render_env_file(&descriptor).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"PROJECT_NAME="app""#,
                "PORT=:8080",
                r#"DATABASE_URL="postgres://u:p@h/d""#,
                r#"JWT_SECRET_KEY="mysecretkey""#,
                r#"JWT_TOKEN_DURATION="24h""#,
            ]
        );
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_env_file_does_not_escape_values() {
        let descriptor = ProjectDescriptor::new("app", "8080", "sqlserver://sa:p&ss@db?x=<1>");
        let rendered = render_env_file(&descriptor).unwrap();
        assert!(rendered.contains(r#"DATABASE_URL="sqlserver://sa:p&ss@db?x=<1>""#));
    }

    #[test]
    fn test_every_template_substitutes_module() {
        for profile in Profile::all() {
            for template in profile.templates() {
                let rendered = template.render(MODULE).unwrap();
                assert_eq!(
                    rendered.matches(MODULE).count(),
                    placeholder_count(template.source),
                    "{} should contain the module at each insertion point",
                    template.name
                );
                assert!(
                    !rendered.contains("{{"),
                    "{} has a dangling placeholder",
                    template.name
                );
            }
        }
    }

    #[test]
    fn test_full_main_imports_local_packages() {
        let main = &Profile::Full.templates()[0];
        let rendered = main.render("app").unwrap();
        assert!(rendered.contains("\"app/api/routes\""));
        assert!(rendered.contains("\"app/infrastructure/config\""));
        assert!(rendered.contains("\"app/infrastructure/database\""));
        assert!(rendered.contains("\"app/logger\""));
    }

    #[test]
    fn test_templates_start_with_package_clause_and_keep_newline() {
        for profile in Profile::all() {
            for template in profile.templates() {
                let rendered = template.render(MODULE).unwrap();
                assert!(rendered.starts_with("package "), "{}", template.name);
                assert!(rendered.ends_with("}\n"), "{}", template.name);
            }
        }
    }

    #[test]
    fn test_go_format_verbs_survive_rendering() {
        let routes = Profile::Full
            .templates()
            .iter()
            .find(|t| t.path == "api/routes/routes.go")
            .unwrap();
        let rendered = routes.render(MODULE).unwrap();
        assert!(rendered.contains("\"%s server running on port: %s\""));
    }

    #[test]
    fn test_full_profile_paths() {
        let paths: Vec<&str> = Profile::Full.templates().iter().map(|t| t.path).collect();
        assert_eq!(
            paths,
            vec![
                "main.go",
                "infrastructure/config/config.go",
                "api/routes/routes.go",
                "logger/logger.go",
                "infrastructure/database/db.go",
            ]
        );
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("full".parse::<Profile>().unwrap(), Profile::Full);
        assert_eq!("Minimal".parse::<Profile>().unwrap(), Profile::Minimal);
        let err = "huge".parse::<Profile>().unwrap_err();
        assert!(err.contains("full, minimal"));
    }

    #[test]
    fn test_profile_default_is_full() {
        assert_eq!(Profile::default(), Profile::Full);
    }
}
