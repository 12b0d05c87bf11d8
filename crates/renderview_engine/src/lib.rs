//! # renderview_engine
//!
//! Template location and string rendering for renderview.
//!
//! This crate resolves a template reference under a root directory, reads its
//! UTF-8 source, and substitutes a model (named fields) into `{{field}}`
//! placeholders:
//!
//! - **Locator**: resolves a relative reference to template text, rejecting
//!   references that escape the root.
//! - **Model**: immutable named-field input, built in code or parsed from
//!   JSON/YAML.
//! - **Renderer**: single-pass placeholder substitution with a configurable
//!   missing-field policy (strict by default).
//!
//! ## Example
//!
//! ```rust,no_run
//! use renderview_engine::{Model, TemplateLocator, TemplateRenderer};
//!
//! let locator = TemplateLocator::new("templates");
//! let template = locator.locate("views/email_template.tpl").unwrap();
//!
//! let model = Model::new()
//!     .with_field("user_name", "User")
//!     .with_field("sender_name", "Sender")
//!     .with_field("user_data1", 1)
//!     .with_field("user_data2", 2);
//!
//! let renderer = TemplateRenderer::new();
//! let output = renderer.render(&template, &model).unwrap();
//! println!("{}", output);
//! ```

pub mod error;
pub mod locator;
pub mod model;
pub mod renderer;

pub use error::{RenderError, RenderResult};
pub use locator::TemplateLocator;
pub use model::Model;
pub use renderer::{MissingFieldPolicy, TemplateRenderer};
