mod engine;

pub use engine::{render, TemplateError};
