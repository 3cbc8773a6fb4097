//! Built-in template bodies.
//!
//! Text templates use `{{PLACEHOLDER}}` variables (see
//! [`crate::renderer::Placeholders`]). List-shaped templates are built in
//! code from their entries.

pub mod barrel;
pub mod django;
pub mod project;
pub mod react;
