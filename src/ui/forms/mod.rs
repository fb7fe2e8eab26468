//! Form rendering module
//!
//! - `field_renderer`: per-kind field rendering and inline errors
//! - `registration_form`: the registration form card

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
