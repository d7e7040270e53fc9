//! Form rendering module
//!
//! - `field_renderer`: one bound field with its feedback indicator and help line
//! - `form_view`: a whole open form with its buttons row

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
