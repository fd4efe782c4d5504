//! HTML template rendering handlers.

mod links;
mod submit;

pub use links::{LinkView, LinksTemplate, links_handler};
pub use submit::{FormField, SubmitTemplate, submit_form_handler, submit_handler};
