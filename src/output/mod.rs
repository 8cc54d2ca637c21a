mod format;
mod json;
mod table;

pub(crate) use json::{output_application_json, output_applications_json};
pub(crate) use table::{render_application_detail, render_application_table};
