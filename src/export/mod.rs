mod bai2;
mod csv;
mod errors;
mod json;
#[cfg(test)]
mod tests;

pub use bai2::render_bai2;
pub use csv::{cash_to_csv, invoices_to_csv, journals_to_csv};
pub use errors::ExportError;
pub use json::to_json_payload;
