mod cash;
mod errors;
mod invoice;
mod journal;
mod statement;

pub use cash::CashGenerator;
pub use errors::GeneratorError;
pub use invoice::InvoiceGenerator;
pub use journal::JournalGenerator;
pub use statement::StatementGenerator;

pub(crate) const BUSINESS_UNITS: [&str; 3] = ["US1 Business Unit", "UK Business Unit", "CA Business Unit"];
