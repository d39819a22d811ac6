mod account;
mod cash;
mod invoice;
mod journal;
mod statement;

pub use account::{BankAccount, Currency};
pub use cash::{CashTransactionKind, ExternalTransaction};
pub use invoice::{Invoice, InvoiceKind, InvoiceLine};
pub use journal::{GlAccountKind, GlJournal, GlJournalLine, JournalCategory, JournalSource, JournalType};
pub use statement::{BankStatement, StatementTransaction, TransactionKind};
