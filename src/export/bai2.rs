use chrono::NaiveDateTime;

use crate::models::BankStatement;

/// Renders statements into a BAI2 interchange file.
///
/// Record layout follows the interchange convention: 01 file header,
/// 02 account identifier, 03 transaction detail, 49 account trailer,
/// 98 file trailer. Amounts are emitted with two decimal places.
pub fn render_bai2(statements: &[BankStatement], created_at: NaiveDateTime) -> String {
    let file_date = created_at.format("%m%d%y").to_string();
    let file_time = created_at.format("%H%M").to_string();

    let mut records = Vec::new();
    records.push(format!("01,{file_date},,{file_time},,1,{file_date},,"));

    for statement in statements {
        records.push(format!("02,{},,{},,", statement.account.number, statement.account.currency));

        for transaction in &statement.transactions {
            records.push(format!(
                "03,{},{},{:.2},{},,",
                transaction.date.format("%m/%d/%y"),
                transaction.kind.bai2_code(),
                transaction.amount,
                transaction.description
            ));
        }

        records.push(format!("49,{:.2},{:.2},,", statement.opening_balance, statement.closing_balance));
    }

    records.push("98,,,".to_string());

    records.join("\n")
}
