use crate::api::Bill;
use crate::utils::format::{format_date, format_status};

/// A bill reshaped for the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    /// ISO date as stored; rows are ordered on it.
    pub raw_date: String,
    pub date: String,
    pub amount: Option<f64>,
    pub status: String,
    pub file_url: Option<String>,
}

impl BillRow {
    /// Formats date and status independently; a malformed date is kept raw.
    pub fn from_bill(bill: Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(err) => {
                log::error!("{} for bill {:?}", err, bill);
                bill.date.clone()
            }
        };
        Self {
            status: format_status(bill.status),
            id: bill.id,
            expense_type: bill.expense_type,
            name: bill.name,
            raw_date: bill.date,
            date,
            amount: bill.amount,
            file_url: bill.file_url,
        }
    }
}

/// Descending order on the raw date string.
pub fn sort_bills_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn sort_rows_desc(rows: &mut [BillRow]) {
    rows.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
}

pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{} €", value),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BillStatus;
    use crate::test_support::helpers::bill_json;

    fn bill(id: &str, date: &str) -> Bill {
        serde_json::from_value(bill_json(id, date, "pending")).unwrap()
    }

    #[test]
    fn sort_bills_desc_orders_latest_first() {
        let mut bills = vec![bill("a", "2023-01-01"), bill("b", "2023-06-01"), bill("c", "2022-12-31")];
        sort_bills_desc(&mut bills);
        let dates: Vec<_> = bills.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, ["2023-06-01", "2023-01-01", "2022-12-31"]);
    }

    #[test]
    fn sort_is_lexicographic_for_non_iso_dates() {
        // "9-..." sorts above "10-..." as strings.
        let mut bills = vec![bill("a", "10-01-2023"), bill("b", "9-01-2023")];
        sort_bills_desc(&mut bills);
        assert_eq!(bills[0].id, "b");
    }

    #[test]
    fn from_bill_formats_date_and_status() {
        let mut raw = bill("a", "2004-04-04");
        raw.status = BillStatus::Accepted;
        let row = BillRow::from_bill(raw);
        assert_eq!(row.date, "4 Avr. 04");
        assert_eq!(row.raw_date, "2004-04-04");
        assert_eq!(row.status, "Accepté");
    }

    #[test]
    fn from_bill_keeps_raw_date_when_malformed() {
        let mut raw = bill("a", "corrupted");
        raw.status = BillStatus::Refused;
        let row = BillRow::from_bill(raw);
        assert_eq!(row.date, "corrupted");
        assert_eq!(row.status, "Refusé");
    }

    #[test]
    fn format_amount_appends_euro_sign() {
        assert_eq!(format_amount(Some(400.0)), "400 €");
        assert_eq!(format_amount(Some(12.5)), "12.5 €");
        assert_eq!(format_amount(None), "-");
    }
}
