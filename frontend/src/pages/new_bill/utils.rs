use crate::api::{BillStatus, NewBillPayload, DEFAULT_PCT};
use leptos::*;

pub const EXPENSE_TYPES: &[&str] = &[
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const INVALID_FILE_TYPE: &str = "Invalid file type";
pub const MISSING_RECEIPT: &str = "Veuillez joindre un justificatif au format jpg, jpeg ou png.";

/// Text after the last `.`, or the whole name when there is none.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

pub fn is_allowed_receipt(file_name: &str) -> bool {
    let extension = file_extension(file_name);
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
}

/// Last segment of a `C:\fakepath\name.png` style input value.
pub fn file_name_from_input(input_value: &str, fallback: &str) -> String {
    match input_value.rsplit('\\').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

/// Leading-integer parse: optional sign then digits, trailing text ignored.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedReceipt {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Clone, Copy)]
pub struct NewBillFormState {
    pub expense_type: RwSignal<String>,
    pub name: RwSignal<String>,
    pub date: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub vat: RwSignal<String>,
    pub pct: RwSignal<String>,
    pub commentary: RwSignal<String>,
    /// Value reported by the file input; emptied to reset the input.
    pub file_value: RwSignal<String>,
}

impl Default for NewBillFormState {
    fn default() -> Self {
        Self {
            expense_type: create_rw_signal(EXPENSE_TYPES[0].to_string()),
            name: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            vat: create_rw_signal(String::new()),
            pct: create_rw_signal(String::new()),
            commentary: create_rw_signal(String::new()),
            file_value: create_rw_signal(String::new()),
        }
    }
}

impl NewBillFormState {
    pub fn to_payload(&self, email: String, receipt: &UploadedReceipt) -> NewBillPayload {
        NewBillPayload {
            email,
            expense_type: self.expense_type.get_untracked(),
            name: self.name.get_untracked(),
            amount: parse_int(&self.amount.get_untracked()),
            date: self.date.get_untracked(),
            vat: self.vat.get_untracked(),
            // Zero counts as unset, like an unparsable value.
            pct: parse_int(&self.pct.get_untracked())
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_PCT),
            commentary: self.commentary.get_untracked(),
            file_url: Some(receipt.file_url.clone()),
            file_name: Some(receipt.file_name.clone()),
            status: BillStatus::Pending,
        }
    }
}
