#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::session::{SessionContext, SessionUser, UserType};
    use leptos::*;
    use serde_json::{json, Value};
    use std::{cell::RefCell, rc::Rc};

    pub const RECEIPT_URL: &str = "https://test.storage.tld/v0/b/billable-677b6.appspot.com/o/justificatifs%2Fpreview-facture-free-201801-pdf-1.jpg?alt=media";

    pub fn bill_json(id: &str, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "email": "a@a",
            "type": "Transports",
            "name": format!("bill-{}", id),
            "date": date,
            "amount": 100,
            "vat": "20",
            "pct": 20,
            "commentary": "",
            "fileUrl": RECEIPT_URL,
            "fileName": "receipt.jpg",
            "status": status
        })
    }

    pub fn bills_json() -> Value {
        json!([
            {
                "id": "47qAXb6fIm2zOKkLzMro",
                "vat": "80",
                "fileUrl": RECEIPT_URL,
                "status": "pending",
                "type": "Hôtel et logement",
                "commentary": "séminaire billed",
                "name": "encore",
                "fileName": "preview-facture-free-201801-pdf-1.jpg",
                "date": "2004-04-04",
                "amount": 400,
                "email": "a@a",
                "pct": 20
            },
            {
                "id": "BeKy5Mo4jkmdfPGYpTxZ",
                "vat": "",
                "amount": 100,
                "name": "test1",
                "fileName": "1592770761.jpeg",
                "commentary": "plop",
                "pct": 20,
                "type": "Transports",
                "email": "a@a",
                "fileUrl": RECEIPT_URL,
                "date": "2001-01-01",
                "status": "refused"
            },
            {
                "id": "UIUZtnPQvnbFnB0ozvJh",
                "name": "test3",
                "email": "a@a",
                "type": "Services en ligne",
                "vat": "60",
                "pct": 20,
                "amount": 300,
                "status": "accepted",
                "date": "2003-03-03",
                "commentary": "",
                "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
                "fileUrl": RECEIPT_URL
            },
            {
                "id": "qcCK3SzECmaZAGRrHjaC",
                "status": "refused",
                "pct": 20,
                "amount": 200,
                "email": "a@a",
                "name": "test2",
                "vat": "40",
                "fileName": "preview-facture-free-201801-pdf-1.jpg",
                "date": "2002-02-02",
                "commentary": "test2",
                "type": "Restaurants et bars",
                "fileUrl": RECEIPT_URL
            }
        ])
    }

    pub fn employee_session() -> SessionContext {
        let session = SessionContext::in_memory();
        session
            .set_user(&SessionUser::connected(
                UserType::Employee,
                "employee@test.tld",
                "employee",
            ))
            .expect("seed session");
        session
    }

    /// Callback recording every string it receives. Needs a reactive runtime.
    pub fn recording_callback() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback = Callback::new(move |value: String| sink.borrow_mut().push(value));
        (callback, calls)
    }

    pub fn recording_navigate() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        recording_callback()
    }
}
