use super::{
    repository::BillsRepository,
    utils::{sort_bills_desc, BillRow},
};
use crate::{
    api::ApiError,
    components::modal::{ModalController, ReceiptPreview},
    router,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct BillsViewModel {
    repository: BillsRepository,
    on_navigate: Callback<String>,
    modal: Option<Rc<dyn ModalController>>,
}

impl BillsViewModel {
    pub fn new(
        repository: BillsRepository,
        on_navigate: Callback<String>,
        modal: Option<Rc<dyn ModalController>>,
    ) -> Self {
        Self {
            repository,
            on_navigate,
            modal,
        }
    }

    pub async fn fetch_and_format_bills(&self) -> Result<Vec<BillRow>, ApiError> {
        let mut bills = self.repository.list().await.map_err(|err| {
            log::error!("failed to list bills: {}", err);
            err
        })?;
        sort_bills_desc(&mut bills);
        let rows: Vec<BillRow> = bills.into_iter().map(BillRow::from_bill).collect();
        log::info!("length {}", rows.len());
        Ok(rows)
    }

    pub fn handle_new_bill_click(&self) {
        self.on_navigate.call(router::NEW_BILL_PATH.to_string());
    }

    pub fn handle_eye_icon_click(&self, bill_url: &str) {
        let Some(modal) = self.modal.as_ref() else {
            log::warn!("no receipt modal available for {}", bill_url);
            return;
        };
        let width = (modal.width() * 0.5).floor().max(0.0) as u32;
        modal.set_body(ReceiptPreview {
            url: bill_url.to_string(),
            width,
        });
        modal.open();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::components::modal::{ReceiptModal, DEFAULT_MODAL_WIDTH};
    use crate::test_support::helpers::{bill_json, bills_json, recording_navigate, RECEIPT_URL};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::Cell;

    fn view_model(server: &MockServer, on_navigate: Callback<String>) -> BillsViewModel {
        let repo = BillsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        BillsViewModel::new(repo, on_navigate, None)
    }

    #[tokio::test]
    async fn fetch_sorts_descending_and_formats() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/bills");
                then.status(200).json_body(bills_json());
            })
            .await;
        let runtime = create_runtime();
        let (on_navigate, _) = recording_navigate();

        let rows = view_model(&server, on_navigate)
            .fetch_and_format_bills()
            .await
            .unwrap();

        let raw: Vec<_> = rows.iter().map(|r| r.raw_date.as_str()).collect();
        assert_eq!(raw, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
        assert_eq!(rows[0].date, "4 Avr. 04");
        assert_eq!(rows[0].status, "En attente");
        assert_eq!(rows[1].status, "Accepté");
        runtime.dispose();
    }

    #[tokio::test]
    async fn fetch_keeps_raw_date_for_corrupted_records() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/bills");
                then.status(200).json_body(json!([
                    bill_json("ok", "2023-01-01", "pending"),
                    bill_json("bad", "yesterday", "refused")
                ]));
            })
            .await;
        let runtime = create_runtime();
        let (on_navigate, _) = recording_navigate();

        let rows = view_model(&server, on_navigate)
            .fetch_and_format_bills()
            .await
            .unwrap();

        let bad = rows.iter().find(|row| row.id == "bad").unwrap();
        assert_eq!(bad.date, "yesterday");
        assert_eq!(bad.status, "Refusé");
        let ok = rows.iter().find(|row| row.id == "ok").unwrap();
        assert_eq!(ok.date, "1 Jan. 23");
        runtime.dispose();
    }

    #[tokio::test]
    async fn fetch_keeps_other_rows_beside_null_field_draft() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/bills");
                then.status(200).json_body(json!([
                    bill_json("ok", "2023-01-01", "pending"),
                    {
                        "id": "draft",
                        "email": "employee@test.tld",
                        "type": null,
                        "name": null,
                        "date": null,
                        "amount": null,
                        "vat": null,
                        "pct": null,
                        "commentary": null,
                        "fileUrl": "https://localhost:3456/images/test.jpg",
                        "fileName": "test.jpg",
                        "status": null
                    }
                ]));
            })
            .await;
        let runtime = create_runtime();
        let (on_navigate, _) = recording_navigate();

        let rows = view_model(&server, on_navigate)
            .fetch_and_format_bills()
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "ok");
        assert_eq!(rows[0].date, "1 Jan. 23");
        assert_eq!(rows[0].status, "En attente");
        let draft = &rows[1];
        assert_eq!(draft.id, "draft");
        assert_eq!(draft.date, "");
        assert_eq!(draft.status, "");
        runtime.dispose();
    }

    #[tokio::test]
    async fn fetch_propagates_store_failures() {
        for status in [404u16, 500] {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/bills");
                    then.status(status);
                })
                .await;
            let runtime = create_runtime();
            let (on_navigate, _) = recording_navigate();

            let err = view_model(&server, on_navigate)
                .fetch_and_format_bills()
                .await
                .unwrap_err();
            assert_eq!(err.error, format!("Erreur {}", status));
            runtime.dispose();
        }
    }

    #[test]
    fn new_bill_click_navigates_to_creation_route() {
        let runtime = create_runtime();
        let (on_navigate, visited) = recording_navigate();
        let vm = BillsViewModel::new(
            BillsRepository::new(ApiClient::new_with_base_url("http://unused")),
            on_navigate,
            None,
        );
        vm.handle_new_bill_click();
        assert_eq!(visited.borrow().as_slice(), [router::NEW_BILL_PATH.to_string()]);
        runtime.dispose();
    }

    #[test]
    fn eye_click_fills_and_opens_modal_at_half_width() {
        let runtime = create_runtime();
        let (on_navigate, visited) = recording_navigate();
        let modal = ReceiptModal::new();
        let vm = BillsViewModel::new(
            BillsRepository::new(ApiClient::new_with_base_url("http://unused")),
            on_navigate,
            Some(Rc::new(modal)),
        );

        vm.handle_eye_icon_click(RECEIPT_URL);

        assert!(modal.is_open.get());
        let preview = modal.preview.get().unwrap();
        assert_eq!(preview.url, RECEIPT_URL);
        assert_eq!(preview.width, (DEFAULT_MODAL_WIDTH * 0.5) as u32);
        assert!(visited.borrow().is_empty());
        runtime.dispose();
    }

    struct OddWidthModal {
        opened: Cell<bool>,
        width: Cell<u32>,
    }

    impl ModalController for OddWidthModal {
        fn width(&self) -> f64 {
            733.0
        }
        fn set_body(&self, preview: ReceiptPreview) {
            self.width.set(preview.width);
        }
        fn open(&self) {
            self.opened.set(true);
        }
        fn close(&self) {
            self.opened.set(false);
        }
    }

    #[test]
    fn eye_click_floors_half_width() {
        let runtime = create_runtime();
        let (on_navigate, _) = recording_navigate();
        let modal = Rc::new(OddWidthModal {
            opened: Cell::new(false),
            width: Cell::new(0),
        });
        let vm = BillsViewModel::new(
            BillsRepository::new(ApiClient::new_with_base_url("http://unused")),
            on_navigate,
            Some(modal.clone() as Rc<dyn ModalController>),
        );
        vm.handle_eye_icon_click(RECEIPT_URL);
        assert!(modal.opened.get());
        assert_eq!(modal.width.get(), 366);
        runtime.dispose();
    }

    #[test]
    fn eye_click_without_modal_is_ignored() {
        let runtime = create_runtime();
        let (on_navigate, visited) = recording_navigate();
        let vm = BillsViewModel::new(
            BillsRepository::new(ApiClient::new_with_base_url("http://unused")),
            on_navigate,
            None,
        );
        vm.handle_eye_icon_click(RECEIPT_URL);
        assert!(visited.borrow().is_empty());
        runtime.dispose();
    }
}
