use super::{
    repository::NewBillRepository,
    utils::{
        file_name_from_input, is_allowed_receipt, NewBillFormState, UploadedReceipt,
        INVALID_FILE_TYPE, MISSING_RECEIPT,
    },
};
use crate::{
    api::{ApiError, ReceiptUpload},
    router,
    state::session::SessionContext,
};
use leptos::*;

/// A file picked in the receipt input, already read into memory.
#[derive(Debug, Clone)]
pub struct SelectedReceipt {
    pub input_value: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChangeOutcome {
    Uploaded,
    Rejected,
    UploadFailed,
}

#[derive(Clone)]
pub struct NewBillViewModel {
    pub form: NewBillFormState,
    pub receipt: RwSignal<Option<UploadedReceipt>>,
    pub error: RwSignal<Option<ApiError>>,
    repository: NewBillRepository,
    session: SessionContext,
    on_navigate: Callback<String>,
    on_alert: Callback<String>,
}

impl NewBillViewModel {
    pub fn new(
        repository: NewBillRepository,
        session: SessionContext,
        on_navigate: Callback<String>,
        on_alert: Callback<String>,
    ) -> Self {
        Self {
            form: NewBillFormState::default(),
            receipt: create_rw_signal(None),
            error: create_rw_signal(None),
            repository,
            session,
            on_navigate,
            on_alert,
        }
    }

    pub async fn handle_file_change(&self, selected: SelectedReceipt) -> FileChangeOutcome {
        if !is_allowed_receipt(&selected.file_name) {
            self.on_alert.call(INVALID_FILE_TYPE.to_string());
            self.form.file_value.set(String::new());
            return FileChangeOutcome::Rejected;
        }
        self.form.file_value.set(selected.input_value.clone());

        let email = match self.session.user_email() {
            Ok(email) => email,
            Err(err) => {
                log::error!("cannot upload receipt without a session user: {}", err);
                return FileChangeOutcome::UploadFailed;
            }
        };
        let file_name = file_name_from_input(&selected.input_value, &selected.file_name);
        let upload = ReceiptUpload {
            file_name: file_name.clone(),
            content_type: selected.content_type,
            bytes: selected.bytes,
            email,
        };

        match self.repository.upload_receipt(upload).await {
            Ok(response) => {
                log::info!("receipt stored at {}", response.file_url);
                self.receipt.set(Some(UploadedReceipt {
                    bill_id: response.key,
                    file_url: response.file_url,
                    file_name,
                }));
                FileChangeOutcome::Uploaded
            }
            Err(err) => {
                log::error!("receipt upload failed: {}", err);
                FileChangeOutcome::UploadFailed
            }
        }
    }

    /// Sends the bill then returns to the list, even when the update fails.
    pub async fn handle_submit(&self) -> Result<(), ApiError> {
        self.error.set(None);
        let email = self.session.user_email().map_err(|err| self.fail(err.into()))?;
        let Some(receipt) = self.receipt.get_untracked() else {
            return Err(self.fail(ApiError::validation(MISSING_RECEIPT)));
        };

        let payload = self.form.to_payload(email, &receipt);
        let result = self.repository.update(&receipt.bill_id, &payload).await;
        if let Err(err) = &result {
            log::error!("failed to update bill {}: {}", receipt.bill_id, err);
        }
        self.on_navigate.call(router::BILLS_PATH.to_string());
        result
    }

    fn fail(&self, err: ApiError) -> ApiError {
        self.error.set(Some(err.clone()));
        err
    }
}
