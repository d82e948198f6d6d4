use crate::api::{ApiClient, ApiError, NewBillPayload, ReceiptUpload, UploadResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct NewBillRepository {
    client: Rc<ApiClient>,
}

impl NewBillRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadResponse, ApiError> {
        self.client.upload_receipt(upload).await
    }

    pub async fn update(&self, selector: &str, bill: &NewBillPayload) -> Result<(), ApiError> {
        self.client.update_bill(selector, bill).await
    }
}
