use crate::api::{ApiClient, ApiError, Bill};
use std::rc::Rc;

#[derive(Clone)]
pub struct BillsRepository {
    client: Rc<ApiClient>,
}

impl BillsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Bill>, ApiError> {
        self.client.list_bills().await
    }
}
