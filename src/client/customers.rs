//! Customer resource: CRUD plus image, payment history and wardrobe reads.

use bytes::Bytes;

use super::{swallow, swallow_flag, ApiClient};
use crate::models::{Clothe, Customer, CustomerDraft, Payment};

impl ApiClient {
    pub async fn get_customers(&self, token: &str) -> Option<Vec<Customer>> {
        swallow(
            "get_customers",
            self.get_json("/api/customers", Some(token)).await,
        )
    }

    pub async fn get_customer(&self, token: &str, id: i64) -> Option<Customer> {
        swallow(
            "get_customer",
            self.get_json(&format!("/api/customers/{id}"), Some(token))
                .await,
        )
    }

    /// Raw profile picture bytes.
    pub async fn get_customer_image(&self, token: &str, id: i64) -> Option<Bytes> {
        swallow(
            "get_customer_image",
            self.get_bytes(&format!("/api/customers/{id}/image"), Some(token))
                .await,
        )
    }

    pub async fn get_customer_payments(&self, token: &str, id: i64) -> Option<Vec<Payment>> {
        swallow(
            "get_customer_payments",
            self.get_json(&format!("/api/customers/{id}/payments_history"), Some(token))
                .await,
        )
    }

    pub async fn get_customer_clothes(&self, token: &str, id: i64) -> Option<Vec<Clothe>> {
        swallow(
            "get_customer_clothes",
            self.get_json(&format!("/api/customers/{id}/clothes"), Some(token))
                .await,
        )
    }

    pub async fn create_customer(&self, token: &str, draft: &CustomerDraft) -> Option<Customer> {
        swallow(
            "create_customer",
            self.post_json("/api/customers", Some(token), draft).await,
        )
    }

    pub async fn update_customer(
        &self,
        token: &str,
        id: i64,
        draft: &CustomerDraft,
    ) -> Option<Customer> {
        swallow(
            "update_customer",
            self.put_json(&format!("/api/customers/{id}"), Some(token), draft)
                .await,
        )
    }

    pub async fn delete_customer(&self, token: &str, id: i64) -> bool {
        swallow_flag(
            "delete_customer",
            self.delete(&format!("/api/customers/{id}"), Some(token))
                .await,
        )
    }
}
