//! Encounter resource. Read-only.

use super::{swallow, ApiClient};
use crate::models::Encounter;

impl ApiClient {
    pub async fn get_encounters(&self, token: &str) -> Option<Vec<Encounter>> {
        swallow(
            "get_encounters",
            self.get_json("/api/encounters", Some(token)).await,
        )
    }

    pub async fn get_encounter(&self, token: &str, id: i64) -> Option<Encounter> {
        swallow(
            "get_encounter",
            self.get_json(&format!("/api/encounters/{id}"), Some(token))
                .await,
        )
    }

    pub async fn get_customer_encounters(
        &self,
        token: &str,
        customer_id: i64,
    ) -> Option<Vec<Encounter>> {
        swallow(
            "get_customer_encounters",
            self.get_json(&format!("/api/encounters/customer/{customer_id}"), Some(token))
                .await,
        )
    }
}
