//! Compatibility scoring endpoint. The computation itself lives server-side;
//! the client only submits the pair and reads back the percentage.

use serde::Serialize;

use super::{swallow, ApiClient};
use crate::models::CompatibilityResult;

#[derive(Debug, Serialize)]
struct CompatibilityQuery {
    customer1_id: i64,
    customer2_id: i64,
}

impl ApiClient {
    pub async fn get_compatibility(
        &self,
        token: &str,
        customer1_id: i64,
        customer2_id: i64,
    ) -> Option<CompatibilityResult> {
        let query = CompatibilityQuery {
            customer1_id,
            customer2_id,
        };
        swallow(
            "get_compatibility",
            self.post_query("/api/compatibility", Some(token), &query)
                .await,
        )
    }
}
