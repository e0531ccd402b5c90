//! Wardrobe resource.

use super::{swallow, ApiClient};
use crate::models::Clothe;

impl ApiClient {
    pub async fn get_clothes(&self, token: &str) -> Option<Vec<Clothe>> {
        swallow("get_clothes", self.get_json("/api/clothes", Some(token)).await)
    }
}
