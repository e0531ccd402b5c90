//! Coaching tips resource. Same token policy as events.

use super::{swallow, ApiClient};
use crate::models::Tip;

impl ApiClient {
    pub async fn get_tips(&self, token: Option<&str>) -> Option<Vec<Tip>> {
        swallow("get_tips", self.get_json("/api/tips", token).await)
    }
}
