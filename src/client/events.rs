//! Event resource.
//!
//! The original call sites were inconsistent about sending a token here; the
//! policy is normalized to "attach the token whenever the caller has one",
//! with the server remaining the authority on what is actually public.

use super::{swallow, ApiClient};
use crate::models::Event;

impl ApiClient {
    pub async fn get_events(&self, token: Option<&str>) -> Option<Vec<Event>> {
        swallow("get_events", self.get_json("/api/events", token).await)
    }

    pub async fn get_event(&self, token: Option<&str>, id: i64) -> Option<Event> {
        swallow(
            "get_event",
            self.get_json(&format!("/api/events/{id}"), token).await,
        )
    }
}
