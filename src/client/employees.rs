//! Employee resource, including the two-step email login flow.

use bytes::Bytes;

use super::{swallow, ApiClient};
use crate::models::{
    Employee, EmployeeDraft, EmployeeStats, LoginAck, LoginRequest, LoginResponse, VerifyRequest,
};

impl ApiClient {
    pub async fn get_employees(&self, token: &str) -> Option<Vec<Employee>> {
        swallow(
            "get_employees",
            self.get_json("/api/employees", Some(token)).await,
        )
    }

    pub async fn get_employee(&self, token: &str, id: i64) -> Option<Employee> {
        swallow(
            "get_employee",
            self.get_json(&format!("/api/employees/{id}"), Some(token))
                .await,
        )
    }

    /// Per-coach aggregate used by the statistics comparison view.
    pub async fn get_employee_stats(&self, token: &str, id: i64) -> Option<EmployeeStats> {
        swallow(
            "get_employee_stats",
            self.get_json(&format!("/api/employees/{id}/stats"), Some(token))
                .await,
        )
    }

    pub async fn get_employee_image(&self, token: &str, id: i64) -> Option<Bytes> {
        swallow(
            "get_employee_image",
            self.get_bytes(&format!("/api/employees/{id}/image"), Some(token))
                .await,
        )
    }

    /// The employee bound to the supplied token.
    pub async fn get_me(&self, token: &str) -> Option<Employee> {
        swallow("get_me", self.get_json("/api/employees/me", Some(token)).await)
    }

    /// Add a coach or manager. Manager-only on the server side; the client
    /// just gets `None` back when the token lacks the tier.
    pub async fn create_employee(&self, token: &str, draft: &EmployeeDraft) -> Option<Employee> {
        swallow(
            "create_employee",
            self.post_json("/api/employees", Some(token), draft).await,
        )
    }

    pub async fn update_employee(
        &self,
        token: &str,
        id: i64,
        draft: &EmployeeDraft,
    ) -> Option<Employee> {
        swallow(
            "update_employee",
            self.put_json(&format!("/api/employees/{id}"), Some(token), draft)
                .await,
        )
    }

    /// Step one of login: the backend emails a verification code to this
    /// address. No token yet.
    pub async fn employee_login(&self, email: &str) -> Option<LoginAck> {
        let body = LoginRequest {
            email: email.to_string(),
        };
        swallow(
            "employee_login",
            self.post_json("/api/employees/login", None, &body).await,
        )
    }

    /// Step two of login: exchange the emailed code for a bearer token.
    pub async fn employee_verify(&self, code: &str) -> Option<LoginResponse> {
        let body = VerifyRequest {
            code: code.to_string(),
        };
        swallow(
            "employee_verify",
            self.post_json("/api/employees/verify", None, &body).await,
        )
    }
}
