//! Data model for the Soul Connection backend.
//!
//! Every list-shaped payload fetched from the API is treated as a complete
//! snapshot for the current view. Local copies are ephemeral UI cache, never
//! the source of truth.

use serde::{Deserialize, Serialize};

/// A coached customer. Identity (`id`) is immutable; profile fields are
/// editable through the customers endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astrological_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Payload for customer create/update calls. All profile fields optional so
/// callers can send partial edits.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astrological_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// An employee (coach or manager). `customers` lists assigned customer ids;
/// assignment is not exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<i64>>,
}

/// Payload for employee create/update calls, the manager-only coach
/// management views. All fields optional so callers can send partial edits.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<i64>>,
}

/// Per-coach aggregate returned by `/api/employees/:id/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeStats {
    pub average_rating: f64,
    pub clients_length: i64,
    pub clients_length_female: i64,
    pub clients_length_male: i64,
    #[serde(default)]
    pub total_amount_per_employee: f64,
}

/// A coaching encounter. Read-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Encounter {
    pub id: i64,
    pub customer_id: i64,
    pub date: String,
    /// 0 to 5 inclusive.
    pub rating: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Payment method as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card", alias = "credit card")]
    CreditCard,
    #[serde(rename = "Bank Transfer", alias = "bank transfer")]
    BankTransfer,
    #[serde(rename = "PayPal", alias = "paypal")]
    PayPal,
    #[serde(other, rename = "Other")]
    Other,
}

/// One line of a customer's payment history. `amount` is signed: refunds
/// come back negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub date: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub payment_method: PaymentMethod,
}

/// A scheduled event (speed dating, workshops, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub max_participants: i64,
    /// Latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_x: Option<f64>,
    /// Longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_y: Option<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

/// Wardrobe item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClotheKind {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "shoes")]
    Shoes,
    #[serde(rename = "hat/cap")]
    HatCap,
}

impl ClotheKind {
    /// All categories, in the order the wardrobe view shows them.
    pub const ALL: [ClotheKind; 4] = [
        ClotheKind::Top,
        ClotheKind::Bottom,
        ClotheKind::Shoes,
        ClotheKind::HatCap,
    ];
}

/// A wardrobe item belonging to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clothe {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: ClotheKind,
    /// Image reference (URL or data URI).
    pub image: String,
}

/// A coaching tip shown on the tips page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub tip: String,
}

/// Response of the compatibility endpoint: a 0-100 percentage. The backend
/// computes it with float division, so the wire value is a float even when
/// it lands on a whole number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CompatibilityResult {
    pub result: f64,
}

impl CompatibilityResult {
    /// The percentage rounded to the nearest integer and clamped to 0-100.
    pub fn score(&self) -> u8 {
        self.result.round().clamp(0.0, 100.0) as u8
    }
}

/// Body of `POST /api/employees/login`. The backend emails a verification
/// code to this address.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Acknowledgement of the login request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginAck {
    pub message: String,
}

/// Body of `POST /api/employees/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest {
    pub code: String,
}

/// Successful verification: the bearer token for subsequent calls.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}
