//! Gateway client contract: typed results on success, `None`/`false` on any
//! failure, bearer token attached to authenticated calls.

mod common;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use soul_connection::models::EmployeeDraft;

const TOKEN: &str = "test-token";

fn require_bearer(headers: &HeaderMap) -> Result<(), StatusCode> {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {TOKEN}"))
        .unwrap_or(false);
    if authorized {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/customers",
            get(|headers: HeaderMap| async move {
                require_bearer(&headers)?;
                Ok::<_, StatusCode>(Json(json!([
                    {"id": 7, "email": "a@soul-connection.fr", "name": "Alice", "surname": "Martin",
                     "gender": "Female", "astrological_sign": "Leo", "birth_date": "1996-04-02"},
                    {"id": 12, "email": "b@soul-connection.fr", "name": "Bruno", "surname": "Petit"}
                ])))
            }),
        )
        .route(
            "/api/customers/:id",
            get(|headers: HeaderMap, Path(id): Path<i64>| async move {
                require_bearer(&headers)?;
                if id == 7 {
                    Ok::<_, StatusCode>(Json(json!(
                        {"id": 7, "email": "a@soul-connection.fr", "name": "Alice", "surname": "Martin"}
                    )))
                } else {
                    Err(StatusCode::NOT_FOUND)
                }
            })
            .delete(|headers: HeaderMap, Path(id): Path<i64>| async move {
                require_bearer(&headers)?;
                if id == 7 {
                    Ok::<_, StatusCode>(Json(json!({"message": "Customer deleted successfully"})))
                } else {
                    Err(StatusCode::NOT_FOUND)
                }
            }),
        )
        .route(
            "/api/customers/:id/payments_history",
            get(|headers: HeaderMap, Path(_id): Path<i64>| async move {
                require_bearer(&headers)?;
                Ok::<_, StatusCode>(Json(json!([
                    {"id": 1, "date": "2024-02-10", "amount": 49.9, "payment_method": "PayPal"},
                    {"id": 2, "date": "2024-03-10", "amount": -49.9, "payment_method": "Credit Card",
                     "comment": "refund"}
                ])))
            }),
        )
        .route(
            "/api/employees",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                require_bearer(&headers)?;
                Ok::<_, StatusCode>(Json(json!({
                    "id": 42,
                    "email": body["email"],
                    "name": body["name"],
                    "surname": body["surname"],
                    "work": body["work"]
                })))
            }),
        )
        .route(
            "/api/employees/:id",
            put(|headers: HeaderMap, Path(id): Path<i64>, Json(body): Json<Value>| async move {
                require_bearer(&headers)?;
                if id != 42 {
                    return Err(StatusCode::NOT_FOUND);
                }
                Ok(Json(json!({
                    "id": 42,
                    "email": "coach@soul-connection.fr",
                    "name": "Nadia",
                    "surname": "Robert",
                    "work": body["work"]
                })))
            }),
        )
        .route(
            "/api/tips",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Listen", "tip": "Ask questions and listen to the answers."}
                ]))
            }),
        )
        .route(
            "/api/events",
            get(|| async { Json(json!("this is not an array of events")) }),
        )
        .route(
            "/api/encounters",
            delete(|| async { StatusCode::METHOD_NOT_ALLOWED })
                .get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

#[tokio::test]
async fn customers_list_and_get_round_trip() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    let customers = client.get_customers(TOKEN).await.expect("customer list");
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name, "Alice");
    assert_eq!(customers[1].birth_date, None);

    let alice = client.get_customer(TOKEN, 7).await.expect("customer 7");
    assert_eq!(alice.surname, "Martin");
}

#[tokio::test]
async fn missing_token_yields_none_not_error() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    // Empty sentinel token from a logged-out session: server says 403, the
    // caller just sees an absent result.
    assert!(client.get_customers("").await.is_none());
}

#[tokio::test]
async fn payments_decode_with_signed_amounts() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    let payments = client.get_customer_payments(TOKEN, 7).await.expect("payments");
    assert_eq!(payments.len(), 2);
    assert!(payments[1].amount < 0.0);
}

#[tokio::test]
async fn delete_returns_flag_instead_of_body() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    assert!(client.delete_customer(TOKEN, 7).await);
    assert!(!client.delete_customer(TOKEN, 999).await);
}

#[tokio::test]
async fn coach_management_create_and_update() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    let draft = EmployeeDraft {
        email: Some("coach@soul-connection.fr".to_string()),
        name: Some("Nadia".to_string()),
        surname: Some("Robert".to_string()),
        work: Some("Coach".to_string()),
        ..Default::default()
    };
    let created = client.create_employee(TOKEN, &draft).await.expect("new coach");
    assert_eq!(created.id, 42);
    assert_eq!(created.work.as_deref(), Some("Coach"));

    let promotion = EmployeeDraft {
        work: Some("Manager".to_string()),
        ..Default::default()
    };
    let updated = client
        .update_employee(TOKEN, created.id, &promotion)
        .await
        .expect("promoted coach");
    assert_eq!(updated.work.as_deref(), Some("Manager"));

    // Server-side authorization still decides; a bad token means no result.
    assert!(client.create_employee("", &draft).await.is_none());
    assert!(client.update_employee(TOKEN, 999, &promotion).await.is_none());
}

#[tokio::test]
async fn tips_are_public() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    let tips = client.get_tips(None).await.expect("tips");
    assert_eq!(tips[0].title, "Listen");
}

#[tokio::test]
async fn transport_failure_resolves_to_none() {
    let client = common::unreachable_client();

    assert!(client.get_customers(TOKEN).await.is_none());
    assert!(client.get_tips(None).await.is_none());
    assert!(!client.delete_customer(TOKEN, 1).await);
}

#[tokio::test]
async fn malformed_body_resolves_to_none() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    assert!(client.get_events(None).await.is_none());
}

#[tokio::test]
async fn server_error_resolves_to_none() {
    let base = common::serve(backend()).await;
    let client = common::client(&base);

    assert!(client.get_encounters(TOKEN).await.is_none());
}
