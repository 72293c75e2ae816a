//! End-to-end tests for the contact directory HTTP API.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn register_and_lookup_roundtrip() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Juan Pérez", "phone": "0998765432" }))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 201);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Juan Pérez");
    assert_eq!(body["phone"], "0998765432");

    // case- and whitespace-insensitive lookup
    let res = client
        .get(format!("{base}/contactos/  juan pérez "))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Juan Pérez");
}

#[tokio::test]
async fn register_normalizes_input() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "  maría   GARCÍA ", "phone": "+593 98-765-4321" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "María García");
    assert_eq!(body["phone"], "593987654321");
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let first = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Juan Pérez", "phone": "0998765432" }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 201);

    // same contact under different casing
    let second = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "juan PÉREZ", "phone": "0991234567" }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 400);
    let body: Value = second.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn invalid_input_is_rejected() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let bad_name = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Juan123", "phone": "0998765432" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_name.status(), 400);

    let bad_phone = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Juan Pérez", "phone": "098abc4321" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_phone.status(), 400);
}

#[tokio::test]
async fn list_is_sorted_lexicographically() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    for (name, phone) in [
        ("Zulma", "0991111111"),
        ("Ana", "0992222222"),
        ("Mario", "0993333333"),
    ] {
        let res = client
            .post(format!("{base}/contactos/"))
            .json(&json!({ "name": name, "phone": phone }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 201);
    }

    let res = client.get(format!("{base}/contactos/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let contacts: Vec<Value> = res.json().await.unwrap();
    let names: Vec<_> = contacts.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ana", "Mario", "Zulma"]);
}

#[tokio::test]
async fn lookup_of_missing_contact_is_404() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client
        .get(format!("{base}/contactos/Laura Martínez"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("does not exist"));
}

#[tokio::test]
async fn delete_is_case_sensitive() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Juan Pérez", "phone": "0998765432" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    // lowercase delete misses even though lookup would match
    let res = client
        .delete(format!("{base}/contactos/juan pérez"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = client
        .delete(format!("{base}/contactos/Juan Pérez"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Juan Pérez");
    assert_eq!(body["phone"], "0998765432");

    // gone now
    let res = client
        .get(format!("{base}/contactos/Juan Pérez"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn stats_track_register_and_delete() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let stats: Value = client
        .get(format!("{base}/estadisticas/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total_contacts"], 0);

    let res = client
        .post(format!("{base}/contactos/"))
        .json(&json!({ "name": "Ana", "phone": "0991234567" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let stats: Value = client
        .get(format!("{base}/estadisticas/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total_contacts"], 1);

    let res = client
        .delete(format!("{base}/contactos/Ana"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let stats: Value = client
        .get(format!("{base}/estadisticas/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total_contacts"], 0);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client.get(format!("{base}/estadisticas/")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    // a supplied ID is echoed back
    let res = client
        .get(format!("{base}/estadisticas/"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );
}

#[tokio::test]
async fn service_info_lists_endpoints() {
    let (base, _shutdown) = common::spawn_service().await;
    let client = common::client();

    let res = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(body["endpoints"]["register_contact"]
        .as_str()
        .unwrap()
        .contains("/contactos/"));
}
