use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: "customer".to_owned(),
    }
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trips_through_json() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_missing_role_defaults_to_customer() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-2","name":"Bob","email":"bob@example.com"}"#,
    )
    .unwrap();
    assert_eq!(user.role, "customer");
}

#[test]
fn user_keeps_unknown_role_values() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-3","name":"Cleo","email":"c@example.com","role":"curator"}"#,
    )
    .unwrap();
    assert_eq!(user.role, "curator");
}

// =============================================================
// AuthSuccess
// =============================================================

#[test]
fn auth_success_deserializes_token_and_user() {
    let auth: AuthSuccess = serde_json::from_str(
        r#"{"token":"tok123","user":{"id":"u-1","name":"Alice","email":"alice@example.com","role":"artist"}}"#,
    )
    .unwrap();
    assert_eq!(auth.token, "tok123");
    assert_eq!(auth.user.role, "artist");
}

// =============================================================
// Painting / Order defaults
// =============================================================

#[test]
fn painting_sold_defaults_to_false() {
    let painting: Painting = serde_json::from_str(
        r#"{"id":"p-1","title":"Dusk","artist_id":"a-1","artist_name":"Vera","price_cents":125000,"image_url":"/img/p-1.jpg"}"#,
    )
    .unwrap();
    assert!(!painting.sold);
}

#[test]
fn order_items_default_to_empty() {
    let order: Order = serde_json::from_str(
        r#"{"id":"o-1","status":"paid","total_cents":99900,"created_at":"2024-03-01T12:00:00Z"}"#,
    )
    .unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.status, "paid");
}

#[test]
fn order_round_trips_with_items() {
    let order = Order {
        id: "o-2".to_owned(),
        status: "shipped".to_owned(),
        total_cents: 250_000,
        created_at: "2024-04-05T09:30:00Z".to_owned(),
        items: vec![OrderItem {
            painting_id: "p-9".to_owned(),
            title: "Harbor".to_owned(),
            price_cents: 250_000,
        }],
    };
    let json = serde_json::to_string(&order).unwrap();
    let back: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);
}
