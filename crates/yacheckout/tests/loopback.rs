//! The stock `reqwest` transport against a local actix-web stand-in for the API.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use yacheckout::types::{Amount, Decimal, Refund, RefundStatus};
use yacheckout::{new_idempotence_key, Checkout, CheckoutError, Credentials};

const SHOP_ID: u64 = 54401;
const SECRET: &str = "test_secret";

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

fn authorized(req: &HttpRequest) -> bool {
    use base64::Engine;
    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(format!("{SHOP_ID}:{SECRET}"))
    );
    header(req, "authorization") == Some(expected.as_str())
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "type": "error",
        "id": "e-401",
        "code": "invalid_credentials",
        "description": "Authentication by given credentials failed"
    }))
}

async fn get_payment(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "id": path.into_inner(),
        "status": "succeeded",
        "paid": true,
        "amount": {"value": "100.50", "currency": "RUB"}
    }))
}

async fn create_refund(req: HttpRequest, body: web::Json<serde_json::Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let Some(key) = header(&req, "idempotence-key") else {
        return HttpResponse::BadRequest().json(json!({
            "type": "error",
            "id": "e-400",
            "code": "invalid_request",
            "description": "Idempotence key missing",
            "parameter": "Idempotence-Key"
        }));
    };
    HttpResponse::Ok().json(json!({
        "id": format!("rf-{key}"),
        "status": "succeeded",
        "payment_id": body["payment_id"],
        "amount": body["amount"]
    }))
}

async fn delete_webhook(req: HttpRequest) -> HttpResponse {
    if header(&req, "content-type") != Some("application/json") {
        return HttpResponse::UnsupportedMediaType().finish();
    }
    HttpResponse::Ok().json(json!({}))
}

async fn broken() -> HttpResponse {
    HttpResponse::BadGateway()
        .content_type("text/html")
        .body("<html>502 Bad Gateway</html>")
}

/// Start the stand-in on an ephemeral port and return its base URL.
fn start_server() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/api/v3/payments/{id}", web::get().to(get_payment))
            .route("/api/v3/refunds", web::post().to(create_refund))
            .route("/api/v3/webhooks/{id}", web::delete().to(delete_webhook))
            .route("/api/v3/me", web::get().to(broken))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}/api/v3/")
}

fn client(base_url: &str, secret: &str) -> Checkout {
    Checkout::new(Credentials::basic(SHOP_ID, secret)).with_base_url(base_url)
}

#[actix_rt::test]
async fn test_get_payment_over_http() {
    let base = start_server();

    let payment = client(&base, SECRET).get_payment("pay-1").await.unwrap();
    assert_eq!(payment.id.as_deref(), Some("pay-1"));
    assert_eq!(payment.amount.unwrap().value, Decimal::new(10050, 2));
}

#[actix_rt::test]
async fn test_wrong_secret_yields_api_error() {
    let base = start_server();

    let err = client(&base, "wrong").get_payment("pay-1").await.unwrap_err();
    match err {
        CheckoutError::Api { status, error } => {
            assert_eq!(status, 401);
            assert_eq!(error.code, "invalid_credentials");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[actix_rt::test]
async fn test_create_refund_sends_idempotence_key() {
    let base = start_server();
    let key = new_idempotence_key();

    let refund = client(&base, SECRET)
        .create_refund(
            &key,
            &Refund::new("pay-1", Amount::new(Decimal::new(1000, 2), "RUB")),
        )
        .await
        .unwrap();

    assert_eq!(refund.id, Some(format!("rf-{key}")));
    assert_eq!(refund.status, Some(RefundStatus::Succeeded));
    assert_eq!(refund.payment_id, "pay-1");
    assert_eq!(refund.amount.unwrap().value.to_string(), "10.00");
}

#[actix_rt::test]
async fn test_delete_webhook_over_http() {
    let base = start_server();
    let creds = Credentials::oauth(SHOP_ID, "oauth-token");

    Checkout::new(creds)
        .with_base_url(&base)
        .delete_webhook("wh-1")
        .await
        .unwrap();
}

#[actix_rt::test]
async fn test_html_error_page_is_local_error() {
    let base = start_server();

    let err = client(&base, SECRET).get_me().await.unwrap_err();
    assert!(err.is_local());
    assert!(matches!(err, CheckoutError::ErrorBody { status: 502, .. }));
}

#[actix_rt::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close it so nothing is listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base = format!("http://127.0.0.1:{port}/api/v3/");

    let err = client(&base, SECRET).get_payment("pay-1").await.unwrap_err();
    assert!(matches!(err, CheckoutError::Transport(_)));
    assert!(err.api_error().is_none());
}
