//! Routing tables for the two calculator binaries.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::operation::{Operation, Outcome};
use crate::request::OperationRequest;
use axum::body::Bytes;
use axum::routing::post;
use axum::{Json, Router};

/// Which operations a calculator process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    AddSub,
    MultiplyDivide,
}

impl ServiceKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AddSub => "add-sub-api",
            Self::MultiplyDivide => "multiply-divide-api",
        }
    }

    #[must_use]
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Self::AddSub => &[Operation::Add, Operation::Sub],
            Self::MultiplyDivide => &[Operation::Multiply, Operation::Divide],
        }
    }

    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Self::AddSub => 5000,
            Self::MultiplyDivide => 5001,
        }
    }
}

/// Build the routing table for `kind`: one `POST` route per operation.
///
/// Built once at startup; the returned router is never mutated. Other methods on these paths
/// get 405, unknown paths 404.
pub fn router(kind: ServiceKind) -> Router {
    kind.operations().iter().fold(Router::new(), |router, &op| {
        router.route(op.route(), post(move |body: Bytes| calculate(op, body)))
    })
}

async fn calculate(op: Operation, body: Bytes) -> Result<Json<Envelope<Outcome>>> {
    let outcome = OperationRequest::from_body(&body).and_then(|req| {
        let outcome = op.apply(req.x, req.y)?;
        tracing::debug!(operation = %op, x = req.x, y = req.y, ?outcome, "calculated");
        Ok(outcome)
    });

    match outcome {
        Ok(outcome) => Ok(Json(Envelope::ok(outcome))),
        Err(e) => {
            tracing::warn!(operation = %op, error = %e, "rejected request");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_test_support::{RouterHandle, spawn_router};
    use serde_json::{Value, json};

    struct TestServer {
        base_url: String,
        handle: RouterHandle,
    }

    impl TestServer {
        async fn start(kind: ServiceKind) -> Self {
            let handle = spawn_router(router(kind)).await.expect("spawn router");
            Self {
                base_url: handle.base_url(),
                handle,
            }
        }

        async fn post_text(&self, path: &str, body: &str) -> (u16, String) {
            let resp = reqwest::Client::new()
                .post(format!("{}{path}", self.base_url))
                .header("content-type", "application/json")
                .body(body.to_string())
                .send()
                .await
                .expect("send");
            let status = resp.status().as_u16();
            (status, resp.text().await.expect("body"))
        }

        async fn post(&self, path: &str, body: &str) -> (u16, Value) {
            let (status, text) = self.post_text(path, body).await;
            (status, serde_json::from_str(&text).expect("json body"))
        }

        async fn stop(self) {
            self.handle.stop().await.expect("stop server");
        }
    }

    #[tokio::test]
    async fn add_sub_routes() {
        let server = TestServer::start(ServiceKind::AddSub).await;

        let (status, body) = server.post("/add", r#"{"x":"3","y":"4"}"#).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"Message": 7, "Status code": 200}));

        let (status, body) = server.post("/sub", r#"{"x":10,"y":4}"#).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"Message": 6, "Status code": 200}));

        server.stop().await;
    }

    #[tokio::test]
    async fn multiply_divide_routes() {
        let server = TestServer::start(ServiceKind::MultiplyDivide).await;

        let (status, body) = server.post("/multiply", r#"{"x":6,"y":7}"#).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"Message": 42, "Status code": 200}));

        let (status, body) = server.post("/divide", r#"{"x":7,"y":2}"#).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"Message": 3.5, "Status code": 200}));

        server.stop().await;
    }

    #[tokio::test]
    async fn failures_map_to_bad_request_envelopes() {
        let server = TestServer::start(ServiceKind::MultiplyDivide).await;

        let (status, body) = server.post("/divide", r#"{"x":1,"y":0}"#).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({"Message": "division by zero", "Status code": 400}));

        let (status, body) = server.post("/multiply", r#"{"x":1}"#).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({"Message": "missing field 'y'", "Status code": 400}));

        let (status, body) = server.post("/multiply", r#"{"x":"a","y":1}"#).await;
        assert_eq!(status, 400);
        assert_eq!(body["Status code"], 400);
        assert!(
            body["Message"]
                .as_str()
                .is_some_and(|m| m.starts_with("field 'x'")),
            "{body}"
        );

        let (status, body) = server.post("/multiply", "not json").await;
        assert_eq!(status, 400);
        assert_eq!(body["Status code"], 400);

        server.stop().await;
    }

    #[tokio::test]
    async fn routing_table_is_scoped_to_the_service() {
        let server = TestServer::start(ServiceKind::AddSub).await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/multiply", server.base_url))
            .body(r#"{"x":1,"y":2}"#)
            .send()
            .await
            .expect("send");
        assert_eq!(resp.status().as_u16(), 404);

        let resp = client
            .get(format!("{}/add", server.base_url))
            .send()
            .await
            .expect("send");
        assert_eq!(resp.status().as_u16(), 405);

        server.stop().await;
    }

    #[tokio::test]
    async fn integer_results_are_not_bounded_by_operand_width() {
        let server = TestServer::start(ServiceKind::AddSub).await;
        let (status, text) = server
            .post_text("/add", r#"{"x":9223372036854775807,"y":1}"#)
            .await;
        assert_eq!(status, 200);
        assert_eq!(text, r#"{"Message":9223372036854775808,"Status code":200}"#);
        server.stop().await;

        let server = TestServer::start(ServiceKind::MultiplyDivide).await;
        let (status, text) = server
            .post_text("/multiply", r#"{"x":4294967296,"y":4294967296}"#)
            .await;
        assert_eq!(status, 200);
        assert_eq!(text, r#"{"Message":18446744073709551616,"Status code":200}"#);
        server.stop().await;
    }

    #[tokio::test]
    async fn content_type_is_not_required() {
        let server = TestServer::start(ServiceKind::AddSub).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/add", server.base_url))
            .header("content-type", "text/plain")
            .body(r#"{"x":2,"y":2}"#)
            .send()
            .await
            .expect("send");
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = resp.json().await.expect("json body");
        assert_eq!(body["Message"], 4);

        server.stop().await;
    }

    #[test]
    fn service_kinds_partition_the_operations() {
        let mut all: Vec<Operation> = [ServiceKind::AddSub, ServiceKind::MultiplyDivide]
            .iter()
            .flat_map(|k| k.operations().iter().copied())
            .collect();
        all.sort_by_key(|op| op.route());
        let mut expected = vec![
            Operation::Add,
            Operation::Sub,
            Operation::Multiply,
            Operation::Divide,
        ];
        expected.sort_by_key(|op| op.route());
        assert_eq!(all, expected);
        assert_eq!(ServiceKind::AddSub.default_port(), 5000);
        assert_eq!(ServiceKind::MultiplyDivide.default_port(), 5001);
    }
}
