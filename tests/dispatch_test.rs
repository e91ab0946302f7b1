//! End-to-end dispatch scenarios.

use std::sync::Arc;

use mq_router::event::FunctionResult;
use mq_router::routing::{dispatch, Route, Router, RouterError};
use regex::Regex;
use serde_json::json;

mod common;

use common::{invocation, recording_handler, CallCounter};

#[tokio::test]
async fn test_queue_route_invokes_handler_once() {
    let calls = CallCounter::new();
    let routes = vec![Route::builder()
        .queue_id("q1")
        .with_handler(recording_handler("h", &calls))];

    let inv = invocation("q1", "x");
    let result = dispatch(&routes, &inv.event, &inv.message, &inv.context)
        .await
        .unwrap();

    assert_eq!(result, FunctionResult::ok("h"));
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn test_json_pattern_mismatch_is_no_match() {
    let calls = CallCounter::new();
    let routes = vec![Route::builder()
        .body_json(json!({"k": 1}))
        .with_handler(recording_handler("h", &calls))];

    let inv = invocation("q1", "{}");
    let err = dispatch(&routes, &inv.event, &inv.message, &inv.context)
        .await
        .unwrap_err();

    assert!(matches!(err, RouterError::NoMatchedRoute));
    assert_eq!(err.status_code(), 404);
    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn test_queue_filter_rejects_other_queues() {
    let calls = CallCounter::new();
    let router = Router::new(vec![Route::builder()
        .queue_ids(["a", "b"])
        .with_handler(recording_handler("ab", &calls))]);

    let inv = invocation("c", "x");
    let err = router
        .dispatch(&inv.event, &inv.message, &inv.context)
        .await
        .unwrap_err();
    assert!(matches!(err, RouterError::NoMatchedRoute));

    let inv = invocation("b", "x");
    assert!(router.dispatch(&inv.event, &inv.message, &inv.context).await.is_ok());
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn test_regex_route_requires_non_empty_matching_body() {
    let calls = CallCounter::new();
    let router = Router::new(vec![Route::builder()
        .body_pattern(Regex::new("^ok").unwrap())
        .with_handler(recording_handler("ok", &calls))]);

    for body in ["", "not ok"] {
        let inv = invocation("q", body);
        let err = router
            .dispatch(&inv.event, &inv.message, &inv.context)
            .await
            .unwrap_err();
        assert!(matches!(err, RouterError::NoMatchedRoute), "body {body:?}");
    }

    let inv = invocation("q", "ok then");
    assert!(router.dispatch(&inv.event, &inv.message, &inv.context).await.is_ok());
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn test_invalid_request_stops_the_scan() {
    let strict = CallCounter::new();
    let fallback = CallCounter::new();
    let router = Router::new(vec![
        Route::builder()
            .queue_id("orders")
            .body_json(json!({"type": "order"}))
            .validator(|_, _, message| Ok(message.body().contains("tenant")))
            .with_handler(recording_handler("strict", &strict)),
        Route::builder().with_handler(recording_handler("fallback", &fallback)),
    ]);

    let inv = invocation("orders", r#"{"type":"order"}"#);
    let err = router
        .dispatch(&inv.event, &inv.message, &inv.context)
        .await
        .unwrap_err();
    assert!(matches!(err, RouterError::InvalidRequest));
    assert!(err.is_permanent());
    assert_eq!(strict.count(), 0);
    assert_eq!(fallback.count(), 0);

    let inv = invocation("orders", r#"{"type":"order","tenant":"t1"}"#);
    let result = router
        .dispatch(&inv.event, &inv.message, &inv.context)
        .await
        .unwrap();
    assert_eq!(result.body.as_deref(), Some("strict"));
}

#[tokio::test]
async fn test_validator_receives_event_and_context() {
    let router = Router::new(vec![Route::builder()
        .validator(|event, context, message| {
            Ok(event.messages.len() == 1
                && !context.request_id.is_empty()
                && message.queue_id() == "q1")
        })
        .sync_handler(|_, _, _| Ok(FunctionResult::empty(204)))]);

    let inv = invocation("q1", "x");
    let result = router
        .dispatch(&inv.event, &inv.message, &inv.context)
        .await
        .unwrap();
    assert_eq!(result.status_code, 204);
}

#[tokio::test]
async fn test_concurrent_dispatches_share_one_router() {
    let calls = CallCounter::new();
    let router = Arc::new(Router::new(vec![
        Route::builder()
            .queue_id("q1")
            .with_handler(recording_handler("one", &calls)),
        Route::builder()
            .queue_id("q2")
            .with_handler(recording_handler("two", &calls)),
    ]));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                let queue = if i % 2 == 0 { "q1" } else { "q2" };
                let inv = invocation(queue, "x");
                router
                    .dispatch(&inv.event, &inv.message, &inv.context)
                    .await
                    .map(|r| (queue, r.body))
            })
        })
        .collect();

    for task in tasks {
        let (queue, body) = task.await.unwrap().unwrap();
        let expected = if queue == "q1" { "one" } else { "two" };
        assert_eq!(body.as_deref(), Some(expected));
    }
    assert_eq!(calls.count(), 16);
}
