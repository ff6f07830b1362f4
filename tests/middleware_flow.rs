mod common;

use bunner_cors_middleware::constants::header;
use bunner_cors_middleware::{Cors, CorsOptions, Exchange};
use common::builders::request;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, PartialEq, Eq)]
enum DownstreamError {
    NotFound,
}

async fn downstream(ctx: &mut Exchange, status: u16) -> Result<u16, DownstreamError> {
    ctx.response_headers
        .insert("Content-Type".into(), "application/json".into());
    if status == 404 {
        Err(DownstreamError::NotFound)
    } else {
        Ok(status)
    }
}

#[tokio::test]
async fn continuation_runs_once_after_headers_are_written() {
    let cors = Cors::new(CorsOptions::new().allow_origins(["https://a.example"]));
    let mut exchange = request().origin("https://a.example").exchange();
    let calls = AtomicUsize::new(0);

    let observed = cors
        .handle(
            &mut exchange,
            |ctx, ()| {
                calls.fetch_add(1, Ordering::SeqCst);
                let observed = (
                    ctx.header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                        .map(str::to_owned),
                    ctx.header(header::VARY).map(str::to_owned),
                );
                async move { observed }
            },
            (),
        )
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        observed,
        (Some("https://a.example".to_string()), Some("Origin".to_string()))
    );
}

#[tokio::test]
async fn downstream_success_and_headers_are_both_visible() {
    let cors = Cors::default();
    let mut exchange = request().origin("https://a.example").exchange();

    let result = cors
        .handle(&mut exchange, |ctx, status| downstream(ctx, status), 200)
        .await;

    assert_eq!(result, Ok(200));
    assert_eq!(exchange.header("Content-Type"), Some("application/json"));
    assert_eq!(exchange.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
}

#[tokio::test]
async fn downstream_failure_propagates_unchanged() {
    let cors = Cors::default();
    let mut exchange = request().origin("https://a.example").exchange();

    let result = cors
        .handle(&mut exchange, |ctx, status| downstream(ctx, status), 404)
        .await;

    assert_eq!(result, Err(DownstreamError::NotFound));
    assert_eq!(exchange.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
}

#[tokio::test]
async fn shared_instance_serves_interleaved_requests() {
    let cors = Arc::new(Cors::new(
        CorsOptions::new().allow_origins(["https://a.example", "https://b.example"]),
    ));

    let tasks = ["https://a.example", "https://b.example", "https://c.example"]
        .into_iter()
        .map(|origin| {
            let cors = Arc::clone(&cors);
            tokio::spawn(async move {
                let mut exchange = request().origin(origin).exchange();
                cors.handle(&mut exchange, |_, ()| tokio::task::yield_now(), ())
                    .await;
                exchange
                    .header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .map(str::to_owned)
            })
        })
        .collect::<Vec<_>>();

    let mut resolved = Vec::new();
    for task in tasks {
        resolved.push(task.await.expect("task panicked"));
    }

    assert_eq!(
        resolved,
        [
            Some("https://a.example".to_string()),
            Some("https://b.example".to_string()),
            None,
        ]
    );
}

#[cfg(feature = "http")]
mod http_host {
    use super::*;
    use bunner_cors_middleware::HttpExchange;
    use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN, VARY};
    use http::{HeaderMap, Request, Response};

    #[tokio::test]
    async fn cors_headers_merge_into_http_response() {
        let cors = Cors::new(CorsOptions::new().allow_origins(["https://a.example"]));
        let request = Request::builder()
            .header(ORIGIN, "https://a.example")
            .body(())
            .unwrap();
        let mut response = Response::builder()
            .header(CONTENT_TYPE, "text/plain")
            .header(VARY, "Accept-Encoding")
            .body(())
            .unwrap();

        let mut exchange = HttpExchange::new(request.headers(), response.headers_mut());
        let status = cors
            .handle(&mut exchange, |_, ()| async { 204 }, ())
            .await;

        let headers: &HeaderMap = response.headers();
        assert_eq!(status, 204);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "https://a.example");
        assert_eq!(headers[VARY], "Accept-Encoding, Origin");
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn unlisted_origin_gets_no_allow_origin_in_http_response() {
        let cors = Cors::new(CorsOptions::new().allow_origins(["https://a.example"]));
        let mut request = HeaderMap::new();
        request.insert(ORIGIN, "https://c.example".parse().unwrap());
        let mut response = HeaderMap::new();

        cors.apply(&mut HttpExchange::new(&request, &mut response));

        assert!(response.get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert_eq!(response[VARY], "Origin");
    }
}
