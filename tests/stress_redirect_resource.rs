//! Stress tests for concurrent traces sharing one `Requester`.
#![allow(clippy::cast_precision_loss)]
//!
//! The service answers every request with the same `Requester`, so many deep
//! chains run at once over one connection pool. These tests check that:
//! - every concurrent trace returns its own, correctly ordered chain
//! - the hop bound caps server load no matter how deep the chain goes
//! - the ignored run prints timing for a heavier load

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use helpers::{fast_config, page, redirect, spawn_app};
use unfurl::{Requester, TraceConfig};

/// `/redirect/{chain}/{hop}` redirects to `{base}/redirect/{chain}/{hop - 1}`
/// until 0, which is a plain page naming the chain. Every request bumps
/// `counter`.
async fn start_redirect_server(counter: Arc<AtomicUsize>) -> String {
    spawn_app(move |base| {
        Router::new().route(
            "/redirect/{chain}/{hop}",
            get(move |Path((chain, hop)): Path<(usize, usize)>| {
                let counter = counter.clone();
                let base = base.clone();
                async move {
                    counter.fetch_add(1, Ordering::Relaxed);
                    if hop > 0 {
                        redirect(
                            StatusCode::TEMPORARY_REDIRECT,
                            &format!("{}/redirect/{}/{}", base, chain, hop - 1),
                        )
                    } else {
                        page("text/plain", format!("chain {chain} done"))
                    }
                }
            }),
        )
    })
    .await
}

async fn run_concurrent_traces(
    requester: &Requester,
    server_url: &str,
    chains: usize,
    depth: usize,
) -> Vec<Result<unfurl::RedirectChain, unfurl::TraceError>> {
    let traces = (0..chains).map(|chain| {
        let requester = requester.clone();
        let url = format!("{}/redirect/{}/{}", server_url, chain, depth);
        tokio::spawn(async move { requester.follow_redirects(&url).await })
    });

    futures::future::join_all(traces)
        .await
        .into_iter()
        .map(|joined| joined.expect("trace task panicked"))
        .collect()
}

#[tokio::test]
async fn test_concurrent_traces_keep_separate_chains() {
    let counter = Arc::new(AtomicUsize::new(0));
    let server_url = start_redirect_server(counter.clone()).await;
    let requester = Requester::new(fast_config()).expect("client builds");

    let chains = 20;
    let depth = 4;
    let results = run_concurrent_traces(&requester, &server_url, chains, depth).await;

    for (chain, result) in results.into_iter().enumerate() {
        let trace = result.expect("trace succeeds");
        assert_eq!(trace.len(), depth + 1);
        assert_eq!(trace.hops()[0].body, format!("chain {chain} done"));
        assert_eq!(
            trace.origin().map(|h| h.url.clone()),
            Some(format!("{}/redirect/{}/{}", server_url, chain, depth))
        );
        // Every hop of this trace belongs to this chain
        let prefix = format!("{}/redirect/{}/", server_url, chain);
        assert!(trace.iter().all(|h| h.url.starts_with(&prefix)));
    }
    assert_eq!(counter.load(Ordering::Relaxed), chains * (depth + 1));
}

#[tokio::test]
async fn test_hop_bound_caps_server_load() {
    let counter = Arc::new(AtomicUsize::new(0));
    let server_url = start_redirect_server(counter.clone()).await;
    let max_redirects = 5;
    let requester = Requester::new(TraceConfig {
        max_redirects,
        ..fast_config()
    })
    .expect("client builds");

    let chains = 10;
    let results = run_concurrent_traces(&requester, &server_url, chains, 1000).await;

    for result in results {
        let trace = result.expect("trace succeeds");
        assert_eq!(trace.len(), max_redirects);
        assert!(trace.is_cut_short());
    }
    assert_eq!(counter.load(Ordering::Relaxed), chains * max_redirects);
}

/// Heavier load with timing output.
#[tokio::test]
#[ignore] // Run with: cargo test --test stress_redirect_resource -- --ignored --nocapture
async fn test_redirect_chain_resource_usage_heavy() {
    println!("=== Redirect Chain Resource Usage: Heavy ===\n");

    let counter = Arc::new(AtomicUsize::new(0));
    let server_url = start_redirect_server(counter.clone()).await;
    let requester = Requester::new(fast_config()).expect("client builds");

    let chains = 200;
    let depth = 9;
    let start = Instant::now();
    let results = run_concurrent_traces(&requester, &server_url, chains, depth).await;
    let elapsed = start.elapsed();

    let success = results.iter().filter(|r| r.is_ok()).count();
    let fetches = counter.load(Ordering::Relaxed);

    println!("Total time: {:.2}s", elapsed.as_secs_f64());
    println!("Success: {} / {}", success, chains);
    println!("Fetches served: {}", fetches);
    println!(
        "Average per fetch: {:.1}ms",
        elapsed.as_millis() as f64 / fetches.max(1) as f64
    );

    assert_eq!(success, chains);
    assert_eq!(fetches, chains * (depth + 1));
}
