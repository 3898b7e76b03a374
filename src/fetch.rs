//! Bounded-parallel download of statcast CSV payloads.
//!
//! Every URL is fetched with a blocking GET on a rayon worker pool. A single
//! failed request fails the whole batch; no partial results are returned.

use indicatif::ProgressBar;
use rayon::prelude::*;
use reqwest::blocking::Client;

use crate::error::Result;
use crate::http_client::http_client;

const DEFAULT_PARALLELISM: usize = 16;

/// Worker count for the fetch pool, overridable via `STATCAST_PARALLELISM`.
pub fn fetch_parallelism() -> usize {
    std::env::var("STATCAST_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PARALLELISM)
        .clamp(1, 32)
}

/// Fetch every URL, collecting bodies in completion order. The progress bar,
/// when given, ticks once per completed request.
pub fn fetch_all(
    urls: &[String],
    parallelism: usize,
    progress: Option<&ProgressBar>,
) -> Result<Vec<String>> {
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let client = http_client()?;
    let threads = parallelism.clamp(1, 32).min(urls.len());

    with_fetch_pool(threads, || {
        urls.par_iter()
            .map(|url| {
                let body = fetch_one(client, url)?;
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                Ok(body)
            })
            .collect::<Result<Vec<String>>>()
    })
}

fn fetch_one(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

fn with_fetch_pool<T>(threads: usize, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}
