//! Lazy page-by-page listing on top of a [`PostSource`].

use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use inc_core::{PostQuery, PostSource, WpPost};

struct PagerState<'a> {
    source: &'a dyn PostSource,
    query: PostQuery,
    throttle: Duration,
    page: u32,
    fetched: usize,
    done: bool,
}

/// Posts matching `query`, fetched one page at a time as the stream is polled.
///
/// Paging ends on an empty page, a short page, the query's page ceiling or
/// the first error; errors are logged and what was already yielded stands.
/// Dropping the stream stops any further request.
pub fn post_stream<'a>(
    source: &'a dyn PostSource,
    query: PostQuery,
    throttle: Duration,
) -> impl Stream<Item = WpPost> + Send + 'a {
    let state = PagerState {
        source,
        query,
        throttle,
        page: 1,
        fetched: 0,
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.done {
            return None;
        }
        if state.page > 1 && !state.throttle.is_zero() {
            tokio::time::sleep(state.throttle).await;
        }

        let posts = match state.source.fetch_page(&state.query, state.page).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(
                    "Fetching page {} of {} from {} failed: {}",
                    state.page,
                    state.query.describe(),
                    state.source.name(),
                    e
                );
                return None;
            }
        };
        if posts.is_empty() {
            tracing::debug!("Page {} is empty, listing done", state.page);
            log_totals(&state);
            return None;
        }

        state.fetched += posts.len();
        if posts.len() < state.query.per_page as usize {
            tracing::debug!("Page {} has fewer than {} posts, listing done", state.page, state.query.per_page);
            state.done = true;
        } else if state.query.max_pages.is_some_and(|max| state.page >= max) {
            tracing::debug!("Reached the limit of {} pages", state.page);
            state.done = true;
        }
        if state.done {
            log_totals(&state);
        }
        state.page += 1;
        Some((posts, state))
    })
    .flat_map(stream::iter)
}

fn log_totals(state: &PagerState<'_>) {
    tracing::info!(
        "Fetched {} posts for {} ({} pages)",
        state.fetched,
        state.query.describe(),
        state.page
    );
}

/// Drains [`post_stream`] into a vector.
pub async fn collect_posts(source: &dyn PostSource, query: PostQuery, throttle: Duration) -> Vec<WpPost> {
    post_stream(source, query, throttle).collect().await
}
