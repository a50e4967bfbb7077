//! # Page Walker
//!
//! Retrieves a complete collection from an endpoint that may page its results.

use crate::{errors::ToolkitError, types::PageResponse};
use std::future::Future;
use tracing::debug;

/// Walks pages `1, 2, ...` until the collection is complete.
///
/// `fetch_page` is called with a 1-based page number and must return that page.
/// - A bare array is the whole collection: it is returned after one request.
/// - For `{items, total}` pages, items accumulate in page order. The walk ends
///   on an empty page (even if `total` claims more) or once the accumulated
///   count reaches `total`.
///
/// Any error aborts the walk; partial results are discarded.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, ToolkitError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageResponse<T>, ToolkitError>>,
{
    let mut collected = Vec::new();
    let mut page = 1;

    loop {
        match fetch_page(page).await? {
            PageResponse::Bare(items) => {
                debug!(count = items.len(), "Received unpaged collection");
                return Ok(items);
            }
            PageResponse::Paginated { items, total } => {
                debug!(page, count = items.len(), total, "Received page");
                if items.is_empty() {
                    break;
                }
                collected.extend(items);
                if collected.len() as u64 >= total {
                    break;
                }
                page += 1;
            }
        }
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn paged(items: &[u32], total: u64) -> PageResponse<u32> {
        PageResponse::Paginated {
            items: items.to_vec(),
            total,
        }
    }

    async fn walk(pages: Vec<PageResponse<u32>>) -> (Vec<u32>, u32) {
        let calls = Cell::new(0);
        let result = fetch_all_pages(|page| {
            calls.set(calls.get() + 1);
            let response = pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_else(|| paged(&[], 0));
            async move { Ok(response) }
        })
        .await
        .unwrap();
        (result, calls.get())
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let (items, calls) = walk(vec![paged(&[1, 2], 5), paged(&[3, 4], 5), paged(&[5], 5)]).await;
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn empty_page_ends_walk_even_if_total_disagrees() {
        let (items, calls) = walk(vec![paged(&[1, 2], 10), paged(&[], 10)]).await;
        assert_eq!(items, vec![1, 2]);
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn missing_total_stops_after_first_page() {
        let (items, calls) = walk(vec![paged(&[7], 0), paged(&[8], 0)]).await;
        assert_eq!(items, vec![7]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn bare_array_is_a_single_request() {
        let (items, calls) = walk(vec![PageResponse::Bare(vec![9; 250])]).await;
        assert_eq!(items.len(), 250);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn error_discards_partial_results() {
        let result = fetch_all_pages(|page| async move {
            if page == 1 {
                Ok(paged(&[1], 2))
            } else {
                Err(ToolkitError::Transport {
                    status: Some(502),
                    message: "502 Bad Gateway: upstream".into(),
                })
            }
        })
        .await;
        assert_eq!(result.unwrap_err().status(), Some(502));
    }
}
