use crate::error::Result;

/// Page size requested from every list endpoint
pub const PAGE_SIZE: u32 = 100;

/// Fetch every page of a resource, starting at page 1.
///
/// Stops at the first empty page. A failed page also stops pagination, but the
/// failure is logged and whatever was collected before it is returned, so one
/// broken source only shortens the result instead of aborting the run.
pub fn fetch_all_pages<T, F>(label: &str, mut fetch_page: F) -> Vec<T>
where
    F: FnMut(u32, u32) -> Result<Vec<T>>,
{
    let mut all_results = Vec::new();
    let mut page = 1;

    loop {
        let page_results = match fetch_page(page, PAGE_SIZE) {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(source = label, page, error = %e, "page fetch failed, keeping partial results");
                break;
            }
        };

        if page_results.is_empty() {
            break;
        }

        tracing::trace!(source = label, page, count = page_results.len(), "fetched page");
        all_results.extend(page_results);
        page += 1;
    }

    all_results
}
