//! Pagination over a processed letter list

use fanstage_core::Letter;
use serde::{Deserialize, Serialize};

/// Page size used when the caller has no preference
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of letters plus the metadata needed to render page controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Letter>,
    /// Current page number (1-indexed)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_results: usize,
}

/// Slice out one page of `letters`.
///
/// The requested page is clamped to `[1, total_pages]`, and a page size of 0
/// is treated as 1.
///
/// # Examples
/// ```
/// use fanstage_core::Letter;
/// use fanstage_inbox::pagination::paginate;
///
/// let letters: Vec<Letter> = (0..45).map(|i| Letter::new(i.to_string())).collect();
///
/// let p = paginate(&letters, 2, 20);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.items[0].id, "20");
///
/// // Requesting out-of-bounds page gets clamped
/// let p = paginate(&letters, 99, 20);
/// assert_eq!(p.page, 3);
/// assert_eq!(p.items.len(), 5);
/// ```
pub fn paginate(letters: &[Letter], requested_page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_results = letters.len();
    let total_pages = total_results.div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(total_results);
    let end = (start + page_size).min(total_results);

    Page {
        items: letters[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_results,
    }
}
