use fastrace::trace;
use rolodex_types::{SortKey, User, ViewMode};
use serde::{Deserialize, Serialize};

use crate::filters::{filter_by_min_age, sort_users};
use crate::paging::{clamp_page, page_count, paginate};

/// View controls for one render pass, carried explicitly rather than held
/// as process-wide mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryQuery {
    pub min_age: u32,
    pub sort: Option<SortKey>,
    pub view: ViewMode,
    pub page: usize,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            min_age: 0,
            sort: None,
            view: ViewMode::Cards,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPage {
    pub users: Vec<User>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total: usize,
}

#[trace]
pub fn run_query(users: Vec<User>, query: &DirectoryQuery) -> DirectoryPage {
    let filtered = filter_by_min_age(users, query.min_age);
    let sorted = sort_users(filtered, query.sort);

    let total = sorted.len();
    let page_size = query.view.page_size();
    let total_pages = page_count(total, page_size);
    let page = clamp_page(query.page, total_pages);

    DirectoryPage {
        users: paginate(&sorted, page, page_size).to_vec(),
        page,
        page_count: total_pages,
        page_size,
        total,
    }
}
