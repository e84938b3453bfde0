use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sort::SortParam;

/// Request for one page of a list view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort: SortParam,
    /// extra filter parameters, sent in insertion order
    pub filters: IndexMap<String, String>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32, sort: SortParam) -> Self {
        Self { page, size, sort, filters: IndexMap::new() }
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query pairs: `page`, `size`, one `sort` per token, then the filters
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(2 + self.sort.len() + self.filters.len());
        pairs.push(("page".to_owned(), self.page.to_string()));
        pairs.push(("size".to_owned(), self.size.to_string()));
        pairs.extend(self.sort.iter().map(|t| ("sort".to_owned(), t.to_string())));
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}
