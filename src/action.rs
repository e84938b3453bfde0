use crate::sort::SortParam;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Sort changed, the view's data source should fetch again
    Refetch { view: String, sort: SortParam },
}
