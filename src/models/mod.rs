mod page;

pub use page::{Page, PageQuery};
