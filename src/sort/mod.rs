mod column;
mod direction;
pub mod param;
mod state;

pub use column::SortColumn;
pub use direction::{Direction, SortDir};
pub use param::{SortParam, SortToken, serialize};
pub use state::SortState;
