use crate::sort::{SortColumn, SortDir, SortState};
use crate::utils::symbols::triangle;

/// Control bound to one (column, direction) pair. Holds no state of its own,
/// whether it is active is read from the shared [`SortState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortToggle<C: SortColumn> {
    pub column: C,
    pub dir: SortDir,
}

impl<C: SortColumn> SortToggle<C> {
    pub fn new(column: C, dir: SortDir) -> Self {
        Self { column, dir }
    }

    /// The `2 * columns` controls of a view, per column `Asc` then `Desc`
    pub fn all() -> impl Iterator<Item = Self> {
        C::VARIANTS
            .iter()
            .flat_map(|c| [Self::new(*c, SortDir::Asc), Self::new(*c, SortDir::Desc)])
    }

    #[inline]
    pub fn is_active(&self, state: &SortState<C>) -> bool {
        state.direction(self.column) == self.dir
    }

    pub fn symbol(&self) -> &'static str {
        match self.dir {
            SortDir::Asc => triangle::UP,
            SortDir::Desc => triangle::DOWN,
        }
    }
}
