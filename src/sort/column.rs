use std::fmt::Debug;

use strum::VariantArray;

/// A sortable column of one list view.
///
/// Implemented for every closed enum deriving [`VariantArray`] (declaration order)
/// and [`strum::IntoStaticStr`] (wire name).
pub trait SortColumn: Copy + Eq + Debug + VariantArray + 'static {
    /// Name used on the wire, e.g. `paymentType`
    fn id(self) -> &'static str;

    /// Position in declaration order, `None` if the enumeration does not list it
    #[inline]
    fn index(self) -> Option<usize> {
        Self::VARIANTS.iter().position(|c| *c == self)
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|c| c.id() == id)
    }
}

impl<T> SortColumn for T
where
    T: Copy + Eq + Debug + VariantArray + 'static,
    &'static str: From<T>,
{
    #[inline]
    fn id(self) -> &'static str {
        self.into()
    }
}
