use std::marker::PhantomData;

use crate::error::SortError;
use crate::sort::column::SortColumn;
use crate::sort::direction::{Direction, SortDir};
use crate::sort::param::{self, SortParam, SortToken};

/// Direction of every column of one list view, in declaration order.
///
/// Always total: one entry per column of `C`. Never mutated in place, toggling
/// yields a new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState<C: SortColumn> {
    dirs: Box<[Direction]>,
    _col: PhantomData<C>,
}

impl<C: SortColumn> Default for SortState<C> {
    fn default() -> Self {
        Self { dirs: vec![Direction::Unset; C::VARIANTS.len()].into_boxed_slice(), _col: PhantomData }
    }
}

impl<C: SortColumn> SortState<C> {
    /// Every column unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Every column unset, then each listed column set to its direction. Later entries win.
    pub fn with_defaults<I>(defaults: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = (C, SortDir)>,
    {
        let mut dirs = Self::default().dirs;
        for (col, dir) in defaults {
            dirs[Self::slot(col)?] = dir.into();
        }
        Ok(Self { dirs, _col: PhantomData })
    }

    /// Defaults given as wire tokens, e.g. `["deadline,asc"]`
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defaults = tokens
            .into_iter()
            .map(|t| SortToken::parse::<C>(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_defaults(defaults)
    }

    pub fn direction(&self, column: C) -> Direction {
        column.index().and_then(|i| self.dirs.get(i).copied()).unwrap_or_default()
    }

    /// Apply the tri-state cycle to `column`, leaving every other column as is.
    pub fn toggle_sort(&self, column: C, requested: SortDir) -> Result<Self, SortError> {
        let slot = Self::slot(column)?;
        let mut dirs = self.dirs.clone();
        dirs[slot] = dirs[slot].toggle(requested);
        Ok(Self { dirs, _col: PhantomData })
    }

    /// Same as [`Self::toggle_sort`], addressing the column by its wire name.
    pub fn toggle_sort_by_id(&self, id: &str, requested: SortDir) -> Result<Self, SortError> {
        let column = C::from_id(id).ok_or_else(|| SortError::InvalidColumn(id.to_owned()))?;
        self.toggle_sort(column, requested)
    }

    /// Clear every column except `column`.
    pub fn retain_only(&self, column: C) -> Self {
        let keep = column.index();
        let dirs = self
            .dirs
            .iter()
            .enumerate()
            .map(|(i, d)| if Some(i) == keep { *d } else { Direction::Unset })
            .collect();
        Self { dirs, _col: PhantomData }
    }

    /// All columns with their direction, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (C, Direction)> + '_ {
        C::VARIANTS.iter().copied().zip(self.dirs.iter().copied())
    }

    /// Only the columns that take part in the sort, in declaration order
    pub fn active(&self) -> impl Iterator<Item = (C, SortDir)> + '_ {
        self.iter().filter_map(|(c, d)| d.sort_dir().map(|dir| (c, dir)))
    }

    pub fn is_unsorted(&self) -> bool {
        self.dirs.iter().all(|d| !d.is_set())
    }

    pub fn to_param(&self) -> SortParam {
        param::serialize(self)
    }

    fn slot(column: C) -> Result<usize, SortError> {
        column.index().ok_or_else(|| SortError::InvalidColumn(column.id().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{IntoStaticStr, VariantArray};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
    #[strum(serialize_all = "camelCase")]
    enum Col {
        Title,
        Status,
        Budget,
        PaymentType,
    }

    /// `Hidden` is not listed in `VARIANTS`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
    #[strum(serialize_all = "camelCase")]
    enum Partial {
        Shown,
        Hidden,
    }

    impl VariantArray for Partial {
        const VARIANTS: &'static [Self] = &[Partial::Shown];
    }

    fn dirs(state: &SortState<Col>) -> Vec<Direction> {
        state.iter().map(|(_, d)| d).collect()
    }

    #[test]
    fn test_new_is_total_and_unset() {
        let state = SortState::<Col>::new();
        assert_eq!(state.iter().count(), Col::VARIANTS.len());
        assert!(state.is_unsorted());
        assert!(Col::VARIANTS.iter().all(|c| state.direction(*c) == Direction::Unset));
    }

    #[test]
    fn test_toggle_cycle() {
        let s0 = SortState::<Col>::new();
        let s1 = s0.toggle_sort(Col::Status, SortDir::Asc).unwrap();
        assert_eq!(s1.direction(Col::Status), Direction::Asc);

        let s2 = s1.toggle_sort(Col::Status, SortDir::Asc).unwrap();
        assert_eq!(s2.direction(Col::Status), Direction::Unset);

        let s3 = s1.toggle_sort(Col::Status, SortDir::Desc).unwrap();
        assert_eq!(s3.direction(Col::Status), Direction::Desc);

        // previous snapshots are untouched
        assert!(s0.is_unsorted());
        assert_eq!(s1.direction(Col::Status), Direction::Asc);
    }

    #[test]
    fn test_toggle_keeps_other_columns() {
        let state = SortState::with_defaults([(Col::Title, SortDir::Asc), (Col::Budget, SortDir::Desc)])
            .unwrap();
        let before = dirs(&state);
        let after = state.toggle_sort(Col::PaymentType, SortDir::Desc).unwrap();

        for (i, (col, dir)) in after.iter().enumerate() {
            if col == Col::PaymentType {
                assert_eq!(dir, Direction::Desc);
            } else {
                assert_eq!(dir, before[i], "column {col:?} changed");
            }
        }
    }

    #[test]
    fn test_multiple_active_columns() {
        let state = SortState::<Col>::new()
            .toggle_sort(Col::Budget, SortDir::Desc)
            .and_then(|s| s.toggle_sort(Col::Title, SortDir::Asc))
            .unwrap();
        let active: Vec<_> = state.active().collect();
        // declaration order, not activation order
        assert_eq!(active, vec![(Col::Title, SortDir::Asc), (Col::Budget, SortDir::Desc)]);
    }

    #[test]
    fn test_toggle_by_id() {
        let state = SortState::<Col>::new().toggle_sort_by_id("paymentType", SortDir::Asc).unwrap();
        assert_eq!(state.direction(Col::PaymentType), Direction::Asc);

        let err = state.toggle_sort_by_id("payment_type", SortDir::Asc).unwrap_err();
        assert_eq!(err, SortError::InvalidColumn("payment_type".into()));
    }

    #[test]
    fn test_column_outside_enumeration() {
        let state = SortState::<Partial>::new();
        assert_eq!(state.iter().count(), 1);

        let err = state.toggle_sort(Partial::Hidden, SortDir::Asc).unwrap_err();
        assert_eq!(err, SortError::InvalidColumn("hidden".into()));
        assert_eq!(state.direction(Partial::Hidden), Direction::Unset);

        let state = state.toggle_sort(Partial::Shown, SortDir::Desc).unwrap();
        assert_eq!(state.direction(Partial::Shown), Direction::Desc);
    }

    #[test]
    fn test_defaults_from_tokens() {
        let state = SortState::<Col>::from_tokens(["budget,desc", "title,asc", "budget,asc"]).unwrap();
        assert_eq!(state.direction(Col::Title), Direction::Asc);
        assert_eq!(state.direction(Col::Budget), Direction::Asc);
        assert_eq!(state.direction(Col::Status), Direction::Unset);

        let err = SortState::<Col>::from_tokens(["deadline,asc"]).unwrap_err();
        assert_eq!(err, SortError::InvalidColumn("deadline".into()));
        let err = SortState::<Col>::from_tokens(["title,up"]).unwrap_err();
        assert_eq!(err, SortError::InvalidDirection("up".into()));
        let err = SortState::<Col>::from_tokens(["title"]).unwrap_err();
        assert_eq!(err, SortError::MalformedToken("title".into()));
    }

    #[test]
    fn test_retain_only() {
        let state = SortState::with_defaults([(Col::Title, SortDir::Asc), (Col::Status, SortDir::Desc)])
            .unwrap()
            .retain_only(Col::Status);
        assert_eq!(
            dirs(&state),
            vec![Direction::Unset, Direction::Desc, Direction::Unset, Direction::Unset]
        );
    }
}
