use strum::{Display, EnumString};

/// Direction a user may request for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// Current direction recorded for one column. `Unset` columns do not take part in the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Unset,
    Asc,
    Desc,
}

impl Direction {
    /// Tri-state transition: requesting the direction already set clears it,
    /// anything else sets (or flips to) the requested one.
    #[inline]
    pub fn toggle(self, requested: SortDir) -> Self {
        let requested = Direction::from(requested);
        if self == requested { Direction::Unset } else { requested }
    }

    #[inline]
    pub fn sort_dir(self) -> Option<SortDir> {
        match self {
            Direction::Unset => None,
            Direction::Asc => Some(SortDir::Asc),
            Direction::Desc => Some(SortDir::Desc),
        }
    }

    #[inline]
    pub fn is_set(self) -> bool {
        self != Direction::Unset
    }
}

impl From<SortDir> for Direction {
    fn from(value: SortDir) -> Self {
        match value {
            SortDir::Asc => Direction::Asc,
            SortDir::Desc => Direction::Desc,
        }
    }
}

impl PartialEq<SortDir> for Direction {
    fn eq(&self, other: &SortDir) -> bool {
        *self == Direction::from(*other)
    }
}
