use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::SortError;
use crate::sort::column::SortColumn;
use crate::sort::direction::SortDir;
use crate::sort::state::SortState;

/// One `<column>,<asc|desc>` wire token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortToken {
    pub column: &'static str,
    pub dir: SortDir,
}

impl SortToken {
    /// Split `"<column>,<dir>"` into its raw column name and direction.
    /// Surrounding whitespace is tolerated on input, never produced on output.
    pub fn split(token: &str) -> Result<(&str, SortDir), SortError> {
        let (column, dir) = token
            .split_once(',')
            .map(|(c, d)| (c.trim(), d.trim()))
            .filter(|(c, d)| !c.is_empty() && !d.is_empty())
            .ok_or_else(|| SortError::MalformedToken(token.to_owned()))?;
        let dir = dir.parse::<SortDir>().map_err(|_| SortError::InvalidDirection(dir.to_owned()))?;
        Ok((column, dir))
    }

    /// Parse a token against the columns of `C`.
    pub fn parse<C: SortColumn>(token: &str) -> Result<(C, SortDir), SortError> {
        let (id, dir) = Self::split(token)?;
        let column = C::from_id(id).ok_or_else(|| SortError::InvalidColumn(id.to_owned()))?;
        Ok((column, dir))
    }
}

impl fmt::Display for SortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.dir)
    }
}

impl Serialize for SortToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered sort tokens handed to the paginated query. Empty means "server default order".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SortParam(Vec<SortToken>);

impl SortParam {
    pub fn iter(&self) -> std::slice::Iter<'_, SortToken> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a SortParam {
    type Item = &'a SortToken;
    type IntoIter = std::slice::Iter<'a, SortToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SortParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Project a state onto wire tokens: declaration order, unset columns omitted.
pub fn serialize<C: SortColumn>(state: &SortState<C>) -> SortParam {
    SortParam(state.active().map(|(col, dir)| SortToken { column: col.id(), dir }).collect())
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
    }

    fn toggle(state: SortState<Col>, col: Col, dir: SortDir) -> SortState<Col> {
        state.toggle_sort(col, dir).unwrap()
    }

    #[test]
    fn test_scenario() {
        let state = SortState::<Col>::new();
        assert!(serialize(&state).is_empty());

        let state = toggle(state, Col::Status, SortDir::Desc);
        assert_eq!(serialize(&state).to_strings(), vec!["status,desc"]);

        let state = toggle(state, Col::Title, SortDir::Asc);
        assert_eq!(serialize(&state).to_strings(), vec!["title,asc", "status,desc"]);

        let state = toggle(state, Col::Status, SortDir::Desc);
        assert_eq!(serialize(&state).to_strings(), vec!["title,asc"]);

        // flip in a single step
        let state = toggle(state, Col::Status, SortDir::Asc);
        assert_eq!(serialize(&state).to_strings(), vec!["title,asc", "status,asc"]);
    }

    #[test]
    fn test_order_ignores_activation_order() {
        let a = toggle(toggle(SortState::new(), Col::Budget, SortDir::Asc), Col::Title, SortDir::Desc);
        let b = toggle(toggle(SortState::new(), Col::Title, SortDir::Desc), Col::Budget, SortDir::Asc);
        assert_eq!(serialize(&a), serialize(&b));
        assert_eq!(serialize(&a).to_strings(), vec!["title,desc", "budget,asc"]);
    }

    #[test]
    fn test_serialize_is_pure() {
        let state = toggle(SortState::new(), Col::Budget, SortDir::Desc);
        let first = serialize(&state);
        let second = state.to_param();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_wire_format() {
        let state = SortState::<Col>::with_defaults([
            (Col::Title, SortDir::Asc),
            (Col::Status, SortDir::Desc),
            (Col::Budget, SortDir::Asc),
        ])
        .unwrap();
        let param = serialize(&state);
        assert_eq!(serde_json::to_string(&param).unwrap(), r#"["title,asc","status,desc","budget,asc"]"#);
        assert_eq!(param.to_string(), "title,asc status,desc budget,asc");
        for token in &param {
            let s = token.to_string();
            assert!(!s.contains(char::is_whitespace), "whitespace in `{s}`");
        }
    }

    #[test]
    fn test_split_token() {
        assert_eq!(SortToken::split("deadline,asc").unwrap(), ("deadline", SortDir::Asc));
        assert_eq!(SortToken::split(" deadline , desc ").unwrap(), ("deadline", SortDir::Desc));
        assert_eq!(SortToken::split(",asc").unwrap_err(), SortError::MalformedToken(",asc".into()));
        assert_eq!(SortToken::split("deadline,").unwrap_err(), SortError::MalformedToken("deadline,".into()));
        assert_eq!(
            SortToken::split("deadline,Asc").unwrap_err(),
            SortError::InvalidDirection("Asc".into())
        );
        assert_eq!(SortToken::parse::<Col>("budget,desc").unwrap(), (Col::Budget, SortDir::Desc));
    }
}
