pub mod catalog;
mod toggle;

use anyhow::Context;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

pub use self::toggle::SortToggle;
use crate::action::Action;
use crate::config::ViewConfig;
use crate::error::SortError;
use crate::sort::{SortColumn, SortDir, SortParam, SortState, SortToken};

/// Whether a view lets several columns be sorted at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    #[default]
    Multi,
    /// Activating a column clears all the others
    Single,
}

/// Sort state of one mounted list view.
///
/// Every toggle replaces the state, recomputes the [`SortParam`] and hands it to
/// the data source as an [`Action::Refetch`] without waiting on it.
#[derive(Debug)]
pub struct ListView<C: SortColumn> {
    name: String,
    policy: SortPolicy,
    state: SortState<C>,
    param: SortParam,
    action_tx: Option<UnboundedSender<Action>>,
}

impl<C: SortColumn> ListView<C> {
    pub fn new(name: impl Into<String>, policy: SortPolicy, initial: SortState<C>) -> Self {
        // keep the first default only, so the policy holds from mount
        let first = initial.active().next().map(|(col, _)| col);
        let initial = match (policy, first) {
            (SortPolicy::Single, Some(col)) => initial.retain_only(col),
            _ => initial,
        };
        let param = initial.to_param();
        Self { name: name.into(), policy, state: initial, param, action_tx: None }
    }

    /// Mount `name` with its configured policy and default sort.
    /// `force_single` wins over `single-column: false`.
    pub fn mount(name: &str, config: &ViewConfig, force_single: bool) -> anyhow::Result<Self> {
        let policy = if force_single { SortPolicy::Single } else { config.policy() };
        let initial = SortState::from_tokens(&config.default_sort)
            .with_context(|| format!("Invalid `default-sort` of view `{name}`"))?;
        Ok(Self::new(name, policy, initial))
    }

    pub fn with_action_tx(mut self, tx: UnboundedSender<Action>) -> Self {
        self.action_tx = Some(tx);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn state(&self) -> &SortState<C> {
        &self.state
    }

    pub fn sort_param(&self) -> &SortParam {
        &self.param
    }

    pub fn toggle(&mut self, column: C, dir: SortDir) -> Result<&SortParam, SortError> {
        let next = self.state.toggle_sort(column, dir);
        self.apply(column, next)
    }

    pub fn toggle_by_id(&mut self, id: &str, dir: SortDir) -> Result<&SortParam, SortError> {
        match C::from_id(id) {
            Some(column) => self.toggle(column, dir),
            None => {
                let err = SortError::InvalidColumn(id.to_owned());
                warn!("{}: rejected toggle, {}", self.name, err);
                Err(err)
            }
        }
    }

    /// Apply `<column>,<dir>` clicks in order, stopping at the first bad one
    pub fn toggle_tokens<I, S>(&mut self, tokens: I) -> anyhow::Result<&SortParam>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            SortToken::split(token)
                .and_then(|(id, dir)| self.toggle_by_id(id, dir).map(|_| ()))
                .with_context(|| format!("Fail to apply toggle `{token}`"))?;
        }
        Ok(&self.param)
    }

    pub fn click(&mut self, toggle: SortToggle<C>) -> Result<&SortParam, SortError> {
        self.toggle(toggle.column, toggle.dir)
    }

    /// Every control of the view with its computed active flag
    pub fn controls(&self) -> impl Iterator<Item = (SortToggle<C>, bool)> + '_ {
        SortToggle::all().map(|t| (t, t.is_active(&self.state)))
    }

    /// One line header, the active arrow of each column wrapped in brackets,
    /// e.g. `title [▲] ▼ | status ▲ ▼`
    pub fn render_header(&self) -> String {
        C::VARIANTS
            .iter()
            .map(|col| {
                let arrows = [SortDir::Asc, SortDir::Desc]
                    .into_iter()
                    .map(|dir| {
                        let toggle = SortToggle::new(*col, dir);
                        if toggle.is_active(&self.state) {
                            format!("[{}]", toggle.symbol())
                        } else {
                            toggle.symbol().to_owned()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} {}", col.id(), arrows)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn apply(
        &mut self,
        column: C,
        next: Result<SortState<C>, SortError>,
    ) -> Result<&SortParam, SortError> {
        let next = match next {
            Ok(next) => next,
            Err(e) => {
                warn!("{}: rejected toggle, {}", self.name, e);
                return Err(e);
            }
        };
        let next = match self.policy {
            SortPolicy::Single if next.direction(column).is_set() => next.retain_only(column),
            _ => next,
        };

        self.state = next;
        self.param = self.state.to_param();
        debug!("{}: sort changed to [{}]", self.name, self.param);

        if let Some(tx) = &self.action_tx
            && tx.send(Action::Refetch { view: self.name.clone(), sort: self.param.clone() }).is_err()
        {
            debug!("{}: refetch receiver closed, dropping sort update", self.name);
        }
        Ok(&self.param)
    }
}

/// Wait until every sender is gone and keep only the newest refetched sort.
/// `fallback` is returned when no refetch was requested.
pub async fn latest_refetch(rx: &mut UnboundedReceiver<Action>, fallback: SortParam) -> SortParam {
    let mut latest = fallback;
    while let Some(Action::Refetch { view, sort }) = rx.recv().await {
        debug!("{}: superseded refetch [{}]", view, latest);
        latest = sort;
    }
    latest
}
