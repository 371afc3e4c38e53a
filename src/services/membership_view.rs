use std::{fmt, future::Future, sync::Arc, time::Duration};

use tracing::Level;

use crate::{
    app_state::MembershipStoreType,
    domain::{
        DisplayMember, MemberProjects, ProjectId, QueryFailure, UserId,
        ViewState,
    },
    utils::{constants::DEFAULT_QUERY_TIMEOUT, tracing::log_error_chain},
};

use super::membership_queries::{
    list_members_of_project, list_projects_of_member, with_timeout,
};

/// A read parameterised by a scope identifier.
#[async_trait::async_trait]
pub trait ScopedQuery: Send + Sync + 'static {
    type Scope: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Output: Send + 'static;

    async fn fetch(
        &self,
        store: &MembershipStoreType,
        scope: &Self::Scope,
    ) -> Result<Self::Output, QueryFailure>;
}

/// Team members of a project.
pub struct ProjectTeam;

#[async_trait::async_trait]
impl ScopedQuery for ProjectTeam {
    type Scope = ProjectId;
    type Output = Vec<DisplayMember>;

    async fn fetch(
        &self,
        store: &MembershipStoreType,
        scope: &ProjectId,
    ) -> Result<Vec<DisplayMember>, QueryFailure> {
        list_members_of_project(store, scope).await
    }
}

/// Projects of a member, with the member's display name.
pub struct MemberProjectList;

#[async_trait::async_trait]
impl ScopedQuery for MemberProjectList {
    type Scope = UserId;
    type Output = MemberProjects;

    async fn fetch(
        &self,
        store: &MembershipStoreType,
        scope: &UserId,
    ) -> Result<MemberProjects, QueryFailure> {
        list_projects_of_member(store, scope).await
    }
}

/// Receives every query failure a view applies to its state.
pub trait FailureReporter {
    fn report(&self, failure: &QueryFailure);
}

/// Logs failures with their full error chain.
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, failure: &QueryFailure) {
        log_error_chain(failure, Level::ERROR);
    }
}

/// Identifies one fetch. Only the ticket of the latest fetch can update the
/// view.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<S> {
    generation: u64,
    scope: S,
}

impl<S> FetchTicket<S> {
    pub fn scope(&self) -> &S {
        &self.scope
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    /// A newer fetch was started before this one resolved.
    Superseded,
    /// The requested scope is already the current one.
    Unchanged,
    NoScope,
}

/// View-model for a panel showing the result of a [`ScopedQuery`].
///
/// A fetch is started by a scope change or an explicit refresh. `set_scope`
/// and `request_refresh` hand out a ticket, `fetch` runs the query and
/// `complete` applies the result. The fetch future does not borrow the view,
/// so the scope can change while it is in flight. Results of superseded
/// fetches are discarded.
pub struct MembershipView<Q: ScopedQuery> {
    query: Arc<Q>,
    store: MembershipStoreType,
    reporter: Arc<dyn FailureReporter + Send + Sync>,
    timeout: Duration,
    scope: Option<Q::Scope>,
    generation: u64,
    state: ViewState<Q::Output>,
}

impl<Q: ScopedQuery> MembershipView<Q> {
    pub fn new(query: Q, store: MembershipStoreType) -> Self {
        Self {
            query: Arc::new(query),
            store,
            reporter: Arc::new(TracingReporter),
            timeout: DEFAULT_QUERY_TIMEOUT,
            scope: None,
            generation: 0,
            state: ViewState::Idle,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_reporter(
        mut self,
        reporter: Arc<dyn FailureReporter + Send + Sync>,
    ) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn state(&self) -> &ViewState<Q::Output> {
        &self.state
    }

    pub fn scope(&self) -> Option<&Q::Scope> {
        self.scope.as_ref()
    }

    pub fn store(&self) -> &MembershipStoreType {
        &self.store
    }

    /// Switches the view to `scope`. Returns `None` when it is already the
    /// current scope.
    pub fn set_scope(
        &mut self,
        scope: Q::Scope,
    ) -> Option<FetchTicket<Q::Scope>> {
        if self.scope.as_ref() == Some(&scope) {
            return None;
        }
        self.scope = Some(scope.clone());
        Some(self.begin(scope, false))
    }

    /// Starts a refetch of the current scope, keeping the displayed data
    /// until it resolves.
    pub fn request_refresh(&mut self) -> Option<FetchTicket<Q::Scope>> {
        let scope = self.scope.clone()?;
        Some(self.begin(scope, true))
    }

    fn begin(&mut self, scope: Q::Scope, keep: bool) -> FetchTicket<Q::Scope> {
        self.generation += 1;
        self.state.begin_loading(keep);
        tracing::debug!(scope = ?scope, generation = self.generation, "Fetch started");
        FetchTicket {
            generation: self.generation,
            scope,
        }
    }

    /// Runs the query for `ticket`, bounded by the view's timeout.
    pub fn fetch(
        &self,
        ticket: &FetchTicket<Q::Scope>,
    ) -> impl Future<Output = Result<Q::Output, QueryFailure>> + Send + 'static
    {
        let query = Arc::clone(&self.query);
        let store = Arc::clone(&self.store);
        let scope = ticket.scope.clone();
        let timeout = self.timeout;

        async move { with_timeout(timeout, query.fetch(&store, &scope)).await }
    }

    /// Applies the result of the fetch identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<Q::Scope>,
        result: Result<Q::Output, QueryFailure>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                scope = ?ticket.scope,
                generation = ticket.generation,
                "Discarding superseded fetch result"
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                self.state.succeed(data);
                LoadOutcome::Loaded
            }
            Err(error) => {
                self.reporter.report(&error);
                self.state.fail(error);
                LoadOutcome::Failed
            }
        }
    }

    #[tracing::instrument(name = "Loading view", skip_all)]
    pub async fn load(&mut self, scope: Q::Scope) -> LoadOutcome {
        match self.set_scope(scope) {
            Some(ticket) => self.run(ticket).await,
            None => LoadOutcome::Unchanged,
        }
    }

    #[tracing::instrument(name = "Refreshing view", skip_all)]
    pub async fn refresh(&mut self) -> LoadOutcome {
        match self.request_refresh() {
            Some(ticket) => self.run(ticket).await,
            None => LoadOutcome::NoScope,
        }
    }

    async fn run(&mut self, ticket: FetchTicket<Q::Scope>) -> LoadOutcome {
        let result = self.fetch(&ticket).await;
        self.complete(ticket, result)
    }
}
