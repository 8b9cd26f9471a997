//! Client Guard
//!
//! Post-render session watcher for interactively rendered pages. Mounting
//! starts exactly one authority check; the state then moves from `Loading`
//! to a terminal state and stays there.

use std::sync::Arc;

use tokio::sync::watch;

use crate::application::check_login_auth::CheckLoginAuthUseCase;
use crate::domain::authority::SessionAuthority;
use crate::domain::entity::authorization::Session;
use crate::domain::policy::AccessPolicy;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};

/// Session state as seen by a page
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Loading,
    Unauthorized,
    Authorized(Session),
}

impl GuardState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GuardState::Loading)
    }

    /// Apply a transition. Only `Loading -> Unauthorized | Authorized` is
    /// accepted; anything else leaves the state untouched and returns false.
    pub fn resolve(&mut self, next: GuardState) -> bool {
        if self.is_resolved() || !next.is_resolved() {
            return false;
        }
        *self = next;
        true
    }
}

/// What a page renders for a given guard state
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    NotFound,
    Protected(Session),
}

impl PageView {
    pub fn from_state(state: &GuardState, route: &RouteUser, policy: AccessPolicy) -> Self {
        match state {
            GuardState::Loading => PageView::Loading,
            GuardState::Unauthorized => PageView::NotFound,
            GuardState::Authorized(session) if policy.permits(session, route) => {
                PageView::Protected(session.clone())
            }
            GuardState::Authorized(_) => PageView::NotFound,
        }
    }
}

/// Client-side authorization guard
pub struct ClientGuard {
    route: RouteUser,
    policy: AccessPolicy,
    state: watch::Receiver<GuardState>,
}

impl ClientGuard {
    /// Mount the guard for `route` and start its single check.
    ///
    /// Must be called inside a tokio runtime. The check is not cancelled if
    /// the guard is dropped before it resolves.
    pub fn mount<A>(
        authority: Arc<A>,
        token: Option<SessionToken>,
        route: RouteUser,
        policy: AccessPolicy,
    ) -> Self
    where
        A: SessionAuthority + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(GuardState::Loading);
        let use_case = CheckLoginAuthUseCase::new(authority);
        let check_route = route.clone();

        tokio::spawn(async move {
            let next = match use_case.check(token.as_ref(), &check_route).await {
                Some(session) => GuardState::Authorized(session),
                None => GuardState::Unauthorized,
            };
            tx.send_if_modified(|state| state.resolve(next));
        });

        Self {
            route,
            policy,
            state: rx,
        }
    }

    /// Current view without waiting. `Loading` until the check resolves.
    pub fn view(&self) -> PageView {
        PageView::from_state(&self.state.borrow(), &self.route, self.policy)
    }

    /// Wait for the terminal state.
    ///
    /// If the check task died without resolving, the guard reports
    /// `Unauthorized`.
    pub async fn resolved(&mut self) -> GuardState {
        {
            let current = self.state.borrow();
            if current.is_resolved() {
                return current.clone();
            }
        }

        match self.state.wait_for(GuardState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => {
                tracing::warn!(route = %self.route, "Client guard check ended without a result");
                GuardState::Unauthorized
            }
        }
    }

    /// Wait for the terminal state and map it to a view.
    pub async fn resolved_view(&mut self) -> PageView {
        let state = self.resolved().await;
        PageView::from_state(&state, &self.route, self.policy)
    }

    pub fn route(&self) -> &RouteUser {
        &self.route
    }
}
