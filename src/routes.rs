//! Route tables and the navigation guard shared by both client shells.
//!
//! DESIGN
//! ======
//! The guard is synchronous and decides on token presence alone; it never
//! validates the token against the server. A stale token is caught by the
//! next authenticated request coming back 401, not here.

use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::{KeyValueStore, TOKEN_KEY};

/// Access requirement attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable with or without a session.
    Public,
    /// Requires a token; anonymous visitors are sent to login.
    RequiresAuth,
    /// Only reachable without a token (the login screen).
    GuestOnly,
}

/// A single navigable route: path, access rule, and the view it resolves to.
#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub access: Access,
    pub view: &'static str,
}

/// Guard verdict for an attempted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

const ADMIN_LOGIN: &str = "/login";
const ADMIN_ROOT: &str = "/";

const ADMIN_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: ADMIN_LOGIN, access: Access::GuestOnly, view: "Login" },
    RouteDescriptor { path: ADMIN_ROOT, access: Access::RequiresAuth, view: "Dashboard" },
    RouteDescriptor { path: "/schedule", access: Access::RequiresAuth, view: "Schedule" },
    RouteDescriptor { path: "/schedule-calendar", access: Access::RequiresAuth, view: "ScheduleCalendar" },
    RouteDescriptor { path: "/doctors", access: Access::RequiresAuth, view: "Doctors" },
    RouteDescriptor { path: "/departments", access: Access::RequiresAuth, view: "Departments" },
    RouteDescriptor { path: "/rooms", access: Access::RequiresAuth, view: "Rooms" },
    RouteDescriptor { path: "/shift-types", access: Access::RequiresAuth, view: "ShiftTypes" },
    RouteDescriptor { path: "/trade-approval", access: Access::RequiresAuth, view: "TradeApproval" },
    RouteDescriptor { path: "/preferences", access: Access::RequiresAuth, view: "Preferences" },
    RouteDescriptor { path: "/statistics", access: Access::RequiresAuth, view: "Statistics" },
    RouteDescriptor { path: "/settings", access: Access::RequiresAuth, view: "Settings" },
    RouteDescriptor { path: "/audit-logs", access: Access::RequiresAuth, view: "AuditLogs" },
    RouteDescriptor { path: "/feedback", access: Access::RequiresAuth, view: "Feedback" },
];

const MOBILE_LOGIN: &str = "/pages/login/login";
const MOBILE_ROOT: &str = "/pages/index/index";

const MOBILE_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: MOBILE_LOGIN, access: Access::GuestOnly, view: "Login" },
    RouteDescriptor { path: MOBILE_ROOT, access: Access::RequiresAuth, view: "MySchedule" },
    RouteDescriptor { path: "/pages/trade/trade", access: Access::RequiresAuth, view: "Trades" },
    RouteDescriptor { path: "/pages/preference/preference", access: Access::RequiresAuth, view: "Preferences" },
    RouteDescriptor { path: "/pages/mine/mine", access: Access::RequiresAuth, view: "Profile" },
];

/// Immutable route registry for one client shell.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
    login_path: &'static str,
    root_path: &'static str,
}

impl RouteTable {
    /// Route registry of the administrative web console.
    #[must_use]
    pub fn admin() -> Self {
        Self { routes: ADMIN_ROUTES, login_path: ADMIN_LOGIN, root_path: ADMIN_ROOT }
    }

    /// Route registry of the mobile app.
    #[must_use]
    pub fn mobile() -> Self {
        Self { routes: MOBILE_ROUTES, login_path: MOBILE_LOGIN, root_path: MOBILE_ROOT }
    }

    #[must_use]
    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    #[must_use]
    pub fn root_path(&self) -> &'static str {
        self.root_path
    }

    /// Look up a route by exact path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Apply the guard to an attempted navigation.
    ///
    /// Rules, in order: an auth-required target without a token redirects to
    /// login; a guest-only target with a token redirects to the root; every
    /// other transition (unknown paths included) proceeds unchanged.
    #[must_use]
    pub fn resolve(&self, target: &str, authenticated: bool) -> GuardDecision {
        match self.find(target).map(|route| route.access) {
            Some(Access::RequiresAuth) if !authenticated => GuardDecision::Redirect(self.login_path),
            Some(Access::GuestOnly) if authenticated => GuardDecision::Redirect(self.root_path),
            _ => GuardDecision::Allow,
        }
    }
}

/// Navigation sink driven by the session store and the 401 interceptor.
/// Transitions replace the current location; nothing is queued.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
    /// The shell's login route.
    fn login_path(&self) -> &'static str;
    /// The shell's application root.
    fn root_path(&self) -> &'static str;
}

/// Navigator that runs every transition through the guard, reading token
/// presence from persisted storage at decision time.
pub struct GuardedNavigator {
    table: RouteTable,
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<String>,
}

impl GuardedNavigator {
    /// Starts at the table's root; the first guarded transition bounces
    /// anonymous visitors to login.
    #[must_use]
    pub fn new(table: RouteTable, storage: Arc<dyn KeyValueStore>) -> Self {
        let current = RwLock::new(table.root_path.to_owned());
        Self { table, storage, current }
    }

    /// The location the last transition settled on.
    #[must_use]
    pub fn current(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Attempt a transition and return the settled target.
    pub fn navigate(&self, target: &str) -> String {
        let authenticated = self.storage.get(TOKEN_KEY).is_some();
        let settled = match self.table.resolve(target, authenticated) {
            GuardDecision::Allow => target.to_owned(),
            GuardDecision::Redirect(path) => {
                tracing::debug!(requested = target, redirect = path, "navigation rewritten by guard");
                path.to_owned()
            }
        };
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = settled.clone();
        settled
    }
}

impl Navigator for GuardedNavigator {
    fn replace(&self, path: &str) {
        self.navigate(path);
    }

    fn login_path(&self) -> &'static str {
        self.table.login_path
    }

    fn root_path(&self) -> &'static str {
        self.table.root_path
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
