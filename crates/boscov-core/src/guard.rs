//! Route Guard
//!
//! Decides, for every navigation, whether the target page may render, or
//! whether the user must be sent to the unauthenticated / forbidden page.
//! The decision is synchronous and depends only on the path, the stored
//! session and the current time. It fails closed: an undecodable token is
//! handled exactly like an expired one.

use crate::models::Role;
use crate::token::decode_claims;

pub const UNAUTHENTICATED_PATH: &str = "/401";
pub const FORBIDDEN_PATH: &str = "/403";

/// Pages reachable without a session (exact match)
pub const PUBLIC_ROUTES: &[&str] = &["/", "/inicial", "/login", "/registrar", "/401", "/403"];
/// Admin-only sections (prefix match)
pub const ADMIN_ROUTES: &[&str] = &["/filmes", "/usuarios"];

/// Guard state machine. Starts `Unchecked` on each navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Allowed,
    DeniedUnauthenticated,
    DeniedForbidden,
}

impl GuardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuardState::Unchecked)
    }

    /// Protected content renders only once access is granted
    pub fn renders_content(&self) -> bool {
        matches!(self, GuardState::Allowed)
    }
}

/// What the guard read from session storage
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSnapshot<'a> {
    pub token: Option<&'a str>,
    /// Role of the stored user record, if one is stored
    pub stored_role: Option<Role>,
}

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    pub state: GuardState,
    /// Session storage must be wiped (expired or undecodable token)
    pub clear_session: bool,
    pub redirect: Option<&'static str>,
}

impl GuardOutcome {
    fn allowed() -> Self {
        Self { state: GuardState::Allowed, clear_session: false, redirect: None }
    }

    fn unauthenticated(clear_session: bool) -> Self {
        Self {
            state: GuardState::DeniedUnauthenticated,
            clear_session,
            redirect: Some(UNAUTHENTICATED_PATH),
        }
    }

    fn forbidden() -> Self {
        Self {
            state: GuardState::DeniedForbidden,
            clear_session: false,
            redirect: Some(FORBIDDEN_PATH),
        }
    }
}

/// Public and admin-only route lists
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub public: &'static [&'static str],
    pub admin: &'static [&'static str],
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self { public: PUBLIC_ROUTES, admin: ADMIN_ROUTES }
    }
}

impl RoutePolicy {
    pub fn is_public(&self, path: &str) -> bool {
        self.public.contains(&path)
    }

    pub fn is_admin_only(&self, path: &str) -> bool {
        self.admin.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Evaluate access to `path`. `now_secs` is the current Unix time.
    pub fn evaluate(&self, path: &str, session: SessionSnapshot<'_>, now_secs: i64) -> GuardOutcome {
        let outcome = self.decide(path, session, now_secs);
        log::debug!("route guard: {} -> {:?}", path, outcome.state);
        outcome
    }

    fn decide(&self, path: &str, session: SessionSnapshot<'_>, now_secs: i64) -> GuardOutcome {
        if self.is_public(path) {
            return GuardOutcome::allowed();
        }

        let Some(token) = session.token.filter(|t| !t.is_empty()) else {
            return GuardOutcome::unauthenticated(false);
        };

        let claims = match decode_claims(token) {
            Ok(claims) if !claims.is_expired(now_secs) => claims,
            Ok(_) => return GuardOutcome::unauthenticated(true),
            Err(e) => {
                log::warn!("discarding undecodable session token: {}", e);
                return GuardOutcome::unauthenticated(true);
            }
        };

        if self.is_admin_only(path) {
            let role = session.stored_role.or_else(|| claims.role());
            if role != Some(Role::Admin) {
                return GuardOutcome::forbidden();
            }
        }

        GuardOutcome::allowed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::make_token;

    const NOW: i64 = 1_700_000_000;

    fn valid_token() -> String {
        make_token(&format!(r#"{{"id": 1, "exp": {}}}"#, NOW + 3600))
    }

    fn expired_token() -> String {
        make_token(&format!(r#"{{"id": 1, "exp": {}}}"#, NOW - 1))
    }

    #[test]
    fn test_public_routes_render_regardless_of_session() {
        let policy = RoutePolicy::default();
        let expired = expired_token();
        for path in PUBLIC_ROUTES {
            for token in [None, Some("garbage"), Some(expired.as_str())] {
                let out = policy.evaluate(path, SessionSnapshot { token, stored_role: None }, NOW);
                assert_eq!(out, GuardOutcome::allowed(), "path {}", path);
            }
        }
    }

    #[test]
    fn test_missing_token_redirects_to_unauthenticated() {
        let policy = RoutePolicy::default();
        for path in ["/menu", "/perfil", "/avaliacoes", "/filmes", "/usuarios", "/buscar"] {
            let out = policy.evaluate(path, SessionSnapshot::default(), NOW);
            assert_eq!(out.state, GuardState::DeniedUnauthenticated);
            assert_eq!(out.redirect, Some(UNAUTHENTICATED_PATH));
            assert!(!out.clear_session);
        }
        let empty = SessionSnapshot { token: Some(""), stored_role: Some(Role::Admin) };
        assert_eq!(policy.evaluate("/menu", empty, NOW).state, GuardState::DeniedUnauthenticated);
    }

    #[test]
    fn test_expired_token_clears_even_on_admin_route() {
        let policy = RoutePolicy::default();
        let token = expired_token();
        let session = SessionSnapshot { token: Some(&token), stored_role: Some(Role::Admin) };
        let out = policy.evaluate("/usuarios", session, NOW);
        assert_eq!(out.state, GuardState::DeniedUnauthenticated);
        assert!(out.clear_session);
        assert_eq!(out.redirect, Some(UNAUTHENTICATED_PATH));
    }

    #[test]
    fn test_expiry_at_current_time_counts_as_expired() {
        let policy = RoutePolicy::default();
        let token = make_token(&format!(r#"{{"exp": {}}}"#, NOW));
        let out = policy.evaluate("/menu", SessionSnapshot { token: Some(&token), stored_role: None }, NOW);
        assert!(out.clear_session);
    }

    #[test]
    fn test_malformed_token_fails_closed() {
        let policy = RoutePolicy::default();
        let session = SessionSnapshot { token: Some("not-a-jwt"), stored_role: Some(Role::Admin) };
        let out = policy.evaluate("/menu", session, NOW);
        assert_eq!(out.state, GuardState::DeniedUnauthenticated);
        assert!(out.clear_session);
    }

    #[test]
    fn test_admin_routes_require_admin_role() {
        let policy = RoutePolicy::default();
        let token = valid_token();
        let regular = SessionSnapshot { token: Some(&token), stored_role: Some(Role::Regular) };
        let admin = SessionSnapshot { token: Some(&token), stored_role: Some(Role::Admin) };

        for path in ["/filmes", "/usuarios", "/filmes/3/editar"] {
            let out = policy.evaluate(path, regular, NOW);
            assert_eq!(out.state, GuardState::DeniedForbidden);
            assert_eq!(out.redirect, Some(FORBIDDEN_PATH));
            assert_eq!(policy.evaluate(path, admin, NOW), GuardOutcome::allowed());
        }
        assert_eq!(policy.evaluate("/menu", regular, NOW), GuardOutcome::allowed());
    }

    #[test]
    fn test_role_falls_back_to_token_claim() {
        let policy = RoutePolicy::default();
        let admin_token = make_token(&format!(r#"{{"tipo_usuario": "admin", "exp": {}}}"#, NOW + 60));
        let no_user = SessionSnapshot { token: Some(&admin_token), stored_role: None };
        assert!(policy.evaluate("/usuarios", no_user, NOW).state.renders_content());

        let plain = valid_token();
        let nobody = SessionSnapshot { token: Some(&plain), stored_role: None };
        assert_eq!(policy.evaluate("/usuarios", nobody, NOW).state, GuardState::DeniedForbidden);

        // the stored record wins over the claim
        let demoted = SessionSnapshot { token: Some(&admin_token), stored_role: Some(Role::Regular) };
        assert_eq!(policy.evaluate("/filmes", demoted, NOW).state, GuardState::DeniedForbidden);
    }

    #[test]
    fn test_token_with_id_and_sub_stays_signed_in() {
        let policy = RoutePolicy::default();
        let token = make_token(r#"{"id": 3, "sub": "3", "exp": 4000000000}"#);
        let out = policy.evaluate("/menu", SessionSnapshot { token: Some(&token), stored_role: None }, NOW);
        assert_eq!(out, GuardOutcome::allowed());

        let fractional = make_token(r#"{"exp": 4000000000.5}"#);
        let out = policy.evaluate("/menu", SessionSnapshot { token: Some(&fractional), stored_role: None }, NOW);
        assert_eq!(out.state, GuardState::Allowed);
    }

    #[test]
    fn test_state_rendering() {
        assert!(!GuardState::Unchecked.is_terminal());
        assert!(!GuardState::Unchecked.renders_content());
        assert!(GuardState::Allowed.renders_content());
        assert!(GuardState::DeniedForbidden.is_terminal());
        assert!(!GuardState::DeniedUnauthenticated.renders_content());
    }
}
