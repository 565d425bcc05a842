//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::{Session, User};

use crate::config::NOTICE_DISMISS_MS;
use crate::storage::session_store;

/// Reactive view of the persisted session
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
}

impl SessionContext {
    /// Read whatever session is already in storage
    pub fn load() -> Self {
        Self {
            session: RwSignal::new(session_store().get()),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn user_id(&self) -> Option<u32> {
        self.session.with(|s| s.as_ref().map(|s| s.user.id))
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.as_ref().is_some_and(Session::is_admin))
    }

    /// Persist a fresh login
    pub fn set(&self, session: Session) {
        if let Err(e) = session_store().set(&session) {
            log::error!("could not persist session: {}", e);
        }
        self.session.set(Some(session));
    }

    /// Replace the user record after a profile edit
    pub fn set_user(&self, user: User) {
        if let Err(e) = session_store().set_user(&user) {
            log::error!("could not persist user: {}", e);
        }
        self.session.update(|s| {
            if let Some(s) = s {
                s.user = user;
            }
        });
    }

    /// Logout or expired token: wipe storage wholesale
    pub fn clear(&self) {
        if let Err(e) = session_store().clear() {
            log::error!("could not clear storage: {}", e);
        }
        self.session.set(None);
    }

    /// Re-read storage (another tab may have logged out)
    pub fn refresh(&self) {
        let stored = session_store().get();
        if self.session.with_untracked(|s| *s != stored) {
            self.session.set(stored);
        }
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient success/error overlay, auto-dismissed
#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub current: ReadSignal<Option<Notice>>,
    set_current: WriteSignal<Option<Notice>>,
    generation: RwSignal<u32>,
}

impl NoticeContext {
    pub fn new() -> Self {
        let (current, set_current) = signal(None::<Notice>);
        Self {
            current,
            set_current,
            generation: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&self) {
        self.set_current.set(None);
    }

    fn show(&self, kind: NoticeKind, message: String) {
        self.generation.update(|g| *g += 1);
        let shown = self.generation.get_untracked();
        self.set_current.set(Some(Notice { kind, message }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            // a newer notice owns the overlay now
            if ctx.generation.get_untracked() == shown {
                ctx.dismiss();
            }
        });
    }
}

pub fn use_notice() -> NoticeContext {
    expect_context::<NoticeContext>()
}
