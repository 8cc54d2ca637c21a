//! Conversation controller
//!
//! Maps each inbound message to exactly one reply. Commands are recognised
//! first; plain text is routed by the sender's current [`State`]. The
//! in-flow cancel label is handled once for every data-entry state before
//! the answer is recorded against the step table.

use super::flow::{Field, Form};
use super::registry::{SessionRegistry, SessionSlot, lock_session};
use super::reply::{FIRST_VISIT_MENU, FULL_MENU, INFO_MENU, Reply};
use super::session::{MenuView, Session, State, UserId};
use super::texts;
use crate::store::ApplicationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Start,
    Cancel,
    UnknownCommand,
    Text(&'a str),
}

fn classify(text: &str) -> Input<'_> {
    let Some(command) = text.trim().strip_prefix('/') else {
        return Input::Text(text);
    };
    // Group chats address commands as /start@botname
    let name = command
        .split_whitespace()
        .next()
        .and_then(|word| word.split('@').next())
        .unwrap_or_default();
    match name {
        "start" => Input::Start,
        "cancel" => Input::Cancel,
        _ => Input::UnknownCommand,
    }
}

fn prompt(field: Field) -> Reply {
    let step = field.step();
    let mut options = step.choices.to_vec();
    options.push(texts::LABEL_CANCEL);
    Reply {
        text: step.prompt.to_string(),
        options,
    }
}

fn menu_options(view: MenuView) -> &'static [&'static str] {
    match view {
        MenuView::Main => FULL_MENU,
        MenuView::Info => INFO_MENU,
    }
}

pub(crate) struct Controller<S> {
    store: S,
    sessions: SessionRegistry,
    form: Form,
}

impl<S: ApplicationStore> Controller<S> {
    pub(crate) fn new(store: S, sessions: SessionRegistry, form: Form) -> Self {
        Self {
            store,
            sessions,
            form,
        }
    }

    /// Process one message from `user` and produce its reply.
    pub(crate) fn handle(&self, user: UserId, text: &str) -> Reply {
        let reply = self.dispatch(user, text);
        self.sessions.persist();
        reply
    }

    fn dispatch(&self, user: UserId, text: &str) -> Reply {
        match classify(text) {
            Input::Start => self.start(user),
            Input::Cancel => match self.sessions.get(user) {
                Some(slot) => {
                    let mut session = lock_session(&slot);
                    self.close(user, &slot, &mut session)
                }
                None => Reply::text(texts::CONVERSATION_CLOSED),
            },
            Input::UnknownCommand => Reply::text(texts::UNKNOWN_COMMAND),
            Input::Text(text) => {
                let Some(slot) = self.sessions.get(user) else {
                    return Reply::text(texts::NOT_STARTED);
                };
                let mut session = lock_session(&slot);
                if session.closed {
                    return Reply::text(texts::NOT_STARTED);
                }
                match session.state {
                    State::Menu => self.on_menu(user, &slot, &mut session, text),
                    State::Answering(field) => self.on_answer(user, &mut session, field, text),
                }
            }
        }
    }

    fn start(&self, user: UserId) -> Reply {
        let (_, had_previous) = self.sessions.start(user);
        tracing::info!(%user, returning = had_previous, "session started");
        let menu = if had_previous {
            FULL_MENU
        } else {
            FIRST_VISIT_MENU
        };
        Reply::with_options(texts::GREETING, menu)
    }

    /// End the conversation: the session is dropped and only a fresh
    /// `/start` brings the user back.
    fn close(&self, user: UserId, slot: &SessionSlot, session: &mut Session) -> Reply {
        session.closed = true;
        session.answers.clear();
        self.sessions.remove(user, slot);
        tracing::info!(%user, "session closed");
        Reply::text(texts::CONVERSATION_CLOSED)
    }

    fn on_menu(&self, user: UserId, slot: &SessionSlot, session: &mut Session, text: &str) -> Reply {
        match text.trim() {
            texts::LABEL_INFO => {
                session.view = MenuView::Info;
                Reply::with_options(texts::SCHOOL_INFO, INFO_MENU)
            }
            texts::LABEL_BACK => {
                session.view = MenuView::Main;
                Reply::with_options(texts::BACK_TO_MENU, FULL_MENU)
            }
            texts::LABEL_FILL => {
                let first = self.form.first();
                session.answers.clear();
                session.view = MenuView::Main;
                session.state = State::Answering(first);
                tracing::debug!(%user, "form started");
                prompt(first)
            }
            texts::LABEL_EXIT => self.close(user, slot, session),
            other => {
                tracing::debug!(%user, input = other, "unrecognised menu input");
                Reply::with_options(texts::CHOOSE_FROM_MENU, menu_options(session.view))
            }
        }
    }

    fn on_answer(&self, user: UserId, session: &mut Session, field: Field, text: &str) -> Reply {
        if text.trim() == texts::LABEL_CANCEL {
            session.reset_to_menu();
            tracing::info!(%user, at = field.name(), "form cancelled");
            return Reply::with_options(texts::FORM_CANCELLED, FULL_MENU);
        }

        let value = field.normalize(text);
        if value.trim().is_empty() {
            let mut reply = prompt(field);
            reply.text = format!("{}\n{}", texts::EMPTY_ANSWER, reply.text);
            return reply;
        }

        session.answers.set(field, value);
        tracing::debug!(%user, field = field.name(), "answer stored");

        // Next state is the first unanswered step; in a fresh form that is
        // the step after `field`.
        match session.answers.first_missing(self.form) {
            Some(next) => {
                session.state = State::Answering(next);
                prompt(next)
            }
            None => self.submit(user, session),
        }
    }

    fn submit(&self, user: UserId, session: &mut Session) -> Reply {
        let application = match session.answers.to_application(self.form) {
            Ok(application) => application,
            Err(missing) => {
                // Only reachable if the answers stopped covering the form
                session.state = State::Answering(missing);
                return prompt(missing);
            }
        };

        match self.store.upsert(&application) {
            Ok(()) => {
                tracing::info!(%user, username = %application.username, "application saved");
                session.reset_to_menu();
                Reply::with_options(texts::SUBMITTED, FULL_MENU)
            }
            Err(e) => {
                tracing::error!(%user, username = %application.username, error = %e, "failed to save application");
                session.state = State::Answering(self.form.last());
                Reply::with_options(texts::SUBMIT_FAILED, &[texts::LABEL_CANCEL])
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self, user: UserId) -> Option<Session> {
        let slot = self.sessions.get(user)?;
        let session = lock_session(&slot).clone();
        Some(session)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
