//! Questionnaire conversation: step table, per-user sessions and the
//! controller that drives them.

mod controller;
mod flow;
mod registry;
mod reply;
mod session;
mod texts;

pub(crate) use controller::Controller;
pub(crate) use flow::Form;
pub(crate) use registry::SessionRegistry;
pub(crate) use reply::Reply;
pub(crate) use session::UserId;
