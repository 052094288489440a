use thiserror::Error;

use crate::domain::{HandlerName, MemberName};

/// Error type returned by bridged handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Fatal wiring failures. None of these are retried; each one points at a
/// controller whose accessors or markers disagree with what it declares.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{controller}: member [{member}] is declared but cannot be accessed")]
    UnknownMember {
        controller: String,
        member: MemberName,
    },
    #[error("{controller}: member [{member}] expects {expected} but was given {found}")]
    TypeMismatch {
        controller: String,
        member: MemberName,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{controller}: handler {handler}() is registered but cannot be invoked")]
    UnknownHandler {
        controller: String,
        handler: HandlerName,
    },
    #[error("{controller}: handler {handler}() failed")]
    HandlerFailed {
        controller: String,
        handler: HandlerName,
        #[source]
        source: HandlerError,
    },
    #[error("{controller}: controller is already borrowed")]
    ControllerBusy { controller: String },
}

impl BridgeError {
    pub fn unknown_member(controller: impl Into<String>, member: impl Into<MemberName>) -> Self {
        Self::UnknownMember {
            controller: controller.into(),
            member: member.into(),
        }
    }

    pub fn unknown_handler(controller: impl Into<String>, handler: impl Into<HandlerName>) -> Self {
        Self::UnknownHandler {
            controller: controller.into(),
            handler: handler.into(),
        }
    }
}
