use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{HandlerName, MemberName};

/// Non-fatal observations made while wiring controllers or relaying events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Diagnostic {
    Interlacing {
        controller: String,
        origin: String,
    },
    MemberLoaded {
        controller: String,
        member: MemberName,
        value_type: String,
    },
    NamingConflict {
        controller: String,
        member: MemberName,
    },
    Injected {
        controller: String,
        member: MemberName,
        value_type: String,
    },
    PossibleInjectionPoint {
        controller: String,
        member: MemberName,
    },
    HandlerFound {
        controller: String,
        handler: HandlerName,
    },
    HandlerInvoked {
        controller: String,
        handler: HandlerName,
        origin: String,
    },
    NoHandlerFound {
        handler: HandlerName,
        origin: String,
    },
    ControllerReleased {
        controller: String,
        handler: HandlerName,
    },
}

impl Diagnostic {
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::NamingConflict { .. }
                | Diagnostic::PossibleInjectionPoint { .. }
                | Diagnostic::ControllerReleased { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Interlacing { controller, origin } => {
                write!(f, "interlacing {controller} in {origin}")
            }
            Diagnostic::MemberLoaded {
                controller,
                member,
                value_type,
            } => write!(f, "load [{member}] from {controller} being {value_type}"),
            Diagnostic::NamingConflict { controller, member } => write!(
                f,
                "conflict in {controller}: field [{member}] already loaded from another controller"
            ),
            Diagnostic::Injected {
                controller,
                member,
                value_type,
            } => write!(f, "inject into {controller} [{member}] being {value_type}"),
            Diagnostic::PossibleInjectionPoint { controller, member } => write!(
                f,
                "{controller}: possible injection point without bridged marker [{member}]"
            ),
            Diagnostic::HandlerFound {
                controller,
                handler,
            } => write!(f, "found bridged handler in {controller}: {handler}()"),
            Diagnostic::HandlerInvoked {
                controller,
                handler,
                origin,
            } => write!(
                f,
                "bridged handler {handler}() invoked in {controller}, called from {origin}"
            ),
            Diagnostic::NoHandlerFound { handler, origin } => write!(
                f,
                "relay of {handler}() requested, but no handler found. Origin: {origin}"
            ),
            Diagnostic::ControllerReleased {
                controller,
                handler,
            } => write!(
                f,
                "bridged handler {handler}() skipped: {controller} has been dropped"
            ),
        }
    }
}
