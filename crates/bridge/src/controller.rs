//! Accessor contract controllers implement to take part in bridging.

use std::any::type_name;

use shared::{
    domain::{HandlerName, MemberDescriptor},
    error::{BridgeError, HandlerError},
};

use crate::view_control::ViewControl;

/// Exposes exactly the fields and handlers of a controller that participate
/// in bridging.
///
/// `members` lists every field the controller wants the bridge to see,
/// together with its markers. `get` and `set` must accept every listed name;
/// a listed name they reject is a wiring mistake and should be reported as
/// [`BridgeError::UnknownMember`].
pub trait Controller: 'static {
    fn controller_name(&self) -> &str {
        short_type_name(type_name::<Self>())
    }

    fn members(&self) -> Vec<MemberDescriptor>;

    /// Current value of `member`; `None` when the field is empty.
    fn get(&self, member: &str) -> Result<Option<ViewControl>, BridgeError>;

    fn set(&mut self, member: &str, value: ViewControl) -> Result<(), BridgeError>;

    /// Names of the methods marked as bridged handlers.
    fn handlers(&self) -> Vec<HandlerName> {
        Vec::new()
    }

    fn invoke(&mut self, handler: &str) -> Result<(), HandlerError> {
        Err(BridgeError::unknown_handler(self.controller_name(), handler).into())
    }
}

/// Last path segment of a type name, generics stripped.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
