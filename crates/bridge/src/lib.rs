//! Wires sub-controllers into a parent controller's view.
//!
//! A [`Bridge`] copies view-control references that the host framework loaded
//! into one controller over to fields another controller marked as bridged,
//! and relays named events from the parent's trampolines to every sub-controller
//! handler registered under the same name.

pub mod bridge;
pub mod config;
pub mod controller;
pub mod mapping;
pub mod registry;
pub mod view_control;

pub use bridge::Bridge;
pub use config::{load_config, BridgeConfig, ConfigError};
pub use controller::Controller;
pub use mapping::ViewControlMapping;
pub use registry::{HandlerEntry, HandlerRegistry};
pub use shared::{
    diagnostics::Diagnostic,
    domain::{HandlerName, MemberDescriptor, MemberMarkers, MemberName},
    error::{BridgeError, HandlerError},
};
pub use view_control::ViewControl;
