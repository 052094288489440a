//! Member scanning, injection, handler registration and event relay.

use std::{
    any::type_name,
    cell::RefCell,
    mem,
    panic::Location,
    rc::Rc,
};

use shared::{
    diagnostics::Diagnostic,
    domain::{HandlerName, MemberName},
    error::BridgeError,
};
use tracing::{info, warn};

use crate::{
    config::BridgeConfig,
    controller::{short_type_name, Controller},
    mapping::ViewControlMapping,
    registry::{HandlerEntry, HandlerRegistry},
    view_control::ViewControl,
};

/// Shared wiring state for one parent controller and its sub-controllers.
///
/// All operations take `&self` so the parent can keep the bridge behind an
/// `Rc` and relay from its own trampolines. The bridge is single-threaded and
/// must only be used from the thread the host framework dispatches on.
#[derive(Debug, Default)]
pub struct Bridge {
    config: BridgeConfig,
    members: RefCell<ViewControlMapping>,
    handlers: RefCell<HandlerRegistry>,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Scans `controller` for view controls, injects known ones into its
    /// bridged fields, then records its bridged handlers.
    ///
    /// Registering the same controller twice records its handlers twice.
    #[track_caller]
    pub fn register<C: Controller>(&self, controller: &Rc<RefCell<C>>) -> Result<(), BridgeError> {
        let origin = Location::caller();
        {
            let mut target = controller
                .try_borrow_mut()
                .map_err(|_| busy(short_type_name(type_name::<C>())))?;

            self.diagnose(|| Diagnostic::Interlacing {
                controller: target.controller_name().to_string(),
                origin: origin.to_string(),
            });

            self.scan_members(&*target)?;
            self.inject_members(&mut *target)?;
        }
        self.scan_handlers(controller)
    }

    /// Records every view-bound, non-empty member of `controller` whose name
    /// is not mapped yet.
    pub fn scan_members<C: Controller + ?Sized>(&self, controller: &C) -> Result<(), BridgeError> {
        let controller_name = controller.controller_name();

        for descriptor in controller.members() {
            let already_mapped = self.members.borrow().contains(descriptor.name.as_str());

            if already_mapped && !descriptor.markers.bridged {
                // usually a sub-controller field carrying the view-bound marker
                // instead of the bridged one
                self.diagnose(|| Diagnostic::NamingConflict {
                    controller: controller_name.to_string(),
                    member: descriptor.name.clone(),
                });
            }

            if !descriptor.markers.view_bound || already_mapped {
                continue;
            }

            let Some(value) = controller.get(descriptor.name.as_str())? else {
                continue;
            };

            self.diagnose(|| Diagnostic::MemberLoaded {
                controller: controller_name.to_string(),
                member: descriptor.name.clone(),
                value_type: value.type_name().to_string(),
            });
            self.members.borrow_mut().record(descriptor.name, value);
        }

        Ok(())
    }

    /// Assigns mapped view controls into the bridged members of `controller`.
    pub fn inject_members<C: Controller + ?Sized>(
        &self,
        controller: &mut C,
    ) -> Result<(), BridgeError> {
        let controller_name = controller.controller_name().to_string();

        for descriptor in controller.members() {
            let Some(value) = self.member(descriptor.name.as_str()) else {
                continue;
            };

            if descriptor.markers.bridged {
                self.diagnose(|| Diagnostic::Injected {
                    controller: controller_name.clone(),
                    member: descriptor.name.clone(),
                    value_type: value.type_name().to_string(),
                });
                controller.set(descriptor.name.as_str(), value)?;
            } else if !descriptor.markers.view_bound {
                self.diagnose(|| Diagnostic::PossibleInjectionPoint {
                    controller: controller_name.clone(),
                    member: descriptor.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Appends every bridged handler of `controller` to the registry.
    pub fn scan_handlers<C: Controller>(&self, controller: &Rc<RefCell<C>>) -> Result<(), BridgeError> {
        let (controller_name, handlers) = {
            let target = controller
                .try_borrow()
                .map_err(|_| busy(short_type_name(type_name::<C>())))?;
            (target.controller_name().to_string(), target.handlers())
        };

        let owner: Rc<RefCell<dyn Controller>> = controller.clone();
        let mut registry = self.handlers.borrow_mut();
        for handler in handlers {
            self.diagnose(|| Diagnostic::HandlerFound {
                controller: controller_name.clone(),
                handler: handler.clone(),
            });
            registry.push(HandlerEntry::new(handler, controller_name.clone(), &owner));
        }

        Ok(())
    }

    /// Invokes every registered handler named `handler`, in registration
    /// order, and returns how many ran.
    ///
    /// Call this from the parent's trampoline of the same name. No match is
    /// not an error. The first failing handler aborts the relay.
    #[track_caller]
    pub fn relay(&self, handler: &str) -> Result<usize, BridgeError> {
        let origin = Location::caller();
        let matching = self.handlers.borrow().matching(handler);
        let mut invoked = 0;

        for entry in matching {
            let Some(owner) = entry.owner.upgrade() else {
                self.diagnose(|| Diagnostic::ControllerReleased {
                    controller: entry.controller.clone(),
                    handler: entry.name.clone(),
                });
                continue;
            };
            let mut target = owner
                .try_borrow_mut()
                .map_err(|_| busy(&entry.controller))?;

            self.diagnose(|| Diagnostic::HandlerInvoked {
                controller: entry.controller.clone(),
                handler: entry.name.clone(),
                origin: origin.to_string(),
            });

            target.invoke(handler).map_err(|source| match source.downcast::<BridgeError>() {
                Ok(err) => *err,
                Err(source) => BridgeError::HandlerFailed {
                    controller: entry.controller.clone(),
                    handler: entry.name.clone(),
                    source,
                },
            })?;
            invoked += 1;
        }

        if invoked == 0 {
            self.diagnose(|| Diagnostic::NoHandlerFound {
                handler: HandlerName::from(handler),
                origin: origin.to_string(),
            });
        }

        Ok(invoked)
    }

    pub fn member(&self, name: &str) -> Option<ViewControl> {
        self.members.borrow().get(name).cloned()
    }

    pub fn member_names(&self) -> Vec<MemberName> {
        self.members.borrow().names()
    }

    pub fn member_count(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn handler_names(&self) -> Vec<HandlerName> {
        self.handlers.borrow().names()
    }

    /// Drains the diagnostics retained while verbose.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        mem::take(&mut *self.diagnostics.borrow_mut())
    }

    fn diagnose(&self, diagnostic: impl FnOnce() -> Diagnostic) {
        if !self.config.verbose {
            return;
        }

        let diagnostic = diagnostic();
        if diagnostic.is_warning() {
            warn!("bridge: {diagnostic}");
        } else {
            info!("bridge: {diagnostic}");
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

fn busy(controller: &str) -> BridgeError {
    BridgeError::ControllerBusy {
        controller: controller.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/bridge_tests.rs"]
mod tests;
