//! Opaque handles to view controls loaded by the host framework.

use std::{
    any::{type_name, Any},
    fmt,
    rc::Rc,
};

use shared::error::BridgeError;

/// A shared reference to a view control of any concrete type.
///
/// Clones point at the same control; equality is reference equality.
#[derive(Clone)]
pub struct ViewControl {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl ViewControl {
    pub fn new<T: Any>(control: T) -> Self {
        Self::from_rc(Rc::new(control))
    }

    pub fn from_rc<T: Any>(control: Rc<T>) -> Self {
        Self {
            inner: control,
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Downcasts for assignment into `controller.member`, failing loudly on a
    /// type mismatch.
    pub fn expect_type<T: Any>(&self, controller: &str, member: &str) -> Result<Rc<T>, BridgeError> {
        self.downcast::<T>().ok_or_else(|| BridgeError::TypeMismatch {
            controller: controller.to_string(),
            member: member.into(),
            expected: type_name::<T>(),
            found: self.type_name,
        })
    }

    pub fn ptr_eq(&self, other: &ViewControl) -> bool {
        self.addr() == other.addr()
    }

    pub fn is<T: Any>(&self, control: &Rc<T>) -> bool {
        self.addr() == Rc::as_ptr(control) as *const ()
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for ViewControl {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ViewControl {}

impl fmt::Debug for ViewControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.type_name, self.addr())
    }
}

impl<T: Any> From<Rc<T>> for ViewControl {
    fn from(control: Rc<T>) -> Self {
        Self::from_rc(control)
    }
}
