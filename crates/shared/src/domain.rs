use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

macro_rules! name_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

name_newtype!(MemberName);
name_newtype!(HandlerName);

/// Markers a controller field can carry.
///
/// `view_bound` means the host framework's view loader populates the field.
/// `bridged` means the bridge injects into it. A field may carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberMarkers {
    pub view_bound: bool,
    pub bridged: bool,
}

impl MemberMarkers {
    pub const UNMARKED: Self = Self {
        view_bound: false,
        bridged: false,
    };
    pub const VIEW_BOUND: Self = Self {
        view_bound: true,
        bridged: false,
    };
    pub const BRIDGED: Self = Self {
        view_bound: false,
        bridged: true,
    };

    pub fn with_view_bound(mut self) -> Self {
        self.view_bound = true;
        self
    }

    pub fn with_bridged(mut self) -> Self {
        self.bridged = true;
        self
    }

    pub fn is_unmarked(&self) -> bool {
        !self.view_bound && !self.bridged
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: MemberName,
    pub markers: MemberMarkers,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<MemberName>, markers: MemberMarkers) -> Self {
        Self {
            name: name.into(),
            markers,
        }
    }

    pub fn view_bound(name: impl Into<MemberName>) -> Self {
        Self::new(name, MemberMarkers::VIEW_BOUND)
    }

    pub fn bridged(name: impl Into<MemberName>) -> Self {
        Self::new(name, MemberMarkers::BRIDGED)
    }

    pub fn unmarked(name: impl Into<MemberName>) -> Self {
        Self::new(name, MemberMarkers::UNMARKED)
    }
}
