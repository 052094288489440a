//! Vocabulary shared between the controller bridge and the hosts embedding it.

pub mod diagnostics;
pub mod domain;
pub mod error;
