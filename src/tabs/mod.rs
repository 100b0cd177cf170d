// SPDX-License-Identifier: MPL-2.0
//! Tab domain: the tab record, the in-memory store, the static site-style
//! lookup, and the sample data the prototype boots with.

pub mod sample;
pub mod site;
pub mod store;
pub mod tab;

pub use store::TabStore;
pub use tab::{Tab, TabId};
