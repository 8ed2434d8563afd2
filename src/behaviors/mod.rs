//! Event reactions attached by the binder.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds the pure part of one behavior: what happens to the
//! document when its event fires. `binder` decides which elements get which
//! behavior and owns the listener wiring, so these functions can be tested
//! directly against `MemoryDom`.

pub mod confirm;
pub mod counter;
pub mod preview;
pub mod sidebar;
pub mod validation;
