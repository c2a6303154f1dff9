//! Client-side view state.
//!
//! DESIGN
//! ======
//! State types are plain structs with transition methods. Views hold them in
//! an `RwSignal` and apply fetch results through those methods, which keeps
//! every transition testable without a browser.

pub mod items;
