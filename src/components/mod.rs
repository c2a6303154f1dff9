//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `item_list` owns all view state and performs the fetches; `item_row` and
//! `item_dialog` are presentational and report user actions through callbacks.

pub mod item_dialog;
pub mod item_list;
pub mod item_row;
