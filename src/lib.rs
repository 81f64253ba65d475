//! Minbar - adaptive prayer-times signage for mosque screens.
//!
//! The same binary runs on anything from a small tablet at the entrance
//! to a wall-mounted TV. The `screen` module estimates the physical size
//! of whatever display it finds itself on, buckets it into a device
//! category, and the `ui` module picks a layout to match. An operator
//! can pin the category with a persisted override when the estimate
//! gets it wrong.

pub mod app;
pub mod data;
pub mod screen;
pub mod ui;
