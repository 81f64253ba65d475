//! Presentation layer - FLTK widget trees for the signage panels,
//! the responsive layout selector, and the operator surfaces.

pub mod clock;
pub mod debug_overlay;
pub mod layouts;
pub mod override_panel;
pub mod prayer_table;
pub mod theme;
