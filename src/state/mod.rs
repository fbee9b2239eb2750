//! State management module
//!
//! Every piece of portfolio UI state lives here as plain data:
//! - Embedded entry data (data.rs)
//! - Viewport classification (viewport.rs)
//! - The per-entry carousel (carousel.rs) and its expand panel (panel.rs)
//! - The shared lightbox (lightbox.rs) and mobile drawer (menu.rs)
//! - The page arena routing events between them (page.rs)

pub mod carousel;
pub mod data;
pub mod filmstrip;
pub mod gesture;
pub mod lightbox;
pub mod menu;
pub mod page;
pub mod panel;
pub mod swap;
pub mod viewport;
