//! Tap dance gestures and layer arbitration for the lani keymap.
//!
//! Key events go into [`Keyboard`](keyboard::Keyboard). Dance keys are counted in a
//! gesture window, classified into a [`GestureClass`](gesture::GestureClass) and
//! dispatched to their [`Dance`](dance::Dance) behavior. Layer changes go through a
//! single [`LayerArbiter`](layer::LayerArbiter), so at most one layer is on top of the
//! default one.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;
pub mod layout_macro;

pub mod caps_word;
pub mod channel;
pub mod config;
pub mod dance;
pub mod descriptor;
#[cfg(feature = "display")]
pub mod display;
pub mod error;
pub mod event;
pub mod gesture;
pub mod hid;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod layer;
pub mod layout;

pub use lani_types as types;

/// Raw mutex used by every channel
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of the key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the keyboard report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
/// Max number of dances bound at the same time
pub const MAX_DANCES: usize = 8;

/// A task which runs forever
#[allow(async_fn_in_trait)]
pub trait Runnable {
    async fn run(&mut self);
}
