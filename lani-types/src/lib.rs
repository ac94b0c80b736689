//! # lani types
//!
//! Plain data types shared by the lani keymap:
//!
//! - [`keycode`] - HID keycodes, chords and the ascii table used by text macros
//! - [`modifier`] - Chord modifiers and the HID modifier byte
//! - [`led_indicator`] - Host lock indicators
//! - [`layer`] - Logical layers
//! - [`action`] - Key position behaviors and gesture key identifiers

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod layer;
pub mod led_indicator;
pub mod modifier;
