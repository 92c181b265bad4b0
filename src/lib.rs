#![cfg_attr(not(test), no_std)]

//! Polar clock watchface
//!
//! A circular "minutes remaining" indicator around digital time and date
//! text, redrawn once per minute. Everything is painted through
//! [`embedded_graphics::draw_target::DrawTarget`]; display drivers, tick
//! timers and the event loop belong to the host firmware.

pub mod app;
pub mod system;
pub mod ui;

#[cfg(test)]
pub(crate) mod testutil;
