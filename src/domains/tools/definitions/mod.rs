//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod add;
pub mod bmi;
pub mod common;
pub mod weather;

pub use add::{AddOutput, AddParams, AddTool};
pub use bmi::{CalculateBmiOutput, CalculateBmiParams, CalculateBmiTool};
pub use weather::{FetchWeatherOutput, FetchWeatherParams, FetchWeatherTool};
