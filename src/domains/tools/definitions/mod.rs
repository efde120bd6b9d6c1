//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod pto;
pub mod weather;

pub use pto::{
    PtoBalance, PtoDaysTakenTool, PtoDaysTool, PtoFullDayTool, PtoHalfDayTool, PtoHoursTool,
};
pub use weather::{
    WeatherByZipcodeParams, WeatherByZipcodeTool, WeatherClient, WeatherError, WeatherFailure,
    WeatherReport,
};
