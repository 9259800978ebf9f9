//! Avionics control unit simulator.
//!
//! A producer task samples a fixed registry of simulated sensors once per
//! cycle and hands every [`Reading`] to a consumer task over a
//! [`ReadingChannel`]. The consumer displays readings until the channel is
//! shut down and drained.

pub mod acu;
pub mod config;

pub use acu::{
    Acu, Altimeter, ChannelError, Console, Consumer, Delivery, Line, MemoryConsole, Producer,
    ProducerReport, Reading, ReadingChannel, RunReport, Sensor, Stdout, Thermometer, Warning,
    WarningKind,
};
pub use config::{Config, SensorKind, SensorSpec};
