//! conversion-chart: conversion-rate series and viewport state for A/B test
//! charts.
//!
//! `core` holds the pure pipeline (variant registry, daily parsing, weekly
//! roll-up, chart points) and the index viewport transitions. `api` wraps
//! them in a stateful facade that consumes user intents and produces
//! renderer snapshots.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartIntent, ConversionChart, ConversionChartConfig};
pub use error::{ChartError, ChartResult};
