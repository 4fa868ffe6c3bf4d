//! Building blocks for [`clap`]-driven command line interfaces of the controller tooling

pub mod controller;
pub mod logging;
