//! utility modules used throughout the project
/// terminal logger setup (simplelog backend for the `log` facade)
pub mod logger;
