pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod output;
pub mod render;
pub mod signal_processing;
pub mod wav;

pub use config::{BroadbandParams, GeneratorConfig, ImpulseParams, SceneConfig, TonalParams};
pub use error::{Result, SignalError};
pub use generator::{SignalGenerator, SignalKind};
pub use wav::save_wav;
