pub mod config;
pub mod controller;
pub mod error;
pub mod measure;

pub use config::{AppConfig, EasingType, PullConfig, SpringConfig, UiConfig};
pub use controller::{rotation, PullState, RefreshController};
pub use error::{Error, Result};
pub use measure::{Bounds, RegionKind, RegionMap};
