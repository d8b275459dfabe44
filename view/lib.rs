pub mod alert;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod device;
pub mod error;
pub mod fence;
pub mod loading;
pub mod payload;
pub mod prediction;
pub mod result;
pub mod sample;
pub mod shortcut;
pub mod transport;
pub mod view;

pub use self::alert::{Alert, AlertId, Level};
pub use self::config::ClientConfig;
pub use self::controller::Controller;
pub use self::error::Error;
pub use self::shortcut::Shortcut;
pub use self::transport::Transport;
pub use self::view::View;
