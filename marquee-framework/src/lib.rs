mod application;
mod config;
mod error;
mod history;
mod navigation;
mod route;
mod router;

pub use application::{App, Application};
pub use config::{Config, ConfigError, HistoryConfig};
pub use error::{MountError, NavigationError, RouterError};
pub use history::{History, HistoryMode, Location, NavigationEvent, NavigationKind};
pub use marquee_dom::{Document, Element, Node, Selector, StyleRule, Stylesheet};
pub use navigation::{navigation_channel, NavigationCommand, NavigationReceiver, Navigator};
pub use route::{BoxedRoute, Params, Route};
pub use router::{RouteMatch, RoutePattern, Router};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Starts the framework's structured logger.
pub fn init_logging() {
    femme::start();
}
