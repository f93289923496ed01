use std::fmt;

use marquee_dom::SelectorError;

/// Errors raised while building a router or resolving named routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Pattern does not start with '/' or declares an unnamed parameter
    InvalidPattern { pattern: String, reason: String },
    /// Two routes share the same path pattern
    DuplicatePath(String),
    /// Two routes share the same name
    DuplicateName(String),
    /// No route carries the requested name
    UnknownRoute(String),
    /// A parameter required by the route's pattern was not supplied
    MissingParam { route: String, param: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            RouterError::DuplicatePath(path) => {
                write!(f, "Duplicate route path '{}'", path)
            }
            RouterError::DuplicateName(name) => {
                write!(f, "Duplicate route name '{}'", name)
            }
            RouterError::UnknownRoute(name) => {
                write!(f, "No route named '{}'", name)
            }
            RouterError::MissingParam { route, param } => {
                write!(f, "Missing parameter '{}' for route '{}'", param, route)
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// Errors raised by the one-time mount of an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No element in the document matches the selector
    TargetNotFound(String),
    /// Selector could not be parsed
    InvalidSelector(SelectorError),
    /// The application has already been mounted
    AlreadyMounted,
    /// `mount` was called before a router was attached
    RouterMissing,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::TargetNotFound(selector) => {
                write!(f, "Mount target '{}' not found in document", selector)
            }
            MountError::InvalidSelector(err) => write!(f, "Invalid mount selector: {}", err),
            MountError::AlreadyMounted => write!(f, "Application is already mounted"),
            MountError::RouterMissing => {
                write!(f, "Cannot mount application without a router")
            }
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MountError::InvalidSelector(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SelectorError> for MountError {
    fn from(err: SelectorError) -> Self {
        MountError::InvalidSelector(err)
    }
}

/// Errors raised when navigating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Navigation was requested before the application was mounted
    NotMounted,
    /// Navigation target is not an absolute path
    InvalidPath(String),
    /// The application's navigation loop has stopped
    Closed,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotMounted => write!(f, "Application is not mounted"),
            NavigationError::InvalidPath(path) => {
                write!(f, "Invalid navigation target '{}' (expected '/path')", path)
            }
            NavigationError::Closed => write!(f, "Navigation channel closed"),
        }
    }
}

impl std::error::Error for NavigationError {}
