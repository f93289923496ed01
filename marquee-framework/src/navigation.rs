use tokio::sync::mpsc;

use crate::error::NavigationError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationCommand {
    Push(String),
    Replace(String),
    Go(isize),
}

pub type NavigationReceiver = mpsc::UnboundedReceiver<NavigationCommand>;

/// Cloneable handle for requesting navigation from outside the application.
/// Commands are applied in order by [`App::run`](crate::App::run).
#[derive(Clone, Debug)]
pub struct Navigator {
    sender: mpsc::UnboundedSender<NavigationCommand>,
}

pub fn navigation_channel() -> (Navigator, NavigationReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Navigator { sender }, receiver)
}

impl Navigator {
    pub fn push(&self, to: impl ToString) -> Result<(), NavigationError> {
        self.send(NavigationCommand::Push(to.to_string()))
    }

    pub fn replace(&self, to: impl ToString) -> Result<(), NavigationError> {
        self.send(NavigationCommand::Replace(to.to_string()))
    }

    pub fn go(&self, delta: isize) -> Result<(), NavigationError> {
        self.send(NavigationCommand::Go(delta))
    }

    pub fn back(&self) -> Result<(), NavigationError> {
        self.go(-1)
    }

    pub fn forward(&self) -> Result<(), NavigationError> {
        self.go(1)
    }

    fn send(&self, command: NavigationCommand) -> Result<(), NavigationError> {
        self.sender
            .send(command)
            .map_err(|_| NavigationError::Closed)
    }
}
