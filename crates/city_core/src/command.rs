//! Zero-argument commands and the logging decorator.

use tracing::info;

use crate::notice::{Notice, Notifier};

/// A zero-argument, zero-result action.
pub type Command = Box<dyn Fn()>;

/// Wrap `action` so that each invocation first announces itself.
///
/// Every call of the returned command emits exactly one
/// [`Notice::CommandStarted`] carrying `name`, then runs `action` once.
/// Nothing is emitted until the command is actually invoked.
#[must_use]
pub fn with_logging<F>(action: F, name: impl Into<String>, notifier: Notifier) -> Command
where
    F: Fn() + 'static,
{
    let name = name.into();
    Box::new(move || {
        info!(command = name, "command started");
        notifier.notify(Notice::CommandStarted { name: name.clone() });
        action();
    })
}
