//! User-facing notices emitted by subsystems.
//!
//! Operations that change something, or refuse to, report it through a
//! [`Notifier`] rather than printing directly. The console driver plugs in
//! a [`ConsoleSink`]; tests plug in a [`RecordingSink`] and inspect what was
//! emitted.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A human-readable notice produced as a side effect of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A decorated command is about to run.
    CommandStarted {
        /// Display name of the command.
        name: String,
    },
    /// Every municipal light has been switched on.
    LightsOn,
    /// All transport has been halted.
    TrafficStopped,
    /// The energy mode was changed.
    EnergyModeChanged {
        /// The newly applied mode.
        mode: String,
    },
    /// An energy mode change was refused for lack of privilege.
    EnergyAccessDenied,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandStarted { name } => write!(f, "[LOG] {name} started"),
            Self::LightsOn => f.write_str("All city lights are ON"),
            Self::TrafficStopped => f.write_str("ALL TRANSPORT STOPPED!"),
            Self::EnergyModeChanged { mode } => write!(f, "Energy mode changed to {mode}"),
            Self::EnergyAccessDenied => f.write_str("ERROR: Only ADMIN can change this!"),
        }
    }
}

/// Receiver of [`Notice`]s.
pub trait NoticeSink {
    /// Deliver a notice.
    fn notify(&self, notice: Notice);
}

/// Cheaply cloneable handle to a shared [`NoticeSink`].
#[derive(Clone)]
pub struct Notifier {
    sink: Rc<dyn NoticeSink>,
}

impl Notifier {
    /// Wrap a sink in a shareable handle.
    #[must_use]
    pub fn new(sink: impl NoticeSink + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    /// A notifier that discards everything.
    #[must_use]
    pub fn null() -> Self {
        Self::new(NullSink)
    }

    /// Send a notice to the underlying sink.
    pub fn notify(&self, notice: Notice) {
        self.sink.notify(notice);
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

/// Prints each notice on its own line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notify(&self, notice: Notice) {
        println!("{notice}");
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NoticeSink for NullSink {
    fn notify(&self, _notice: Notice) {}
}

/// Collects notices in emission order.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a [`Notifier`].
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Returns the number of recorded notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl NoticeSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
