//! Last-error reporting.
//!
//! Every public entry point resets the sink on entry and records into it on
//! failure. Mutators additionally dispatch the recorded error so a
//! registered handler sees it. [`ThreadLocalSink`] is the process default;
//! [`RecordingSink`] keeps everything in memory for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{Error, ErrorKind, Result};

/// An error as it sits in the last-error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for RecordedError {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

pub trait ErrorSink {
    fn record(&self, err: &Error);
    fn reset(&self);
    fn dispatch(&self);

    /// Runs `op` as an entry point: reset, then record (and dispatch, if
    /// asked) whatever error `op` returns.
    fn guard<T>(&self, dispatch: bool, op: impl FnOnce() -> Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        self.reset();
        op().inspect_err(|err| {
            self.record(err);
            if dispatch {
                self.dispatch();
            }
        })
    }
}

type Handler = Rc<dyn Fn(&RecordedError)>;

thread_local! {
    static LAST_ERROR: RefCell<Option<RecordedError>> = const { RefCell::new(None) };
    static HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
}

/// The per-thread last-error slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalSink;

impl ThreadLocalSink {
    pub fn last_error() -> Option<RecordedError> {
        LAST_ERROR.with_borrow(|slot| slot.clone())
    }

    /// Installs the handler called by [`ErrorSink::dispatch`] on this thread.
    pub fn set_handler(handler: Option<Box<dyn Fn(&RecordedError)>>) {
        HANDLER.set(handler.map(Handler::from));
    }
}

impl ErrorSink for ThreadLocalSink {
    fn record(&self, err: &Error) {
        tracing::debug!(kind = %err.kind(), "{err}");
        LAST_ERROR.set(Some(err.into()));
    }

    fn reset(&self) {
        LAST_ERROR.set(None);
    }

    fn dispatch(&self) {
        let Some(err) = Self::last_error() else {
            return;
        };
        // Cloned out so the handler may replace itself.
        let handler = HANDLER.with_borrow(|h| h.clone());
        match handler {
            Some(handler) => {
                tracing::trace!("dispatching error to handler");
                handler(&err);
            }
            None => tracing::error!("{}: {}", err.kind, err.message),
        }
    }
}

/// In-memory sink that keeps every recorded error.
#[derive(Debug, Default)]
pub struct RecordingSink {
    last: RefCell<Option<Error>>,
    recorded: RefCell<Vec<Error>>,
    dispatched: Cell<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Error> {
        self.last.borrow().clone()
    }

    pub fn recorded(&self) -> Vec<Error> {
        self.recorded.borrow().clone()
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched.get()
    }
}

impl ErrorSink for RecordingSink {
    fn record(&self, err: &Error) {
        self.last.replace(Some(err.clone()));
        self.recorded.borrow_mut().push(err.clone());
    }

    fn reset(&self) {
        self.last.replace(None);
    }

    fn dispatch(&self) {
        if self.last.borrow().is_some() {
            self.dispatched.set(self.dispatched.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_records_and_dispatches() {
        let sink = RecordingSink::new();
        let res: Result<()> = sink.guard(true, || Err(Error::AlreadySet("n".into())));
        assert!(res.is_err());
        assert_eq!(sink.last(), Some(Error::AlreadySet("n".into())));
        assert_eq!(sink.dispatched(), 1);

        let res = sink.guard(false, || Ok(5));
        assert_eq!(res, Ok(5));
        assert_eq!(sink.last(), None);
        assert_eq!(sink.recorded().len(), 1);
        assert_eq!(sink.dispatched(), 1);
    }

    #[test]
    fn test_guard_without_dispatch() {
        let sink = RecordingSink::new();
        let _ = sink.guard::<()>(false, || Err(Error::NoMemory));
        assert_eq!(sink.last(), Some(Error::NoMemory));
        assert_eq!(sink.dispatched(), 0);
    }

    #[test]
    fn test_thread_local_slot() {
        let sink = ThreadLocalSink;
        sink.record(&Error::Duplicate("d".into()));
        let last = ThreadLocalSink::last_error().unwrap();
        assert_eq!(last.kind, ErrorKind::InvalidArg);
        assert_eq!(last.message, "parameter 'd' occurs multiple times");

        std::thread::spawn(|| assert!(ThreadLocalSink::last_error().is_none()))
            .join()
            .unwrap();

        sink.reset();
        assert!(ThreadLocalSink::last_error().is_none());
    }

    #[test]
    fn test_handler_sees_dispatched_error() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let captured = seen.clone();
        ThreadLocalSink::set_handler(Some(Box::new(move |err: &RecordedError| {
            captured.borrow_mut().push(err.message.clone())
        })));

        let sink = ThreadLocalSink;
        let _ = sink.guard::<()>(true, || Err(Error::NoMemory));
        let _ = sink.guard::<()>(false, || Err(Error::NullValue("v".into())));
        ThreadLocalSink::set_handler(None);

        assert_eq!(*seen.borrow(), ["out of memory"]);
    }
}
