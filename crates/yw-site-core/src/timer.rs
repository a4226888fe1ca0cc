use std::future::Future;

/// Non-blocking wait used by the async flows.
///
/// The browser crate backs this with a `setTimeout` future; tests use an
/// immediate or recording implementation.
pub trait Delay {
    fn delay(&self, ms: u32) -> impl Future<Output = ()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Delay;
    use std::cell::RefCell;

    /// Resolves at once and remembers every requested duration.
    #[derive(Default)]
    pub struct RecordingDelay {
        pub requested: RefCell<Vec<u32>>,
    }

    impl Delay for RecordingDelay {
        async fn delay(&self, ms: u32) {
            self.requested.borrow_mut().push(ms);
        }
    }
}
