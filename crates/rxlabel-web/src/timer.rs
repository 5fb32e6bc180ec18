// crates/rxlabel-web/src/timer.rs
// Cancellable scheduled callbacks for the browser event loop

use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// A single-slot scheduler: at most one schedule is pending at any time.
pub trait Timer {
    /// Schedule the callback `delay_ms` from now, replacing any pending schedule.
    fn start(&mut self, delay_ms: u32);

    /// Drop the pending schedule. Cancelling twice, or after the callback
    /// already ran, does nothing.
    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Every,
}

/// Where scheduled tasks run and how they wait
pub trait Executor: Clone + 'static {
    fn delay(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// The page's microtask queue plus `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserExecutor;

impl Executor for BrowserExecutor {
    fn delay(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

/// `Timer` built from tasks on an [`Executor`].
///
/// Each `start` spawns a fresh task wrapped in `Abortable`; replacing or
/// cancelling aborts the previous task, so a stale schedule can never fire.
pub struct TaskTimer<E: Executor> {
    executor: E,
    repeat: Repeat,
    on_fire: Rc<dyn Fn()>,
    pending: Option<AbortHandle>,
}

pub type BrowserTimer = TaskTimer<BrowserExecutor>;

impl BrowserTimer {
    pub fn once(on_fire: impl Fn() + 'static) -> Self {
        Self::new(BrowserExecutor, Repeat::Once, on_fire)
    }

    pub fn every(on_fire: impl Fn() + 'static) -> Self {
        Self::new(BrowserExecutor, Repeat::Every, on_fire)
    }
}

impl<E: Executor> TaskTimer<E> {
    pub fn new(executor: E, repeat: Repeat, on_fire: impl Fn() + 'static) -> Self {
        Self {
            executor,
            repeat,
            on_fire: Rc::new(on_fire),
            pending: None,
        }
    }
}

impl<E: Executor> Timer for TaskTimer<E> {
    fn start(&mut self, delay_ms: u32) {
        self.cancel();

        let (handle, registration) = AbortHandle::new_pair();
        let executor = self.executor.clone();
        let on_fire = Rc::clone(&self.on_fire);
        let repeat = self.repeat;

        let ticks = async move {
            loop {
                executor.delay(delay_ms).await;
                on_fire();
                if repeat == Repeat::Once {
                    break;
                }
            }
        };

        self.executor.spawn(
            async move {
                // Err(Aborted) just means a newer schedule replaced this one
                let _ = Abortable::new(ticks, registration).await;
            }
            .boxed_local(),
        );

        self.pending = Some(handle);
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<E: Executor> Drop for TaskTimer<E> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Timer;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TimerCall {
        Start(u32),
        Cancel,
    }

    /// Records calls; shares its log so tests can inspect it after handing
    /// the timer to a controller.
    #[derive(Debug, Clone, Default)]
    pub struct ManualTimer {
        pub calls: Rc<RefCell<Vec<TimerCall>>>,
        pub armed: Rc<RefCell<Option<u32>>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_armed(&self) -> bool {
            self.armed.borrow().is_some()
        }

        pub fn starts(&self) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, TimerCall::Start(_)))
                .count()
        }

        pub fn clear_log(&self) {
            self.calls.borrow_mut().clear();
        }
    }

    impl Timer for ManualTimer {
        fn start(&mut self, delay_ms: u32) {
            self.calls.borrow_mut().push(TimerCall::Start(delay_ms));
            *self.armed.borrow_mut() = Some(delay_ms);
        }

        fn cancel(&mut self) {
            self.calls.borrow_mut().push(TimerCall::Cancel);
            *self.armed.borrow_mut() = None;
        }
    }
}
