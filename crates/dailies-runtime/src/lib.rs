use std::future::Future;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

pub mod actor;

/// The process-wide runtime every actor mailbox drains on.
fn shared_runtime() -> &'static Runtime {
    static SHARED: OnceLock<Runtime> = OnceLock::new();
    SHARED.get_or_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name_fn(|| {
                static WORKER: AtomicUsize = AtomicUsize::new(0);
                let id = WORKER.fetch_add(1, Ordering::Relaxed);
                format!("dailies-worker-{id}")
            })
            .build()
            .expect("failed to build shared tokio runtime")
    })
}

pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    shared_runtime().spawn(future)
}

/// Drive a future to completion from synchronous code (tests, binaries).
/// Must not be called from a thread that is already inside the runtime.
pub fn block_on<F: Future>(future: F) -> F::Output {
    shared_runtime().block_on(future)
}
