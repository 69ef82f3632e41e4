//! Observable state for a trust badge UI.
//!
//! [`TrustbadgeViewModel`] owns two slots, one for [`TrustbadgeData`] and one for [`Guarantee`].
//! Each slot is a [`tokio::sync::watch`] channel holding the latest successfully fetched value.
//! The UI side subscribes to a slot and re-renders whenever the receiver reports a change; that
//! receiver is the hand-off point to whatever thread the UI runs on.
//!
//! Every fetch call spawns one independent task. There is no de-duplication: if two fetches for
//! the same slot are in flight, the one that *completes* last wins. A failed fetch is logged and
//! never touches its slot.
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::models::{Guarantee, TrustbadgeData};
use crate::use_case::{GuaranteeUseCase, TrustbadgeDataUseCase};
use crate::Result;

/// Receiving side of a slot. `None` until the first successful fetch.
pub type StateReceiver<T> = watch::Receiver<Option<Arc<T>>>;

/// Single-value observable holder. Writes replace the value atomically.
struct Slot<T> {
    sender: watch::Sender<Option<Arc<T>>>,
}

impl<T> Slot<T> {
    fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Slot { sender }
    }

    fn get(&self) -> Option<Arc<T>> {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> StateReceiver<T> {
        self.sender.subscribe()
    }

    fn publish(&self, value: T) {
        // `send_replace` stores the value even when nobody is subscribed yet.
        self.sender.send_replace(Some(Arc::new(value)));
    }
}

/// Handle to a fetch started by [`TrustbadgeViewModel`].
///
/// Dropping the handle does not cancel the fetch; the result is still published into its slot.
/// Await [`FetchHandle::wait`] to observe the outcome.
#[derive(Debug)]
pub struct FetchHandle {
    join_handle: JoinHandle<Result<()>>,
}

impl FetchHandle {
    /// Wait for the fetch to complete.
    ///
    /// Returns `Ok(())` once the fetched value has been published. Returns the fetch error
    /// otherwise (the slot is left unchanged in that case), or [`Error::TaskCancelled`] if the
    /// view model was dropped first.
    ///
    /// [`Error::TaskCancelled`]: crate::Error::TaskCancelled
    pub async fn wait(self) -> Result<()> {
        self.join_handle.await?
    }

    /// Whether the fetch has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }
}

/// Holds the latest trust badge state and starts fetches into it.
///
/// All in-flight fetches are aborted when the view model is dropped.
pub struct TrustbadgeViewModel {
    runtime: Handle,
    get_trustbadge_data: Arc<dyn TrustbadgeDataUseCase>,
    get_guarantee: Arc<dyn GuaranteeUseCase>,
    trustbadge_data: Arc<Slot<TrustbadgeData>>,
    guarantee: Arc<Slot<Guarantee>>,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl TrustbadgeViewModel {
    /// Create a view model that spawns its fetches on `runtime`.
    pub fn new(
        runtime: Handle,
        get_trustbadge_data: Arc<dyn TrustbadgeDataUseCase>,
        get_guarantee: Arc<dyn GuaranteeUseCase>,
    ) -> Self {
        TrustbadgeViewModel {
            runtime,
            get_trustbadge_data,
            get_guarantee,
            trustbadge_data: Arc::new(Slot::new()),
            guarantee: Arc::new(Slot::new()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Latest successfully fetched trust badge data.
    pub fn trustbadge_data(&self) -> Option<Arc<TrustbadgeData>> {
        self.trustbadge_data.get()
    }

    /// Subscribe to trust badge data updates. The receiver starts with the current value marked as
    /// seen.
    pub fn subscribe_trustbadge_data(&self) -> StateReceiver<TrustbadgeData> {
        self.trustbadge_data.subscribe()
    }

    /// Latest successfully fetched guarantee.
    pub fn guarantee(&self) -> Option<Arc<Guarantee>> {
        self.guarantee.get()
    }

    /// Subscribe to guarantee updates.
    pub fn subscribe_guarantee(&self) -> StateReceiver<Guarantee> {
        self.guarantee.subscribe()
    }

    /// Start fetching trust badge data for the shop `ts_id` and its sales channel `channel_id`.
    pub fn fetch_trustbadge_data(&self, ts_id: &str, channel_id: &str) -> FetchHandle {
        let use_case = Arc::clone(&self.get_trustbadge_data);
        let (ts, channel) = (ts_id.to_owned(), channel_id.to_owned());
        self.launch(
            Arc::clone(&self.trustbadge_data),
            ts_id,
            channel_id,
            async move { use_case.invoke(&ts, &channel).await },
        )
    }

    /// Start fetching the guarantee of the shop `ts_id`.
    pub fn fetch_guarantee(&self, ts_id: &str, channel_id: &str) -> FetchHandle {
        let use_case = Arc::clone(&self.get_guarantee);
        let (ts, channel) = (ts_id.to_owned(), channel_id.to_owned());
        self.launch(
            Arc::clone(&self.guarantee),
            ts_id,
            channel_id,
            async move { use_case.invoke(&ts, &channel).await },
        )
    }

    fn launch<T, F>(&self, slot: Arc<Slot<T>>, ts_id: &str, channel_id: &str, fetch: F) -> FetchHandle
    where
        T: Send + Sync + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (ts_id, channel_id) = (ts_id.to_owned(), channel_id.to_owned());
        let join_handle = self.runtime.spawn(async move {
            log::debug!(target: "trustbadge",
                ts_id = ts_id.as_str(), channel_id = channel_id.as_str(); "fetch started");
            match fetch.await {
                Ok(value) => {
                    slot.publish(value);
                    log::debug!(target: "trustbadge",
                        ts_id = ts_id.as_str(), channel_id = channel_id.as_str(); "fetch published");
                    Ok(())
                }
                Err(err) => {
                    log::error!(target: "trustbadge",
                        ts_id = ts_id.as_str(), channel_id = channel_id.as_str(); "error: {}", err);
                    Err(err)
                }
            }
        });

        let mut tasks = self
            .tasks
            .lock()
            .expect("thread holding tasks lock should not panic");
        tasks.retain(|task| !task.is_finished());
        tasks.push(join_handle.abort_handle());

        FetchHandle { join_handle }
    }
}

impl Drop for TrustbadgeViewModel {
    fn drop(&mut self) {
        let tasks = match self.tasks.get_mut() {
            Ok(tasks) => tasks,
            Err(poisoned) => poisoned.into_inner(),
        };
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}
