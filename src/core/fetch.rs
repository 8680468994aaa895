use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::error::Error;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// A load running in the background on behalf of a view.
///
/// The load is aborted when the resource is dropped, so a view that goes away
/// never sees a late result.
pub(crate) struct Resource<T> {
    state: watch::Receiver<FetchState<T>>,
    task: JoinHandle<()>,
}

impl<T> Resource<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn load<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(FetchState::Loading);

        let task = tokio::spawn(async move {
            let state = match future.await {
                Ok(value) => FetchState::Ready(value),
                Err(e) => {
                    tracing::debug!("load failed: {}", e);
                    FetchState::Failed(e.to_string())
                }
            };

            // receiver gone means the view was dropped
            let _ = tx.send(state);
        });

        Self { state: rx, task }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Waits until the load has either produced a value or failed.
    pub(crate) async fn settled(&mut self) -> FetchState<T> {
        match self
            .state
            .wait_for(|state| !matches!(state, FetchState::Loading))
            .await
        {
            Ok(state) => state.clone(),
            Err(_) => FetchState::Failed("load was cancelled".into()),
        }
    }

    pub(crate) async fn ready(mut self) -> Result<T, String> {
        match self.settled().await {
            FetchState::Ready(value) => Ok(value),
            FetchState::Failed(message) => Err(message),
            FetchState::Loading => Err("load was cancelled".into()),
        }
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
