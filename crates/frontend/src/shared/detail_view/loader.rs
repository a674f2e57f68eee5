//! Detail view load sequence
//!
//! `Idle → Loading → Installed → (Rendered | Failed)`. Each suspension point
//! (fragment fetch, then RPC) gates the next step. A newer load supersedes
//! an older one: results of the older load are dropped without touching
//! the state.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::entity::{decode_payload, DetailAction, DetailEntity};
use super::error::{LoadError, MountError};
use super::fallback::FallbackPanel;
use crate::system::remote::ErrorKind;

/// Network side of a detail view load
#[async_trait(?Send)]
pub trait DetailBackend {
    /// Fetch the static markup fragment
    async fn fetch_markup(&self, path: &str) -> Result<String, LoadError>;

    /// Invoke a remote function with named parameters
    async fn call_rpc(&self, function: &str, params: Value) -> Result<Value, LoadError>;
}

/// Region the view is injected into
pub trait MountPoint {
    fn locate(&self) -> Result<(), MountError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<V> {
    Idle,
    /// Spinner
    Loading,
    /// Fragment visible, aggregate pending
    Installed { markup: String },
    Rendered {
        markup: String,
        view: V,
        actions: Vec<DetailAction>,
    },
    Failed(FallbackPanel),
}

impl<V> Default for DetailState<V> {
    fn default() -> Self {
        DetailState::Idle
    }
}

impl<V> DetailState<V> {
    /// Spinner state; a load aborted on a missing mount container stays `Idle`
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

/// Counter shared by every load targeting the same mount container
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; every older ticket stops being current
    pub fn next(&self) -> LoadTicket {
        let value = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            counter: Arc::clone(&self.0),
            value,
        }
    }

    /// Invalidate in-flight loads without starting a new one
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct LoadTicket {
    counter: Arc<AtomicU64>,
    value: u64,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed(ErrorKind),
    /// A newer load started before this one finished
    Superseded,
}

pub struct DetailLoader<E, B, M> {
    backend: B,
    mount: M,
    generation: LoadGeneration,
    entity: PhantomData<fn() -> E>,
}

impl<E, B, M> DetailLoader<E, B, M>
where
    E: DetailEntity,
    B: DetailBackend,
    M: MountPoint,
{
    pub fn new(backend: B, mount: M, generation: LoadGeneration) -> Self {
        Self {
            backend,
            mount,
            generation,
            entity: PhantomData,
        }
    }

    /// Run one load, reporting every state change to `sink`
    ///
    /// `Err` only for a missing mount container; every other failure ends
    /// in `DetailState::Failed` and `Ok(LoadOutcome::Failed(_))`.
    pub async fn load<S>(&self, id: &str, sink: S) -> Result<LoadOutcome, MountError>
    where
        S: Fn(DetailState<E::View>),
    {
        self.mount.locate()?;

        let ticket = self.generation.next();
        log::debug!("{} {}: loading", E::NAME, id);
        sink(DetailState::Loading);

        match self.fetch(id, &ticket, &sink).await {
            Ok(Some((markup, view))) => {
                log::debug!("{} {}: rendered", E::NAME, id);
                sink(DetailState::Rendered {
                    markup,
                    view,
                    actions: E::actions(id),
                });
                Ok(LoadOutcome::Rendered)
            }
            Ok(None) => {
                log::debug!("{} {}: superseded", E::NAME, id);
                Ok(LoadOutcome::Superseded)
            }
            Err(error) => {
                if !ticket.is_current() {
                    log::debug!("{} {}: superseded ({})", E::NAME, id, error);
                    return Ok(LoadOutcome::Superseded);
                }
                let kind = error.kind();
                log::warn!("{} {}: {:?}: {}", E::NAME, id, kind, error);
                sink(DetailState::Failed(FallbackPanel::for_error(&error)));
                Ok(LoadOutcome::Failed(kind))
            }
        }
    }

    /// `Ok(None)` when the ticket went stale at a suspension point
    async fn fetch<S>(
        &self,
        id: &str,
        ticket: &LoadTicket,
        sink: &S,
    ) -> Result<Option<(String, E::View)>, LoadError>
    where
        S: Fn(DetailState<E::View>),
    {
        let markup = self.backend.fetch_markup(E::MARKUP_PATH).await?;
        if !ticket.is_current() {
            return Ok(None);
        }
        sink(DetailState::Installed {
            markup: markup.clone(),
        });

        let value = self
            .backend
            .call_rpc(E::RPC_FUNCTION, E::rpc_params(id))
            .await?;
        if !ticket.is_current() {
            return Ok(None);
        }

        let aggregate = decode_payload::<E>(value)?;
        Ok(Some((markup, E::render(aggregate))))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::HashMap;

    pub enum Reply {
        Ready(Result<Value, LoadError>),
        Wait(oneshot::Receiver<Value>),
    }

    /// In-memory backend keyed by the id parameter value
    pub struct FakeBackend {
        pub markup: Result<String, LoadError>,
        pub replies: RefCell<HashMap<String, Reply>>,
        pub calls: RefCell<Vec<(String, Value)>>,
    }

    impl FakeBackend {
        pub fn new(markup: &str) -> Self {
            Self {
                markup: Ok(markup.to_string()),
                replies: RefCell::new(HashMap::new()),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_markup(error: LoadError) -> Self {
            Self {
                markup: Err(error),
                ..Self::new("")
            }
        }

        pub fn reply(self, id: &str, reply: Reply) -> Self {
            self.replies.borrow_mut().insert(id.to_string(), reply);
            self
        }
    }

    #[async_trait(?Send)]
    impl DetailBackend for FakeBackend {
        async fn fetch_markup(&self, _path: &str) -> Result<String, LoadError> {
            self.markup.clone()
        }

        async fn call_rpc(&self, function: &str, params: Value) -> Result<Value, LoadError> {
            self.calls
                .borrow_mut()
                .push((function.to_string(), params.clone()));
            let id = params
                .as_object()
                .and_then(|o| o.values().next())
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let reply = self.replies.borrow_mut().remove(&id);
            match reply {
                Some(Reply::Ready(result)) => result,
                Some(Reply::Wait(rx)) => Ok(rx.await.unwrap_or(Value::Null)),
                None => Ok(Value::Null),
            }
        }
    }

    pub struct StaticMount(pub bool);

    impl MountPoint for StaticMount {
        fn locate(&self) -> Result<(), MountError> {
            if self.0 {
                Ok(())
            } else {
                Err(MountError("contenido".to_string()))
            }
        }
    }
}
