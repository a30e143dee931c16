// ABOUTME: Orchestrates one naming generation from form submit to UI state
// ABOUTME: Validates, compiles, calls the backend once, decodes, and records the outcome

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, info, warn};

use namecraft_core::{NameResult, NamingRequest, CANDIDATE_COUNT, GENERATION_FAILED_MESSAGE};
use namecraft_prompts::GenerationCall;

use crate::backend::GenerationBackend;
use crate::decoder::decode;
use crate::error::{GenerateError, Result, SubmitError};
use crate::state::GenerationState;

const LOG_SNIPPET_CHARS: usize = 500;

#[derive(Default)]
struct Inner {
    state: GenerationState,
    last_request: Option<NamingRequest>,
}

/// Owns the single generation state for one user session.
/// At most one generation is in flight; a submit while loading is rejected.
/// A submit that is cancelled mid-flight leaves the state in `Error`.
pub struct NameGenerator {
    backend: Arc<dyn GenerationBackend>,
    inner: Mutex<Inner>,
}

impl NameGenerator {
    pub fn new<B: GenerationBackend + 'static>(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> GenerationState {
        self.lock().state.clone()
    }

    pub fn last_request(&self) -> Option<NamingRequest> {
        self.lock().last_request.clone()
    }

    /// Run one generation for `request`.
    ///
    /// Returns `Err` only for synchronous rejections (invalid input, already loading);
    /// the state is left untouched in that case and no external call is made.
    /// Every failure after that point ends in `GenerationState::Error`.
    pub async fn submit(&self, request: NamingRequest) -> std::result::Result<(), SubmitError> {
        let call = GenerationCall::build(&request).map_err(|e| {
            warn!("Rejected {} naming request: {}", request.category(), e);
            SubmitError::from(e)
        })?;

        let guard = {
            let mut inner = self.lock();
            if inner.state.begin().is_err() {
                warn!("Generation already in progress, ignoring submit");
                return Err(SubmitError::InProgress);
            }
            inner.last_request = Some(request.clone());
            LoadingGuard::new(&self.inner)
        };

        info!(
            "Generating {} names: category={}, style={:?}",
            CANDIDATE_COUNT,
            request.category(),
            request.style
        );

        let outcome = self.run(&call).await;
        guard.settle(outcome);

        Ok(())
    }

    /// Resubmit the last accepted request, discarding the current batch
    pub async fn regenerate(&self) -> std::result::Result<(), SubmitError> {
        let request = self
            .last_request()
            .ok_or(SubmitError::NothingToRegenerate)?;
        self.submit(request).await
    }

    async fn run(&self, call: &GenerationCall) -> Result<Vec<NameResult>> {
        let raw = self.backend.generate(call).await?;

        let results = decode(raw.as_deref()).map_err(|e| {
            let snippet: String = raw
                .as_deref()
                .unwrap_or_default()
                .chars()
                .take(LOG_SNIPPET_CHARS)
                .collect();
            error!("Failed to decode generation response: {}. Payload: {}", e, snippet);
            GenerateError::from(e)
        })?;

        if results.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        if results.len() != CANDIDATE_COUNT {
            warn!(
                "Expected {} names but the model returned {}",
                CANDIDATE_COUNT,
                results.len()
            );
        }

        Ok(results)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock_inner(&self.inner)
    }
}

fn lock_inner(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Held while a submit is in `Loading`. If the submit future is dropped
/// before it settles, the state moves to `Error` so later submits are not
/// rejected as in progress.
struct LoadingGuard<'a> {
    inner: &'a Mutex<Inner>,
    settled: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(inner: &'a Mutex<Inner>) -> Self {
        Self {
            inner,
            settled: false,
        }
    }

    fn settle(mut self, outcome: Result<Vec<NameResult>>) {
        self.settled = true;

        let mut inner = lock_inner(self.inner);
        let transition = match outcome {
            Ok(results) => {
                info!("Generated {} names", results.len());
                inner.state.succeed(results)
            }
            Err(err) => {
                error!("Name generation failed: {}", err);
                inner.state.fail(err.user_message())
            }
        };
        if let Err(err) = transition {
            error!("Generation state out of sync: {}", err);
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("Generation cancelled before completion");
        let mut inner = lock_inner(self.inner);
        if let Err(err) = inner.state.fail(GENERATION_FAILED_MESSAGE) {
            error!("Generation state out of sync: {}", err);
        }
    }
}
