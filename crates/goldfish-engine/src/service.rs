//! [`SimulationService`]: concurrent simulation runs over a worker pool.
//!
//! Submissions go through an unbounded crossbeam channel to a fixed set of
//! named worker threads. Each worker runs one [`Goldfish`] driver to
//! completion and pushes the outcome into a shared completion channel, so
//! callers receive finished agents in the order they finish rather than the
//! order they were submitted.
//!
//! # Pending count
//!
//! `pending` counts submitted jobs whose result has not been retrieved. A
//! submission increments it only after the job is queued, and a retrieval
//! claims one unit with a compare-and-swap before blocking. A retriever
//! therefore only ever waits for a result that is guaranteed to arrive.
//!
//! # Shutdown
//!
//! [`shutdown()`](SimulationService::shutdown) closes the job channel.
//! Workers drain whatever is queued, and results stay retrievable.
//! Dropping the service shuts it down and joins the workers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use goldfish_core::{Card, CardList};
use goldfish_library::Library;

use crate::agent::Agent;
use crate::config::{ServiceConfig, SimulationOptions};
use crate::error::{ConfigError, SimulationError};
use crate::goldfish::Goldfish;

/// One queued simulation run.
struct Job<T: Card, A: Agent<T>> {
    id: u64,
    driver: Goldfish<T, A>,
}

/// Submission side of the job channel. `None` once shut down.
struct Submitter<T: Card, A: Agent<T>> {
    tx: Sender<Job<T, A>>,
    next_job: u64,
}

type Completion<A> = Result<A, SimulationError>;

/// Runs many simulations concurrently and returns finished agents in
/// completion order.
///
/// `SimulationService` is [`Sync`]: one thread may submit while another
/// retrieves, and the defaults can be changed through a shared reference.
///
/// # Examples
///
/// ```no_run
/// # use goldfish_core::CardList;
/// # use goldfish_engine::{Agent, ServiceConfig, SimulationService};
/// # fn demo<A: Agent<&'static str> + Send + 'static>(agents: Vec<A>) {
/// let deck: CardList<&str> = [("Land", 24), ("Spell", 36)].into_iter().collect();
/// let service = SimulationService::new(ServiceConfig::default()).unwrap();
/// for agent in agents {
///     service.simulate(deck.clone(), agent).unwrap();
/// }
/// while let Some(agent) = service.retrieve_next_completed().unwrap() {
///     // inspect agent
/// #   let _ = agent;
/// }
/// # }
/// ```
pub struct SimulationService<T: Card, A: Agent<T>> {
    config: ServiceConfig,
    default_games: AtomicU32,
    default_skip_first_draw: AtomicBool,
    submitter: Mutex<Option<Submitter<T, A>>>,
    completed: Receiver<Completion<A>>,
    pending: AtomicUsize,
    workers: Vec<JoinHandle<()>>,
}

impl<T, A> SimulationService<T, A>
where
    T: Card + Send + Sync + 'static,
    A: Agent<T> + Send + 'static,
{
    /// Start the worker pool.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ThreadSpawnFailed`] if a worker thread cannot be
    /// spawned. Workers started before the failure exit on their own.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let worker_count = config.resolved_worker_count();
        let (job_tx, job_rx) = unbounded::<Job<T, A>>();
        let (done_tx, done_rx) = unbounded::<Completion<A>>();

        let mut workers = Vec::with_capacity(worker_count);
        for idx in 0..worker_count {
            let jobs = job_rx.clone();
            let done = done_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("goldfish-worker-{idx}"))
                .spawn(move || worker_loop(jobs, done))
                .map_err(|e| ConfigError::ThreadSpawnFailed {
                    reason: format!("goldfish-worker-{idx}: {e}"),
                })?;
            workers.push(handle);
        }

        tracing::info!(workers = worker_count, "simulation service started");

        Ok(Self {
            default_games: AtomicU32::new(config.default_games),
            default_skip_first_draw: AtomicBool::new(config.default_skip_first_draw),
            config,
            submitter: Mutex::new(Some(Submitter {
                tx: job_tx,
                next_job: 0,
            })),
            completed: done_rx,
            pending: AtomicUsize::new(0),
            workers,
        })
    }

    /// Submit a simulation using the service's default game count and
    /// skip-first-draw flag.
    ///
    /// The deck is snapshotted: pass an `Arc<CardList<T>>` to share one
    /// deck across many submissions without copying it.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ShuttingDown`] after [`shutdown()`](Self::shutdown).
    pub fn simulate(
        &self,
        deck: impl Into<Arc<CardList<T>>>,
        agent: A,
    ) -> Result<(), SimulationError> {
        self.simulate_with(deck, agent, SimulationOptions::default())
    }

    /// Submit a simulation, overriding the defaults with any fields set in
    /// `options`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ShuttingDown`] after [`shutdown()`](Self::shutdown).
    /// [`SimulationError::Library`] if an unseeded service cannot seed the
    /// job's library from the OS random source.
    pub fn simulate_with(
        &self,
        deck: impl Into<Arc<CardList<T>>>,
        agent: A,
        options: SimulationOptions,
    ) -> Result<(), SimulationError> {
        let games = options.games.unwrap_or_else(|| self.default_games());
        let skip_first_draw = options
            .skip_first_draw
            .unwrap_or_else(|| self.default_skip_first_draw());

        let mut guard = self
            .submitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let submitter = guard.as_mut().ok_or(SimulationError::ShuttingDown)?;

        let id = submitter.next_job;
        let library = match self.config.job_seed(id) {
            Some(seed) => Library::seeded(seed, deck),
            None => Library::try_new(deck)?,
        };
        let driver = Goldfish::new(library, agent)
            .games(games)
            .skip_first_draw(skip_first_draw);

        submitter
            .tx
            .send(Job { id, driver })
            .map_err(|_| SimulationError::Disconnected)?;
        submitter.next_job += 1;
        let pending = self.pending.fetch_add(1, Ordering::AcqRel) + 1;

        tracing::debug!(job = id, games, skip_first_draw, pending, "simulation submitted");
        Ok(())
    }

    /// Number of submitted simulations whose result has not been retrieved.
    pub fn remaining(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Take the next finished simulation, in completion order.
    ///
    /// Returns `Ok(None)` immediately when nothing is pending. Otherwise
    /// blocks until some simulation finishes.
    ///
    /// # Errors
    ///
    /// The finished simulation's own failure: [`SimulationError::Agent`]
    /// if the agent returned an error, [`SimulationError::Panicked`] if the
    /// run panicked. The failed job still counts as retrieved.
    pub fn retrieve_next_completed(&self) -> Result<Option<A>, SimulationError> {
        let claimed = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok();
        if !claimed {
            return Ok(None);
        }
        match self.completed.recv() {
            Ok(result) => result.map(Some),
            Err(_) => Err(SimulationError::Disconnected),
        }
    }

    /// Stop accepting submissions. Queued and running simulations still
    /// complete and can be retrieved.
    pub fn shutdown(&self) {
        let closed = self
            .submitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if closed {
            tracing::info!(pending = self.remaining(), "simulation service shutting down");
        }
    }

    /// `true` once [`shutdown()`](Self::shutdown) has been called.
    pub fn is_shutdown(&self) -> bool {
        self.submitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Number of worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Games per simulation when a submission does not specify.
    pub fn default_games(&self) -> u32 {
        self.default_games.load(Ordering::Relaxed)
    }

    /// Change the default number of games for later submissions.
    pub fn set_default_games(&self, games: u32) {
        self.default_games.store(games, Ordering::Relaxed);
    }

    /// Whether submissions skip the turn-1 draw by default.
    pub fn default_skip_first_draw(&self) -> bool {
        self.default_skip_first_draw.load(Ordering::Relaxed)
    }

    /// Change the default skip-first-draw flag for later submissions.
    pub fn set_default_skip_first_draw(&self, skip: bool) {
        self.default_skip_first_draw.store(skip, Ordering::Relaxed);
    }
}

impl<T: Card, A: Agent<T>> Drop for SimulationService<T, A> {
    fn drop(&mut self) {
        self.submitter
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

/// Worker thread body: run queued drivers until the job channel closes.
fn worker_loop<T, A>(jobs: Receiver<Job<T, A>>, done: Sender<Completion<A>>)
where
    T: Card,
    A: Agent<T>,
{
    while let Ok(Job { id, driver }) = jobs.recv() {
        let result = match panic::catch_unwind(AssertUnwindSafe(|| driver.run())) {
            Ok(Ok(agent)) => {
                tracing::debug!(job = id, "simulation finished");
                Ok(agent)
            }
            Ok(Err(err)) => {
                tracing::warn!(job = id, error = %err, "simulation failed");
                Err(SimulationError::Agent(err))
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::warn!(job = id, reason = %reason, "simulation panicked");
                Err(SimulationError::Panicked { reason })
            }
        };
        // The receiver only goes away with the service itself.
        if done.send(result).is_err() {
            break;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
