//! Execution context
//!
//! Kernels parallelize over right-hand-side columns with rayon. An
//! [`Executor`] decides which rayon pool those columns run on: the global
//! pool, or a dedicated one sized by [`ExecutorConfig`]. A one-thread
//! executor is the sequential reference used to check parallel results.

use log::info;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Thread pool configuration for an [`Executor`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutorConfig {
    /// Worker count, `None` for rayon's default (one per logical CPU)
    pub threads: Option<usize>,
    /// Prefix for worker thread names
    pub thread_name: Option<String>,
}

impl ExecutorConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }
}

/// Where kernel work runs
#[derive(Debug, Default)]
pub struct Executor {
    pool: Option<ThreadPool>,
}

impl Executor {
    /// Executor on rayon's global pool
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Executor with a dedicated pool built from `config`
    pub fn new(config: ExecutorConfig) -> Result<Self, ThreadPoolBuildError> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        if let Some(prefix) = config.thread_name.clone() {
            builder = builder.thread_name(move |i| format!("{prefix}-{i}"));
        }
        let pool = builder.build()?;
        info!(
            "created sparse BLAS executor with {} threads",
            pool.current_num_threads()
        );
        Ok(Self { pool: Some(pool) })
    }

    pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        Self::new(ExecutorConfig::default().with_threads(threads))
    }

    /// Single-threaded reference executor
    pub fn sequential() -> Result<Self, ThreadPoolBuildError> {
        Self::with_threads(1)
    }

    /// Number of workers kernels will be spread over
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub(crate) fn install<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}
