use crate::error::CleaningError;
use crate::text_cleaner::TextCleaner;
use rayon::prelude::*;
use rayon::ThreadPool;
use log::{info, debug};

/// Parallel batch coordinator for document cleaning
///
/// Architecture:
/// - Dedicated Rayon pool sized to the logical cores
/// - Documents grouped into batches so each task does a meaningful amount of work
/// - Output keeps input order
pub struct ParallelProcessor {
    batch_size: usize,      // Documents per batch
    max_parallelism: usize, // Worker threads
    pool: ThreadPool,
}

impl ParallelProcessor {
    /// Initialize the processor for `logical_cores` workers
    ///
    /// Batch size is twice the core count with a floor of 8, which keeps
    /// every worker busy without handing out single tiny strings.
    pub fn new(logical_cores: usize) -> Result<Self, CleaningError> {
        let max_parallelism = logical_cores.max(1);
        let batch_size = std::cmp::max(max_parallelism * 2, 8);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_parallelism)
            .thread_name(|i| format!("textcleaner-{}", i))
            .build()
            .map_err(|e| CleaningError::ParallelError(format!("Thread pool setup failed: {}", e)))?;

        info!("Parallel processor initialized: batch_size={}, max_parallelism={}",
              batch_size, max_parallelism);

        Ok(Self {
            batch_size,
            max_parallelism,
            pool,
        })
    }

    /// Size the pool from the detected logical core count
    pub fn with_detected_cores() -> Result<Self, CleaningError> {
        let logical_cores = num_cpus::get();
        info!("Detected {} logical cores", logical_cores);
        Self::new(logical_cores)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_parallelism(&self) -> usize {
        self.max_parallelism
    }

    /// Clean every document, returning results in input order
    pub fn clean_batch<S>(&self, cleaner: &TextCleaner, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Vec::new();
        }

        info!("Starting parallel cleaning: {} documents in batches of {}",
              texts.len(), self.batch_size);

        let batches: Vec<Vec<String>> = self.pool.install(|| {
            texts
                .par_chunks(self.batch_size)
                .enumerate()
                .map(|(batch_idx, batch)| {
                    debug!("Cleaning batch {} with {} documents", batch_idx, batch.len());
                    batch.iter().map(|text| cleaner.clean(text.as_ref())).collect()
                })
                .collect()
        });

        let cleaned: Vec<String> = batches.into_iter().flatten().collect();

        info!("Parallel cleaning complete: {} documents", cleaned.len());
        cleaned
    }
}
