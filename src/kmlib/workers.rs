use crate::kmlib::{Point, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Fixed size pool that runs data parallel regions over a static partition
/// of the points. Each region ends in a barrier: `for_each_chunk` only
/// returns after every chunk is done.
pub struct Workers {
    pool: ThreadPool,
    threads: usize,
}

impl Workers {
    pub fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("kmeans-{}", i))
            .build()?;
        Ok(Self { pool, threads })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Points per chunk so that `n` points split into at most `threads`
    /// contiguous chunks
    pub fn chunk_len(&self, n: usize) -> usize {
        n.div_ceil(self.threads).max(1)
    }

    /// Run `f` once per contiguous chunk, one task per chunk
    pub fn for_each_chunk<F>(&self, points: &mut [Point], f: F)
    where
        F: Fn(&mut [Point]) + Sync,
    {
        let chunk_len = self.chunk_len(points.len());
        let f = &f;
        self.pool.scope(|s| {
            for chunk in points.chunks_mut(chunk_len) {
                s.spawn(move |_| f(chunk));
            }
        });
    }

    /// Run `f` on every `block_len` sized block and return the results in
    /// block order. Block boundaries depend only on `block_len`, never on the
    /// thread count; each task takes a contiguous run of whole blocks.
    pub fn map_blocks<T, F>(&self, points: &mut [Point], block_len: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&mut [Point]) -> T + Sync,
    {
        let block_len = block_len.max(1);
        let n_blocks = points.len().div_ceil(block_len);
        let per_task = n_blocks.div_ceil(self.threads).max(1);
        let mut slots: Vec<Option<T>> = (0..n_blocks).map(|_| None).collect();

        let f = &f;
        self.pool.scope(|s| {
            let runs = points
                .chunks_mut(per_task * block_len)
                .zip(slots.chunks_mut(per_task));
            for (run, run_slots) in runs {
                s.spawn(move |_| {
                    for (block, slot) in run.chunks_mut(block_len).zip(run_slots.iter_mut()) {
                        *slot = Some(f(block));
                    }
                });
            }
        });

        slots.into_iter().flatten().collect()
    }
}
