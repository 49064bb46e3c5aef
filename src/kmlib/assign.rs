use crate::kmlib::{Point, Workers};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One assignment sweep. Centroids are visited in order; for each one every
/// point is compared in parallel and keeps the centroid if it's strictly
/// closer than the best seen so far this epoch.
///
/// Returns how many times a point took a new centroid.
pub fn assign_sweep(workers: &Workers, points: &mut [Point], centroids: &[Point]) -> usize {
    let mut moves = 0;
    for (c, centroid) in centroids.iter().enumerate() {
        moves += assign_centroid(workers, points, c, centroid);
        trace!("centroid {} swept", c);
    }
    moves
}

/// Offer centroid `c` to every point. Chunks are disjoint, so no locking.
pub fn assign_centroid(
    workers: &Workers,
    points: &mut [Point],
    c: usize,
    centroid: &Point,
) -> usize {
    let taken = AtomicUsize::new(0);
    workers.for_each_chunk(points, |chunk| {
        let mut n = 0;
        for p in chunk.iter_mut() {
            if p.offer(c, centroid) {
                n += 1;
            }
        }
        taken.fetch_add(n, Ordering::Relaxed);
    });
    taken.into_inner()
}
