use crate::kmlib::{Point, PointVec, Result, Workers};

/// Points per accumulation block. Fixed so the summation order, and with it
/// every rounding step, is the same for any thread count.
pub const BLOCK_LEN: usize = 4096;

/// Running totals for one cluster
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ClusterSum {
    pub count: u64,
    pub sum_x: f64,
    pub sum_y: f64,
}

impl ClusterSum {
    pub fn add(&mut self, p: &Point) {
        self.count += 1;
        self.sum_x += p.x;
        self.sum_y += p.y;
    }

    /// Fold another partial total into this one
    pub fn merge(&mut self, other: &ClusterSum) {
        self.count += other.count;
        self.sum_x += other.sum_x;
        self.sum_y += other.sum_y;
    }

    /// Mean position as a fresh centroid, `None` for an empty cluster
    pub fn mean(&self) -> Option<Point> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(Point::new(self.sum_x / n, self.sum_y / n))
    }
}

/// Parallel half of the update phase, in blocks of `BLOCK_LEN` points.
/// Unlabeled points are skipped and every point's best distance is reset
/// for the next epoch.
pub fn accumulate(workers: &Workers, points: &mut [Point], k: usize) -> Vec<ClusterSum> {
    accumulate_blocks(workers, points, k, BLOCK_LEN)
}

/// Each block fills its own totals, owned by the one task that scans it.
/// The partials are then merged one after another in block order.
pub fn accumulate_blocks(
    workers: &Workers,
    points: &mut [Point],
    k: usize,
    block_len: usize,
) -> Vec<ClusterSum> {
    let partials = workers.map_blocks(points, block_len, |block| {
        let mut local = vec![ClusterSum::default(); k];
        for p in block.iter_mut() {
            if let Some(acc) = p.cluster.and_then(|c| local.get_mut(c)) {
                acc.add(p);
            }
            p.reset_distance();
        }
        local
    });

    let mut sums = vec![ClusterSum::default(); k];
    for local in &partials {
        for (acc, part) in sums.iter_mut().zip(local) {
            acc.merge(part);
        }
    }
    sums
}

/// Sequential half of the update phase. An empty cluster keeps its previous
/// centroid. Returns the number of empty clusters.
pub fn update_centroids(sums: &[ClusterSum], centroids: &mut PointVec) -> Result<usize> {
    let mut empty = 0;
    for (c, acc) in sums.iter().enumerate() {
        match acc.mean() {
            Some(centroid) => centroids.set(c, centroid)?,
            None => {
                warn!("cluster {} received no points, keeping previous centroid", c);
                empty += 1;
            }
        }
    }
    Ok(empty)
}
