use crate::kmlib::{
    accumulate, assign_sweep, init_centroids, update_centroids, KmeansError, Point, PointVec,
    Result, Workers,
};
use rand::Rng;

/// Lloyd's k-means with a fixed number of epochs. There is no convergence
/// check; every run does exactly `epochs` assignment/update cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    pub k: usize,
    pub epochs: usize,
    pub threads: usize,
}

/// What a finished run leaves behind besides the labeled points
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub centroids: PointVec,
    /// Times, summed over epochs, a cluster got no points and kept its centroid
    pub empty_clusters: usize,
}

impl KMeans {
    pub fn new(k: usize, epochs: usize, threads: usize) -> Self {
        Self { k, epochs, threads }
    }

    /// Check the run against a point set before anything is touched
    pub fn validate(&self, n_points: usize) -> Result<()> {
        if self.k == 0 {
            return Err(KmeansError::InvalidConfig("k must be at least 1".to_string()));
        }
        if self.threads == 0 {
            return Err(KmeansError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.k > n_points {
            return Err(KmeansError::InvalidConfig(format!(
                "k ({}) is larger than the number of points ({})",
                self.k, n_points
            )));
        }
        Ok(())
    }

    /// Seed centroids from `rng` and run. `points` is left untouched on error.
    pub fn fit<R: Rng>(&self, points: &mut PointVec, rng: &mut R) -> Result<Fit> {
        self.validate(points.len())?;
        let centroids = init_centroids(points, self.k, rng)?;
        self.fit_from(points, centroids)
    }

    /// Run from caller supplied starting centroids
    pub fn fit_from(&self, points: &mut PointVec, init: PointVec) -> Result<Fit> {
        self.validate(points.len())?;
        if init.len() != self.k {
            return Err(KmeansError::InvalidConfig(format!(
                "{} starting centroids given for k={}",
                init.len(),
                self.k
            )));
        }
        let workers = Workers::new(self.threads)?;

        // distances left by an earlier sweep would hide the first epoch's centroids
        for p in points.as_mut_slice() {
            p.reset_distance();
        }

        // centroids are rebuilt as fresh values in a fixed size container
        let mut centroids = PointVec::fixed(self.k);
        for (c, p) in init.iter().enumerate() {
            centroids.set(c, Point::new(p.x, p.y))?;
        }

        info!(
            "clustering {} points k={} epochs={} threads={}",
            points.len(),
            self.k,
            self.epochs,
            self.threads
        );
        let mut empty_clusters = 0;
        for epoch in 0..self.epochs {
            let moves = assign_sweep(&workers, points.as_mut_slice(), centroids.as_slice());
            let sums = accumulate(&workers, points.as_mut_slice(), self.k);
            let empty = update_centroids(&sums, &mut centroids)?;
            empty_clusters += empty;
            debug!(
                "epoch {} moves={} sizes={:?} empty={}",
                epoch,
                moves,
                sums.iter().map(|s| s.count).collect::<Vec<_>>(),
                empty
            );
        }

        Ok(Fit {
            centroids,
            empty_clusters,
        })
    }
}

/// Cluster `points` into `k` groups over `epochs` cycles using `threads`
/// workers and return them labeled.
pub fn cluster<R: Rng>(
    mut points: PointVec,
    epochs: usize,
    k: usize,
    threads: usize,
    rng: &mut R,
) -> Result<PointVec> {
    KMeans::new(k, epochs, threads).fit(&mut points, rng)?;
    Ok(points)
}
