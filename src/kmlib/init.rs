use crate::kmlib::{KmeansError, Point, PointVec, Result};
use rand::Rng;

/// Pick `k` starting centroids uniformly at random from `points`, with
/// replacement. Duplicates are possible and kept.
pub fn init_centroids<R: Rng>(
    points: &PointVec,
    k: usize,
    rng: &mut R,
) -> Result<PointVec> {
    if points.is_empty() {
        return Err(KmeansError::InvalidConfig(
            "cannot choose centroids from an empty point set".to_string(),
        ));
    }

    let mut centroids = PointVec::fixed(k);
    for c in 0..k {
        let src = points.get(rng.gen_range(0..points.len()))?;
        centroids.set(c, Point::new(src.x, src.y))?;
    }
    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> PointVec {
        (0..20).map(|i| (i as f64, (i * 2) as f64)).collect()
    }

    #[test]
    fn test_centroids_come_from_input() {
        let points = grid();
        let mut rng = StdRng::seed_from_u64(42);
        let centroids = init_centroids(&points, 5, &mut rng).unwrap();
        assert_eq!(centroids.len(), 5);
        assert!(!centroids.is_growable());
        for c in centroids.iter() {
            assert!(points.iter().any(|p| p.x == c.x && p.y == c.y));
            assert_eq!(c.cluster, None);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let points = grid();
        let a = init_centroids(&points, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = init_centroids(&points, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_replacement() {
        // one point, many centroids: every centroid is that point
        let points: PointVec = vec![(3.0, 4.0)].into_iter().collect();
        let centroids = init_centroids(&points, 3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(centroids.iter().all(|c| c.x == 3.0 && c.y == 4.0));
    }

    #[test]
    fn test_empty_input() {
        let points = PointVec::new();
        assert!(init_centroids(&points, 1, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
