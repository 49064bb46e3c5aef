/// A 2D point with its current cluster label and the squared distance to
/// the closest centroid seen so far in this epoch's sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub cluster: Option<usize>,
    pub best_distance: f64,
}

impl Default for Point {
    fn default() -> Self {
        Point::new(0.0, 0.0)
    }
}

impl Point {
    /// Unassigned point with an unbounded best distance
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            cluster: None,
            best_distance: f64::INFINITY,
        }
    }

    /// Consider centroid `c` at `centroid`. Takes it only when strictly closer
    /// than the current best, so ties stay with the earlier centroid.
    pub fn offer(&mut self, c: usize, centroid: &Point) -> bool {
        let dist = distance(self, centroid);
        if dist < self.best_distance {
            self.best_distance = dist;
            self.cluster = Some(c);
            return true;
        }
        false
    }

    /// Forget this epoch's best distance; the label is kept
    pub fn reset_distance(&mut self) {
        self.best_distance = f64::INFINITY;
    }

    /// Label as written to tabular output
    pub fn label(&self) -> i64 {
        self.cluster.map_or(-1, |c| c as i64)
    }
}

/// Squared euclidean distance
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_squared() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 25.0);
        assert_eq!(distance(&b, &a), 25.0);
        assert_eq!(distance(&b, &b), 0.0);
    }

    #[test]
    fn test_new_is_unassigned() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.cluster, None);
        assert!(p.best_distance.is_infinite());
        assert_eq!(p.label(), -1);
    }

    #[test]
    fn test_offer_keeps_closest() {
        let mut p = Point::new(0.0, 0.0);
        assert!(p.offer(0, &Point::new(2.0, 0.0)));
        assert_eq!(p.cluster, Some(0));
        assert_eq!(p.best_distance, 4.0);

        // farther centroid is ignored
        assert!(!p.offer(1, &Point::new(3.0, 0.0)));
        assert_eq!(p.cluster, Some(0));

        assert!(p.offer(2, &Point::new(1.0, 0.0)));
        assert_eq!(p.cluster, Some(2));
        assert_eq!(p.best_distance, 1.0);
    }

    #[test]
    fn test_offer_tie_goes_to_earlier() {
        let mut p = Point::new(0.0, 0.0);
        p.offer(0, &Point::new(1.0, 0.0));
        assert!(!p.offer(1, &Point::new(0.0, -1.0)));
        assert_eq!(p.cluster, Some(0));
    }

    #[test]
    fn test_reset_keeps_label() {
        let mut p = Point::new(0.0, 0.0);
        p.offer(3, &Point::new(1.0, 1.0));
        p.reset_distance();
        assert_eq!(p.cluster, Some(3));
        assert!(p.best_distance.is_infinite());
        assert_eq!(p.label(), 3);
    }
}
