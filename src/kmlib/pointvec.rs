use crate::kmlib::{KmeansError, Point, Result};

/// Ordered, index addressed collection of points.
///
/// A growable container extends itself when written past the end, which lets
/// loaders fill it by row number without knowing the size up front. A fixed
/// container (e.g. centroids) rejects any out of range access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointVec {
    data: Vec<Point>,
    growable: bool,
}

impl PointVec {
    /// Empty container that grows on write
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            growable: true,
        }
    }

    /// Container of `len` default points that never changes size
    pub fn fixed(len: usize) -> Self {
        Self {
            data: vec![Point::default(); len],
            growable: false,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// Copy of the point at `index`
    pub fn get(&self, index: usize) -> Result<Point> {
        self.data
            .get(index)
            .copied()
            .ok_or(KmeansError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Store `point` at `index`. Writing past the end of a growable container
    /// fills the gap with default points first.
    pub fn set(&mut self, index: usize, point: Point) -> Result<()> {
        if index >= self.data.len() {
            if !self.growable {
                return Err(KmeansError::IndexOutOfRange {
                    index,
                    len: self.data.len(),
                });
            }
            self.data.resize(index + 1, Point::default());
        }
        self.data[index] = point;
        Ok(())
    }

    pub fn push(&mut self, point: Point) -> Result<()> {
        self.set(self.data.len(), point)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.data
    }

    /// Direct access for the parallel phases, which hand out disjoint chunks
    pub fn as_mut_slice(&mut self) -> &mut [Point] {
        &mut self.data
    }

    /// Cluster label of every point in order, `-1` when unassigned
    pub fn labels(&self) -> Vec<i64> {
        self.data.iter().map(Point::label).collect()
    }
}

impl From<Vec<Point>> for PointVec {
    fn from(data: Vec<Point>) -> Self {
        Self {
            data,
            growable: true,
        }
    }
}

impl FromIterator<(f64, f64)> for PointVec {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect::<Vec<Point>>()
            .into()
    }
}
