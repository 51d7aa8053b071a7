use super::value_objects::HrPoint;

/// Hertzsprung-Russell history entity.
///
/// Accumulates one point per completed simulation run so the diagram
/// shows where every configuration landed. Points only leave the
/// history through an explicit [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrHistory {
    points: Vec<HrPoint>,
}

impl HrHistory {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append the point for a finished run, keeping insertion order.
    pub fn append(&mut self, point: HrPoint) {
        self.points.push(point);
    }

    /// Drop all accumulated points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[HrPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&HrPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
