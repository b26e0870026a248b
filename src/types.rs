use nalgebra::Vector3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl BBox3 {
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self { Self { min, max } }

    pub fn size(&self) -> Vector3<f64> { self.max - self.min }
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Smallest box containing both `self` and `other`.
    pub fn merge(&self, other: &BBox3) -> BBox3 {
        BBox3::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    /// Overlap of `self` and `other`. May be inverted (min > max) when the
    /// boxes are disjoint.
    pub fn overlap(&self, other: &BBox3) -> BBox3 {
        BBox3::new(self.min.sup(&other.min), self.max.inf(&other.max))
    }

    pub fn translated(&self, offset: Vector3<f64>) -> BBox3 {
        BBox3::new(self.min + offset, self.max + offset)
    }

    /// The 8 corner points.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        let (mn, mx) = (self.min, self.max);
        [
            Vector3::new(mn.x, mn.y, mn.z),
            Vector3::new(mx.x, mn.y, mn.z),
            Vector3::new(mn.x, mx.y, mn.z),
            Vector3::new(mx.x, mx.y, mn.z),
            Vector3::new(mn.x, mn.y, mx.z),
            Vector3::new(mx.x, mn.y, mx.z),
            Vector3::new(mn.x, mx.y, mx.z),
            Vector3::new(mx.x, mx.y, mx.z),
        ]
    }
}
