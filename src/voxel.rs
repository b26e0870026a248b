//! Signed distances sampled on a regular grid.
//!
//! Samples are stored in layers along the bolt axis (+Y). Each layer is an
//! `nx * nz` slab, so voxel `[ix, iy, iz]` lives at
//! `data[(iy * nx + ix) * nz + iz]`. Grids come from
//! [`Shape::voxelize`](crate::builder::Shape::voxelize).

use nalgebra::Vector3;

/// Signed-distance samples taken at the centers of cubic voxels.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    /// Voxel counts `[nx, ny, nz]`. Any of them may be zero.
    pub resolution: [usize; 3],
    pub voxel_size: f64,
    /// Minimum corner of voxel `[0, 0, 0]`.
    pub origin: Vector3<f64>,
    pub data: Vec<f32>,
}

impl VoxelGrid {
    /// Voxel `[ix, iy, iz]` containing `world`, or `None` when the point
    /// lies outside the grid.
    pub fn cell_at(&self, world: Vector3<f64>) -> Option<[usize; 3]> {
        let rel = (world - self.origin) / self.voxel_size;
        let mut cell = [0; 3];
        for axis in 0..3 {
            let t = rel[axis].floor();
            // also rejects NaN
            if !(t >= 0.0 && t < self.resolution[axis] as f64) {
                return None;
            }
            cell[axis] = t as usize;
        }
        Some(cell)
    }

    /// Center of voxel `cell` in world space.
    pub fn center(&self, [ix, iy, iz]: [usize; 3]) -> Vector3<f64> {
        self.origin + Vector3::new(ix as f64 + 0.5, iy as f64 + 0.5, iz as f64 + 0.5) * self.voxel_size
    }

    /// Sampled distance of the voxel containing `world`.
    pub fn value_at(&self, world: Vector3<f64>) -> Option<f32> {
        let [ix, iy, iz] = self.cell_at(world)?;
        let [nx, _, nz] = self.resolution;
        self.data.get((iy * nx + ix) * nz + iz).copied()
    }

    pub fn inside_count(&self) -> usize {
        self.data.iter().filter(|d| **d < 0.0).count()
    }

    /// Inside voxels times voxel volume.
    pub fn volume(&self) -> f64 {
        self.inside_count() as f64 * self.voxel_size.powi(3)
    }
}
