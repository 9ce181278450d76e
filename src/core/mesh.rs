// CPU-side mesh generation for the three section objects and the particle
// field. Built once at startup; only the sphere's position buffer is
// touched afterwards (by the per-frame displacement).

use super::constants::{OBJECT_SPACING, PARTICLE_COUNT, PARTICLE_SPREAD};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Torus in the xy plane: `radius` to the tube center, `tube` tube radius.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.positions.push(pos);
            mesh.normals.push((pos - center).normalize());
        }
    }
    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// UV sphere. Poles are duplicated per segment, which keeps the vertex grid
/// regular and the per-frame re-upload trivial.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let phi = v * std::f32::consts::PI;
        for x in 0..=width_segments {
            let u = x as f32 / width_segments as f32;
            let theta = u * TAU;
            let dir = Vec3::new(
                -phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.positions.push(dir * radius);
            mesh.normals.push(dir);
        }
    }
    let stride = width_segments + 1;
    for y in 0..height_segments {
        for x in 0..width_segments {
            let a = y * stride + x;
            let b = (y + 1) * stride + x;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if y != height_segments - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }
    mesh
}

/// (p, q) torus knot, p = 2, q = 3: the classic trefoil-style knot.
pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32) -> MeshData {
    const P: f32 = 2.0;
    const Q: f32 = 3.0;

    fn point_on_curve(u: f32, radius: f32) -> Vec3 {
        let qu = Q / P * u;
        let r = radius * (2.0 + qu.cos()) * 0.5;
        Vec3::new(r * u.cos(), r * u.sin(), radius * qu.sin() * 0.5)
    }

    let mut mesh = MeshData::default();
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * P * TAU;
        // Frenet-style frame from a forward difference along the curve.
        let p1 = point_on_curve(u, radius);
        let p2 = point_on_curve(u + 0.01, radius);
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize();
        normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + normal * cx + binormal * cy;
            mesh.positions.push(pos);
            mesh.normals.push((pos - p1).normalize());
        }
    }
    let stride = radial_segments + 1;
    for i in 1..=tubular_segments {
        for j in 1..=radial_segments {
            let a = stride * (i - 1) + (j - 1);
            let b = stride * i + (j - 1);
            let c = stride * i + j;
            let d = stride * (i - 1) + j;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Background particle field: x/z spread across the whole scene, y covering
/// all three sections. Seeded so the layout is reproducible.
pub fn particle_positions(seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..PARTICLE_COUNT)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                OBJECT_SPACING * 0.5 - rng.gen::<f32>() * OBJECT_SPACING * 3.0,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
            )
        })
        .collect()
}
