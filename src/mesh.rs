//! Triangle meshes: the built-in cube and meshes loaded from OBJ files.

use std::path::Path;

use crate::error::LoadError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

pub const CUBE_CORNERS: usize = 8;
pub const CUBE_TRIANGLES: usize = 12;

/// Corner indices of each cube triangle, two per face, wound clockwise seen from outside.
///
/// Corners are numbered:
///
/// ```text
///      4-----5
///     /|    /|
///    0-----1 |      +Y
///    | 6---|-7       |  +Z
///    |/    |/        | /
///    2-----3         |/___ +X
/// ```
///
/// so 0-3 form the +Z face and 4-7 the -Z face.
pub const CUBE_CORNER_INDICES: [[usize; 3]; CUBE_TRIANGLES] = [
    // +Z
    [0, 1, 2],
    [3, 2, 1],
    // -Z
    [5, 4, 7],
    [6, 7, 4],
    // -X
    [4, 0, 6],
    [2, 6, 0],
    // +X
    [1, 5, 3],
    [7, 3, 5],
    // +Y
    [4, 5, 0],
    [1, 0, 5],
    // -Y
    [2, 3, 6],
    [7, 6, 3],
];

const EVEN_UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
const ODD_UVS: [Vec2; 3] = [Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];

/// Builds the 12 triangles of a box from its 8 corners, numbered as in
/// [`CUBE_CORNER_INDICES`]. Each face gets the full texture.
pub fn make_cube(corners: &[Vec3; CUBE_CORNERS]) -> [Triangle; CUBE_TRIANGLES] {
    let mut triangles = [Triangle::default(); CUBE_TRIANGLES];
    for (i, (triangle, indices)) in triangles.iter_mut().zip(CUBE_CORNER_INDICES).enumerate() {
        let uvs = if i % 2 == 0 { EVEN_UVS } else { ODD_UVS };
        *triangle = Triangle::with_uvs(indices.map(|c| corners[c]), uvs);
    }
    triangles
}

/// A unit cube centred on `center`.
pub fn cube_at(center: Vec3) -> [Triangle; CUBE_TRIANGLES] {
    let Vec3 { x, y, z } = center;
    make_cube(&[
        Vec3::new(x - 0.5, y + 0.5, z + 0.5),
        Vec3::new(x + 0.5, y + 0.5, z + 0.5),
        Vec3::new(x - 0.5, y - 0.5, z + 0.5),
        Vec3::new(x + 0.5, y - 0.5, z + 0.5),
        Vec3::new(x - 0.5, y + 0.5, z - 0.5),
        Vec3::new(x + 0.5, y + 0.5, z - 0.5),
        Vec3::new(x - 0.5, y - 0.5, z - 0.5),
        Vec3::new(x + 0.5, y - 0.5, z - 0.5),
    ])
}

/// A named list of triangles.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    name: String,
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    pub fn cube(center: Vec3) -> Self {
        Self::new("cube", cube_at(center).to_vec())
    }

    /// Loads every object in an OBJ file into one mesh.
    ///
    /// OBJ faces are counter-clockwise seen from outside, so their winding is flipped.
    /// Faces with more than three vertices are triangulated on load.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).map_err(|source| LoadError::Obj {
                path: path.to_path_buf(),
                source,
            })?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let position = |i: u32| {
                let i = i as usize * 3;
                Vec3::new(mesh.positions[i], mesh.positions[i + 1], mesh.positions[i + 2])
            };
            let texcoord = |i: u32| {
                let i = i as usize * 2;
                match (mesh.texcoords.get(i), mesh.texcoords.get(i + 1)) {
                    // OBJ texture V runs bottom-up.
                    (Some(&u), Some(&v)) => Vec2::new(u, 1.0 - v),
                    _ => Vec2::ZERO,
                }
            };

            for face in mesh.indices.chunks_exact(3) {
                let indices = [face[0], face[1], face[2]];
                let triangle = Triangle::with_uvs(indices.map(position), indices.map(texcoord));
                triangles.push(triangle.flipped());
            }
        }

        if triangles.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let name = models
            .first()
            .map(|m| m.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("loaded {} triangles from {}", triangles.len(), path.display());

        Ok(Self { name, triangles })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.triangles.iter().flat_map(|t| t.points);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }
}
