use bytemuck::{Pod, Zeroable};
use std::io::BufRead;
use std::path::Path;
use wgpu::util::DeviceExt;

/// Errors from loading the ship mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("failed to load OBJ {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("OBJ {0} contains no geometry")]
    Empty(String),
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side mesh geometry parsed from an OBJ resource.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

impl MeshData {
    /// Load geometry from an OBJ file on disk. Called once at startup;
    /// a failure here aborts before the event loop runs.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &load_options()).map_err(|source| MeshError::Load {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_models(models, &path.display().to_string())
    }

    /// Parse OBJ text from an in-memory reader. Material libraries are not
    /// resolved; the shading pass carries its own material.
    pub fn from_reader(reader: &mut impl BufRead, name: &str) -> Result<Self, MeshError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Ok(Default::default())
        })
        .map_err(|source| MeshError::Load {
            path: name.to_string(),
            source,
        })?;
        Self::from_models(models, name)
    }

    fn from_models(models: Vec<tobj::Model>, name: &str) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;
            let has_normals = mesh.normals.len() == mesh.positions.len();
            for (i, xyz) in mesh.positions.chunks_exact(3).enumerate() {
                let normal = if has_normals {
                    [
                        mesh.normals[i * 3],
                        mesh.normals[i * 3 + 1],
                        mesh.normals[i * 3 + 2],
                    ]
                } else {
                    // OBJ files without normals get a constant up normal.
                    [0.0, 1.0, 0.0]
                };
                vertices.push(MeshVertex {
                    position: [xyz[0], xyz[1], xyz[2]],
                    normal,
                });
            }
            indices.extend(mesh.indices.iter().map(|i| base + i));
        }

        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::Empty(name.to_string()));
        }

        tracing::info!(
            vertices = vertices.len(),
            indices = indices.len(),
            "loaded mesh {name}"
        );
        Ok(Self { vertices, indices })
    }
}

/// GPU buffers for the ship hull, uploaded once at startup.
pub struct ShipMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl ShipMesh {
    pub fn upload(device: &wgpu::Device, data: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ship_vertex_buffer"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ship_index_buffer"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TRIANGLE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";

    const QUAD_NO_NORMALS_OBJ: &str = "\
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.0
v -1.0 1.0 0.0
f 1 2 3 4
";

    #[test]
    fn parses_triangle_with_normals() {
        let mut reader = Cursor::new(TRIANGLE_OBJ);
        let data = MeshData::from_reader(&mut reader, "triangle").unwrap();
        assert_eq!(data.vertices.len(), 3);
        assert_eq!(data.indices.len(), 3);
        assert_eq!(data.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn quad_is_triangulated_and_gets_fallback_normals() {
        let mut reader = Cursor::new(QUAD_NO_NORMALS_OBJ);
        let data = MeshData::from_reader(&mut reader, "quad").unwrap();
        // Two triangles from one quad face.
        assert_eq!(data.indices.len(), 6);
        assert!(data.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn empty_obj_is_rejected() {
        let mut reader = Cursor::new("# nothing here\n");
        let err = MeshData::from_reader(&mut reader, "empty").unwrap_err();
        assert!(matches!(err, MeshError::Empty(_)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = MeshData::from_obj("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, MeshError::Load { .. }));
    }

    #[test]
    fn vertex_layout_stride_matches_struct() {
        let layout = MeshVertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
    }
}
