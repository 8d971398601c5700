use crate::mesh::Mesh;
use std::collections::BTreeMap;
use tumble_common::ObjectId;

/// Ownership container for renderable objects.
///
/// Uses BTreeMap so traversal order is deterministic for a given set of ids.
/// The scene owns its meshes for its whole lifetime; callers hold ids.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: BTreeMap<ObjectId, Mesh>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Take ownership of a mesh. Returns its id.
    pub fn add(&mut self, mesh: Mesh) -> ObjectId {
        let id = ObjectId::new();
        self.objects.insert(id, mesh);
        tracing::debug!(id = %id.short(), material = %mesh.material, "mesh added to scene");
        id
    }

    /// Remove an object. Returns the mesh if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<Mesh> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Mesh> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Mesh> {
        self.objects.get_mut(&id)
    }

    /// Read-only traversal in id order.
    pub fn objects(&self) -> impl Iterator<Item = (&ObjectId, &Mesh)> {
        self.objects.iter()
    }
}
