use wgpu::Device;

use crate::gfx::{
    camera::camera_utils::CameraManager,
    geometry::{self, GeometryData},
    resources::material::{Material, MaterialManager},
    scene::object::Mesh,
};

use super::object::Object;

/// Main scene containing objects, materials, and camera
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    /// Creates a new scene with the given camera manager
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Updates the scene (camera matrices, etc.)
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Adds an object built from procedural geometry.
    ///
    /// # Returns
    /// Index of the new object, usable as a stable handle since objects
    /// are never removed.
    pub fn add_geometry(&mut self, name: &str, geometry: &GeometryData, material_id: &str) -> usize {
        let mut object = Object::new(name, Mesh::from_geometry(geometry));
        object.set_material(material_id);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Adds a unit sphere scaled at draw time via the object transform
    pub fn add_sphere(&mut self, name: &str, segments: u32, material_id: &str) -> usize {
        let sphere = geometry::generate_sphere(segments, segments / 2);
        self.add_geometry(name, &sphere, material_id)
    }

    /// Adds a flat ring in the orbit plane
    pub fn add_ring(
        &mut self,
        name: &str,
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
        material_id: &str,
    ) -> usize {
        let ring = geometry::generate_ring(inner_radius, outer_radius, segments);
        self.add_geometry(name, &ring, material_id)
    }

    /// Adds an inward-facing sphere used as the star-field background
    pub fn add_sky_sphere(&mut self, name: &str, segments: u32, material_id: &str) -> usize {
        let sky = geometry::generate_sphere(segments, segments / 2).flip_winding();
        self.add_geometry(name, &sky, material_id)
    }

    /// Registers a material in the material library
    pub fn add_material(&mut self, material: Material) {
        self.material_manager.add_material(material);
    }

    /// Initializes GPU resources for all objects and materials
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material_manager.init_all_gpu_resources(device, queue);
    }

    /// Syncs all object transforms to the GPU
    pub fn update_all_transforms(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            if object.gpu_resources.is_some() {
                object.update_transform(queue);
            }
        }
    }

    /// Gets material for rendering an object
    ///
    /// Returns the material assigned to the object, or the default material
    /// if no material is assigned or the assigned material doesn't exist.
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets immutable reference to an object by index
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Gets mutable reference to an object by index
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }
}
