//! Orbit camera around the liquid surface, with cursor picking.

use glam::{Mat4, Vec2, Vec3};

use crate::params::{OrbitCamera, RenderConfig};

/// World-space ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Camera system framing a surface centred at the world origin
///
/// The surface mesh lives in local space spanning `[0, extent.x] x [0, extent.y]`
/// on XZ; the model matrix moves its centre to the origin.
pub struct CameraSystem {
    params: OrbitCamera,
    extent: Vec2,
    rest_y: f32,
}

impl CameraSystem {
    /// Create camera for a surface of given local extent and rest elevation
    pub fn new(params: OrbitCamera, extent: Vec2, rest_y: f32) -> Self {
        Self {
            params,
            extent,
            rest_y,
        }
    }

    /// Local surface space to world space
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.extent.x * 0.5, 0.0, -self.extent.y * 0.5))
    }

    /// Eye position and look-at target
    pub fn eye_and_target(&self) -> (Vec3, Vec3) {
        let target = Vec3::new(0.0, self.rest_y, 0.0);
        let distance = self.params.distance_factor * self.extent.max_element().max(1.0);
        let pitch = self.params.pitch_degrees.to_radians();
        let yaw = self.params.yaw_degrees.to_radians();

        let offset = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        ) * distance;

        (target + offset, target)
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, render_config: &RenderConfig) -> Mat4 {
        let (eye, target) = self.eye_and_target();
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );
        proj * view
    }

    /// Unproject a cursor position (pixels, origin top-left) into a world ray
    pub fn screen_ray(&self, cursor: Vec2, render_config: &RenderConfig) -> Ray {
        let viewport = Vec2::new(
            render_config.window_width.max(1) as f32,
            render_config.window_height.max(1) as f32,
        );
        let ndc = Vec2::new(
            2.0 * cursor.x / viewport.x - 1.0,
            1.0 - 2.0 * cursor.y / viewport.y,
        );

        let inv_view_proj = self.view_proj(render_config).inverse();
        let near = inv_view_proj.project_point3(ndc.extend(0.0));
        let far = inv_view_proj.project_point3(ndc.extend(1.0));

        Ray {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Hit point of the cursor on the rest plane, in surface-local space
    ///
    /// Returns `None` when the ray misses the plane or lands more than
    /// `margin` local units outside the surface.
    pub fn pick_local(
        &self,
        cursor: Vec2,
        render_config: &RenderConfig,
        margin: f32,
    ) -> Option<Vec3> {
        let ray = self.screen_ray(cursor, render_config);
        if ray.direction.y.abs() < 1e-6 {
            return None;
        }

        let t = (self.rest_y - ray.origin.y) / ray.direction.y;
        if t < 0.0 {
            return None;
        }

        let world = ray.origin + ray.direction * t;
        let local = self.model_matrix().inverse().transform_point3(world);

        let inside_x = (-margin..=self.extent.x + margin).contains(&local.x);
        let inside_z = (-margin..=self.extent.y + margin).contains(&local.z);
        (inside_x && inside_z).then_some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraSystem {
        CameraSystem::new(OrbitCamera::default(), Vec2::new(63.0, 63.0), 0.0)
    }

    #[test]
    fn test_eye_above_surface() {
        let (eye, target) = camera().eye_and_target();
        assert!(eye.y > target.y);
        assert!(eye.is_finite());
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let view_proj = camera().view_proj(&RenderConfig::default());
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(view_proj.is_finite());
    }

    #[test]
    fn test_screen_centre_picks_surface_centre() {
        let config = RenderConfig::default();
        let centre = Vec2::new(
            config.window_width as f32 / 2.0,
            config.window_height as f32 / 2.0,
        );
        let local = camera().pick_local(centre, &config, 0.0).unwrap();

        assert!((local.x - 31.5).abs() < 1e-2);
        assert!((local.z - 31.5).abs() < 1e-2);
        assert!(local.y.abs() < 1e-3);
    }

    #[test]
    fn test_top_corner_misses_surface() {
        let config = RenderConfig::default();
        assert!(camera().pick_local(Vec2::ZERO, &config, 1.0).is_none());
    }

    #[test]
    fn test_model_matrix_centres_surface() {
        let model = camera().model_matrix();
        let centre = model.transform_point3(Vec3::new(31.5, 0.0, 31.5));
        assert!(centre.length() < 1e-5);
    }
}
