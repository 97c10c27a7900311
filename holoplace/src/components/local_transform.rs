use glam::{Affine3A, EulerRot, Quat, Vec3};

/// The component's position relative to its [`super::Parent`].
///
/// If the entity doesn't have a [`super::Parent`], then the global transform is just whatever
/// you've set here. The anchor pose is stored this way too: the anchor has no parent, so its
/// `LocalTransform` is its place in the world.
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// A transform that only translates
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Uniform scale and an XYZ euler rotation in radians, as used for the hologram mesh
    pub fn from_scale_euler(scale: f32, euler: Vec3) -> Self {
        Self {
            scale: Vec3::splat(scale),
            rotation: Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z),
            ..Default::default()
        }
    }

    /// Convenience function to convert the `LocalTransform` into an affine matrix
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the scale, rotation and translation from an affine matrix
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    pub fn test_affine_round_trip() {
        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(-1.6),
            Vec3::new(0.0, -1.5, -6.0),
        );
        let mut local_transform = LocalTransform::default();
        local_transform.update_from_affine(&transform);
        assert_relative_eq!(local_transform.to_affine(), transform, epsilon = 1e-5);
    }

    #[test]
    pub fn test_from_scale_euler() {
        let local_transform = LocalTransform::from_scale_euler(2.0, Vec3::new(0.0, -1.6, 0.0));
        assert_eq!(local_transform.scale, Vec3::splat(2.0));
        assert_relative_eq!(
            local_transform.rotation,
            Quat::from_rotation_y(-1.6),
            epsilon = 1e-6
        );
        assert_eq!(local_transform.translation, Vec3::ZERO);
    }
}
