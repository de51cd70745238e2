//! The preview character: ten textured boxes
//!
//! Units are texels, so a 4-texel-wide face is 4 units wide. The torso is
//! centered on the origin and +z faces the default camera.

use macroquad::math::Vec3;

use super::atlas;
use super::geometry::BoxMesh;
use super::uv::UvAtlas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x offset. The character's right is +x.
    fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Head,
    Torso,
    UpperArm(Side),
    LowerArm(Side),
    UpperLeg(Side),
    LowerLeg(Side),
}

impl PartKind {
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::Head => "head",
            PartKind::Torso => "torso",
            PartKind::UpperArm(Side::Left) => "upper left arm",
            PartKind::UpperArm(Side::Right) => "upper right arm",
            PartKind::LowerArm(Side::Left) => "lower left arm",
            PartKind::LowerArm(Side::Right) => "lower right arm",
            PartKind::UpperLeg(Side::Left) => "upper left leg",
            PartKind::UpperLeg(Side::Right) => "upper right leg",
            PartKind::LowerLeg(Side::Left) => "lower left leg",
            PartKind::LowerLeg(Side::Right) => "lower right leg",
        }
    }
}

/// One box of the character
#[derive(Debug, Clone)]
pub struct BodyPart {
    pub kind: PartKind,
    /// Width, height, depth
    pub size: Vec3,
    /// Center, in model space
    pub position: Vec3,
    pub atlas: UvAtlas,
}

impl BodyPart {
    fn new(kind: PartKind, size: (f32, f32, f32), position: (f32, f32, f32), atlas: UvAtlas) -> Self {
        Self {
            kind,
            size: Vec3::new(size.0, size.1, size.2),
            position: Vec3::new(position.0, position.1, position.2),
            atlas,
        }
    }

    /// Box mesh centered at the origin with this part's atlas applied
    pub fn mesh(&self) -> BoxMesh {
        let mut mesh = BoxMesh::new(self.size.x, self.size.y, self.size.z);
        mesh.apply_atlas(&self.atlas);
        mesh
    }

    pub fn min(&self) -> Vec3 {
        self.position - self.size * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.position + self.size * 0.5
    }
}

/// Head, torso, and two-segment arms and legs
pub fn humanoid() -> Vec<BodyPart> {
    let mut parts = vec![
        BodyPart::new(PartKind::Head, (8.0, 10.0, 8.0), (0.0, 14.0, 0.0), atlas::head_atlas()),
        BodyPart::new(PartKind::Torso, (12.0, 18.0, 4.0), (0.0, 0.0, 0.0), atlas::torso_atlas()),
    ];
    for side in [Side::Right, Side::Left] {
        let s = side.sign();
        parts.push(BodyPart::new(PartKind::UpperArm(side), (6.0, 8.0, 4.0), (9.0 * s, 5.0, 0.0), atlas::upper_arm_atlas()));
        parts.push(BodyPart::new(PartKind::LowerArm(side), (4.0, 10.0, 4.0), (9.0 * s, -4.0, 0.0), atlas::lower_arm_atlas()));
        parts.push(BodyPart::new(PartKind::UpperLeg(side), (6.0, 8.0, 4.0), (3.0 * s, -13.0, 0.0), atlas::upper_leg_atlas()));
        parts.push(BodyPart::new(PartKind::LowerLeg(side), (4.0, 12.0, 4.0), (3.0 * s, -23.0, 0.0), atlas::lower_leg_atlas()));
    }
    parts
}

/// Axis-aligned bounds of a set of parts
pub fn bounds(parts: &[BodyPart]) -> (Vec3, Vec3) {
    parts.iter().fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
        (lo.min(p.min()), hi.max(p.max()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn part(parts: &[BodyPart], kind: PartKind) -> &BodyPart {
        parts.iter().find(|p| p.kind == kind).unwrap()
    }

    #[test]
    fn test_ten_distinct_parts() {
        let parts = humanoid();
        assert_eq!(parts.len(), 10);
        let names: HashSet<_> = parts.iter().map(|p| p.kind.name()).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_every_part_is_textured() {
        for p in humanoid() {
            let mesh = p.mesh();
            assert_eq!(mesh.uvs.len(), 24, "{}", p.kind.name());
            assert!(mesh
                .uvs
                .iter()
                .all(|[u, v]| (0.0..=1.0).contains(u) && (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_parts_stack_without_gaps() {
        let parts = humanoid();
        let head = part(&parts, PartKind::Head);
        let torso = part(&parts, PartKind::Torso);
        assert_eq!(head.min().y, torso.max().y);

        for side in [Side::Left, Side::Right] {
            let upper = part(&parts, PartKind::UpperArm(side));
            let lower = part(&parts, PartKind::LowerArm(side));
            assert_eq!(upper.min().y, lower.max().y);
            assert_eq!(upper.max().y, torso.max().y);

            let thigh = part(&parts, PartKind::UpperLeg(side));
            let shin = part(&parts, PartKind::LowerLeg(side));
            assert_eq!(thigh.max().y, torso.min().y);
            assert_eq!(thigh.min().y, shin.max().y);
        }
    }

    #[test]
    fn test_limbs_are_mirrored() {
        let parts = humanoid();
        let right = part(&parts, PartKind::UpperArm(Side::Right));
        let left = part(&parts, PartKind::UpperArm(Side::Left));
        assert_eq!(right.position.x, -left.position.x);
        assert!(right.position.x > 0.0);
        assert_eq!(right.atlas, left.atlas);
    }

    #[test]
    fn test_bounds() {
        let (lo, hi) = bounds(&humanoid());
        assert_eq!(hi.y, 19.0);
        assert_eq!(lo.y, -29.0);
        assert_eq!(hi.x, 12.0);
        assert_eq!(lo.x, -12.0);
    }
}
