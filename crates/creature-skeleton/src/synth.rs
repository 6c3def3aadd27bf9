//! Skeleton synthesis from a phenotype: head, spine chain, then limbs.

use creature_dna::{
    GenerationParams, Modifiers, Phenotype, TraitId, apply_trait_modifiers, resolve_dna,
};
use glam::Vec3;

use crate::segment::{Segment, SegmentKind, Side};
use crate::skeleton::Skeleton;

/// Head anchor: the head runs from here straight up.
pub const HEAD_START: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const HEAD_END: Vec3 = Vec3::new(0.0, 2.5, 0.0);
pub const HEAD_RADIUS: f32 = 0.4;

/// Vertical drop covered by the whole spine path.
pub const SPINE_DROP: f32 = 1.5;
/// Height of each spine segment's start above its end.
pub const SPINE_SEGMENT_LENGTH: f32 = 0.5;
pub const SPINE_RADIUS: f32 = 0.3;
/// Fraction of the spine radius lost by the tail end of the chain.
pub const SPINE_TAPER: f32 = 0.5;

/// Number of leading limbs that are legs; the rest are arms.
pub const LEG_PAIR_COUNT: u32 = 2;
pub const LEG_BASE_Y: f32 = 0.5;
pub const ARM_BASE_Y: f32 = 1.5;
pub const LIMB_ROOT_OFFSET_X: f32 = 0.6;
pub const LIMB_TIP_OFFSET_X: f32 = 0.8;
pub const LIMB_LENGTH: f32 = 0.8;
pub const LIMB_RADIUS: f32 = 0.2;

/// Everything resolved for one skeleton build.
#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonBlueprint {
    pub phenotype: Phenotype,
    pub modifiers: Modifiers,
    pub skeleton: Skeleton,
}

/// Builds the skeleton for `(params.seed, traits)`.
///
/// Deterministic: the same inputs always produce an identical skeleton.
pub fn generate_skeleton(params: &GenerationParams, traits: &[TraitId]) -> Skeleton {
    generate_blueprint(params, traits).skeleton
}

/// Like [`generate_skeleton`], also returning the resolved phenotype and modifiers.
pub fn generate_blueprint(params: &GenerationParams, traits: &[TraitId]) -> SkeletonBlueprint {
    let phenotype = resolve_dna(params, traits);
    let modifiers = apply_trait_modifiers(traits);
    let skeleton = build(&phenotype, &modifiers);

    tracing::info!(
        seed = params.seed,
        segments = skeleton.len(),
        "skeleton generated"
    );

    SkeletonBlueprint {
        phenotype,
        modifiers,
        skeleton,
    }
}

fn build(dna: &Phenotype, m: &Modifiers) -> Skeleton {
    let scale = m.scale as f32;
    let muscle = m.muscle as f32;
    let limb_len = m.limb_len as f32;

    let mut skeleton = Skeleton::new();
    let head = skeleton.push(Segment::new(
        "head",
        HEAD_START,
        HEAD_END,
        HEAD_RADIUS * scale,
        SegmentKind::Head,
        None,
    ));

    let spine_count = scaled_count(dna.spine_count, m.scale);
    let mut prev = head;
    let mut first_spine = None;
    for i in 0..spine_count {
        let t = i as f32 / spine_count as f32;
        let top = HEAD_START.y - t * SPINE_DROP;
        let start = Vec3::new(0.0, top, 0.0);
        let end = Vec3::new(0.0, top - SPINE_SEGMENT_LENGTH, 0.0);
        let radius = SPINE_RADIUS * (1.0 - t * SPINE_TAPER) * muscle;
        prev = skeleton.push(
            Segment::new(
                format!("spine_{i}"),
                start,
                end,
                radius,
                SegmentKind::Spine,
                Some(prev),
            )
            .with_chain_index(i),
        );
        first_spine.get_or_insert(prev);
    }

    // Limbs hang off the first spine segment, or the head for a spineless body.
    let limb_anchor = first_spine.unwrap_or(head);
    let limb_count = scaled_count(dna.limb_count, m.scale);
    for i in 0..limb_count {
        let is_leg = i < LEG_PAIR_COUNT;
        let side = if i % 2 == 0 { Side::Right } else { Side::Left };
        let sx = side.sign();
        let base_y = if is_leg { LEG_BASE_Y } else { ARM_BASE_Y };
        let (kind, prefix) = if is_leg {
            (SegmentKind::Leg, "leg")
        } else {
            (SegmentKind::Arm, "arm")
        };
        skeleton.push(
            Segment::new(
                format!("{prefix}_{}", side.label()),
                Vec3::new(sx * LIMB_ROOT_OFFSET_X, base_y, 0.0),
                Vec3::new(sx * LIMB_TIP_OFFSET_X, base_y - LIMB_LENGTH * limb_len, 0.0),
                LIMB_RADIUS * muscle,
                kind,
                Some(limb_anchor),
            )
            .with_side(side),
        );
    }

    tracing::debug!(spine_count, limb_count, "skeleton layout");
    skeleton
}

/// `floor(count * scale)`, never negative.
fn scaled_count(count: u32, scale: f64) -> u32 {
    let n = (count as f64 * scale).floor();
    if n.is_finite() && n > 0.0 { n as u32 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: i64) -> GenerationParams {
        GenerationParams {
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic_for_seed_123() {
        let first = generate_skeleton(&params(123), &[]);
        for _ in 0..100 {
            let again = generate_skeleton(&params(123), &[]);
            assert_eq!(again.len(), first.len());
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_segment_count_matches_phenotype() {
        let bp = generate_blueprint(&params(123), &[]);
        let expected = 1 + bp.phenotype.spine_count + bp.phenotype.limb_count;
        assert_eq!(bp.skeleton.len(), expected as usize);
    }

    #[test]
    fn test_tree_invariant_across_seeds() {
        let trait_sets: [&[TraitId]; 4] = [
            &[],
            &[TraitId::Clone],
            &[TraitId::Haste, TraitId::Clone],
            &[TraitId::Devour, TraitId::Berserk],
        ];
        for seed in 0..100 {
            for traits in trait_sets {
                let sk = generate_skeleton(&params(seed), traits);
                assert!(sk.validate().is_ok(), "seed {seed} traits {traits:?}");
                let roots = sk.iter().filter(|s| s.parent.is_none()).count();
                assert_eq!(roots, 1);
                for i in 0..sk.len() {
                    assert!(sk.depth(i).is_some());
                }
            }
        }
    }

    #[test]
    fn test_head_is_root() {
        let sk = generate_skeleton(&params(1), &[]);
        let head = &sk[0];
        assert_eq!(head.kind, SegmentKind::Head);
        assert_eq!(head.parent, None);
        assert_eq!(head.radius, HEAD_RADIUS);
        assert_eq!(head.start, HEAD_START);
    }

    #[test]
    fn test_spine_chain_links_and_tapers() {
        let sk = generate_skeleton(&params(42), &[]);
        let spine: Vec<_> = sk.iter().filter(|s| s.kind == SegmentKind::Spine).collect();
        assert!(!spine.is_empty());
        assert_eq!(spine[0].parent, Some(0));
        for pair in spine.windows(2) {
            assert_eq!(pair[1].parent, Some(pair[0].id));
            assert_eq!(pair[1].chain_index, pair[0].chain_index + 1);
            assert!(pair[1].radius < pair[0].radius);
        }
        assert!(spine.last().unwrap().radius >= SPINE_RADIUS * (1.0 - SPINE_TAPER));
    }

    #[test]
    fn test_limbs_attach_to_first_spine() {
        let sk = generate_skeleton(&params(42), &[]);
        for limb in sk.iter().filter(|s| s.kind.is_limb()) {
            assert_eq!(limb.parent, Some(1));
            assert_ne!(limb.side, Side::Center);
        }
    }

    #[test]
    fn test_first_two_limbs_are_legs() {
        let sk = generate_skeleton(&params(42), &[]);
        let limbs: Vec<_> = sk.iter().filter(|s| s.kind.is_limb()).collect();
        for (i, limb) in limbs.iter().enumerate() {
            let expected = if i < 2 { SegmentKind::Leg } else { SegmentKind::Arm };
            assert_eq!(limb.kind, expected);
            let side = if i % 2 == 0 { Side::Right } else { Side::Left };
            assert_eq!(limb.side, side);
        }
    }

    #[test]
    fn test_limb_length_follows_modifier() {
        let base = generate_skeleton(&params(7), &[]);
        let jump = generate_skeleton(&params(7), &[TraitId::Jump]);
        let leg = |sk: &Skeleton| sk.iter().find(|s| s.kind == SegmentKind::Leg).map(|s| s.length());
        if let (Some(a), Some(b)) = (leg(&base), leg(&jump)) {
            assert!(b > a);
        }
    }

    #[test]
    fn test_small_scale_can_drop_groups() {
        // Clone scales counts by 0.6; Haste by 0.7 on top.
        for seed in 0..50 {
            let sk = generate_skeleton(&params(seed), &[TraitId::Clone, TraitId::Haste]);
            assert!(sk.validate().is_ok());
            assert_eq!(sk[0].kind, SegmentKind::Head);
        }
    }

    #[test]
    fn test_spineless_limbs_fall_back_to_head() {
        let dna = resolve_dna(&params(3), &[]);
        let dna = Phenotype {
            spine_count: 0,
            limb_count: 2,
            ..dna
        };
        let sk = build(&dna, &Modifiers::default());
        assert_eq!(sk.len(), 3);
        assert_eq!(sk[1].parent, Some(0));
        assert_eq!(sk[2].parent, Some(0));
        assert!(sk.validate().is_ok());
    }

    #[test]
    fn test_scaled_count() {
        assert_eq!(scaled_count(5, 0.42), 2);
        assert_eq!(scaled_count(3, 0.3), 0);
        assert_eq!(scaled_count(4, f64::NAN), 0);
    }
}
