use crate::types::version::Version;

/// Highest value a component holds before it carries into the next one.
pub const COMPONENT_CAP: u64 = 9;

/// Advances `current` by one step of the capped base-10 counter.
///
/// Patch is incremented and carries into minor once it passes the cap.
/// Minor is then checked on its own, whichever branch ran, and carries
/// into major. Major is unbounded.
pub fn compute_bump(current: Version) -> Version {
    let Version {
        mut major,
        mut minor,
        mut patch,
    } = current;

    patch = patch.saturating_add(1);
    if patch > COMPONENT_CAP {
        patch = 0;
        minor = minor.saturating_add(1);
    }

    if minor > COMPONENT_CAP {
        minor = 0;
        major = major.saturating_add(1);
    }

    Version::new(major, minor, patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_below_cap_is_incremented() {
        for major in [0, 1, 42] {
            for minor in 0..=9 {
                for patch in 0..9 {
                    assert_eq!(
                        compute_bump(Version::new(major, minor, patch)),
                        Version::new(major, minor, patch + 1)
                    );
                }
            }
        }
    }

    #[test]
    fn patch_at_cap_carries_into_minor() {
        for minor in 0..9 {
            assert_eq!(
                compute_bump(Version::new(3, minor, 9)),
                Version::new(3, minor + 1, 0)
            );
        }
    }

    #[test]
    fn patch_and_minor_at_cap_carry_into_major() {
        assert_eq!(compute_bump(Version::new(2, 9, 9)), Version::new(3, 0, 0));
        assert_eq!(compute_bump(Version::new(0, 9, 9)), Version::new(1, 0, 0));
    }

    #[test]
    fn freshly_carried_minor_of_nine_stays() {
        assert_eq!(compute_bump(Version::new(5, 8, 9)), Version::new(5, 9, 0));
    }

    #[test]
    fn out_of_range_components_are_folded_back() {
        assert_eq!(compute_bump(Version::new(1, 2, 10)), Version::new(1, 3, 0));
        assert_eq!(compute_bump(Version::new(1, 12, 3)), Version::new(2, 0, 4));
    }

    #[test]
    fn consecutive_bumps_advance_one_step_each() {
        let start = Version::new(1, 2, 8);
        let first = compute_bump(start);
        let second = compute_bump(first);
        assert_ne!(first, second);
        assert_eq!(first, Version::new(1, 2, 9));
        assert_eq!(second, Version::new(1, 3, 0));
    }
}
