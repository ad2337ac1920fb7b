/// Pure mapping from animation progress to a frame's draw list.

use crate::core::config;

/// Ripple travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ExpandOutward,
    ContractInward,
}

/// One filled ripple circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleDraw {
    pub radius: f64,
    pub alpha: u8,
}

/// Draw list for one frame: ripple circles in paint order, plus the scan
/// overlay angle while the scan phase is active. The center bitmap is drawn
/// last by the consumer, unconditionally and fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawFrame {
    pub ripples: Vec<RippleDraw>,
    pub scan_angle: Option<u32>,
}

/// Cycle position of ripple `index`, phase-shifted from the shared progress.
pub fn local_progress(progress: u32, index: u32, ripple_count: u32, mode: Mode) -> u32 {
    let mut local = (progress + index * 100 / ripple_count) % 100;
    if mode == Mode::ContractInward {
        local = 100 - local;
    }
    local
}

/// Compute the draw list for one frame. Pure: identical inputs always
/// produce an identical frame.
pub fn compute_frame(
    progress: u32,
    ripple_count: u32,
    mode: Mode,
    scanning: bool,
    rotate_degree: u32,
    max_radius: f64,
) -> DrawFrame {
    let mut ripples = Vec::with_capacity(ripple_count as usize);
    for i in 0..ripple_count {
        let local = local_progress(progress, i, ripple_count, mode);
        let alpha = (config::ALPHA_OPAQUE - config::ALPHA_OPAQUE * local as i32 / 100
            - config::ALPHA_FADE)
            .max(config::ALPHA_FLOOR) as u8;
        ripples.push(RippleDraw {
            radius: max_radius * local as f64 / 100.0,
            alpha,
        });
    }

    DrawFrame {
        ripples,
        scan_angle: scanning.then_some(rotate_degree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_ripples_at_zero_progress() {
        let frame = compute_frame(0, 4, Mode::ExpandOutward, false, 0, 100.0);
        let radii: Vec<f64> = frame.ripples.iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![0.0, 25.0, 50.0, 75.0]);
        assert!(frame.scan_angle.is_none());
    }

    #[test]
    fn test_alpha_stays_above_floor() {
        for count in 1..=8 {
            for progress in 0..100 {
                for mode in [Mode::ExpandOutward, Mode::ContractInward] {
                    let frame = compute_frame(progress, count, mode, false, 0, 450.0);
                    for ripple in &frame.ripples {
                        assert!(
                            ripple.alpha >= 10,
                            "alpha {} below floor at progress {} count {}",
                            ripple.alpha,
                            progress,
                            count
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pure_and_idempotent() {
        let a = compute_frame(42, 4, Mode::ExpandOutward, true, 137, 450.0);
        let b = compute_frame(42, 4, Mode::ExpandOutward, true, 137, 450.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_inversion() {
        // Expand radius at progress p equals contract radius at 100-p
        for count in [1, 2, 4, 5] {
            for p in 1..100 {
                let out = compute_frame(p, count, Mode::ExpandOutward, false, 0, 100.0);
                let inv = compute_frame(100 - p, count, Mode::ContractInward, false, 0, 100.0);
                assert_eq!(out.ripples[0].radius, inv.ripples[0].radius);
            }
        }
    }

    #[test]
    fn test_contract_inverts_direction() {
        let out = compute_frame(10, 1, Mode::ExpandOutward, false, 0, 100.0);
        let inv = compute_frame(10, 1, Mode::ContractInward, false, 0, 100.0);
        assert_eq!(out.ripples[0].radius, 10.0);
        assert_eq!(inv.ripples[0].radius, 90.0);
    }

    #[test]
    fn test_scan_angle_gated() {
        let hidden = compute_frame(50, 4, Mode::ExpandOutward, false, 90, 100.0);
        assert!(hidden.scan_angle.is_none());

        let shown = compute_frame(50, 4, Mode::ExpandOutward, true, 90, 100.0);
        assert_eq!(shown.scan_angle, Some(90));
    }

    #[test]
    fn test_local_progress_cycles_once_per_100_ticks() {
        let mut seen = [false; 100];
        for tick in 0..100 {
            let local = local_progress(tick, 0, 4, Mode::ExpandOutward);
            assert!(!seen[local as usize], "local progress {} repeated", local);
            seen[local as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
