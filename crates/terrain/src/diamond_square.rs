//! Diamond-square height field generation.
//!
//! Fills a `(2^k + 1)` square grid from four pinned corners by repeatedly
//! halving the working span. Each halving runs a diamond pass (square
//! centres from their four diagonal corners) and then a square pass (edge
//! midpoints from their axis neighbours), adding a random displacement
//! proportional to the span. The displacement coefficient is multiplied by
//! `random_decay` after every halving, so coarse passes shape the landform
//! and later passes only add small-scale roughness.

use bevy::prelude::*;

use crate::height_grid::HeightGrid;
use crate::terrain_config::TerrainConfig;
use crate::terrain_error::TerrainError;
use crate::terrain_rng::TerrainRng;

/// Generate a height grid, drawing displacement from `rng`.
///
/// Fails only if the config's sizes are invalid; see
/// `TerrainConfig::validated`.
pub fn generate(config: &TerrainConfig, rng: &mut TerrainRng) -> Result<HeightGrid, TerrainError> {
    let config = config.validated()?;
    let size = config.grid_size();
    let cell_spacing = config.cell_spacing(size);

    let mut grid = HeightGrid::unassigned(size);
    let last = size - 1;
    let corners = config.corners;
    grid.set(0, 0, corners.top_left);
    grid.set(0, last, corners.top_right);
    grid.set(last, 0, corners.bottom_left);
    grid.set(last, last, corners.bottom_right);

    let amplitude = config.base_random_amplitude;
    let diagonal_scale = std::f32::consts::SQRT_2 * cell_spacing;
    let mut span = last;
    let mut coeff = config.random_coefficient;

    while span > 1 {
        let mid = span / 2;
        diamond_pass(&mut grid, span, |span_len| {
            rng.signed_unit() * amplitude * diagonal_scale * span_len * coeff
        });
        square_pass(&mut grid, span, |span_len| {
            rng.signed_unit() * amplitude * span_len * coeff
        });
        span = mid;
        coeff *= config.random_decay;
    }

    debug!(
        "diamond_square: generated {}x{} grid (seed {}, cell spacing {})",
        size, size, config.seed, cell_spacing
    );
    Ok(grid)
}

/// Generate with a fresh RNG seeded from `config.seed`.
pub fn generate_seeded(config: &TerrainConfig) -> Result<HeightGrid, TerrainError> {
    let mut rng = TerrainRng::from_seed_u64(config.seed);
    generate(config, &mut rng)
}

/// Set the centre of every `span`-sided sub-square to the mean of its four
/// corners plus `displace(span)`.
fn diamond_pass(grid: &mut HeightGrid, span: usize, mut displace: impl FnMut(f32) -> f32) {
    let size = grid.size();
    let mid = span / 2;
    for i in (0..size - span).step_by(span) {
        for j in (0..size - span).step_by(span) {
            let sum = grid.get(i, j)
                + grid.get(i, j + span)
                + grid.get(i + span, j)
                + grid.get(i + span, j + span);
            let value = sum / 4.0 + displace(span as f32);
            grid.set(i + mid, j + mid, value);
        }
    }
}

/// Set every edge midpoint at spacing `span / 2` to the mean of its
/// in-bounds axis neighbours plus `displace(span)`.
///
/// Rows are visited at multiples of `mid`. On even multiples the unset cells
/// start one `mid` in; on odd multiples they start at column 0. Cells on the
/// tile border only have three neighbours and average those three.
fn square_pass(grid: &mut HeightGrid, span: usize, mut displace: impl FnMut(f32) -> f32) {
    let size = grid.size();
    let mid = span / 2;
    for (k, row) in (0..size).step_by(mid).enumerate() {
        let first_col = if k % 2 == 0 { mid } else { 0 };
        for col in (first_col..size).step_by(span) {
            let value = axis_neighbour_mean(grid, row, col, mid) + displace(span as f32);
            grid.set(row, col, value);
        }
    }
}

fn axis_neighbour_mean(grid: &HeightGrid, row: usize, col: usize, dist: usize) -> f32 {
    let size = grid.size();
    let mut sum = 0.0;
    let mut count = 0u32;
    if row >= dist {
        sum += grid.get(row - dist, col);
        count += 1;
    }
    if row + dist < size {
        sum += grid.get(row + dist, col);
        count += 1;
    }
    if col >= dist {
        sum += grid.get(row, col - dist);
        count += 1;
    }
    if col + dist < size {
        sum += grid.get(row, col + dist);
        count += 1;
    }
    sum / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain_config::CornerHeights;

    fn smooth_config(map_size: f32, corners: CornerHeights) -> TerrainConfig {
        TerrainConfig {
            map_size,
            sample_spacing: 1.0,
            random_coefficient: 0.0,
            corners,
            ..Default::default()
        }
    }

    #[test]
    fn test_corners_are_exact() {
        let corners = CornerHeights {
            top_left: 10.0,
            top_right: -4.0,
            bottom_left: 33.0,
            bottom_right: 0.5,
        };
        let cfg = TerrainConfig {
            map_size: 64.0,
            base_random_amplitude: 3.0,
            random_coefficient: 1.0,
            corners,
            ..Default::default()
        };
        let grid = generate_seeded(&cfg).unwrap();
        let last = grid.size() - 1;
        assert_eq!(grid.get(0, 0), 10.0);
        assert_eq!(grid.get(0, last), -4.0);
        assert_eq!(grid.get(last, 0), 33.0);
        assert_eq!(grid.get(last, last), 0.5);
    }

    #[test]
    fn test_every_cell_assigned_and_finite() {
        for map_size in [2.0, 5.0, 9.0, 40.0, 200.0] {
            let cfg = TerrainConfig {
                map_size,
                random_coefficient: 1.0,
                base_random_amplitude: 2.0,
                ..Default::default()
            };
            let grid = generate_seeded(&cfg).unwrap();
            assert!(
                grid.heights().iter().all(|h| h.is_finite()),
                "unassigned or non-finite cell for map_size {map_size}"
            );
        }
    }

    #[test]
    fn test_smallest_grid_by_hand() {
        let corners = CornerHeights {
            top_left: 4.0,
            top_right: 8.0,
            bottom_left: 12.0,
            bottom_right: 16.0,
        };
        let grid = generate_seeded(&smooth_config(2.0, corners)).unwrap();
        assert_eq!(grid.size(), 3);

        let centre = (4.0 + 8.0 + 12.0 + 16.0) / 4.0;
        assert_eq!(grid.get(1, 1), centre);
        // Border midpoints average two corners and the centre
        assert_eq!(grid.get(0, 1), (4.0 + 8.0 + centre) / 3.0);
        assert_eq!(grid.get(1, 0), (4.0 + 12.0 + centre) / 3.0);
        assert_eq!(grid.get(1, 2), (8.0 + 16.0 + centre) / 3.0);
        assert_eq!(grid.get(2, 1), (12.0 + 16.0 + centre) / 3.0);
    }

    #[test]
    fn test_flat_corners_zero_coefficient_is_flat() {
        let grid = generate_seeded(&smooth_config(5.0, CornerHeights::uniform(0.0))).unwrap();
        assert_eq!(grid.size(), 5);
        assert!(grid.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_uniform_corners_zero_coefficient_stay_uniform() {
        let grid = generate_seeded(&smooth_config(33.0, CornerHeights::uniform(7.25))).unwrap();
        assert!(grid.heights().iter().all(|&h| h == 7.25));
    }

    #[test]
    fn test_zero_coefficient_ignores_seed() {
        let corners = CornerHeights {
            top_left: 1.0,
            top_right: 20.0,
            bottom_left: -6.0,
            bottom_right: 3.0,
        };
        let mut a = smooth_config(17.0, corners);
        let mut b = a.clone();
        a.seed = 1;
        b.seed = 2;
        a.base_random_amplitude = 50.0;
        b.base_random_amplitude = 50.0;
        assert_eq!(generate_seeded(&a).unwrap(), generate_seeded(&b).unwrap());
    }

    #[test]
    fn test_zero_amplitude_matches_zero_coefficient() {
        let corners = CornerHeights {
            top_left: -3.0,
            top_right: 9.0,
            bottom_left: 2.0,
            bottom_right: 5.0,
        };
        let no_coeff = smooth_config(9.0, corners);
        let no_amplitude = TerrainConfig {
            random_coefficient: 0.9,
            base_random_amplitude: 0.0,
            ..no_coeff.clone()
        };
        assert_eq!(
            generate_seeded(&no_coeff).unwrap(),
            generate_seeded(&no_amplitude).unwrap()
        );
    }

    #[test]
    fn test_zero_decay_only_perturbs_first_pass() {
        // With decay 0 only the first (span = 4) diamond and square passes are
        // displaced; the second pass is pure averaging of those results.
        let cfg = TerrainConfig {
            map_size: 5.0,
            base_random_amplitude: 1.0,
            random_coefficient: 1.0,
            random_decay: 0.0,
            ..Default::default()
        };
        let grid = generate_seeded(&cfg).unwrap();
        let expected_centre = (grid.get(0, 0)
            + grid.get(0, 2)
            + grid.get(2, 0)
            + grid.get(2, 2))
            / 4.0;
        assert_eq!(grid.get(1, 1), expected_centre);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let cfg = TerrainConfig {
            map_size: 128.0,
            seed: 9001,
            random_coefficient: 1.0,
            ..Default::default()
        };
        assert_eq!(generate_seeded(&cfg).unwrap(), generate_seeded(&cfg).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = TerrainConfig {
            map_size: 32.0,
            seed: 1,
            random_coefficient: 1.0,
            ..Default::default()
        };
        let b = TerrainConfig { seed: 2, ..a.clone() };
        assert_ne!(generate_seeded(&a).unwrap(), generate_seeded(&b).unwrap());
    }

    #[test]
    fn test_explicit_rng_matches_seeded() {
        let cfg = TerrainConfig {
            map_size: 20.0,
            seed: 5,
            ..Default::default()
        };
        let mut rng = TerrainRng::from_seed_u64(5);
        assert_eq!(generate(&cfg, &mut rng).unwrap(), generate_seeded(&cfg).unwrap());
    }

    #[test]
    fn test_invalid_map_size_fails_before_generation() {
        let cfg = TerrainConfig {
            map_size: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            generate_seeded(&cfg),
            Err(TerrainError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_axis_neighbour_mean_border_uses_three() {
        let grid = HeightGrid::from_rows(vec![
            vec![1.0, 0.0, 3.0],
            vec![0.0, 5.0, 0.0],
            vec![7.0, 0.0, 9.0],
        ])
        .unwrap();
        assert_eq!(axis_neighbour_mean(&grid, 0, 1, 1), (1.0 + 3.0 + 5.0) / 3.0);
        assert_eq!(axis_neighbour_mean(&grid, 1, 1, 1), 0.0);
    }
}
