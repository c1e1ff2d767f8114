use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::Rng;

use super::SnakeConfig;
use crate::*;

/// Picks a uniformly random cell not covered by `body`.
///
/// Returns `None` when the body fills the whole grid.
pub fn spawn_food<R: Rng>(
    body: &VecDeque<Coord2>,
    config: &SnakeConfig,
    rng: &mut R,
) -> Option<Coord2> {
    let occupied: HashSet<Coord2> = body.iter().copied().collect();
    let free_cells: Vec<Coord2> = (0..config.width)
        .flat_map(|x| (0..config.height).map(move |y| (x, y)))
        .filter(|coords| !occupied.contains(coords))
        .collect();

    if free_cells.is_empty() {
        log::warn!("No free cell left for food, grid is full");
        return None;
    }

    let food = free_cells[rng.random_range(0..free_cells.len())];
    log::trace!("Food placed at {:?}, {} free cells", food, free_cells.len());
    Some(food)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn food_never_lands_on_the_body() {
        let config = SnakeConfig::new((4, 4), 150, 5, 50);
        let body: VecDeque<Coord2> = (0..4).flat_map(|x| [(x, 0), (x, 1), (x, 2)]).collect();
        let mut rng = SmallRng::seed_from_u64(5);

        for _ in 0..50 {
            let (x, y) = spawn_food(&body, &config, &mut rng).unwrap();
            assert_eq!(y, 3);
            assert!(x < 4);
        }
    }

    #[test]
    fn full_grid_has_no_food() {
        let config = SnakeConfig::new((4, 4), 150, 5, 50);
        let body: VecDeque<Coord2> = (0..4).flat_map(|x| (0..4).map(move |y| (x, y))).collect();
        let mut rng = SmallRng::seed_from_u64(5);

        assert_eq!(spawn_food(&body, &config, &mut rng), None);
    }
}
