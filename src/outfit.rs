use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ApiError;

/// Random source for outfit suggestion, managed as Rocket state so tests
/// can seed it deterministically.
pub(crate) struct OutfitRng(pub(crate) Mutex<StdRng>);

/// Draws an unweighted random outfit from `items`.
///
/// An empty wardrobe is an error. With `min_pick` or fewer items the whole
/// wardrobe is the outfit; beyond that the outfit size is itself drawn
/// uniformly from `min_pick..=max_pick` (clamped to the wardrobe size) and
/// that many distinct items are sampled without replacement. Order of the
/// result carries no meaning.
pub(crate) fn suggest<'a, T, R: Rng>(
    items: &'a [T],
    min_pick: usize,
    max_pick: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, ApiError> {
    if items.is_empty() {
        return Err(ApiError::InsufficientItems);
    }

    let max_pick = max_pick.max(min_pick);

    if items.len() <= min_pick {
        return Ok(items.iter().collect());
    }

    let count = rng.gen_range(min_pick..=max_pick).min(items.len());

    Ok(items.choose_multiple(rng, count).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn empty_wardrobe_is_an_error() {
        let items: Vec<u32> = vec![];
        let err = suggest(&items, 2, 3, &mut rng(0)).unwrap_err();
        assert!(matches!(err, ApiError::InsufficientItems));
    }

    #[test]
    fn one_or_two_items_are_returned_whole() {
        let one = vec![7u32];
        assert_eq!(suggest(&one, 2, 3, &mut rng(1)).unwrap(), vec![&7]);

        let two = vec![7u32, 8];
        assert_eq!(suggest(&two, 2, 3, &mut rng(1)).unwrap(), vec![&7, &8]);
    }

    #[test]
    fn larger_wardrobes_yield_two_or_three_distinct_items() {
        let items: Vec<u32> = (0..10).collect();

        for seed in 0..50 {
            let picked = suggest(&items, 2, 3, &mut rng(seed)).unwrap();
            assert!(picked.len() == 2 || picked.len() == 3);

            let mut seen = picked.iter().map(|x| **x).collect::<Vec<_>>();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), picked.len(), "duplicate item in outfit");
            assert!(seen.iter().all(|x| items.contains(x)));
        }
    }

    #[test]
    fn exactly_three_items_never_overdraws() {
        let items = vec![1u32, 2, 3];
        for seed in 0..20 {
            let picked = suggest(&items, 2, 3, &mut rng(seed)).unwrap();
            assert!(picked.len() == 2 || picked.len() == 3);
        }
    }

    #[test]
    fn same_seed_same_outfit() {
        let items: Vec<u32> = (0..10).collect();
        let a = suggest(&items, 2, 3, &mut rng(42)).unwrap();
        let b = suggest(&items, 2, 3, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pick_bounds_are_respected() {
        let items: Vec<u32> = (0..10).collect();
        for seed in 0..20 {
            let picked = suggest(&items, 4, 4, &mut rng(seed)).unwrap();
            assert_eq!(picked.len(), 4);
        }
    }
}
