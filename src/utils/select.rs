use core::cmp::Ordering;

use ordered_float::OrderedFloat;
use rand::Rng;

type Item = OrderedFloat<f64>;

/// Three-way partition around `pivot`
///
/// Rearranges `items` into `[< pivot | == pivot | > pivot]` and returns the
/// bounds `(lt, gt)` of the middle run.
fn partition(items: &mut [Item], pivot: Item) -> (usize, usize) {
    let (mut lt, mut i, mut gt) = (0, 0, items.len());

    while i < gt {
        match items[i].cmp(&pivot) {
            Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

/// Returns the `k`-th smallest element (0-based) using randomized quickselect
///
/// On return every element left of `k` is no greater than the result and
/// every element right of `k` is no smaller.
///
/// # Arguments
///
/// * `items` - Non-empty scratch slice, reordered in place
/// * `k` - Rank to select, must be below `items.len()`
/// * `rng` - Source of pivot positions
pub fn select_nth<R: Rng>(items: &mut [Item], k: usize, rng: &mut R) -> f64 {
    debug_assert!(k < items.len(), "rank out of bounds");

    let (mut lo, mut hi) = (0, items.len());
    loop {
        if hi - lo == 1 {
            return items[lo].0;
        }

        let pivot = items[rng.gen_range(lo..hi)];
        let (lt, gt) = partition(&mut items[lo..hi], pivot);
        let (lt, gt) = (lo + lt, lo + gt);

        if k < lt {
            hi = lt;
        } else if k < gt {
            return pivot.0;
        } else {
            lo = gt;
        }
    }
}

/// Returns the median of a non-empty slice, reordering it in place
///
/// Even-length inputs average the two middle ranks.
pub fn median<R: Rng>(items: &mut [Item], rng: &mut R) -> f64 {
    let mid = items.len() / 2;
    if items.len() % 2 == 1 {
        return select_nth(items, mid, rng);
    }

    let lower = select_nth(items, mid - 1, rng);
    // the suffix now holds exactly the ranks above `mid - 1`
    let upper = items[mid..].iter().min().map_or(lower, |v| v.0);
    (lower + upper) / 2.0
}
