//! Derived read-only views: conjunctive filtering with deterministic order.

/// Compute the visible, ordered subset of `items`.
///
/// - `accept` is the conjunction of all active filters; only passing items
///   survive. The source slice is never mutated.
/// - Results are sorted by `sort_key` ascending; ties are broken by `id`
///   so the order is deterministic across recomputations.
pub fn select<T, K>(
    items: &[T],
    accept: impl Fn(&T) -> bool,
    sort_key: impl Fn(&T) -> K,
    id: impl Fn(&T) -> &str,
) -> Vec<T>
where
    T: Clone,
    K: Ord,
{
    let mut visible: Vec<T> = items.iter().filter(|item| accept(item)).cloned().collect();
    visible.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)).then_with(|| id(a).cmp(id(b))));
    visible
}

/// Recompute-only-on-change cache for projections.
///
/// Renderers call `get` every frame; the projection only actually runs
/// when the input differs from the previous call.
#[derive(Debug)]
pub struct Memo<I, O> {
    cached: Option<(I, O)>,
}

impl<I, O> Default for Memo<I, O> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<I: PartialEq, O: Clone> Memo<I, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, input: I, compute: impl FnOnce(&I) -> O) -> O {
        match &self.cached {
            Some((cached_input, output)) if *cached_input == input => output.clone(),
            _ => {
                let output = compute(&input);
                self.cached = Some((input, output.clone()));
                output
            }
        }
    }
}
