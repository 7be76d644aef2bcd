//! Mapping combinators over node sequences.
//!
//! Every child list in the export pass goes through one of these: each item
//! maps to `Some(output)` or `None`, and only the present outputs are kept,
//! in input order. Dropped items leave no hole, so an output position says
//! nothing about the input position. Callers that need the original index
//! must carry it in the output themselves.

/// Keep the present results of `f`, preserving order.
pub fn map_present<A, B>(
    items: impl IntoIterator<Item = A>,
    f: impl FnMut(A) -> Option<B>,
) -> Vec<B> {
    items.into_iter().filter_map(f).collect()
}

/// Like [`map_present`], also passing each item's original index.
pub fn map_present_indexed<A, B>(
    items: impl IntoIterator<Item = A>,
    mut f: impl FnMut(usize, A) -> Option<B>,
) -> Vec<B> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| f(i, item))
        .collect()
}

/// Fallible [`map_present`]: the first error aborts the whole mapping.
pub fn try_map_present<A, B, E>(
    items: impl IntoIterator<Item = A>,
    mut f: impl FnMut(A) -> Result<Option<B>, E>,
) -> Result<Vec<B>, E> {
    let mut out = Vec::new();
    for item in items {
        if let Some(mapped) = f(item)? {
            out.push(mapped);
        }
    }
    Ok(out)
}

/// Fallible [`map_present_indexed`].
pub fn try_map_present_indexed<A, B, E>(
    items: impl IntoIterator<Item = A>,
    mut f: impl FnMut(usize, A) -> Result<Option<B>, E>,
) -> Result<Vec<B>, E> {
    try_map_present(items.into_iter().enumerate(), |(i, item)| f(i, item))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn even_halved(n: i32) -> Option<i32> {
        (n % 2 == 0).then_some(n / 2)
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let out: Vec<i32> = map_present(Vec::<i32>::new(), even_halved);
        assert!(out.is_empty());
    }

    #[test]
    fn test_indexed_sees_original_positions() {
        let out = map_present_indexed(["a", "", "b"], |i, s| (!s.is_empty()).then(|| (i, s)));
        assert_eq!(out, vec![(0, "a"), (2, "b")]);
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let mut seen = Vec::new();
        let result: Result<Vec<i32>, String> = try_map_present([1, 2, 3, 4], |n| {
            seen.push(n);
            if n == 3 { Err(format!("bad {n}")) } else { Ok(Some(n)) }
        });
        assert_eq!(result, Err("bad 3".to_string()));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_map_indexed_drops_absent() {
        let result: Result<Vec<usize>, ()> =
            try_map_present_indexed(["x", "skip", "y"], |i, s| Ok((s != "skip").then_some(i)));
        assert_eq!(result, Ok(vec![0, 2]));
    }

    proptest! {
        #[test]
        fn prop_output_never_longer_than_input(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let out = map_present(items.clone(), even_halved);
            prop_assert!(out.len() <= items.len());
        }

        #[test]
        fn prop_present_results_keep_relative_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let out = map_present_indexed(items.clone(), |i, n| (n % 3 != 0).then_some(i));
            prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
            let expected: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, n)| *n % 3 != 0)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(out, expected);
        }
    }
}
