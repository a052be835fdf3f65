//! Exact size of an execution tree, computed before generating it

use serde::Serialize;

/// Node count above which tree construction logs a warning.
pub const LARGE_TREE_NODES: u128 = 1_000_000;

/// Longest execution for which node counts are computed exactly.
const MAX_COUNTED_DEPTH: usize = 4096;

/// Leaf and node counts of the tree for a given shape.
///
/// `None` means the count does not fit in a `u128` or the executions are
/// too long to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEstimate {
    pub leaves: Option<u128>,
    pub nodes: Option<u128>,
}

impl ResourceEstimate {
    /// Counts for `actors` actors acting `budget` times each.
    ///
    /// Leaves are the multinomial `(actors * budget)! / (budget!)^actors`.
    /// Nodes count every distinct prefix of an interleaving, including the
    /// empty root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use valency::analysis::ResourceEstimate;
    ///
    /// let estimate = ResourceEstimate::for_shape(2, 1);
    /// assert_eq!(estimate.leaves, Some(2));
    /// assert_eq!(estimate.nodes, Some(5));
    /// ```
    pub fn for_shape(actors: usize, budget: u32) -> Self {
        let budget = budget as usize;
        let leaves = multinomial_leaves(actors, budget);
        let nodes = match leaves {
            Some(_) if actors.saturating_mul(budget) <= MAX_COUNTED_DEPTH => {
                prefix_counts(actors, budget)
                    .and_then(|counts| counts.iter().try_fold(0u128, |acc, &c| acc.checked_add(c)))
            }
            _ => None,
        };
        Self { leaves, nodes }
    }

    /// Whether generating this tree is expected to be expensive.
    pub fn is_large(&self) -> bool {
        self.nodes.is_none_or(|nodes| nodes > LARGE_TREE_NODES)
    }

    /// Human-readable node count.
    pub fn describe_nodes(&self) -> String {
        match self.nodes {
            Some(nodes) => nodes.to_string(),
            None => "too many to count".to_string(),
        }
    }
}

fn binomial(n: usize, k: usize) -> Option<u128> {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}

fn multinomial_leaves(actors: usize, budget: usize) -> Option<u128> {
    let mut leaves: u128 = 1;
    for i in 1..=actors {
        leaves = leaves.checked_mul(binomial(i.checked_mul(budget)?, budget)?)?;
    }
    Some(leaves)
}

/// `counts[m]` is the number of distinct action sequences of length `m` in
/// which no actor exceeds `budget`.
fn prefix_counts(actors: usize, budget: usize) -> Option<Vec<u128>> {
    let mut counts = vec![1u128];
    for _ in 0..actors {
        let mut next = vec![0u128; counts.len() + budget];
        for (len, &ways) in counts.iter().enumerate() {
            for used in 0..=budget {
                let placed = binomial(len + used, used)?.checked_mul(ways)?;
                next[len + used] = next[len + used].checked_add(placed)?;
            }
        }
        counts = next;
    }
    Some(counts)
}
