//! Index-based union-find tracking contracted components.
//!
//! Components are merged in bulk once per round and then flattened with
//! pointer jumping, so lookups during the next round's selection and
//! contraction phases are a single hop. Merging only ever links a root under
//! the root of a different tree, which keeps the parent array a forest
//! without the swap normalisation a raw pointer-jumping scheme needs.

use super::MstError;

/// Disjoint-set forest over `n` vertex indices.
///
/// # Examples
/// ```
/// use boruvka_core::DisjointComponents;
///
/// let mut components = DisjointComponents::new(3);
/// assert!(components.merge(0, 1)?);
/// // Component 1 selecting vertex 0 back is a mutual selection.
/// assert!(!components.merge(1, 0)?);
/// components.flatten();
/// assert_eq!(components.find(0), components.find(1));
/// assert_eq!(components.component_count(), 2);
/// # Ok::<(), boruvka_core::MstError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointComponents {
    parent: Vec<usize>,
}

impl DisjointComponents {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of tracked vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Raw parent labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> &[usize] { &self.parent }

    /// Number of distinct components (roots).
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(index, &parent)| index == parent)
            .count()
    }

    /// Returns the representative of `vertex`'s component.
    ///
    /// Indices outside the forest are their own representative.
    #[must_use]
    pub fn find(&self, vertex: usize) -> usize {
        let mut current = vertex;
        while let Some(&parent) = self.parent.get(current) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }

    /// Links root `component` under the representative of `target`.
    ///
    /// Returns `Ok(false)` without changing the forest when `target` already
    /// resolves to `component`, which happens when two components selected
    /// each other in the same round.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when either index lies outside
    /// the forest or `component` is not a root.
    pub fn merge(&mut self, component: usize, target: usize) -> Result<bool, MstError> {
        if target >= self.parent.len() {
            return Err(MstError::InvariantViolation {
                invariant: "merge target must be a tracked vertex",
                index: target,
            });
        }
        let representative = self.find(target);
        let slot = self
            .parent
            .get_mut(component)
            .ok_or(MstError::InvariantViolation {
                invariant: "merged component must be a tracked vertex",
                index: component,
            })?;
        if *slot != component {
            return Err(MstError::InvariantViolation {
                invariant: "merged component must be a root",
                index: component,
            });
        }
        if representative == component {
            return Ok(false);
        }
        *slot = representative;
        Ok(true)
    }

    /// Applies `parent[i] = parent[parent[i]]` until no label changes.
    ///
    /// Returns the number of passes, including the final pass that observed
    /// no change.
    pub fn flatten(&mut self) -> usize {
        let mut passes = 0_usize;
        loop {
            passes = passes.saturating_add(1);
            let mut changed = false;
            for index in 0..self.parent.len() {
                let parent = self.parent[index];
                let grandparent = self.parent[parent];
                if grandparent != parent {
                    self.parent[index] = grandparent;
                    changed = true;
                }
            }
            if !changed {
                return passes;
            }
        }
    }
}
