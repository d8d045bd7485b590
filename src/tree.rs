//! Binary space partition tree.

/// A node in the BSP tree. Either a leaf (an unsplit area) or a branch
/// whose value covers the union of its two exclusively owned children.
#[derive(Debug, Clone, PartialEq)]
pub enum BspTree<T> {
    Leaf(T),
    Branch {
        node: T,
        left: Box<BspTree<T>>,
        right: Box<BspTree<T>>,
    },
}

impl<T> BspTree<T> {
    pub fn leaf(node: T) -> Self {
        BspTree::Leaf(node)
    }

    pub fn branch(node: T, left: BspTree<T>, right: BspTree<T>) -> Self {
        BspTree::Branch {
            node,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The value carried by this node, leaf or branch.
    pub fn node(&self) -> &T {
        match self {
            BspTree::Leaf(node) | BspTree::Branch { node, .. } => node,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BspTree::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    pub fn children(&self) -> Option<(&BspTree<T>, &BspTree<T>)> {
        match self {
            BspTree::Leaf(_) => None,
            BspTree::Branch { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    pub fn left(&self) -> Option<&BspTree<T>> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&BspTree<T>> {
        self.children().map(|(_, right)| right)
    }

    /// Transform the leaves, left to right. Branch values are kept as they are.
    pub fn map_leaves<F>(self, mut f: F) -> BspTree<T>
    where
        F: FnMut(T) -> T,
    {
        self.map_leaves_with(&mut f)
    }

    fn map_leaves_with<F>(self, f: &mut F) -> BspTree<T>
    where
        F: FnMut(T) -> T,
    {
        match self {
            BspTree::Leaf(node) => BspTree::Leaf(f(node)),
            BspTree::Branch { node, left, right } => {
                let left = (*left).map_leaves_with(f);
                let right = (*right).map_leaves_with(f);
                BspTree::branch(node, left, right)
            }
        }
    }

    /// Leaf values, left to right.
    pub fn leaves(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a T>) {
        match self {
            BspTree::Leaf(node) => leaves.push(node),
            BspTree::Branch { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }

    /// Branch nodes in pre-order: a branch, then its left subtree, then its right.
    pub fn branches(&self) -> Vec<&BspTree<T>> {
        let mut branches = Vec::new();
        self.collect_branches(&mut branches);
        branches
    }

    fn collect_branches<'a>(&'a self, branches: &mut Vec<&'a BspTree<T>>) {
        if let BspTree::Branch { left, right, .. } = self {
            branches.push(self);
            left.collect_branches(branches);
            right.collect_branches(branches);
        }
    }

    /// Number of levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            BspTree::Leaf(_) => 1,
            BspTree::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
