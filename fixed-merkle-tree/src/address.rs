/// Location of a node by `(level, index)`.
///
/// The root is `(0, 0)`; level `l` holds indexes `0..2^l`, and leaves sit at
/// level `height`. This is plain arithmetic with no validation: callers
/// must not ask for the sibling of the root or the children of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeAddress {
    level: u8,
    index: u64,
}

impl NodeAddress {
    /// The root node.
    pub const ROOT: NodeAddress = NodeAddress { level: 0, index: 0 };

    /// Create an address from its level and index within the level.
    pub const fn new(level: u8, index: u64) -> Self {
        Self { level, index }
    }

    /// Level of the node; the root is level 0.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Index of the node within its level, counted from the left.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Whether this node is on the bottom level of a tree of `height`.
    pub fn is_leaf(&self, height: u8) -> bool {
        self.level == height
    }

    /// Whether this node is the left child of its parent.
    pub fn is_left_child(&self) -> bool {
        self.index & 1 == 0
    }

    /// `(level + 1, 2 * index)`
    pub fn left_child(&self) -> NodeAddress {
        NodeAddress::new(self.level + 1, 2 * self.index)
    }

    /// `(level + 1, 2 * index + 1)`
    pub fn right_child(&self) -> NodeAddress {
        NodeAddress::new(self.level + 1, 2 * self.index + 1)
    }

    /// The other child of this node's parent.
    pub fn sibling(&self) -> NodeAddress {
        NodeAddress::new(self.level, self.index ^ 1)
    }

    /// Addresses from leaf `leaf_index` up to (and including) the child of
    /// the root, in that order. Yields exactly `height` addresses.
    pub fn path_from_leaf_to_root(
        height: u8,
        leaf_index: u64,
    ) -> impl Iterator<Item = NodeAddress> {
        (1..=height)
            .rev()
            .map(move |level| NodeAddress::new(level, leaf_index >> (height - level)))
    }
}
