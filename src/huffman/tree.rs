use std::fmt;

use super::alphabet::count_frequencies;
use super::coding_error::CodingError;
use super::forest::{ForestEntry, SortedForest};
use super::{Symbol, SymbolFrequency};

#[derive(Clone, Copy)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy)]
pub(super) struct Node {
    pub frequency: usize,
    pub index: usize,
    pub kind: NodeKind,
}

/// Strictly binary Huffman tree. Every node carries the total occurrence
/// count of the leaves below it; inner nodes always have exactly two
/// children.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Builds the tree for the given symbol-frequency pairs. One leaf is
    /// created per entry, in slice order, and the forest is reduced by
    /// merging its two lowest-frequency trees until a single tree remains.
    /// The first tree popped becomes the left child of the merged node.
    pub fn from_frequencies(
        symbols_and_frequencies: &[SymbolFrequency],
    ) -> Result<HuffmanTree, CodingError> {
        if symbols_and_frequencies.is_empty() {
            return Err(CodingError::EmptyAlphabet);
        }

        let mut nodes: Vec<Node> = Vec::new();
        let mut forest = SortedForest::new();
        for &SymbolFrequency { symbol, frequency } in symbols_and_frequencies {
            let node = Node {
                frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol },
            };
            nodes.push(node);
            forest.insert(ForestEntry {
                frequency,
                node_index: node.index,
            });
        }
        let leaf_count = nodes.len();

        while forest.len() > 1 {
            let left = forest.pop_front().unwrap();
            let right = forest.pop_front().unwrap();
            let node = Node {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.node_index,
                    right: right.node_index,
                },
            };
            nodes.push(node);
            forest.insert(ForestEntry {
                frequency: node.frequency,
                node_index: node.index,
            });
        }
        let root_index = forest.pop_front().unwrap().node_index;

        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    /// Builds the tree for `text`, deriving the alphabet and the frequency
    /// counts from the text itself.
    pub fn from_text(text: &str) -> Result<HuffmanTree, CodingError> {
        let frequencies = count_frequencies(text);
        Self::from_frequencies(&frequencies)
    }

    /// Total occurrence count of all leaves, i.e. the length of the symbol
    /// sequence the tree was built from.
    pub fn frequency(&self) -> usize {
        self.nodes[self.root_index].frequency
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub(super) fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    pub(super) fn root(&self) -> Node {
        self.nodes[self.root_index]
    }
}

impl Node {
    fn write_indented(
        &self,
        tree: &HuffmanTree,
        level: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for _ in 0..=level {
            write!(f, "  ")?;
        }
        match self.kind {
            NodeKind::Leaf { symbol } => {
                writeln!(f, "Leaf: '{}' with count {}", symbol, self.frequency)
            }
            NodeKind::Inner { left, right } => {
                writeln!(f, "Node: accumulated count {}", self.frequency)?;
                tree.nodes[left].write_indented(tree, level + 1, f)?;
                tree.nodes[right].write_indented(tree, level + 1, f)
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.nodes[self.root_index].write_indented(self, 0, f)
    }
}
