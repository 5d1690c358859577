use std::fmt;

use super::coding_error::CodingError;
use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;

#[derive(Clone)]
struct TableEntry {
    symbol: Symbol,
    code: String,
}

/// Encoder/decoder over a finished Huffman tree. The root-to-leaf code of
/// every symbol is collected once at construction time instead of
/// re-searching the tree for each encoded symbol.
pub struct HuffmanCoder<'a> {
    /// leaf codes in depth-first traversal order, left subtree before right
    leaf_codes: Vec<TableEntry>,
    /// the same entries sorted by symbol for encoding lookups
    encoding_table: Vec<TableEntry>,
    tree: &'a HuffmanTree,
}

fn fill_table(table: &mut Vec<TableEntry>, node: Node, tree: &HuffmanTree, current_code: &str) {
    match node.kind {
        NodeKind::Leaf { symbol } => {
            table.push(TableEntry {
                symbol,
                code: current_code.to_owned(),
            });
        }
        NodeKind::Inner { left, right } => {
            fill_table(table, tree.node(left), tree, &format!("{}L", current_code));
            fill_table(table, tree.node(right), tree, &format!("{}R", current_code));
        }
    }
}

impl HuffmanCoder<'_> {
    pub fn new(tree: &HuffmanTree) -> HuffmanCoder {
        let mut table = Vec::new();
        fill_table(&mut table, tree.root(), tree, "");

        let mut encoding_table = table.clone();
        encoding_table.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        HuffmanCoder {
            leaf_codes: table,
            encoding_table,
            tree,
        }
    }

    /// Maps every symbol of `text` to its code and concatenates the codes
    /// without separator. A symbol without a leaf in the tree is an error.
    pub fn encode_sequence(&self, text: &str) -> Result<String, CodingError> {
        let mut code = String::new();
        for symbol in text.chars() {
            let entry = &self.encoding_table[self
                .encoding_table
                .binary_search_by(|probe| probe.symbol.cmp(&symbol))
                .map_err(|_| CodingError::UnknownSymbol(symbol))?];
            code.push_str(&entry.code);
        }
        Ok(code)
    }

    /// Consumes `code` from the start, walking from the root to a leaf per
    /// marker segment and emitting that leaf's symbol, until the markers are
    /// exhausted. An empty code decodes to an empty text.
    pub fn decode_sequence(&self, code: &str) -> Result<String, CodingError> {
        let mut text = String::new();
        let mut current = self.tree.root();
        for marker in code.chars() {
            let (left, right) = match current.kind {
                NodeKind::Inner { left, right } => (left, right),
                NodeKind::Leaf { .. } => return Err(CodingError::DescentBelowLeaf),
            };
            current = match marker {
                'L' => self.tree.node(left),
                'R' => self.tree.node(right),
                other => return Err(CodingError::UnexpectedMarker(other)),
            };
            if let NodeKind::Leaf { symbol } = current.kind {
                text.push(symbol);
                current = self.tree.root();
            }
        }
        if current.index != self.tree.root().index {
            return Err(CodingError::IncompleteCode);
        }
        Ok(text)
    }
}

impl fmt::Display for HuffmanCoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.leaf_codes.iter() {
            writeln!(f, "'{}' has code \"{}\"", entry.symbol, entry.code)?;
        }
        Ok(())
    }
}
