//! Huffman coding over an explicit binary min-heap.
//!
//! Variables:
//!   freq(c)  = occurrences of char c, leaves created in char order
//!   key(x)   = (freq(x), creation order), the heap ordering
//!
//! Equations:
//!   repeat while |heap| > 1:
//!     a = pop, b = pop, push node(freq(a) + freq(b), left = a, right = b)
//!   code(leaf) = path from the root, 0 = left, 1 = right
//!   single distinct symbol => code "0"
//!   ratio = 1 - compressed_bits / (8 * |text|)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data_structures::MinHeap;
use crate::error::{StepError, StepResult};
use crate::trace::{Outcome, Trace};

/// Nodes live in an arena; children are arena indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HuffmanNode {
    Leaf { symbol: char, freq: usize },
    Internal { freq: usize, left: usize, right: usize },
}

impl HuffmanNode {
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } | HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// Heap entry; the derived order compares `freq`, then `node` (creation order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeapSlot {
    pub freq: usize,
    pub node: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HuffmanAction {
    /// Leaf for `symbol` pushed onto the heap.
    Leaf { node: usize, symbol: char, freq: usize },
    /// Two lightest nodes popped and joined under `parent`.
    Merge { left: usize, right: usize, parent: usize, freq: usize },
    Code { symbol: char, code: String },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanStep {
    pub action: HuffmanAction,
    /// Heap contents in heap-array order.
    pub heap: Vec<HeapSlot>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuffmanCode {
    pub frequencies: BTreeMap<char, usize>,
    pub codes: BTreeMap<char, String>,
    pub encoded: String,
    pub original_bits: usize,
    pub compressed_bits: usize,
    pub ratio: f64,
    pub nodes: Vec<HuffmanNode>,
    pub root: usize,
}

impl HuffmanCode {
    /// Walks the tree bit by bit. A lone leaf root consumes one `0` per symbol.
    pub fn decode(&self, bits: &str) -> StepResult<String> {
        let mut out = String::new();
        if let HuffmanNode::Leaf { symbol, .. } = self.nodes[self.root] {
            for b in bits.chars() {
                if b != '0' {
                    return Err(StepError::invalid("huffman decode", format!("unexpected bit `{b}`")));
                }
                out.push(symbol);
            }
            return Ok(out);
        }

        let mut cur = self.root;
        for b in bits.chars() {
            let HuffmanNode::Internal { left, right, .. } = self.nodes[cur] else {
                return Err(StepError::invalid("huffman decode", "walked past a leaf"));
            };
            cur = match b {
                '0' => left,
                '1' => right,
                other => return Err(StepError::invalid("huffman decode", format!("unexpected bit `{other}`"))),
            };
            if let HuffmanNode::Leaf { symbol, .. } = self.nodes[cur] {
                out.push(symbol);
                cur = self.root;
            }
        }
        if cur != self.root {
            return Err(StepError::invalid("huffman decode", "bit string ends inside a code"));
        }
        Ok(out)
    }
}

fn snapshot(heap: &MinHeap<HeapSlot>) -> Vec<HeapSlot> {
    heap.iter().copied().collect()
}

pub fn huffman(text: &str) -> StepResult<Outcome<HuffmanStep, HuffmanCode>> {
    if text.is_empty() {
        return Err(StepError::invalid("huffman", "text must not be empty"));
    }
    let mut frequencies: BTreeMap<char, usize> = BTreeMap::new();
    for c in text.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    tracing::debug!(symbols = frequencies.len(), len = text.len(), "huffman");

    let mut nodes: Vec<HuffmanNode> = Vec::new();
    let mut heap = MinHeap::new();
    let mut steps = Trace::new();

    for (&symbol, &freq) in &frequencies {
        let node = nodes.len();
        nodes.push(HuffmanNode::Leaf { symbol, freq });
        heap.push(HeapSlot { freq, node });
        steps.push(HuffmanStep {
            action: HuffmanAction::Leaf { node, symbol, freq },
            heap: snapshot(&heap),
            description: format!("Push '{symbol}' with frequency {freq}"),
        });
    }

    while heap.len() > 1 {
        let (Some(a), Some(b)) = (heap.pop_min(), heap.pop_min()) else { break };
        let parent = nodes.len();
        let freq = a.freq + b.freq;
        nodes.push(HuffmanNode::Internal { freq, left: a.node, right: b.node });
        heap.push(HeapSlot { freq, node: parent });
        steps.push(HuffmanStep {
            action: HuffmanAction::Merge { left: a.node, right: b.node, parent, freq },
            heap: snapshot(&heap),
            description: format!("Merge {} + {} into a node of frequency {freq}", a.freq, b.freq),
        });
    }
    let root = heap.peek_min().map(|slot| slot.node).unwrap_or(0);

    let mut codes = BTreeMap::new();
    assign_codes(&nodes, root, String::new(), &mut codes);
    for (&symbol, code) in &codes {
        steps.push(HuffmanStep {
            action: HuffmanAction::Code { symbol, code: code.clone() },
            heap: snapshot(&heap),
            description: format!("'{symbol}' -> {code}"),
        });
    }

    let encoded: String = text.chars().filter_map(|c| codes.get(&c).map(String::as_str)).collect();
    let original_bits = text.chars().count() * 8;
    let compressed_bits = encoded.len();
    let ratio = 1.0 - compressed_bits as f64 / original_bits as f64;

    steps.push(HuffmanStep {
        action: HuffmanAction::Done,
        heap: snapshot(&heap),
        description: format!(
            "{original_bits} bits -> {compressed_bits} bits ({:.1}% smaller)",
            ratio * 100.0
        ),
    });
    Ok(Outcome::new(
        steps,
        HuffmanCode { frequencies, codes, encoded, original_bits, compressed_bits, ratio, nodes, root },
    ))
}

fn assign_codes(nodes: &[HuffmanNode], node: usize, prefix: String, codes: &mut BTreeMap<char, String>) {
    match nodes[node] {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() { "0".to_string() } else { prefix };
            codes.insert(symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            assign_codes(nodes, left, format!("{prefix}0"), codes);
            assign_codes(nodes, right, format!("{prefix}1"), codes);
        }
    }
}
