//! Static catalog of every stepper and container: display name, family,
//! complexity and stability. Keys match the `algorithm` tag accepted by the
//! step runner.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Container,
    Sorting,
    Searching,
    Graph,
    Greedy,
    DynamicProgramming,
    BranchAndBound,
    StringMatching,
}

impl Family {
    pub const ALL: [Family; 8] = [
        Family::Container,
        Family::Sorting,
        Family::Searching,
        Family::Graph,
        Family::Greedy,
        Family::DynamicProgramming,
        Family::BranchAndBound,
        Family::StringMatching,
    ];

    /// Kebab-case key, as serialized.
    pub fn key(self) -> &'static str {
        match self {
            Family::Container => "container",
            Family::Sorting => "sorting",
            Family::Searching => "searching",
            Family::Graph => "graph",
            Family::Greedy => "greedy",
            Family::DynamicProgramming => "dynamic-programming",
            Family::BranchAndBound => "branch-and-bound",
            Family::StringMatching => "string-matching",
        }
    }
}

impl FromStr for Family {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Family::ALL
            .into_iter()
            .find(|f| f.key() == name)
            .ok_or_else(|| StepError::invalid("catalog", format!("unknown family `{s}`")))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Container => "Data structures",
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
            Family::Graph => "Graph",
            Family::Greedy => "Greedy",
            Family::DynamicProgramming => "Dynamic programming",
            Family::BranchAndBound => "Branch and bound",
            Family::StringMatching => "String matching",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: &'static str,
    pub name: &'static str,
    pub family: Family,
    pub time: &'static str,
    pub space: &'static str,
    /// `None` where stability has no meaning (searches, graphs...).
    pub stable: Option<bool>,
}

const fn entry(
    key: &'static str,
    name: &'static str,
    family: Family,
    time: &'static str,
    space: &'static str,
    stable: Option<bool>,
) -> Entry {
    Entry { key, name, family, time, space, stable }
}

use Family::*;

pub const CATALOG: &[Entry] = &[
    // Containers
    entry("stack", "Stack", Container, "O(1) push/pop", "O(n)", None),
    entry("queue", "Queue", Container, "O(1) enqueue/dequeue", "O(n)", None),
    entry("linked-list", "Linked List", Container, "O(n) search, O(1) head insert", "O(n)", None),
    entry("binary-search-tree", "Binary Search Tree", Container, "O(h) insert/search/remove", "O(n)", None),
    entry("graph", "Graph (adjacency list)", Container, "O(1) add edge", "O(V + E)", None),
    entry("union-find", "Union-Find", Container, "O(α(n)) amortised", "O(n)", None),
    entry("min-heap", "Binary Min-Heap", Container, "O(log n) push/pop", "O(n)", None),
    // Sorting
    entry("bubble-sort", "Bubble Sort", Sorting, "O(n²)", "O(1)", Some(true)),
    entry("selection-sort", "Selection Sort", Sorting, "O(n²)", "O(1)", Some(false)),
    entry("insertion-sort", "Insertion Sort", Sorting, "O(n²)", "O(1)", Some(true)),
    entry("merge-sort", "Merge Sort", Sorting, "O(n log n)", "O(n)", Some(true)),
    entry("quick-sort", "Quick Sort", Sorting, "O(n log n)", "O(log n)", Some(false)),
    entry("heap-sort", "Heap Sort", Sorting, "O(n log n)", "O(1)", Some(false)),
    entry("counting-sort", "Counting Sort", Sorting, "O(n + k)", "O(k)", Some(true)),
    entry("radix-sort", "Radix Sort", Sorting, "O(d (n + b))", "O(n + b)", Some(true)),
    // Searching
    entry("linear-search", "Linear Search", Searching, "O(n)", "O(1)", None),
    entry("binary-search", "Binary Search", Searching, "O(log n)", "O(1)", None),
    entry("jump-search", "Jump Search", Searching, "O(√n)", "O(1)", None),
    entry("exponential-search", "Exponential Search", Searching, "O(log n)", "O(1)", None),
    // Graph
    entry("bfs", "Breadth-First Search", Graph, "O(V + E)", "O(V)", None),
    entry("dfs", "Depth-First Search", Graph, "O(V + E)", "O(V)", None),
    entry("dijkstra", "Dijkstra", Graph, "O(V²)", "O(V)", None),
    entry("bellman-ford", "Bellman-Ford", Graph, "O(V E)", "O(V)", None),
    entry("floyd-warshall", "Floyd-Warshall", Graph, "O(V³)", "O(V²)", None),
    entry("kruskal", "Kruskal MST", Graph, "O(E log E)", "O(V)", None),
    entry("prim", "Prim MST", Graph, "O(V²)", "O(V)", None),
    entry("topological-sort", "Topological Sort (DFS)", Graph, "O(V + E)", "O(V)", None),
    entry("kahn", "Kahn's Algorithm", Graph, "O(V + E)", "O(V)", None),
    entry("kosaraju", "Kosaraju SCC", Graph, "O(V + E)", "O(V + E)", None),
    // Greedy
    entry("huffman", "Huffman Coding", Greedy, "O(n log n)", "O(n)", None),
    entry("activity-selection", "Activity Selection", Greedy, "O(n log n)", "O(n)", None),
    entry("fractional-knapsack", "Fractional Knapsack", Greedy, "O(n log n)", "O(n)", None),
    // Dynamic programming
    entry("lcs", "Longest Common Subsequence", DynamicProgramming, "O(m n)", "O(m n)", None),
    entry("matrix-chain", "Matrix Chain Multiplication", DynamicProgramming, "O(n³)", "O(n²)", None),
    entry("knapsack", "0/1 Knapsack", DynamicProgramming, "O(n W)", "O(n W)", None),
    // Branch and bound
    entry("tsp", "Travelling Salesman", BranchAndBound, "O(n!) worst case", "O(n)", None),
    entry("job-sequencing", "Job Sequencing", BranchAndBound, "O(n²)", "O(n)", None),
    // String matching
    entry("naive", "Naive Matching", StringMatching, "O(n m)", "O(1)", None),
    entry("kmp", "Knuth-Morris-Pratt", StringMatching, "O(n + m)", "O(m)", None),
    entry("rabin-karp", "Rabin-Karp", StringMatching, "O(n + m) expected", "O(1)", None),
];

pub fn lookup(key: &str) -> Option<&'static Entry> {
    CATALOG.iter().find(|e| e.key == key)
}

pub fn family(family: Family) -> impl Iterator<Item = &'static Entry> {
    CATALOG.iter().filter(move |e| e.family == family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::SearchAlgorithm;
    use crate::sorting::SortAlgorithm;
    use crate::string_algorithms::MatchAlgorithm;

    #[test]
    fn keys_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(CATALOG[i + 1..].iter().all(|b| b.key != a.key), "duplicate {}", a.key);
        }
    }

    #[test]
    fn dispatch_keys_are_listed() {
        for alg in SortAlgorithm::ALL {
            assert_eq!(lookup(alg.key()).unwrap().family, Family::Sorting);
        }
        for alg in SearchAlgorithm::ALL {
            assert_eq!(lookup(alg.key()).unwrap().family, Family::Searching);
        }
        for alg in MatchAlgorithm::ALL {
            assert_eq!(lookup(alg.key()).unwrap().family, Family::StringMatching);
        }
    }

    #[test]
    fn family_counts() {
        assert_eq!(family(Family::Sorting).count(), 8);
        assert_eq!(family(Family::Graph).count(), 10);
        assert_eq!(lookup("merge-sort").unwrap().stable, Some(true));
        assert!(lookup("bogo-sort").is_none());
    }

    #[test]
    fn family_keys_match_serde() {
        for f in Family::ALL {
            assert_eq!(serde_json::to_value(f).unwrap(), f.key());
            assert_eq!(f.key().parse::<Family>().unwrap(), f);
        }
        assert_eq!("Dynamic programming".parse::<Family>().unwrap(), Family::DynamicProgramming);
        assert!("misc".parse::<Family>().is_err());
    }
}
