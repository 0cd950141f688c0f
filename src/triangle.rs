use itertools::Itertools;

use crate::common::{Edge, Vertex};

/// Whether `edges` contain three vertices `a < b < c` joined by `(a, b)`, `(a, c)` and `(b, c)`.
pub fn forms_triangle(edges: &[Edge]) -> bool {
    find_triangle(edges).is_some()
}

/// The first triangle found in `edges`, as its three vertices in ascending order.
///
/// Edges are sorted canonically first, so for any triangle `a < b < c` its sides appear in the order
/// `(a, b)`, `(a, c)`, `(b, c)` and an ordered scan over triples finds it.
pub fn find_triangle(edges: &[Edge]) -> Option<[Vertex; 3]> {
    if edges.len() < 3 {
        return None;
    }
    edges.iter()
        .copied()
        .sorted()
        .tuple_combinations::<(_, _, _)>()
        .find_map(|(first, second, third)| {
            let (a, b) = first.endpoints();
            let (a2, c) = second.endpoints();
            let (b2, c2) = third.endpoints();
            if a == a2 && b == b2 && c == c2 {
                Some([a, b, c])
            } else {
                None
            }
        })
}
