use std::fmt;

/// An unordered triple of distinct, pairwise adjacent nodes.
///
/// Triangles are kept in canonical (sorted) form, so the same triangle
/// discovered along different visit paths compares and hashes equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle([usize; 3]);

impl Triangle {
    /// Creates the canonical triangle on the given nodes, or returns `None`
    /// if the nodes are not pairwise distinct.
    ///
    /// Distinctness is what rejects the degenerate triples produced at
    /// traversal roots (where a node acts as its own parent) and by
    /// 2-cycles.
    pub fn new(a: usize, b: usize, c: usize) -> Option<Self> {
        if a == b || b == c || a == c {
            return None;
        }
        let mut nodes = [a, b, c];
        nodes.sort_unstable();
        Some(Self(nodes))
    }

    /// Returns the nodes of the triangle in increasing order.
    pub fn nodes(&self) -> [usize; 3] {
        self.0
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_canonical() {
        let triangle = Triangle::new(2, 0, 1).unwrap();
        assert_eq!(triangle, Triangle::new(1, 2, 0).unwrap());
        assert_eq!(triangle.nodes(), [0, 1, 2]);
        assert_eq!(triangle.to_string(), "{0, 1, 2}");
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(Triangle::new(0, 0, 1), None);
        assert_eq!(Triangle::new(0, 1, 0), None);
        assert_eq!(Triangle::new(1, 0, 0), None);
        assert_eq!(Triangle::new(3, 3, 3), None);
    }
}
