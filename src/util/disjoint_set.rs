/// Union-find over `0..n` with path compression.
#[derive(Debug, Clone)]
pub struct IntSet {
    parent: Vec<usize>,
}

impl IntSet {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    /// Attaches the class of `a` under the root of `b`. Ignored unless both
    /// values are inside the set.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a >= self.len() || root_b >= self.len() {
            return;
        }
        self.parent[root_a] = root_b;
    }

    /// Canonical representative of `a`'s class. Values outside the set are
    /// their own representative.
    pub fn find_root(&mut self, a: usize) -> usize {
        if a >= self.len() {
            return a;
        }

        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = a;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}
