// Rhyme family detection — connected components over retained edges.
//
// Families are numbered in discovery order while walking the vocabulary in
// sorted order, so the same vocabulary and edge set always produce the same
// ids. Words with no retained edge end up alone in their own family.

/// Family id per vocabulary index.
///
/// `edges` are index pairs into a vocabulary of `size` words; direction is
/// ignored. Ids are dense and start at 0.
pub fn assign_families(size: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); size];
    for &(a, b) in edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    let mut family: Vec<Option<usize>> = vec![None; size];
    let mut next_id = 0;

    for root in 0..size {
        if family[root].is_some() {
            continue;
        }
        family[root] = Some(next_id);
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            for &neighbor in &adjacency[current] {
                if family[neighbor].is_none() {
                    family[neighbor] = Some(next_id);
                    stack.push(neighbor);
                }
            }
        }
        next_id += 1;
    }

    family.into_iter().map(|f| f.unwrap_or_default()).collect()
}
