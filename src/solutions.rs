//! The user-visible shape of a solution, and formatting helpers.

use std::collections::BTreeMap;

use super::term::Term;

/// One solution of a query: an ordered mapping from variable name to
/// term, restricted to the query's own (scope-0) variables.
///
/// Produced by
/// [Bindings::project()](../bindings/struct.Bindings.html#method.project).
pub type Solution = BTreeMap<String, Term>;

/// Formats a solution for display.
///
/// A query without variables has an empty mapping, which formats as
/// plain `ok`.
///
/// # Arguments
/// * `solution`
/// # Return
/// * `String`
/// # Usage
/// ```
/// use entail::*;
///
/// let universe = Universe::from_kb(test_kb());
/// let goal = call!("sibling", var!("U"), var!("V"));
/// let solutions = universe.solve(goal, &QueryOptions::default());
/// assert_eq!("U = bob, V = bob", format_solution(&solutions[0]));
/// ```
pub fn format_solution(solution: &Solution) -> String {
    if solution.is_empty() { return "ok".to_string(); }
    let parts: Vec<String> = solution.iter()
        .map(|(name, term)| format!("{} = {}", name, term))
        .collect();
    parts.join(", ")
} // format_solution()


#[cfg(test)]
mod test {

    use crate::*;

    #[test]
    fn test_format_solution() {
        let mut solution = Solution::new();
        assert_eq!("ok", format_solution(&solution));

        solution.insert("U".to_string(), atom!("bob"));
        solution.insert("V".to_string(), atom!("charlie"));
        assert_eq!("U = bob, V = charlie", format_solution(&solution));
    } // test_format_solution()

} // test
