use crate::error::CompileError;
use crate::graph::SwitchAssignment;

/// Hard cap on the number of switches the exhaustive enumeration accepts;
/// the sweep is 2^N and a workflow past this size is an authoring problem.
pub const MAX_ENUMERATED_SWITCHES: usize = 16;

/// Enumerates every distinct boolean assignment over the given switch ids.
///
/// Assignment `i` is derived by reading bit `j` of `i` for switch `j` (in
/// declaration order); masks are iterated from the highest value down to
/// zero, so the all-true assignment comes first and the all-false one last.
/// For N switches exactly 2^N assignments are produced, with no duplicates
/// and identical ordering across runs; N = 0 yields the single empty
/// assignment.
pub fn enumerate_assignments(
    switch_ids: &[String],
) -> Result<Vec<SwitchAssignment>, CompileError> {
    let count = switch_ids.len();
    if count > MAX_ENUMERATED_SWITCHES {
        return Err(CompileError::TooManySwitches {
            count,
            limit: MAX_ENUMERATED_SWITCHES,
        });
    }

    let total = 1usize << count;
    let mut assignments = Vec::with_capacity(total);
    for mask in (0..total).rev() {
        let mut assignment = SwitchAssignment::new();
        for (bit, id) in switch_ids.iter().enumerate() {
            assignment.set(id.clone(), mask & (1 << bit) != 0);
        }
        assignments.push(assignment);
    }

    Ok(assignments)
}
