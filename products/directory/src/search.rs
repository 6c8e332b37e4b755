use crate::employee::Employee;

/// Employees whose name or username contains `query`, ignoring case.
///
/// An empty query matches everyone. Order follows `all`.
pub fn filter<'a>(query: &str, all: &'a [Employee]) -> Vec<&'a Employee> {
    let needle = query.to_lowercase();
    all.iter()
        .filter(|employee| matches(&needle, employee))
        .collect()
}

fn matches(needle: &str, employee: &Employee) -> bool {
    employee.name().to_lowercase().contains(needle)
        || employee.username().to_lowercase().contains(needle)
}
