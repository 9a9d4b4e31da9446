//! Pure aggregations over an employee snapshot.
//!
//! All functions here are stateless; they operate on whatever snapshot the
//! caller fetched and never touch the network.

use crate::model::Employee;

/// Employees whose name contains the fragment, case-insensitively.
///
/// Preserves upstream order; an empty result is a valid answer, not an error.
pub fn search_by_name(employees: &[Employee], fragment: &str) -> Vec<Employee> {
    let needle = fragment.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The maximum salary in the snapshot, or 0 when it is empty.
pub fn max_salary(employees: &[Employee]) -> u32 {
    employees
        .iter()
        .map(|employee| employee.salary)
        .max()
        .unwrap_or(0)
}

/// Names of the top `n` earners, salary descending.
///
/// The sort is stable, so ties keep the upstream's order.
pub fn top_earner_names(employees: &[Employee], n: usize) -> Vec<String> {
    let mut by_salary: Vec<&Employee> = employees.iter().collect();
    by_salary.sort_by(|a, b| b.salary.cmp(&a.salary));
    by_salary
        .into_iter()
        .take(n)
        .map(|employee| employee.name.clone())
        .collect()
}
