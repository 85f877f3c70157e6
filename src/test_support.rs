//! Shared test-only fixtures.

use crate::models::Employee;
use crate::store::EmployeeStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Five-row fixture with known names, duplicate first/last names, and a
/// mix of present and absent optional fields.
pub(crate) fn scenario_rows() -> Vec<Employee> {
    let rows: [(&str, Option<&str>, i64, Option<&str>); 5] = [
        ("Bob Jones", Some("Software Engineer"), 34, Some("Bear")),
        ("Amy Jones", Some("Product Manager"), 29, None),
        ("Cid Ray", None, 41, Some("Flash")),
        ("Amy Ray", Some("Data Scientist"), 29, None),
        ("Bob Ray", Some("QA Engineer"), 52, Some("Boss")),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, job_title, age, nickname))| Employee {
            id: i as u32 + 1,
            name: name.to_string(),
            job_title: job_title.map(str::to_string),
            age: *age,
            nickname: nickname.map(str::to_string),
            is_employee: i % 2 == 0,
        })
        .collect()
}

/// Store over the five-row fixture.
pub(crate) fn scenario_store() -> EmployeeStore {
    EmployeeStore::from_rows(scenario_rows())
}

/// Deterministically generated store for larger datasets.
pub(crate) fn seeded_store(count: usize, seed: u64) -> EmployeeStore {
    EmployeeStore::generate_with_rng(count, &mut StdRng::seed_from_u64(seed))
}
