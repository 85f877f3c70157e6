//! Synthetic employee generation: deterministic shape, random content.
//!
//! Randomness is injected so callers can pin a seed; the convenience entry
//! point uses thread-local randomness.

use crate::constants::{GENERATED_AGE_RANGE, NICKNAME_PROBABILITY};
use crate::models::Employee;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "UX Designer",
    "Data Scientist",
    "DevOps Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "QA Engineer",
    "Technical Lead",
    "Project Manager",
    "Business Analyst",
    "System Administrator",
    "Database Administrator",
    "Network Engineer",
    "Security Engineer",
    "Cloud Architect",
    "Mobile Developer",
    "UI Designer",
    "Scrum Master",
];

const NICKNAMES: &[&str] = &[
    "Ace", "Bear", "Blaze", "Boomer", "Boss", "Buddy", "Captain", "Chief", "Duke", "Flash",
    "Guru", "King", "Legend", "Maverick", "Ninja", "Phoenix", "Rocket", "Shadow", "Tiger",
    "Wolf",
];

/// Generate `count` rows with sequential ids starting at 1.
///
/// # Returns
/// The generated ordered sequence.
pub fn generate(count: usize) -> Vec<Employee> {
    generate_with_rng(count, &mut rand::thread_rng())
}

/// Generate `count` rows using the supplied randomness source.
///
/// Seed the source (e.g. `StdRng::seed_from_u64`) for deterministic output.
///
/// # Returns
/// The generated ordered sequence.
pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<Employee> {
    (1..=count).map(|id| random_employee(id as u32, rng)).collect()
}

fn random_employee<R: Rng>(id: u32, rng: &mut R) -> Employee {
    let name = format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng));
    let job_title = Some(pick(JOB_TITLES, rng).to_string());
    let age = rng.gen_range(GENERATED_AGE_RANGE);
    let nickname = rng
        .gen_bool(NICKNAME_PROBABILITY)
        .then(|| pick(NICKNAMES, rng).to_string());
    Employee {
        id,
        name,
        job_title,
        age,
        nickname,
        is_employee: rng.gen_bool(0.5),
    }
}

fn pick<'a, R: Rng>(choices: &'a [&'a str], rng: &mut R) -> &'a str {
    choices[rng.gen_range(0..choices.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generate_with_rng(50, &mut rng);
        assert_eq!(rows.len(), 50);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, i as u32 + 1);
        }
    }

    #[test]
    fn same_seed_generates_identical_rows() {
        let a = generate_with_rng(100, &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(100, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn ages_stay_in_generation_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for row in generate_with_rng(500, &mut rng) {
            assert!(
                GENERATED_AGE_RANGE.contains(&row.age),
                "age {} outside generation range",
                row.age
            );
        }
    }

    #[test]
    fn names_come_from_the_word_lists() {
        let mut rng = StdRng::seed_from_u64(3);
        for row in generate_with_rng(200, &mut rng) {
            let mut parts = row.name.splitn(2, ' ');
            let first = parts.next().expect("first name");
            let last = parts.next().expect("last name");
            assert!(FIRST_NAMES.contains(&first), "unknown first name {first}");
            assert!(LAST_NAMES.contains(&last), "unknown last name {last}");
            let title = row.job_title.as_deref().expect("generated rows have titles");
            assert!(JOB_TITLES.contains(&title), "unknown job title {title}");
        }
    }

    #[test]
    fn nickname_rate_tracks_the_documented_probability() {
        let mut rng = StdRng::seed_from_u64(11);
        let rows = generate_with_rng(5_000, &mut rng);
        let with_nickname = rows.iter().filter(|r| r.nickname.is_some()).count();
        let rate = with_nickname as f64 / rows.len() as f64;
        assert!(
            (0.25..=0.35).contains(&rate),
            "nickname rate {rate} drifted from {NICKNAME_PROBABILITY}"
        );
    }
}
