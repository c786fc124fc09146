use fastrace::trace;
use rolodex_types::{SortKey, User};

/// A minimum age of zero means "no filter", not a literal threshold.
#[trace]
pub fn filter_by_min_age(users: Vec<User>, min_age: u32) -> Vec<User> {
    if min_age == 0 {
        return users;
    }
    users.into_iter().filter(|user| user.age >= min_age).collect()
}

#[trace]
pub fn sort_users(mut users: Vec<User>, key: Option<SortKey>) -> Vec<User> {
    match key {
        Some(SortKey::Name) => users.sort_by_cached_key(name_sort_key),
        Some(SortKey::Age) => users.sort_by_key(|user| user.age),
        None => {}
    }
    users
}

fn name_sort_key(user: &User) -> String {
    user.full_name().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, first: &str, last: &str, age: u32) -> User {
        User::new(id, first, last, age, "test@example.com")
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Carol", "Young", 30),
            user(2, "alice", "Brown", 22),
            user(3, "Bob", "Adams", 30),
            user(4, "Dave", "King", 19),
        ]
    }

    #[test]
    fn test_zero_min_age_is_identity() {
        let users = sample();
        assert_eq!(filter_by_min_age(users.clone(), 0), users);
    }

    #[test]
    fn test_filter_keeps_exactly_the_matching_records() {
        let users = sample();
        let filtered = filter_by_min_age(users.clone(), 22);

        assert!(filtered.iter().all(|user| user.age >= 22));
        for original in users.iter().filter(|user| user.age >= 22) {
            assert_eq!(
                filtered.iter().filter(|user| user.id == original.id).count(),
                1
            );
        }
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_age_sort_is_ascending() {
        let sorted = sort_users(sample(), Some(SortKey::Age));
        let ages: Vec<u32> = sorted.iter().map(|user| user.age).collect();
        assert_eq!(ages, vec![19, 22, 30, 30]);
    }

    #[test]
    fn test_age_sort_is_stable() {
        // Ids 1 and 3 share an age; 1 comes first in the input.
        let sorted = sort_users(sample(), Some(SortKey::Age));
        let ids: Vec<u64> = sorted.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_age_sort_is_idempotent() {
        let once = sort_users(sample(), Some(SortKey::Age));
        let twice = sort_users(once.clone(), Some(SortKey::Age));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let sorted = sort_users(sample(), Some(SortKey::Name));
        let names: Vec<String> = sorted.iter().map(|user| user.full_name()).collect();
        assert_eq!(names, vec!["alice Brown", "Bob Adams", "Carol Young", "Dave King"]);
    }

    #[test]
    fn test_no_sort_key_is_identity() {
        let users = sample();
        assert_eq!(sort_users(users.clone(), None), users);
    }
}
