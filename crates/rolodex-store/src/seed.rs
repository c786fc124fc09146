use rolodex_types::User;

/// Bootstrap collection used the first time a store is opened.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "James", "Smith", 25, "james@example.com"),
        User::new(2, "Mia", "Parker", 17, "mia@example.com"),
        User::new(3, "Alex", "Turner", 30, "alex@example.com"),
        User::new(4, "Helen", "Carter", 22, "helen@example.com"),
        User::new(5, "Daniel", "Frost", 19, "daniel@example.com"),
        User::new(6, "Anna", "Wells", 28, "anna@example.com"),
        User::new(7, "Simon", "Baker", 35, "simon@example.com"),
        User::new(8, "Olivia", "Moore", 24, "olivia@example.com"),
        User::new(9, "Andrew", "Kent", 21, "andrew@example.com"),
        User::new(10, "Tanya", "Price", 29, "tanya@example.com"),
        User::new(11, "Michael", "Lane", 31, "michael@example.com"),
        User::new(12, "Natalie", "Cole", 26, "natalie@example.com"),
        User::new(13, "Dennis", "Reed", 23, "dennis@example.com"),
        User::new(14, "Kate", "Vaughn", 27, "kate@example.com"),
        User::new(15, "Roman", "Pierce", 32, "roman@example.com"),
        User::new(16, "Irene", "Shaw", 20, "irene@example.com"),
        User::new(17, "Victor", "Mason", 33, "victor@example.com"),
        User::new(18, "Sandra", "Dean", 22, "sandra@example.com"),
    ]
}
