//! Test factories for issuedeck types.
//!
//! Factory functions for creating test objects shared across test modules.
//! Use `*_with()` variants to customize specific fields.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories;
//!
//! let issue = factories::issue_with(|i| {
//!     i.number = 42;
//!     i.labels = vec![factories::label("critical")];
//! });
//! ```

pub mod factories {
    use chrono::{TimeZone, Utc};

    use crate::github::models::{Issue, IssueState, Label, User};
    use crate::issues::category::CategoryTable;
    use crate::plan::model::{Plan, ScheduledItem, WeekBucket};
    use crate::shared::config::CategoryConfig;

    /// Create a Label with default test values.
    pub fn label(name: &str) -> Label {
        Label {
            id: 1,
            name: name.to_string(),
            color: "d73a4a".to_string(),
            description: None,
        }
    }

    pub fn user(login: &str) -> User {
        User {
            login: login.to_string(),
            avatar_url: format!("https://avatars.example.com/{login}"),
        }
    }

    /// Create an Issue with default test values.
    pub fn issue() -> Issue {
        Issue {
            id: 1000,
            number: 1,
            title: "Test Issue".to_string(),
            body: Some("Test body".to_string()),
            state: IssueState::Open,
            labels: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap(),
            user: user("testuser"),
            html_url: "https://github.com/owner/repo/issues/1".to_string(),
        }
    }

    /// Create an Issue with customizations applied via closure.
    pub fn issue_with(f: impl FnOnce(&mut Issue)) -> Issue {
        let mut i = issue();
        f(&mut i);
        i
    }

    /// A three-category table: backend, frontend and strapi tabs plus the
    /// built-in "all".
    pub fn category_table() -> CategoryTable {
        CategoryTable::from_config(&[
            category_config("backend", "Backend", "medusa-backend"),
            category_config("frontend", "Frontend", "medusa-frontend"),
            category_config("strapi", "Strapi", "strapi-cms"),
        ])
    }

    pub fn category_config(id: &str, label: &str, label_name: &str) -> CategoryConfig {
        CategoryConfig {
            id: id.to_string(),
            label: label.to_string(),
            label_name: label_name.to_string(),
            color: "888888".to_string(),
        }
    }

    pub fn week(id: &str, label: &str, start: &str, end: &str) -> WeekBucket {
        WeekBucket {
            id: id.to_string(),
            label: label.to_string(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
        }
    }

    pub fn scheduled_item(number: u64, priority: &str, status: IssueState) -> ScheduledItem {
        ScheduledItem {
            number,
            title: format!("Item #{number}"),
            category: "frontend".to_string(),
            priority: priority.to_string(),
            status,
        }
    }

    /// A plan with the week buckets inserted in order and no items.
    pub fn empty_plan(weeks: Vec<WeekBucket>) -> Plan {
        let items = weeks.iter().map(|w| (w.id.clone(), Vec::new())).collect();
        Plan { weeks, items }
    }
}
