//! View Filter
//!
//! Which subset of the list is shown; driven by the `#/:filter` route.

use serde::{Deserialize, Serialize};

use super::TodoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter in footer link order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Route segment for this filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Unrecognized segments fall back to `All`
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Footer link label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_parsing() {
        assert_eq!(Filter::from_segment("active"), Filter::Active);
        assert_eq!(Filter::from_segment("completed"), Filter::Completed);
        assert_eq!(Filter::from_segment("all"), Filter::All);
        assert_eq!(Filter::from_segment("Active"), Filter::All);
        assert_eq!(Filter::from_segment("bogus"), Filter::All);
    }

    #[test]
    fn test_as_str_roundtrips() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_segment(filter.as_str()), filter);
        }
    }

    #[test]
    fn test_matches() {
        let open = TodoItem::new(0, "open");
        let mut done = TodoItem::new(1, "done");
        done.completed = true;

        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open) && Filter::Completed.matches(&done));
    }
}
