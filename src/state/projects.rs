//! Portfolio project filter.
//!
//! Hiding is delayed so the fade-out can play. Every click starts a new
//! generation; a delayed hide only runs if its generation is still current,
//! so a card shown again by a later click is never hidden by an older one.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

/// Cards to show immediately and cards to hide after the delay, by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: u64,
    pub show: Vec<usize>,
    pub hide: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    active: String,
    generation: u64,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { active: FILTER_ALL.to_owned(), generation: 0 }
    }
}

impl ProjectFilter {
    /// Apply `filter` to cards with the given `data-category` values.
    pub fn apply(&mut self, filter: &str, categories: &[Option<&str>]) -> FilterPlan {
        filter.clone_into(&mut self.active);
        self.generation += 1;
        let (show, hide): (Vec<usize>, Vec<usize>) = (0..categories.len()).partition(|&i| matches(filter, categories[i]));
        FilterPlan { generation: self.generation, show, hide }
    }

    /// Whether a delayed hide from `generation` may still run.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }
}

#[must_use]
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}
