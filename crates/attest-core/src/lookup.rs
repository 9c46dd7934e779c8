//! Typed id → record maps for cross-resource joins.
//!
//! Build one per fetch and drop it with the command; nothing is cached
//! across commands.

use std::collections::HashMap;

use crate::entities::Identified;

/// Index of records by backend id.
#[derive(Debug, Clone)]
pub struct IdIndex<T> {
    by_id: HashMap<i64, T>,
}

impl<T: Identified> IdIndex<T> {
    /// Later duplicates replace earlier ones.
    #[must_use]
    pub fn build(records: Vec<T>) -> Self {
        let by_id = records.into_iter().map(|r| (r.id(), r)).collect();
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&T> {
        self.by_id.get(&id)
    }

    /// Display label for `id`, or `#<id>` when the record is not indexed.
    #[must_use]
    pub fn name_of(&self, id: i64) -> String {
        self.get(id)
            .map_or_else(|| format!("#{id}"), |r| r.label().to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<T: Identified> FromIterator<T> for IdIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Project;

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: None,
            organization_id: 1,
            is_active: true,
            user_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn name_of_known_and_unknown_ids() {
        let index = IdIndex::build(vec![project(1, "Payments"), project(2, "Mobile")]);
        assert_eq!(index.name_of(2), "Mobile");
        assert_eq!(index.name_of(9), "#9");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn collects_from_iterator() {
        let index: IdIndex<Project> = vec![project(5, "Core")].into_iter().collect();
        assert_eq!(index.get(5).map(|p| p.name.as_str()), Some("Core"));
        assert!(!index.is_empty());
    }
}
