use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::geom::Vec2;

/// Vertical cross-section through the model, defined by two map-view
/// endpoints. `dist` is the section length, precomputed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub start: Vec2,
    pub stop: Vec2,
    pub dist: f64,
}

impl Section {
    #[must_use]
    pub fn new(start: Vec2, stop: Vec2) -> Self {
        Self {
            start,
            stop,
            dist: (stop - start).length(),
        }
    }

    /// Section direction vector (stop - start), not normalized.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.stop - self.start
    }
}

/// Named section lookup. Names are unique; the name `"topography"` is
/// reserved for the topography-projection mode and cannot hold a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sections {
    sections: BTreeMap<String, Section>,
}

/// Section name that selects topography projection instead of a plane.
pub const TOPOGRAPHY_SECTION_NAME: &str = "topography";

impl Sections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, section: Section) -> Result<(), ModelError> {
        let name = name.into();
        if name == TOPOGRAPHY_SECTION_NAME {
            return Err(ModelError::ReservedSectionName { name });
        }
        if self.sections.contains_key(&name) {
            return Err(ModelError::DuplicateSection { name });
        }
        self.sections.insert(name, section);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn section_precomputes_length() {
        let s = Section::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((s.dist - 5.0).abs() < EPS);
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn names_are_unique() {
        let mut sections = Sections::new();
        let s = Section::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        sections.insert("s1", s).unwrap();
        assert!(matches!(
            sections.insert("s1", s),
            Err(ModelError::DuplicateSection { .. })
        ));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn topography_name_is_reserved() {
        let mut sections = Sections::new();
        let s = Section::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(matches!(
            sections.insert(TOPOGRAPHY_SECTION_NAME, s),
            Err(ModelError::ReservedSectionName { .. })
        ));
    }
}
