//! Package specifier sets.

use std::collections::HashSet;

/// Ordered set of package specifiers, de-duplicated by exact string.
///
/// `react@18` and `react@19` are different specifiers and are both kept;
/// [`PackageSet::conflicts`] reports such pairs so callers can warn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSet {
    specs: Vec<String>,
    seen: HashSet<String>,
}

/// Several specifiers that name the same package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConflict {
    /// Package name without version.
    pub name: String,
    /// The differing specifiers, in insertion order.
    pub specifiers: Vec<String>,
}

impl PackageSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a specifier. Returns false if the exact string was already present.
    pub fn insert(&mut self, spec: impl Into<String>) -> bool {
        let spec = spec.into();
        if self.seen.contains(&spec) {
            return false;
        }
        self.seen.insert(spec.clone());
        self.specs.push(spec);
        true
    }

    /// Add every specifier from `specs`.
    pub fn extend<I, S>(&mut self, specs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for spec in specs {
            self.insert(spec);
        }
    }

    /// Check membership by exact specifier.
    pub fn contains(&self, spec: &str) -> bool {
        self.seen.contains(spec)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Specifiers in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.specs
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.specs.iter()
    }

    /// Packages requested with more than one distinct specifier.
    pub fn conflicts(&self) -> Vec<PackageConflict> {
        let mut conflicts: Vec<PackageConflict> = Vec::new();
        for spec in &self.specs {
            let name = package_name(spec);
            match conflicts.iter_mut().find(|c| c.name == name) {
                Some(existing) => existing.specifiers.push(spec.clone()),
                None => conflicts.push(PackageConflict {
                    name: name.to_string(),
                    specifiers: vec![spec.clone()],
                }),
            }
        }
        conflicts.retain(|c| c.specifiers.len() > 1);
        conflicts
    }
}

impl<'a> IntoIterator for &'a PackageSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

/// Package name of a specifier: `lucide-react@latest` -> `lucide-react`,
/// `@radix-ui/react-slot@1.0.2` -> `@radix-ui/react-slot`.
pub fn package_name(spec: &str) -> &str {
    match spec.rfind('@') {
        Some(idx) if idx > 0 => &spec[..idx],
        _ => spec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_duplicates_collapse() {
        let mut set = PackageSet::new();
        assert!(set.insert("clsx"));
        assert!(!set.insert("clsx"));
        set.extend(["tailwind-merge", "clsx"]);
        assert_eq!(set.as_slice(), &["clsx", "tailwind-merge"]);
    }

    #[test]
    fn different_versions_are_both_kept() {
        let mut set = PackageSet::new();
        set.extend(["class-variance-authority@latest", "class-variance-authority"]);
        assert_eq!(set.len(), 2);

        let conflicts = set.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].name, "class-variance-authority");
        assert_eq!(
            conflicts[0].specifiers,
            vec!["class-variance-authority@latest", "class-variance-authority"]
        );
    }

    #[test]
    fn no_conflicts_for_distinct_packages() {
        let mut set = PackageSet::new();
        set.extend(["lucide-react@latest", "clsx"]);
        assert!(set.conflicts().is_empty());
    }

    #[test]
    fn package_name_handles_scopes() {
        assert_eq!(package_name("lucide-react@latest"), "lucide-react");
        assert_eq!(package_name("@radix-ui/react-slot"), "@radix-ui/react-slot");
        assert_eq!(package_name("@radix-ui/react-slot@1.0.2"), "@radix-ui/react-slot");
        assert_eq!(package_name("clsx"), "clsx");
    }
}
