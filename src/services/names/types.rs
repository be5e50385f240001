use serde::Serialize;

use crate::services::introspection::format::compare_names;

/// The bus's registered names, split into the two display groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceNames {
    /// Well-known service names, sorted case-insensitively.
    pub public: Vec<String>,
    /// Unique connection names (starting with `:`), sorted case-insensitively.
    pub private: Vec<String>,
}

impl ServiceNames {
    /// Partitions a raw name list into public and private groups.
    ///
    /// Sorting is plain case-insensitive string comparison, so unique names
    /// order lexically rather than numerically.
    pub fn partition(names: impl IntoIterator<Item = String>) -> Self {
        let mut groups = Self::default();
        for name in names {
            if name.starts_with(':') {
                groups.private.push(name);
            } else {
                groups.public.push(name);
            }
        }

        groups.public.sort_by(|a, b| compare_names(a, b));
        groups.private.sort_by(|a, b| compare_names(a, b));
        groups
    }
}

/// A change in bus name ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    /// A name appeared on the bus.
    Appeared(String),
    /// A name vanished from the bus.
    Vanished(String),
    /// A name moved from one owner to another.
    OwnerChanged {
        /// The name whose owner changed.
        name: String,
        /// Previous owning connection.
        old_owner: String,
        /// New owning connection.
        new_owner: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_and_sorts_case_insensitively() {
        let groups = ServiceNames::partition(
            [":1.42", "org.foo.Bar", ":1.7", "org.baz.Qux"]
                .into_iter()
                .map(String::from),
        );

        assert_eq!(groups.public, vec!["org.baz.Qux", "org.foo.Bar"]);
        assert_eq!(groups.private, vec![":1.42", ":1.7"]);
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let groups = ServiceNames::partition(Vec::new());
        assert!(groups.public.is_empty());
        assert!(groups.private.is_empty());
    }
}
