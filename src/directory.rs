//! The contact directory: an ordered, duplicate-checked collection of contacts.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, ContactUpdate};
use tracing::{debug, warn};

/// Selects which location field a query operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    City,
    State,
}

impl LocationField {
    /// The field's value on a given contact, as stored.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Self::City => contact.city.as_str(),
            Self::State => contact.state.as_str(),
        }
    }

    /// Case-insensitive match of the field against a raw string.
    fn matches(&self, contact: &Contact, value: &str) -> bool {
        match self {
            Self::City => contact.city.matches(value),
            Self::State => contact.state.matches(value),
        }
    }
}

/// An ordered collection of [`Contact`] records.
///
/// Entries keep insertion order until one of the `sort_by_*` operations
/// reorders them. At most one entry exists per case-insensitive
/// (first name, last name) pair; [`Directory::add`] rejects collisions.
///
/// The directory is a plain value with no interior mutability; callers in
/// a multi-threaded setting wrap it in their own lock.
///
/// # Example
///
/// ```
/// use address_book::{Contact, Directory};
///
/// let mut directory = Directory::new();
/// let contact = Contact::new(
///     "Jasmine", "Bake", "123 Mango street", "Shimla",
///     "Kashmir", "62704", "9876543210", "bake@example.com",
/// )?;
/// directory.add(contact)?;
/// assert_eq!(directory.count(), 1);
/// # Ok::<(), address_book::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact, rejecting case-insensitive name collisions.
    ///
    /// On success the contact is appended, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Duplicate`] naming the existing entry if
    /// one already matches the contact's (first name, last name) pair;
    /// the collection is left unchanged.
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        if let Some(existing) = self
            .contacts
            .iter()
            .find(|c| c.matches_name(contact.first_name.as_str(), contact.last_name.as_str()))
        {
            warn!(
                name = %existing.full_name(),
                "rejected duplicate contact"
            );
            return Err(DirectoryError::Duplicate {
                first_name: existing.first_name.to_string(),
                last_name: existing.last_name.to_string(),
            });
        }

        debug!(name = %contact.full_name(), "added contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// Remove every entry matching the case-insensitive name pair and
    /// return how many were removed.
    ///
    /// Zero matches is not an error. `add` keeps the name pair unique, but
    /// this tolerates a collection that reached a duplicate state through
    /// other means.
    pub fn remove(&mut self, first_name: &str, last_name: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| !c.matches_name(first_name, last_name));
        let removed = before - self.contacts.len();
        if removed > 0 {
            debug!(first_name, last_name, removed, "removed contacts");
        }
        removed
    }

    /// Remove the entry matching the name pair, failing if none exists.
    ///
    /// Same matching as [`Directory::remove`], but absence is reported as
    /// an error instead of a zero count.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when nothing matched; the
    /// collection is unchanged.
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> DirectoryResult<()> {
        if self.remove(first_name, last_name) == 0 {
            return Err(DirectoryError::NotFound {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            });
        }
        Ok(())
    }

    /// All entries matching the case-insensitive name pair, in order.
    pub fn find(&self, first_name: &str, last_name: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.matches_name(first_name, last_name))
            .collect()
    }

    /// Apply partial field updates to the first entry matching the name
    /// pair, re-validating every resulting field.
    ///
    /// The merged record is validated with the same rules as construction
    /// before the stored entry is replaced, so a failing update leaves the
    /// original entry untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when no entry matches, or
    /// [`DirectoryError::Validation`] when a merged field fails its rule.
    pub fn edit(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> DirectoryResult<&Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.matches_name(first_name, last_name))
            .ok_or_else(|| DirectoryError::NotFound {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })?;

        let updated = match update.apply_to(&self.contacts[index]) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(first_name, last_name, error = %err, "rejected invalid edit");
                return Err(err.into());
            }
        };

        debug!(name = %updated.full_name(), "edited contact");
        self.contacts[index] = updated;
        Ok(&self.contacts[index])
    }

    /// Number of entries currently held.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// True when the directory holds no entries.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over all entries in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// All entries in current order, as a slice.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// All entries whose city or state matches `value` case-insensitively,
    /// in current order. An empty result is not an error.
    pub fn find_by_location(&self, field: LocationField, value: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| field.matches(c, value))
            .collect()
    }

    /// Partition all entries by the as-stored value of the chosen field.
    ///
    /// Group order is first-occurrence order and each group keeps its
    /// members' relative order, so the result is deterministic. Every
    /// entry lands in exactly one group.
    pub fn group_by_location(&self, field: LocationField) -> Vec<(String, Vec<&Contact>)> {
        let mut groups: Vec<(String, Vec<&Contact>)> = Vec::new();
        for contact in &self.contacts {
            let value = field.value_of(contact);
            match groups.iter_mut().find(|(key, _)| key == value) {
                Some((_, members)) => members.push(contact),
                None => groups.push((value.to_string(), vec![contact])),
            }
        }
        groups
    }

    /// Per-value entry counts for the chosen field, first-occurrence order.
    pub fn count_by_location(&self, field: LocationField) -> Vec<(String, usize)> {
        self.group_by_location(field)
            .into_iter()
            .map(|(value, members)| (value, members.len()))
            .collect()
    }

    /// Sort entries in place by "first last" name, case-insensitively.
    ///
    /// The sort is stable: ties keep their prior relative order. The new
    /// order persists for all subsequent operations.
    pub fn sort_by_name(&mut self) {
        self.contacts
            .sort_by_cached_key(|c| c.full_name().to_lowercase());
    }

    /// Sort entries in place by city, case-insensitively. Stable.
    pub fn sort_by_city(&mut self) {
        self.contacts
            .sort_by_cached_key(|c| c.city.as_str().to_lowercase());
    }

    /// Sort entries in place by state, case-insensitively. Stable.
    pub fn sort_by_state(&mut self) {
        self.contacts
            .sort_by_cached_key(|c| c.state.as_str().to_lowercase());
    }

    /// Sort entries in place by zip, compared as a string. Stable.
    pub fn sort_by_zip(&mut self) {
        self.contacts
            .sort_by_cached_key(|c| c.zip.as_str().to_string());
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str, city: &str, state: &str, zip: &str) -> Contact {
        Contact::new(
            first,
            last,
            "123 Mango street",
            city,
            state,
            zip,
            "9876543210",
            "person@example.com",
        )
        .unwrap()
    }

    fn names(directory: &Directory) -> Vec<String> {
        directory.iter().map(|c| c.full_name()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        assert_eq!(names(&directory), vec!["Jasmine Bake", "Sujal Rathore"]);
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();

        let err = directory
            .add(contact("jasmine", "BAKE", "Kolkata", "Bengal", "60616"))
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Duplicate { .. }));
        // Reported name is the stored entry's casing
        assert!(err.to_string().contains("Jasmine Bake"));
        assert_eq!(directory.count(), 1);
    }

    #[test]
    fn test_remove_returns_count() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        assert_eq!(directory.remove("JASMINE", "bake"), 1);
        assert_eq!(directory.remove("Jasmine", "Bake"), 0);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_delete_reports_not_found() {
        let mut directory = Directory::new();
        let err = directory.delete("Amit", "Sharma").unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));

        directory.add(contact("Amit", "Sharma", "Shimla", "Kashmir", "62704")).unwrap();
        directory.delete("amit", "sharma").unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        assert_eq!(directory.find("JASMINE", "bake").len(), 1);
        assert!(directory.find("Jasmine", "Rathore").is_empty());
    }

    #[test]
    fn test_edit_revalidates_and_preserves_on_failure() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();

        let bad = ContactUpdate {
            zip: Some("abc".to_string()),
            ..Default::default()
        };
        let err = directory.edit("Jasmine", "Bake", &bad).unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
        assert_eq!(directory.find("Jasmine", "Bake")[0].zip.as_str(), "62704");

        let good = ContactUpdate {
            city: Some("Kolkata".to_string()),
            ..Default::default()
        };
        let updated = directory.edit("jasmine", "bake", &good).unwrap();
        assert_eq!(updated.city.as_str(), "Kolkata");
    }

    #[test]
    fn test_edit_missing_contact() {
        let mut directory = Directory::new();
        let err = directory
            .edit("Nobody", "Here", &ContactUpdate::default())
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));
        assert_eq!(directory.count(), 0);
    }

    #[test]
    fn test_find_by_location() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        directory.add(contact("Amit", "Sharma", "Shimla", "Punjab", "12345")).unwrap();

        let shimla = directory.find_by_location(LocationField::City, "shimla");
        assert_eq!(shimla.len(), 2);
        assert_eq!(shimla[0].full_name(), "Jasmine Bake");
        assert_eq!(shimla[1].full_name(), "Amit Sharma");

        assert!(directory.find_by_location(LocationField::State, "Goa West").is_empty());
    }

    #[test]
    fn test_group_by_location_first_occurrence_order() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        directory.add(contact("Amit", "Sharma", "Shimla", "Punjab", "12345")).unwrap();

        let groups = directory.group_by_location(LocationField::City);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Shimla");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Kolkata");

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, directory.count());
    }

    #[test]
    fn test_count_by_location() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        directory.add(contact("Amit", "Sharma", "Shimla", "Punjab", "12345")).unwrap();

        let counts = directory.count_by_location(LocationField::City);
        assert_eq!(
            counts,
            vec![("Shimla".to_string(), 2), ("Kolkata".to_string(), 1)]
        );
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut directory = Directory::new();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        directory.add(contact("Amit", "Sharma", "Shimla", "Punjab", "12345")).unwrap();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();

        directory.sort_by_name();
        assert_eq!(
            names(&directory),
            vec!["Amit Sharma", "Jasmine Bake", "Sujal Rathore"]
        );
    }

    #[test]
    fn test_sort_by_zip_is_stable_and_idempotent() {
        let mut directory = Directory::new();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "12345")).unwrap();
        directory.add(contact("Amit", "Sharma", "Shimla", "Punjab", "12345")).unwrap();

        directory.sort_by_zip();
        let once = names(&directory);
        // Tied zips keep prior relative order
        assert_eq!(once, vec!["Sujal Rathore", "Amit Sharma", "Jasmine Bake"]);

        directory.sort_by_zip();
        assert_eq!(names(&directory), once);
    }

    #[test]
    fn test_sort_persists_for_subsequent_operations() {
        let mut directory = Directory::new();
        directory.add(contact("Sujal", "Rathore", "Kolkata", "Bengal", "60616")).unwrap();
        directory.add(contact("Jasmine", "Bake", "Shimla", "Kashmir", "62704")).unwrap();

        directory.sort_by_city();
        let groups = directory.group_by_location(LocationField::City);
        assert_eq!(groups[0].0, "Kolkata");
    }
}
