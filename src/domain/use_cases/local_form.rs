use super::title_case;
use crate::{domain::entities::Draft, interfaces::notifications::Notifier};

/// Controller for a section with no remote persistence (contact
/// details): a single draft that is kept in memory and acknowledged with
/// a notification on save. Nothing survives a restart.
pub struct LocalForm<T: Draft> {
    notifier: Notifier,
    label_plural: &'static str,
    draft: T,
}

impl<T: Draft> LocalForm<T> {
    pub fn new(notifier: Notifier, label_plural: &'static str) -> Self {
        LocalForm {
            notifier,
            label_plural,
            draft: T::empty(),
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Acknowledges the local save. The draft is retained so the section
    /// keeps displaying what was "saved". Local saves complete
    /// synchronously, so there is no in-flight state to guard.
    pub fn submit(&mut self) -> bool {
        self.notifier
            .success(format!("{} saved locally", title_case(self.label_plural)));
        true
    }
}

/// Controller for the local-only list sections (hobbies, books): an
/// append-style list of drafts with the usual minimum-length rule.
pub struct LocalListForm<T: Draft> {
    notifier: Notifier,
    label_plural: &'static str,
    entries: Vec<T>,
}

impl<T: Draft> LocalListForm<T> {
    pub fn new(notifier: Notifier, label_plural: &'static str) -> Self {
        LocalListForm {
            notifier,
            label_plural,
            entries: vec![T::empty()],
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn add_entry(&mut self) {
        self.entries.push(T::empty());
    }

    /// No-op if only one entry remains.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn submit(&mut self) -> bool {
        self.notifier
            .success(format!("{} saved locally", title_case(self.label_plural)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{book::Book, contact::ContactInfo, hobby::Hobby};
    use crate::interfaces::notifications::NotificationKind;

    #[test]
    fn local_save_raises_a_success_notification_and_keeps_the_draft() {
        let notifier = Notifier::new();
        let mut form: LocalForm<ContactInfo> =
            LocalForm::new(notifier.clone(), ContactInfo::LABEL_PLURAL);
        form.draft_mut().email = "me@example.com".into();

        assert!(form.submit());
        assert_eq!(form.draft().email, "me@example.com");
        let toast = &notifier.snapshot()[0];
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "Contact details saved locally");
    }

    #[test]
    fn hobby_list_keeps_at_least_one_entry() {
        let mut form: LocalListForm<Hobby> =
            LocalListForm::new(Notifier::new(), Hobby::LABEL_PLURAL);

        assert!(!form.remove_entry(0));
        form.add_entry();
        form.add_entry();
        assert!(form.remove_entry(2));
        assert!(form.remove_entry(1));
        assert!(!form.remove_entry(0));
        assert_eq!(form.entries().len(), 1);
    }

    #[test]
    fn book_entries_are_edited_in_place() {
        let mut form: LocalListForm<Book> =
            LocalListForm::new(Notifier::new(), Book::LABEL_PLURAL);
        let entry = form.entry_mut(0).unwrap();
        entry.title = "The Rust Programming Language".into();
        entry.set_rating(9);

        assert_eq!(form.entries()[0].rating, 5);
    }
}
