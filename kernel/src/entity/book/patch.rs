use crate::entity::{Book, BookAuthor, BookSummary, BookTitle, DestructBook, PublishedYear};
use crate::KernelError;

/// Partial input shape for update. Only present fields are validated, and
/// only present fields are applied by [`BookPatch::merge_into`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookPatch {
    title: Option<BookTitle>,
    author: Option<BookAuthor>,
    published_year: Option<PublishedYear>,
    summary: Option<BookSummary>,
}

impl BookPatch {
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        published_year: Option<i32>,
        summary: Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            title: title.map(BookTitle::try_new).transpose()?,
            author: author.map(BookAuthor::try_new).transpose()?,
            published_year: published_year.map(PublishedYear::try_new).transpose()?,
            summary: summary.map(BookSummary::try_new).transpose()?,
        })
    }

    /// Field-by-field merge: a present field replaces the stored value, an
    /// absent field keeps it.
    pub fn merge_into(self, book: Book) -> Book {
        let DestructBook {
            id,
            title,
            author,
            published_year,
            summary,
        } = book.into_destruct();
        Book::new(
            id,
            self.title.unwrap_or(title),
            self.author.unwrap_or(author),
            self.published_year.unwrap_or(published_year),
            match self.summary {
                Some(new) => Some(new),
                None => summary,
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::BookPatch;
    use crate::entity::{Book, BookAuthor, BookId, BookSummary, BookTitle, PublishedYear};

    fn stored_book() -> Book {
        Book::new(
            BookId::new(1i64),
            BookTitle::new("Old Title"),
            BookAuthor::new("Old Author"),
            PublishedYear::new(1990),
            Some(BookSummary::new("Old summary")),
        )
    }

    #[test]
    fn empty_patch_is_valid_and_keeps_everything() {
        let patch = BookPatch::new(None, None, None, None).unwrap();
        let merged = patch.merge_into(stored_book());
        assert_eq!(merged, stored_book());
    }

    #[test]
    fn merges_only_present_fields() {
        let patch = BookPatch::new(Some("New Title".to_string()), None, Some(2001), None).unwrap();
        let merged = patch.merge_into(stored_book());
        assert_eq!(merged.title().as_ref(), "New Title");
        assert_eq!(*merged.published_year().as_ref(), 2001);
        assert_eq!(merged.author().as_ref(), "Old Author");
        assert_eq!(merged.summary().map(AsRef::as_ref), Some("Old summary"));
    }

    #[test]
    fn present_fields_are_trimmed() {
        let patch = BookPatch::new(None, Some("  New Author ".to_string()), None, None).unwrap();
        let merged = patch.merge_into(stored_book());
        assert_eq!(merged.author().as_ref(), "New Author");
    }

    #[test]
    fn rejects_present_invalid_fields() {
        assert!(BookPatch::new(Some("  ".to_string()), None, None, None).is_err());
        assert!(BookPatch::new(None, Some(String::new()), None, None).is_err());
        assert!(BookPatch::new(None, None, Some(999), None).is_err());
        assert!(BookPatch::new(None, None, Some(9999), None).is_err());
    }
}
