use crate::entity::{BookAuthor, BookSummary, BookTitle, PublishedYear};
use crate::KernelError;

/// Full input shape for creation. Everything except the summary is required,
/// and every present field has passed its constraint.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDraft {
    title: BookTitle,
    author: BookAuthor,
    published_year: PublishedYear,
    summary: Option<BookSummary>,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: i32,
        summary: Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            title: BookTitle::try_new(title)?,
            author: BookAuthor::try_new(author)?,
            published_year: PublishedYear::try_new(published_year)?,
            summary: summary.map(BookSummary::try_new).transpose()?,
        })
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn published_year(&self) -> &PublishedYear {
        &self.published_year
    }

    pub fn summary(&self) -> Option<&BookSummary> {
        self.summary.as_ref()
    }
}
