mod author;
mod draft;
mod id;
mod patch;
mod published_year;
mod summary;
mod title;

pub use self::{author::*, draft::*, id::*, patch::*, published_year::*, summary::*, title::*};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    published_year: PublishedYear,
    summary: Option<BookSummary>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        published_year: PublishedYear,
        summary: Option<BookSummary>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            published_year,
            summary,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
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

    pub fn into_destruct(self) -> DestructBook {
        DestructBook {
            id: self.id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
            summary: self.summary,
        }
    }
}

pub struct DestructBook {
    pub id: BookId,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub published_year: PublishedYear,
    pub summary: Option<BookSummary>,
}
