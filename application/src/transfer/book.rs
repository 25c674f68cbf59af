use kernel::prelude::entity::{Book, DestructBook, SelectLimit, SelectOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub summary: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            published_year,
            summary,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            published_year: published_year.into(),
            summary: summary.map(Into::into),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct GetAllBookDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub summary: Option<String>,
}

pub struct UpdateBookDto {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub summary: Option<String>,
}

pub struct DeleteBookDto {
    pub id: i64,
}
