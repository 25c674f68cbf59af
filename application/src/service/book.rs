use kernel::interface::database::{DependOnDatabaseConnection, QueryDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookDraft, BookId, BookPatch};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    /// Absence is a normal result, not an error.
    async fn get_book(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut con, &id).await?;
        Ok(book.map(BookDto::from))
    }
}

impl<Connection: 'static + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let books = self
            .book_query()
            .get_all(&mut con, &dto.limit, &dto.offset)
            .await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetAllBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Validates the full input shape, persists it and returns the stored
    /// record with its assigned id.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let draft = BookDraft::new(dto.title, dto.author, dto.published_year, dto.summary)?;

        let mut con = self.database_connection().transact().await?;
        let book = self.book_modifier().create(&mut con, &draft).await?;
        Ok(BookDto::from(book))
    }
}

impl<Connection: 'static + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Validates the partial shape first, then applies only the present
    /// fields. An unknown id performs no write and returns `None`.
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let patch = BookPatch::new(dto.title, dto.author, dto.published_year, dto.summary)?;

        let mut con = self.database_connection().transact().await?;
        let id = BookId::new(dto.id);
        let Some(book) = self.book_query().find_by_id(&mut con, &id).await? else {
            return Ok(None);
        };

        let book = patch.merge_into(book);
        self.book_modifier().update(&mut con, &book).await?;
        Ok(Some(BookDto::from(book)))
    }
}

impl<Connection: 'static + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Returns `false` when the id does not exist; the first delete of an
    /// existing id returns `true`, a second one `false`.
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<bool, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut con, &id).await
    }
}

impl<Connection: 'static + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::{BookQuery, DependOnBookQuery};
    use kernel::interface::update::{BookModifier, DependOnBookModifier};
    use kernel::prelude::entity::{
        Book, BookDraft, BookId, SelectLimit, SelectOffset,
    };
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBookService, GetBookService,
        UpdateBookService,
    };
    use crate::transfer::{
        CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
    };

    #[derive(Default)]
    struct MockStore {
        sequence: i64,
        rows: BTreeMap<i64, Book>,
    }

    type MockConnection = Arc<Mutex<MockStore>>;

    #[derive(Default)]
    struct MockDatabase {
        store: MockConnection,
    }

    #[async_trait::async_trait]
    impl QueryDatabaseConnection<MockConnection> for MockDatabase {
        async fn transact(&self) -> error_stack::Result<MockConnection, KernelError> {
            Ok(Arc::clone(&self.store))
        }
    }

    struct MockBookRepository;

    #[async_trait::async_trait]
    impl BookQuery<MockConnection> for MockBookRepository {
        async fn find_by_id(
            &self,
            con: &mut MockConnection,
            id: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            let store = con.lock().unwrap();
            Ok(store.rows.get(id.as_ref()).cloned())
        }

        async fn get_all(
            &self,
            con: &mut MockConnection,
            limit: &SelectLimit,
            offset: &SelectOffset,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            let store = con.lock().unwrap();
            let offset = i64::from(offset.clone()).max(0) as usize;
            let limit = i64::from(limit.clone()).max(0) as usize;
            Ok(store
                .rows
                .values()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    #[async_trait::async_trait]
    impl BookModifier<MockConnection> for MockBookRepository {
        async fn create(
            &self,
            con: &mut MockConnection,
            draft: &BookDraft,
        ) -> error_stack::Result<Book, KernelError> {
            let mut store = con.lock().unwrap();
            store.sequence += 1;
            let book = Book::new(
                BookId::new(store.sequence),
                draft.title().clone(),
                draft.author().clone(),
                draft.published_year().clone(),
                draft.summary().cloned(),
            );
            let sequence = store.sequence;
            store.rows.insert(sequence, book.clone());
            Ok(book)
        }

        async fn update(
            &self,
            con: &mut MockConnection,
            book: &Book,
        ) -> error_stack::Result<(), KernelError> {
            let mut store = con.lock().unwrap();
            store.rows.insert(*book.id().as_ref(), book.clone());
            Ok(())
        }

        async fn delete(
            &self,
            con: &mut MockConnection,
            book_id: &BookId,
        ) -> error_stack::Result<bool, KernelError> {
            let mut store = con.lock().unwrap();
            Ok(store.rows.remove(book_id.as_ref()).is_some())
        }
    }

    impl DependOnBookQuery<MockConnection> for MockDatabase {
        type BookQuery = MockBookRepository;
        fn book_query(&self) -> &Self::BookQuery {
            &MockBookRepository
        }
    }

    impl DependOnBookModifier<MockConnection> for MockDatabase {
        type BookModifier = MockBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &MockBookRepository
        }
    }

    fn create_dto(title: &str, author: &str) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: author.to_string(),
            published_year: 2001,
            summary: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() {
        let db = MockDatabase::default();
        let created = db
            .create_book(CreateBookDto {
                title: "  Dune ".to_string(),
                author: "Frank Herbert".to_string(),
                published_year: 1965,
                summary: Some("Spice and sand".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Dune");
        let found = db.get_book(GetBookDto { id: created.id }).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn missing_id_is_a_sentinel_everywhere() {
        let db = MockDatabase::default();

        let found = db.get_book(GetBookDto { id: 999 }).await.unwrap();
        assert_eq!(found, None);

        let updated = db
            .update_book(UpdateBookDto {
                id: 999,
                title: Some("X".to_string()),
                author: None,
                published_year: None,
                summary: None,
            })
            .await
            .unwrap();
        assert_eq!(updated, None);

        let deleted = db.delete_book(DeleteBookDto { id: 999 }).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn partial_update_keeps_omitted_fields() {
        let db = MockDatabase::default();
        let created = db
            .create_book(CreateBookDto {
                title: "Original".to_string(),
                author: "Original Author".to_string(),
                published_year: 2019,
                summary: Some("kept".to_string()),
            })
            .await
            .unwrap();

        let updated = db
            .update_book(UpdateBookDto {
                id: created.id,
                title: Some("Changed".to_string()),
                author: None,
                published_year: Some(2020),
                summary: None,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Changed");
        assert_eq!(updated.published_year, 2020);
        assert_eq!(updated.author, "Original Author");
        assert_eq!(updated.summary.as_deref(), Some("kept"));

        let found = db
            .get_book(GetBookDto { id: created.id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn invalid_partial_field_is_rejected_without_write() {
        let db = MockDatabase::default();
        let created = db.create_book(create_dto("Keep", "Author")).await.unwrap();

        let result = db
            .update_book(UpdateBookDto {
                id: created.id,
                title: None,
                author: None,
                published_year: Some(9999),
                summary: None,
            })
            .await;
        assert!(result.is_err());

        let found = db
            .get_book(GetBookDto { id: created.id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.published_year, 2001);
    }

    #[tokio::test]
    async fn invalid_full_input_is_rejected() {
        let db = MockDatabase::default();
        let result = db.create_book(create_dto("", "Author")).await;
        assert!(result.is_err());
        let result = db.create_book(create_dto("Title", "   ")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn second_delete_returns_failure() {
        let db = MockDatabase::default();
        let created = db.create_book(create_dto("Gone", "Soon")).await.unwrap();

        assert!(db.delete_book(DeleteBookDto { id: created.id }).await.unwrap());
        assert!(!db.delete_book(DeleteBookDto { id: created.id }).await.unwrap());
    }

    #[tokio::test]
    async fn list_windows_in_insertion_order() {
        let db = MockDatabase::default();

        let empty = db
            .get_all_books(GetAllBookDto {
                limit: SelectLimit::default(),
                offset: SelectOffset::default(),
            })
            .await
            .unwrap();
        assert!(empty.is_empty());

        let mut ids = Vec::new();
        for i in 0..5 {
            let created = db
                .create_book(create_dto(&format!("Book {i}"), "Author"))
                .await
                .unwrap();
            ids.push(created.id);
        }

        let window = db
            .get_all_books(GetAllBookDto {
                limit: SelectLimit::new(2i64),
                offset: SelectOffset::new(2i64),
            })
            .await
            .unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].id, ids[2]);
        assert_eq!(window[1].id, ids[3]);
    }

    #[tokio::test]
    async fn list_shrinks_after_delete() {
        let db = MockDatabase::default();
        let mut ids = Vec::new();
        for i in 0..3 {
            let created = db
                .create_book(create_dto(&format!("B{i}"), "A"))
                .await
                .unwrap();
            ids.push(created.id);
        }
        db.delete_book(DeleteBookDto { id: ids[0] }).await.unwrap();

        let all = db
            .get_all_books(GetAllBookDto {
                limit: SelectLimit::default(),
                offset: SelectOffset::default(),
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}
