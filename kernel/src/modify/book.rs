use crate::entity::{Book, BookDraft, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: 'static + Send>: 'static + Sync + Send {
    /// Persists a validated draft and returns the stored record with the
    /// id the store assigned to it.
    async fn create(
        &self,
        con: &mut Connection,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Returns `false` when no row matched the id.
    async fn delete(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnBookModifier<Connection: 'static + Send>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
