use crate::{
    model::message::MessageDto,
    server::{data::TrackerStore, error::Error},
};

/// Service for reading owner notifications.
pub struct MessageService<'a> {
    store: &'a dyn TrackerStore,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`].
    pub fn new(store: &'a dyn TrackerStore) -> Self {
        Self { store }
    }

    /// Lists up to `limit` messages addressed to an owner, most recent first.
    pub async fn list_messages(&self, cpf: &str, limit: u64) -> Result<Vec<MessageDto>, Error> {
        let messages = self.store.list_messages(cpf, limit).await?;

        Ok(messages.into_iter().map(MessageDto::from).collect())
    }
}
