use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns up to `limit` messages addressed to an owner, most recent first
    pub async fn get_by_cpf(
        &self,
        cpf: &str,
        limit: u64,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::Cpf.eq(cpf))
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
