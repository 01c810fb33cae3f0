use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub product_category: Option<String>,
    pub payment_method: Option<String>,
    pub units_sold: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Transaction {
    fn from(m: Model) -> Self {
        let status = m.status.parse().unwrap_or_else(|e| {
            tracing::warn!("transaction {}: {}, read as Completed", m.id, e);
            Default::default()
        });
        Transaction {
            id: TransactionId(m.id),
            date: m.date,
            description: m.description,
            amount: m.amount,
            status,
            product_category: m.product_category,
            payment_method: m.payment_method,
            units_sold: m.units_sold,
        }
    }
}

fn to_active(tx: &Transaction) -> ActiveModel {
    ActiveModel {
        id: Set(tx.id.value()),
        date: Set(tx.date.clone()),
        description: Set(tx.description.clone()),
        amount: Set(tx.amount),
        status: Set(tx.status.as_str().to_string()),
        product_category: Set(tx.product_category.clone()),
        payment_method: Set(tx.payment_method.clone()),
        units_sold: Set(tx.units_sold),
    }
}

/// Все записи по возрастанию id (порядок вставки)
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Transaction>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    id: TransactionId,
) -> anyhow::Result<Option<Transaction>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Наибольший id в таблице, 0 для пустой
pub async fn max_id(db: &DatabaseConnection) -> anyhow::Result<i64> {
    let max: Option<Option<i64>> = Entity::find()
        .select_only()
        .column_as(Column::Id.max(), "max_id")
        .into_tuple()
        .one(db)
        .await?;
    Ok(max.flatten().unwrap_or(0))
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

pub async fn insert(db: &DatabaseConnection, tx: &Transaction) -> anyhow::Result<()> {
    to_active(tx).insert(db).await?;
    Ok(())
}

/// Пакетная вставка; пачки держат число параметров SQLite в пределах лимита
pub async fn insert_many(db: &DatabaseConnection, items: &[Transaction]) -> anyhow::Result<()> {
    for chunk in items.chunks(500) {
        Entity::insert_many(chunk.iter().map(to_active))
            .exec(db)
            .await?;
    }
    Ok(())
}

/// Полная замена записи; `false` если id нет
pub async fn replace(db: &DatabaseConnection, tx: &Transaction) -> anyhow::Result<bool> {
    if Entity::find_by_id(tx.id.value()).one(db).await?.is_none() {
        return Ok(false);
    }
    to_active(tx).update(db).await?;
    Ok(true)
}

pub async fn delete(db: &DatabaseConnection, id: TransactionId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
