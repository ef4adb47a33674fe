use crate::services::id_generator::UrlDigest;
use crate::storage::LinkRecord;
use migration::entities::page;

/// 将 Sea-ORM Model 转换为 LinkRecord
pub fn model_to_record(model: page::Model) -> LinkRecord {
    LinkRecord {
        id: model.id,
        url: model.url,
        origin: model.origin,
        created_at: model.created_at,
    }
}

/// 将 LinkRecord 转换为 ActiveModel（仅用于插入，记录创建后不再修改）
pub fn record_to_active_model(record: &LinkRecord) -> page::ActiveModel {
    use sea_orm::ActiveValue::Set;

    page::ActiveModel {
        id: Set(record.id.clone()),
        url: Set(record.url.clone()),
        url_digest: Set(UrlDigest::of(&record.url).to_string()),
        origin: Set(record.origin.clone()),
        created_at: Set(record.created_at),
    }
}
