//! Translation of typed post queries into BSON.

use mongodb::bson::{self, Document, doc};

use blog_core::ports::{PostFilter, PostUpdate};

use super::entity::post::object_id;

pub fn filter_document(filter: &PostFilter) -> Document {
    match filter {
        PostFilter::All => Document::new(),
        PostFilter::ById(id) => doc! { "_id": object_id(*id) },
    }
}

/// `$set` document touching only the fields the update names.
pub fn update_document(update: &PostUpdate) -> Document {
    let mut set = doc! {
        "updated_at": bson::DateTime::from_chrono(update.updated_at),
    };
    if let Some(title) = &update.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &update.content {
        set.insert("content", content.as_str());
    }

    doc! { "$set": set }
}
