#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use mongodb::bson::{self, Bson, doc, oid::ObjectId};

    use crate::database::entity::post::{PostDocument, object_id, post_id};
    use crate::database::query::{filter_document, update_document};
    use blog_core::RepoError;
    use blog_core::domain::{NewPost, Post, PostId};
    use blog_core::ports::{PostFilter, PostUpdate};

    #[test]
    fn test_object_id_conversion_preserves_hex() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let id = post_id(oid);

        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
        assert_eq!(object_id(id), oid);
    }

    #[test]
    fn test_filter_translation() {
        assert_eq!(filter_document(&PostFilter::All), doc! {});

        let id = PostId::parse("507f1f77bcf86cd799439011").unwrap();
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(filter_document(&PostFilter::ById(id)), doc! { "_id": oid });
    }

    #[test]
    fn test_update_translation_sets_only_named_fields() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let update = PostUpdate::at(at).title("C").content("B");

        let set = update_document(&update);
        let fields = set.get_document("$set").unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get_str("title").unwrap(), "C");
        assert_eq!(fields.get_str("content").unwrap(), "B");
        assert_eq!(
            fields.get("updated_at"),
            Some(&Bson::DateTime(bson::DateTime::from_chrono(at)))
        );
        assert!(!fields.contains_key("created_at"));
        assert!(!fields.contains_key("_id"));
    }

    #[test]
    fn test_new_post_document_omits_id() {
        let doc = PostDocument::from(NewPost::new("A".into(), "B".into()));
        let raw = bson::to_document(&doc).unwrap();

        assert!(!raw.contains_key("_id"));
        assert!(matches!(raw.get("created_at"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn test_document_round_trip_into_post() {
        let oid = ObjectId::new();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let raw = doc! {
            "_id": oid,
            "title": "A",
            "content": "B",
            "created_at": bson::DateTime::from_chrono(created),
            "updated_at": bson::DateTime::from_chrono(created + Duration::seconds(1)),
        };

        let doc: PostDocument = bson::from_document(raw).unwrap();
        let post = Post::try_from(doc).unwrap();

        assert_eq!(post.id, post_id(oid));
        assert_eq!(post.title, "A");
        assert_eq!(post.created_at, created);
        assert!(post.created_at < post.updated_at);
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let now = bson::DateTime::now();
        let raw = doc! { "_id": ObjectId::new(), "created_at": now, "updated_at": now };

        let doc: PostDocument = bson::from_document(raw).unwrap();
        assert_eq!(doc.title, "");
        assert_eq!(doc.content, "");
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        let doc = PostDocument::from(NewPost::new("A".into(), "B".into()));
        assert!(matches!(Post::try_from(doc), Err(RepoError::Decode(_))));
    }
}
