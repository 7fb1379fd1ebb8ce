pub mod errors;
pub mod db;
pub mod pet;
pub mod cat;
pub mod dog;

pub use pet::{Pet, PetField};

pub type Cat = cat::Model;
pub type Dog = dog::Model;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityName, EntityTrait};
    use uuid::Uuid;

    use super::*;

    fn snowball() -> Dog {
        Dog {
            id: Uuid::new_v4(),
            name: "Snowball".into(),
            breed: "Shiba Inu".into(),
            color: "Cream".into(),
            birthdate: Utc.with_ymd_and_hms(2020, 6, 12, 0, 0, 0).unwrap().into(),
            weight: 22.0,
        }
    }

    #[test]
    fn table_constants_match_entities() {
        assert_eq!(cat::Entity.table_name(), Cat::TABLE);
        assert_eq!(dog::Entity.table_name(), Dog::TABLE);
        assert_eq!(Cat::KIND, "cat");
        assert_eq!(Dog::KIND, "dog");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut dog = snowball();
        assert!(dog.validate().is_ok());
        dog.name = "   ".into();
        assert!(matches!(dog.validate(), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn value_follows_column_mapping() {
        let dog = snowball();
        assert_eq!(dog.value(PetField::Name), sea_orm::Value::from("Snowball".to_string()));
        assert_eq!(dog.value(PetField::Id), sea_orm::Value::from(dog.id));
        assert_eq!(dog.value(PetField::Weight), sea_orm::Value::from(22.0_f64));
    }

    #[test]
    fn wire_shape_uses_flat_lowercase_keys() {
        let dog = snowball();
        let json = serde_json::to_value(&dog).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        for key in ["id", "name", "breed", "color", "birthdate", "weight"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(json["birthdate"], "2020-06-12T00:00:00Z");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cat: Cat = serde_json::from_str(r#"{"name":"Tom"}"#).unwrap();
        assert!(cat.id.is_nil());
        assert_eq!(cat.breed, "");
        assert_eq!(cat.weight, 0.0);
        assert_eq!(cat.birthdate.timestamp(), 0);
    }

    #[tokio::test]
    async fn store_and_validate_agree_on_blank_names() -> anyhow::Result<()> {
        let db = db::connect_with_config(&configs::DatabaseConfig::in_memory()).await?;
        migration::Migrator::up(&db, None).await?;

        for blank in ["", "   "] {
            let mut dog = snowball();
            dog.name = blank.into();
            assert!(dog.validate().is_err(), "validate accepted {blank:?}");
            assert!(dog.into_active().insert(&db).await.is_err(), "store accepted {blank:?}");
        }

        let ok = snowball();
        let stored = ok.clone().into_active().insert(&db).await?;
        assert_eq!(stored, ok);

        migration::Migrator::down(&db, None).await?;
        assert!(dog::Entity::find().all(&db).await.is_err());
        Ok(())
    }
}
