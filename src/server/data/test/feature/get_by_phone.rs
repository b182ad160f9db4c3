use super::*;

/// Tests listing the features of one phone.
///
/// Expected: only the linked features, ordered by name
#[tokio::test]
async fn returns_linked_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;
    let sms = factory::create_feature(db, "sms").await?;
    let calendar = factory::create_feature(db, "calendar").await?;
    factory::create_feature(db, "phonebook").await?;

    let phone = PhoneFactory::new(db, vendor.id)
        .feature(sms.id)
        .feature(calendar.id)
        .build()
        .await?;
    let bare = factory::create_phone(db, vendor.id).await?;

    let repo = FeatureRepository::new(db);
    let names: Vec<String> = repo
        .get_by_phone(phone.id)
        .await?
        .into_iter()
        .map(|feature| feature.name)
        .collect();

    assert_eq!(names, vec!["calendar", "sms"]);
    assert!(repo.get_by_phone(bare.id).await?.is_empty());

    Ok(())
}
