use super::*;

/// Tests the phone detail lookup.
///
/// Expected: Ok(PhoneDetail) with features and related phones
#[tokio::test]
async fn returns_phone_with_features_and_related() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = VendorFactory::new(db).slug("nokia").build().await?;
    let sms = factory::create_feature(db, "sms").await?;

    let phone = PhoneFactory::new(db, vendor.id)
        .name("6310")
        .feature(sms.id)
        .build()
        .await?;
    let variant = PhoneFactory::new(db, vendor.id).name("6310i").build().await?;

    let detail = PhoneService::new(db)
        .get_phone_detail("nokia", phone.id)
        .await?;

    assert_eq!(detail.vendor.id, vendor.id);
    assert_eq!(detail.phone.id, phone.id);
    assert_eq!(detail.features.len(), 1);
    assert_eq!(detail.features[0].name, "sms");
    assert_eq!(detail.related.len(), 1);
    assert_eq!(detail.related[0].id, variant.id);

    Ok(())
}

/// Tests requesting a phone under the wrong vendor.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn mismatched_vendor_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_vendor(db).await?;
    VendorFactory::new(db).slug("other").build().await?;
    let phone = factory::create_phone(db, owner.id).await?;

    let result = PhoneService::new(db)
        .get_phone_detail("other", phone.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests requesting a phone of an unknown vendor, and an unknown phone.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn unknown_vendor_or_phone_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    VendorFactory::new(db).slug("nokia").build().await?;

    let service = PhoneService::new(db);

    assert!(matches!(
        service.get_phone_detail("missing", 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_phone_detail("nokia", 1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
