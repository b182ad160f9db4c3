use super::*;

/// Tests a vendor with no approved phones.
///
/// Expected: Ok(VendorPage) with an empty, valid first page
#[tokio::test]
async fn vendor_without_phones_has_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = VendorFactory::new(db).slug("empty").build().await?;
    PhoneFactory::new(db, vendor.id)
        .state("draft")
        .build()
        .await?;

    let page = PhoneService::new(db)
        .get_vendor_page("empty", Some("7"), 50)
        .await?;

    assert!(page.phones.items.is_empty());
    assert_eq!(page.phones.number, 1);
    assert_eq!(page.phones.num_pages, 1);
    assert!(!page.phones.has_next());

    Ok(())
}

/// Tests the vendor listing contents.
///
/// Expected: only approved phones, ordered by name
#[tokio::test]
async fn lists_approved_phones_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = VendorFactory::new(db).slug("nokia").build().await?;

    PhoneFactory::new(db, vendor.id).name("6310i").build().await?;
    PhoneFactory::new(db, vendor.id).name("3310").build().await?;
    PhoneFactory::new(db, vendor.id)
        .name("1100")
        .state("deleted")
        .build()
        .await?;

    let page = PhoneService::new(db)
        .get_vendor_page("nokia", None, 50)
        .await?;

    let names: Vec<&str> = page
        .phones
        .items
        .iter()
        .map(|phone| phone.name.as_str())
        .collect();
    assert_eq!(names, vec!["3310", "6310i"]);

    Ok(())
}

/// Tests an unknown vendor slug.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_vendor_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PhoneService::new(db)
        .get_vendor_page("missing", None, 50)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
