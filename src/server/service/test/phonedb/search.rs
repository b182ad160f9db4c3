use super::*;

fn search_page(page: &str) -> SearchPhonesParam {
    SearchPhonesParam {
        page: Some(page.to_string()),
        ..Default::default()
    }
}

/// Tests page clamping on a single-page result.
///
/// Expected: page 0, page 10000 and page "abc" all resolve to page 1
#[tokio::test]
async fn clamps_page_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;
    for _ in 0..3 {
        factory::create_phone(db, vendor.id).await?;
    }

    let service = PhoneService::new(db);

    for raw in ["0", "10000", "abc", "-3"] {
        let page = service.search(&search_page(raw), 50).await?;
        assert_eq!(page.number, 1, "page={}", raw);
        assert_eq!(page.items.len(), 3, "page={}", raw);
    }

    Ok(())
}

/// Tests that a short trailing page is merged into the previous one.
///
/// Expected: 14 phones at 10 per page fit on one page of 14
#[tokio::test]
async fn merges_orphans_into_last_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;
    for _ in 0..14 {
        factory::create_phone(db, vendor.id).await?;
    }

    let page = PhoneService::new(db)
        .search(&SearchPhonesParam::default(), 10)
        .await?;

    assert_eq!(page.num_pages, 1);
    assert_eq!(page.items.len(), 14);
    assert_eq!(page.end_index(), 14);

    Ok(())
}

/// Tests that every result satisfies the combined feature and text filters.
///
/// Expected: only non-deleted, supported phones with all features and all tokens
#[tokio::test]
async fn results_satisfy_all_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let nokia = VendorFactory::new(db).name("Nokia").build().await?;
    let siemens = VendorFactory::new(db).name("Siemens").build().await?;
    let sms = factory::create_feature(db, "sms").await?;

    let matching = PhoneFactory::new(db, nokia.id)
        .name("6310i")
        .connection(Some("at"))
        .feature(sms.id)
        .build()
        .await?;
    PhoneFactory::new(db, nokia.id)
        .name("6310")
        .connection(Some("at"))
        .feature(sms.id)
        .state("deleted")
        .build()
        .await?;
    PhoneFactory::new(db, siemens.id)
        .name("S6310")
        .connection(Some("at"))
        .feature(sms.id)
        .build()
        .await?;
    PhoneFactory::new(db, nokia.id)
        .name("6310 classic")
        .feature(sms.id)
        .build()
        .await?;

    let params = SearchPhonesParam {
        query: Some(" nokia  6310 ".to_string()),
        features: vec!["sms".to_string()],
        page: None,
    };
    let page = PhoneService::new(db).search(&params, 50).await?;

    assert_eq!(page.count, 1);
    let listing = &page.items[0];
    assert_eq!(listing.phone.id, matching.id);
    assert_eq!(listing.vendor.name, "Nokia");
    assert_ne!(listing.phone.state, PhoneState::Deleted);
    assert!(listing.phone.connection.is_some());
    assert_eq!(params.urlparams(), "feature=sms&q= nokia  6310 ");

    Ok(())
}
