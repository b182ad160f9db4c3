use super::*;

fn names(results: Vec<(entity::phone::Model, Option<entity::vendor::Model>)>) -> Vec<String> {
    results.into_iter().map(|(phone, _)| phone.name).collect()
}

/// Tests the base search filter.
///
/// Expected: approved and draft phones are returned, deleted phones are not
#[tokio::test]
async fn excludes_deleted_phones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;

    PhoneFactory::new(db, vendor.id).name("A").build().await?;
    PhoneFactory::new(db, vendor.id)
        .name("B")
        .state("draft")
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .name("C")
        .state("deleted")
        .build()
        .await?;

    let repo = PhoneRepository::new(db);
    assert_eq!(repo.count_search(PhoneSearchFilter::new()).await?, 2);
    assert_eq!(
        names(repo.search(PhoneSearchFilter::new(), 0, 10).await?),
        vec!["A", "B"]
    );

    Ok(())
}

/// Tests ordering of search results.
///
/// Expected: sorted by vendor name, then phone name
#[tokio::test]
async fn orders_by_vendor_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let siemens = VendorFactory::new(db).name("Siemens").build().await?;
    let nokia = VendorFactory::new(db).name("Nokia").build().await?;

    PhoneFactory::new(db, siemens.id).name("C65").build().await?;
    PhoneFactory::new(db, nokia.id).name("6310i").build().await?;
    PhoneFactory::new(db, siemens.id).name("A52").build().await?;
    PhoneFactory::new(db, nokia.id).name("3310").build().await?;

    let repo = PhoneRepository::new(db);
    let results = repo.search(PhoneSearchFilter::new(), 0, 10).await?;

    let vendors: Vec<String> = results
        .iter()
        .map(|(_, vendor)| vendor.as_ref().unwrap().name.clone())
        .collect();
    assert_eq!(vendors, vec!["Nokia", "Nokia", "Siemens", "Siemens"]);
    assert_eq!(names(results), vec!["3310", "6310i", "A52", "C65"]);

    Ok(())
}

/// Tests the feature filter.
///
/// Verifies that every requested feature must be present and that phones without
/// connection info are excluded even when they carry the features.
///
/// Expected: only supported phones with all requested features
#[tokio::test]
async fn requires_all_features_and_connection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;
    let sms = factory::create_feature(db, "sms").await?;
    let phonebook = factory::create_feature(db, "phonebook").await?;

    PhoneFactory::new(db, vendor.id)
        .name("both")
        .connection(Some("at"))
        .feature(sms.id)
        .feature(phonebook.id)
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .name("sms only")
        .connection(Some("at"))
        .feature(sms.id)
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .name("unsupported")
        .feature(sms.id)
        .feature(phonebook.id)
        .build()
        .await?;

    let repo = PhoneRepository::new(db);

    let sms_filter = PhoneSearchFilter::new().with_features(&["sms".to_string()]);
    assert_eq!(
        names(repo.search(sms_filter, 0, 10).await?),
        vec!["both", "sms only"]
    );

    let both_filter =
        PhoneSearchFilter::new().with_features(&["sms".to_string(), "phonebook".to_string()]);
    assert_eq!(repo.count_search(both_filter.clone()).await?, 1);
    assert_eq!(names(repo.search(both_filter, 0, 10).await?), vec!["both"]);

    let unknown_filter = PhoneSearchFilter::new().with_features(&["mms".to_string()]);
    assert_eq!(repo.count_search(unknown_filter).await?, 0);

    Ok(())
}

/// Tests the free-text filter.
///
/// Verifies that each token may match either the vendor name or the phone name,
/// case-insensitively, and that all tokens must match.
///
/// Expected: only phones matched by every token
#[tokio::test]
async fn matches_every_token_against_vendor_or_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let nokia = VendorFactory::new(db).name("Nokia").build().await?;
    let sony = VendorFactory::new(db).name("Sony Ericsson").build().await?;

    PhoneFactory::new(db, nokia.id).name("6310i").build().await?;
    PhoneFactory::new(db, nokia.id).name("3310").build().await?;
    PhoneFactory::new(db, sony.id).name("K750i").build().await?;

    let repo = PhoneRepository::new(db);

    let vendor_and_model = PhoneSearchFilter::new().with_tokens(&["nokia", "6310"]);
    assert_eq!(
        names(repo.search(vendor_and_model, 0, 10).await?),
        vec!["6310i"]
    );

    let shared_digits = PhoneSearchFilter::new().with_tokens(&["10"]);
    assert_eq!(
        names(repo.search(shared_digits, 0, 10).await?),
        vec!["3310", "6310i"]
    );

    let mixed_case = PhoneSearchFilter::new().with_tokens(&["k750I"]);
    assert_eq!(names(repo.search(mixed_case, 0, 10).await?), vec!["K750i"]);

    let vendor_only = PhoneSearchFilter::new().with_tokens(&["ERICSSON"]);
    assert_eq!(names(repo.search(vendor_only, 0, 10).await?), vec!["K750i"]);

    let no_match = PhoneSearchFilter::new().with_tokens(&["nokia", "k750"]);
    assert_eq!(repo.count_search(no_match).await?, 0);

    Ok(())
}

/// Tests slicing search results.
///
/// Expected: offset and limit applied after ordering
#[tokio::test]
async fn applies_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;

    for name in ["a", "b", "c", "d"] {
        PhoneFactory::new(db, vendor.id).name(name).build().await?;
    }

    let repo = PhoneRepository::new(db);
    assert_eq!(
        names(repo.search(PhoneSearchFilter::new(), 1, 2).await?),
        vec!["b", "c"]
    );

    Ok(())
}

/// Tests that `%` and `_` in a query token are matched literally.
///
/// Expected: `%` matches only the name containing a percent sign, `3_10` matches nothing
#[tokio::test]
async fn treats_like_wildcards_in_tokens_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let nokia = VendorFactory::new(db).name("Nokia").build().await?;

    PhoneFactory::new(db, nokia.id).name("3310").build().await?;
    PhoneFactory::new(db, nokia.id).name("6310i").build().await?;
    PhoneFactory::new(db, nokia.id).name("N_95 100%").build().await?;

    let repo = PhoneRepository::new(db);

    let percent = PhoneSearchFilter::new().with_tokens(&["%"]);
    assert_eq!(names(repo.search(percent, 0, 10).await?), vec!["N_95 100%"]);

    let underscore = PhoneSearchFilter::new().with_tokens(&["3_10"]);
    assert_eq!(repo.count_search(underscore).await?, 0);

    let literal = PhoneSearchFilter::new().with_tokens(&["n_95"]);
    assert_eq!(names(repo.search(literal, 0, 10).await?), vec!["N_95 100%"]);

    Ok(())
}
