use super::*;

/// Tests inserting an entry with raw HTML in its body.
///
/// Verifies that the body is rendered in safe mode and the excerpt in standard mode.
///
/// Expected: Ok(Entry) with HTML removed from body_html but kept in excerpt_html
#[tokio::test]
async fn renders_body_safely_and_excerpt_fully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;

    let repo = EntryRepository::new(db);
    let entry = repo
        .save(SaveEntryParam {
            body: "Hello <script>alert(1)</script> world".to_string(),
            excerpt: Some("Short <em>intro</em>".to_string()),
            ..entry_params(author.id, "hello")
        })
        .await?;

    assert!(!entry.body_html.contains("<script>"));
    assert!(entry.body_html.contains(HTML_REMOVED));
    assert_eq!(
        entry.excerpt_html.as_deref(),
        Some("<p>Short <em>intro</em></p>\n")
    );

    Ok(())
}

/// Tests inserting an entry without excerpt or publication date.
///
/// Expected: Ok(Entry) with no excerpt HTML and pub_date set to the save time
#[tokio::test]
async fn defaults_pub_date_and_skips_blank_excerpt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;

    let before = Utc::now();
    let repo = EntryRepository::new(db);
    let entry = repo
        .save(SaveEntryParam {
            excerpt: Some("   ".to_string()),
            ..entry_params(author.id, "no-excerpt")
        })
        .await?;
    let after = Utc::now();

    assert!(entry.excerpt_html.is_none());
    assert!(entry.pub_date >= before && entry.pub_date <= after);
    assert_eq!(
        entry.body_html,
        markdown::render("Released.", RenderMode::Safe)
    );

    Ok(())
}

/// Tests that saving replaces the entry's category set.
///
/// Expected: Ok(Entry) with only the categories of the latest save, ordered by title
#[tokio::test]
async fn replaces_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let wammu = factory::category::CategoryFactory::new(db)
        .title("Wammu")
        .build()
        .await?;
    let gammu = factory::category::CategoryFactory::new(db)
        .title("Gammu")
        .build()
        .await?;
    let misc = factory::category::CategoryFactory::new(db)
        .title("Misc")
        .build()
        .await?;

    let repo = EntryRepository::new(db);
    let created = repo
        .save(SaveEntryParam {
            category_ids: vec![wammu.id, misc.id],
            ..entry_params(author.id, "categorised")
        })
        .await?;
    assert_eq!(created.categories.len(), 2);

    let updated = repo
        .save(SaveEntryParam {
            id: Some(created.id),
            category_ids: vec![wammu.id, gammu.id],
            ..entry_params(author.id, "categorised")
        })
        .await?;

    let titles: Vec<&str> = updated
        .categories
        .iter()
        .map(|category| category.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Gammu", "Wammu"]);

    Ok(())
}

/// Tests updating an entry without a publication date.
///
/// Expected: Ok(Entry) keeping the stored pub_date and re-rendered body
#[tokio::test]
async fn update_keeps_stored_pub_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let published = Utc.with_ymd_and_hms(2009, 3, 7, 12, 0, 0).unwrap();

    let repo = EntryRepository::new(db);
    let created = repo
        .save(SaveEntryParam {
            pub_date: Some(published),
            ..entry_params(author.id, "dated")
        })
        .await?;

    let updated = repo
        .save(SaveEntryParam {
            id: Some(created.id),
            body: "Released **again**.".to_string(),
            ..entry_params(author.id, "dated")
        })
        .await?;

    assert_eq!(updated.pub_date, published);
    assert_eq!(
        updated.body_html,
        "<p>Released <strong>again</strong>.</p>\n"
    );

    Ok(())
}

/// Tests updating an entry that does not exist without a publication date.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn update_of_missing_entry_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;

    let repo = EntryRepository::new(db);
    let result = repo
        .save(SaveEntryParam {
            id: Some(999),
            ..entry_params(author.id, "ghost")
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that a failed category link rolls back the whole save.
///
/// Expected: Err(DbErr), with the stored title and category set unchanged
#[tokio::test]
async fn failed_link_rolls_back_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let wammu = factory::category::CategoryFactory::new(db)
        .title("Wammu")
        .build()
        .await?;

    let repo = EntryRepository::new(db);
    let created = repo
        .save(SaveEntryParam {
            category_ids: vec![wammu.id],
            ..entry_params(author.id, "atomic")
        })
        .await?;

    let result = repo
        .save(SaveEntryParam {
            id: Some(created.id),
            title: "Renamed".to_string(),
            category_ids: vec![wammu.id, 9999],
            ..entry_params(author.id, "atomic")
        })
        .await;
    assert!(result.is_err());

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.title, "Gammu 1.0");
    let titles: Vec<&str> = stored
        .categories
        .iter()
        .map(|category| category.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Wammu"]);

    Ok(())
}
