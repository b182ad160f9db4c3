use super::*;

/// Tests a category page.
///
/// Expected: the category with only its own entries, newest first
#[tokio::test]
async fn lists_category_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;
    let releases = factory::category::CategoryFactory::new(db)
        .slug("releases")
        .build()
        .await?;

    let older = factory::entry::EntryFactory::new(db, author.id)
        .pub_date(Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap())
        .category(releases.id)
        .build()
        .await?;
    let newer = factory::entry::EntryFactory::new(db, author.id)
        .pub_date(Utc.with_ymd_and_hms(2009, 2, 1, 0, 0, 0).unwrap())
        .category(releases.id)
        .build()
        .await?;
    factory::create_entry(db, author.id).await?;

    let page = NewsService::new(db)
        .get_category_page("releases", None, 10)
        .await?;

    assert_eq!(page.category.id, releases.id);
    let ids: Vec<i32> = page.entries.items.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(page.entries.count, 2);

    Ok(())
}

/// Tests an unknown category slug.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_category_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db)
        .get_category_page("missing", None, 10)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
