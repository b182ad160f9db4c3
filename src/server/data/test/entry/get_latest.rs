use super::*;

/// Tests fetching the latest entry.
///
/// Expected: Ok(Some(Entry)) with the greatest pub_date, regardless of insert order
#[tokio::test]
async fn returns_newest_by_pub_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;

    let newest = factory::entry::EntryFactory::new(db, author.id)
        .pub_date(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .build()
        .await?;
    factory::entry::EntryFactory::new(db, author.id)
        .pub_date(Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap())
        .build()
        .await?;

    let repo = EntryRepository::new(db);
    let latest = repo.get_latest().await?;

    assert_eq!(latest.map(|entry| entry.id), Some(newest.id));

    Ok(())
}

/// Tests fetching the latest entry when none exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntryRepository::new(db);
    assert!(repo.get_latest().await?.is_none());

    Ok(())
}
