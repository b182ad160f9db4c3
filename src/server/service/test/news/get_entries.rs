use super::*;

/// Tests paginating the entry archive.
///
/// Verifies clamping of out-of-range and non-numeric page values.
///
/// Expected: page numbers clamped into 1..=num_pages
#[tokio::test]
async fn clamps_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_user(db).await?;

    for _ in 0..5 {
        factory::create_entry(db, author.id).await?;
    }

    let service = NewsService::new(db);

    let last = service.get_entries(Some("99"), 2).await?;
    assert_eq!(last.number, 3);
    assert_eq!(last.num_pages, 3);
    assert_eq!(last.items.len(), 1);

    let first = service.get_entries(Some("abc"), 2).await?;
    assert_eq!(first.number, 1);
    assert_eq!(first.items.len(), 2);
    assert!(first.has_next());
    assert!(!first.has_previous());

    Ok(())
}

/// Tests the archive with no entries.
///
/// Expected: a single empty page
#[tokio::test]
async fn empty_archive_has_one_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = NewsService::new(db).get_entries(None, 10).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.num_pages, 1);
    assert_eq!(page.start_index(), 0);
    assert_eq!(page.end_index(), 0);

    Ok(())
}
