use super::*;

/// Tests listing categories.
///
/// Expected: Ok(Vec<Category>) ordered by title
#[tokio::test]
async fn returns_categories_ordered_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for title in ["Wammu", "Gammu", "Python-gammu"] {
        factory::category::CategoryFactory::new(db)
            .title(title)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let titles: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|category| category.title)
        .collect();

    assert_eq!(titles, vec!["Gammu", "Python-gammu", "Wammu"]);

    Ok(())
}

/// Tests listing categories when none exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
