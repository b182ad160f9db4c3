use super::*;

/// Tests listing the newest public phones.
///
/// Expected: approved and draft phones newest first, deleted phones skipped, limited
#[tokio::test]
async fn returns_newest_public_phones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;

    for (day, name, state) in [
        (1, "oldest", "approved"),
        (2, "draft", "draft"),
        (3, "deleted", "deleted"),
        (4, "newest", "approved"),
    ] {
        PhoneFactory::new(db, vendor.id)
            .name(name)
            .state(state)
            .created(Utc.with_ymd_and_hms(2008, 5, day, 0, 0, 0).unwrap())
            .build()
            .await?;
    }

    let repo = PhoneRepository::new(db);
    let latest: Vec<String> = repo
        .get_latest(2)
        .await?
        .into_iter()
        .map(|(phone, vendor)| {
            assert!(vendor.is_some());
            phone.name
        })
        .collect();

    assert_eq!(latest, vec!["newest", "draft"]);

    Ok(())
}
