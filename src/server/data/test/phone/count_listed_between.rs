use super::*;

/// Tests the chart counters around a month boundary.
///
/// Verifies that the range is half-open, that supported and unsupported split on
/// connection info, and that only the "all" counter includes deleted phones.
///
/// Expected: counts matching the created timestamps and states
#[tokio::test]
async fn counts_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_phonedb_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vendor = factory::create_vendor(db).await?;

    let since = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    let cutoff = Utc.with_ymd_and_hms(2006, 3, 1, 0, 0, 0).unwrap();

    PhoneFactory::new(db, vendor.id)
        .connection(Some("at"))
        .created(Utc.with_ymd_and_hms(2006, 2, 28, 23, 59, 59).unwrap())
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .created(Utc.with_ymd_and_hms(2006, 1, 10, 0, 0, 0).unwrap())
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .connection(Some("at"))
        .created(cutoff)
        .build()
        .await?;
    PhoneFactory::new(db, vendor.id)
        .connection(Some("at"))
        .state("deleted")
        .created(Utc.with_ymd_and_hms(2006, 1, 5, 0, 0, 0).unwrap())
        .build()
        .await?;

    let repo = PhoneRepository::new(db);

    assert_eq!(repo.count_listed_between(since, cutoff, true).await?, 1);
    assert_eq!(repo.count_listed_between(since, cutoff, false).await?, 1);
    assert_eq!(repo.count_created_before(cutoff).await?, 3);

    Ok(())
}
