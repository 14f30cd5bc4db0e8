use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use envmon_core::metric::Metric;
use envmon_core::reading::Reading;
use envmon_db::models::reading::NewReading;
use envmon_db::repositories::reading_repo::ReadingRepo;

#[sqlx::test]
async fn insert_then_latest_round_trips(pool: SqlitePool) {
    envmon_db::init_schema(&pool).await.unwrap();

    let reading = Reading::new()
        .with(Metric::Temperature, Some(21.5))
        .with(Metric::Humidity, None)
        .with(Metric::Co2, Some(640.0));
    let now = Utc::now();

    let inserted = ReadingRepo::insert(&pool, now, &NewReading::from(&reading))
        .await
        .unwrap();
    assert_eq!(inserted.temperature, Some(21.5));
    assert_eq!(inserted.humidity, None);

    let latest = ReadingRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.id, inserted.id);

    // Absent values stay absent through the round trip.
    let restored = latest.to_reading();
    assert_eq!(restored.get(&Metric::Temperature), Some(21.5));
    assert_eq!(restored.get(&Metric::Humidity), None);
    assert_eq!(restored.get(&Metric::Co2), Some(640.0));
}

#[sqlx::test]
async fn latest_returns_none_on_empty_table(pool: SqlitePool) {
    envmon_db::init_schema(&pool).await.unwrap();
    assert!(ReadingRepo::latest(&pool).await.unwrap().is_none());
}

#[sqlx::test]
async fn latest_picks_the_most_recent_row(pool: SqlitePool) {
    envmon_db::init_schema(&pool).await.unwrap();

    let now = Utc::now();
    let old = Reading::new().with(Metric::Temperature, Some(10.0));
    let new = Reading::new().with(Metric::Temperature, Some(20.0));

    ReadingRepo::insert(&pool, now - Duration::hours(2), &NewReading::from(&old))
        .await
        .unwrap();
    ReadingRepo::insert(&pool, now, &NewReading::from(&new))
        .await
        .unwrap();

    let latest = ReadingRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.temperature, Some(20.0));
}

#[sqlx::test]
async fn range_is_inclusive_and_ordered_oldest_first(pool: SqlitePool) {
    envmon_db::init_schema(&pool).await.unwrap();

    let base = Utc::now();
    for hours_ago in [3i64, 2, 1] {
        let reading = Reading::new().with(Metric::Co, Some(hours_ago as f64));
        ReadingRepo::insert(
            &pool,
            base - Duration::hours(hours_ago),
            &NewReading::from(&reading),
        )
        .await
        .unwrap();
    }

    let rows = ReadingRepo::range(&pool, base - Duration::hours(2), base)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].co, Some(2.0));
    assert_eq!(rows[1].co, Some(1.0));
}
