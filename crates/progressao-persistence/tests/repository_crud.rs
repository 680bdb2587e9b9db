mod test_support;

use chrono::{TimeZone, Utc};
use progressao_core::{ProgressaoRepository, StoreError};
use progressao_domain::NovaProgressao;
use progressao_persistence::{PgProgressaoRepository, PoolProvider};
use test_support::{truncate, with_pool, DB_LOCK};

fn nova(texto: &str) -> NovaProgressao {
    NovaProgressao::new(10, texto, "Escoteiro", "Pista").unwrap()
}

#[test]
fn create_then_find_by_assigned_id() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let ran = with_pool(|pool| {
        truncate(pool);
        let repo = PgProgressaoRepository::new(PoolProvider { pool: pool.clone() });
        let created = repo.create(nova("Monta barraca sozinho")).expect("create");
        assert!(created.id >= 1);
        let found = repo.find_by_id(created.id).expect("find").expect("present");
        assert_eq!(found, created);
        assert_eq!(repo.find_by_id(created.id + 1000).expect("find"), None);
    });
    if ran.is_none() {
        eprintln!("skip (no DATABASE_URL)");
    }
}

#[test]
fn duplicate_texto_is_reported_as_unique_violation() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    with_pool(|pool| {
        truncate(pool);
        let repo = PgProgressaoRepository::new(PoolProvider { pool: pool.clone() });
        repo.create(nova("Acende fogueira")).expect("first");
        let before = repo.count().unwrap();
        let err = repo.create(nova("Acende fogueira")).unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)), "got {err:?}");
        assert_eq!(repo.count().unwrap(), before);
    });
}

#[test]
fn list_all_is_empty_then_ordered_by_id() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    with_pool(|pool| {
        truncate(pool);
        let repo = PgProgressaoRepository::new(PoolProvider { pool: pool.clone() });
        assert!(repo.list_all().unwrap().is_empty());
        let a = repo.create(nova("b primeiro")).unwrap();
        let b = repo.create(nova("a segundo")).unwrap();
        let ids: Vec<i32> = repo.list_all().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    });
}

#[test]
fn delete_removes_exactly_one_then_reports_zero() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    with_pool(|pool| {
        truncate(pool);
        let repo = PgProgressaoRepository::new(PoolProvider { pool: pool.clone() });
        let keep = repo.create(nova("fica")).unwrap();
        let gone = repo.create(nova("sai")).unwrap();
        assert_eq!(repo.delete_by_id(gone.id).unwrap(), 1);
        assert_eq!(repo.delete_by_id(gone.id).unwrap(), 0);
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.find_by_id(keep.id).unwrap().is_some());
    });
}

#[test]
fn insert_date_defaults_to_now_or_keeps_explicit_value() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    with_pool(|pool| {
        truncate(pool);
        let repo = PgProgressaoRepository::new(PoolProvider { pool: pool.clone() });
        let before = Utc::now() - chrono::Duration::minutes(5);
        let defaulted = repo.create(nova("sem data")).unwrap();
        assert!(defaulted.data_insercao > before);

        let ts = Utc.with_ymd_and_hms(2020, 2, 29, 8, 30, 0).unwrap();
        let explicit = repo.create(nova("com data").with_data_insercao(ts)).unwrap();
        assert_eq!(explicit.data_insercao, ts);
    });
}
