use chrono::{TimeZone, Utc};
use progressao_domain::{NovaProgressao, Progressao, RAMOS_CONHECIDOS};

#[test]
fn test_into_progressao_keeps_submitted_fields() {
    let nova = NovaProgressao::new(10, "Monta barraca sozinho", "Escoteiro", "Pista").unwrap();
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let p = nova.clone().into_progressao(7, ts);
    assert_eq!(p.id, 7);
    assert_eq!(p.data_insercao, ts);
    assert!(p.same_content(&nova));
}

#[test]
fn test_explicit_insert_date_is_kept() {
    let ts = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    let nova = NovaProgressao::new(3, "Conhece a Lei Escoteira", "Lobinho", "Pata Tenra").unwrap()
                                                                                          .with_data_insercao(ts);
    assert_eq!(nova.data_insercao(), Some(ts));
}

#[test]
fn test_same_content_detects_differences() {
    let nova = NovaProgressao::new(10, "Texto", "Escoteiro", "Pista").unwrap();
    let mut p = nova.clone().into_progressao(1, Utc::now());
    p.etapa = "Trilha".into();
    assert!(!p.same_content(&nova));
}

#[test]
fn test_progressao_serializes_with_source_field_names() {
    let p: Progressao = NovaProgressao::new(10, "Texto", RAMOS_CONHECIDOS[1], "Pista").unwrap()
                                                                                     .into_progressao(1, Utc::now());
    let v = serde_json::to_value(&p).unwrap();
    for key in ["id", "cod_mapa", "texto", "ramo", "etapa", "data_insercao"] {
        assert!(v.get(key).is_some(), "falta {key}");
    }
    assert_eq!(v["ramo"], "Escoteiro");
    assert_eq!(p.to_string(), "#1 <10: Texto>");
}
