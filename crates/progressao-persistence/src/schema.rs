//! Esquema Diesel. Reemplazable con `diesel print-schema`.

diesel::table! {
    progressao (pk_progressao) {
        pk_progressao -> Int4,
        cod_mapa -> Int4,
        #[max_length = 350]
        texto -> Varchar,
        #[max_length = 20]
        ramo -> Varchar,
        #[max_length = 20]
        etapa -> Varchar,
        data_insercao -> Timestamptz,
    }
}
