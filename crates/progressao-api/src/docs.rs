//! Documentación de la API: documento OpenAPI 3 y páginas Swagger UI / Redoc.

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{MSG_DADOS_INVALIDOS, MSG_JA_SALVA, MSG_NAO_ENCONTRADA};
use crate::handlers::MSG_REMOVIDA;

pub const OPENAPI_JSON_PATH: &str = "/openapi/openapi.json";

pub fn routes<S>() -> Router<S>
    where S: Clone + Send + Sync + 'static
{
    Router::new().route("/openapi", get(index))
                 .route(OPENAPI_JSON_PATH, get(openapi_json))
                 .route("/openapi/swagger", get(swagger))
                 .route("/openapi/redoc", get(redoc))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>API Progressões</title></head>
<body>
  <h1>API Progressões</h1>
  <p>Seleção de documentação:</p>
  <ul>
    <li><a href="/openapi/swagger">Swagger</a></li>
    <li><a href="/openapi/redoc">Redoc</a></li>
    <li><a href="/openapi/openapi.json">openapi.json</a></li>
  </ul>
</body>
</html>"#)
}

async fn swagger() -> Html<String> {
    Html(format!(r##"<!doctype html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8"><title>API Progressões - Swagger</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>window.ui = SwaggerUIBundle({{ url: "{OPENAPI_JSON_PATH}", dom_id: "#swagger-ui" }});</script>
</body>
</html>"##))
}

async fn redoc() -> Html<String> {
    Html(format!(r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>API Progressões - Redoc</title></head>
<body>
  <redoc spec-url="{OPENAPI_JSON_PATH}"></redoc>
  <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>"#))
}

async fn openapi_json() -> Json<Value> {
    Json(openapi())
}

fn error_response(description: &str, example: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": {
            "schema": { "$ref": "#/components/schemas/ErrorSchema" },
            "example": { "message": example }
        }}
    })
}

fn ok_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": format!("#/components/schemas/{schema}") } } }
    })
}

/// Documento OpenAPI 3 del servicio.
pub fn openapi() -> Value {
    let id_param = |required: bool| {
        json!([{
            "name": "id", "in": "query", "required": required,
            "schema": { "type": "integer", "example": 1 }
        }])
    };
    let progressao_body = json!({ "$ref": "#/components/schemas/ProgressaoSchema" });

    json!({
        "openapi": "3.0.3",
        "info": { "title": "API Progressões", "version": env!("CARGO_PKG_VERSION") },
        "tags": [
            { "name": "Documentação", "description": "Seleção de documentação: Swagger ou Redoc" },
            { "name": "Progressão", "description": "Adição, visualização e remoção de progressões à base" }
        ],
        "paths": {
            "/": { "get": {
                "tags": ["Documentação"],
                "summary": "Redireciona para /openapi, tela que permite a escolha do estilo de documentação.",
                "responses": { "302": { "description": "Redirecionamento para /openapi" } }
            }},
            "/progressao": {
                "post": {
                    "tags": ["Progressão"],
                    "summary": "Adiciona uma nova progressão à base de dados",
                    "requestBody": { "required": true, "content": {
                        "application/json": { "schema": progressao_body },
                        "application/x-www-form-urlencoded": { "schema": progressao_body }
                    }},
                    "responses": {
                        "200": ok_response("Progressão adicionada", "ProgressaoViewSchema"),
                        "409": error_response("Texto já cadastrado", MSG_JA_SALVA),
                        "400": error_response("Dados inválidos ou falha ao salvar", MSG_DADOS_INVALIDOS)
                    }
                },
                "get": {
                    "tags": ["Progressão"],
                    "summary": "Lista todas as progressões ou, com `id`, busca uma",
                    "parameters": id_param(false),
                    "responses": {
                        "200": { "description": "Listagem (sem `id`) ou progressão (com `id`)", "content": { "application/json": { "schema": {
                            "oneOf": [
                                { "$ref": "#/components/schemas/ListagemProgressoesSchema" },
                                { "$ref": "#/components/schemas/ProgressaoViewSchema" }
                            ]
                        }}}},
                        "404": error_response("Progressão não encontrada", MSG_NAO_ENCONTRADA)
                    }
                },
                "delete": {
                    "tags": ["Progressão"],
                    "summary": "Remove uma progressão a partir do id",
                    "parameters": id_param(true),
                    "responses": {
                        "200": ok_response("Progressão removida", "ProgressaoDelSchema"),
                        "404": error_response("Progressão não encontrada", MSG_NAO_ENCONTRADA)
                    }
                }
            }
        },
        "components": { "schemas": {
            "ProgressaoSchema": {
                "type": "object",
                "required": ["cod_mapa", "texto", "ramo", "etapa"],
                "properties": {
                    "cod_mapa": { "type": "integer", "example": 10 },
                    "texto": { "type": "string", "maxLength": progressao_domain::TEXTO_MAX_CHARS, "example": "Texto da progressão" },
                    "ramo": { "type": "string", "maxLength": progressao_domain::RAMO_MAX_CHARS, "example": "Escoteiro",
                              "description": format!("Ramos: {}", progressao_domain::RAMOS_CONHECIDOS.join(", ")) },
                    "etapa": { "type": "string", "maxLength": progressao_domain::ETAPA_MAX_CHARS, "example": "Pista" }
                }
            },
            "ProgressaoViewSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "example": 1 },
                    "cod_mapa": { "type": "integer", "example": 10 },
                    "texto": { "type": "string", "example": "Texto da progressão" },
                    "ramo": { "type": "string", "example": "Escoteiro" },
                    "etapa": { "type": "string", "example": "Pista" }
                }
            },
            "ListagemProgressoesSchema": {
                "type": "object",
                "properties": { "progressoes": { "type": "array", "items": { "$ref": "#/components/schemas/ProgressaoViewSchema" } } }
            },
            "ProgressaoDelSchema": {
                "type": "object",
                "properties": {
                    "message": { "type": "string", "example": MSG_REMOVIDA },
                    "id": { "type": "integer", "example": 1 }
                }
            },
            "ErrorSchema": {
                "type": "object",
                "properties": { "message": { "type": "string" } }
            }
        }}
    })
}
