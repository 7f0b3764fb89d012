//! HTTP routes.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use pokedex_domain::{NewPokemon, PokemonId, PokemonPatch};
use pokedex_shared::{CreatePokemonRequest, PaginationQuery, PokemonResponse, UpdatePokemonRequest};

use super::error::ApiError;
use super::extractors::{ValidatedJson, ValidatedQuery};
use crate::app::App;
use crate::infrastructure::correlation::{self, CORRELATION_ID_HEADER};

/// Prefix of every resource route.
pub const API_PREFIX: &str = "/api/v2";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    let resources = Router::new()
        .route("/pokemon", get(find_all).post(create))
        .route(
            "/pokemon/{term}",
            get(find_one).patch(update).delete(remove),
        )
        .route("/seed", get(seed));

    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .nest(API_PREFIX, resources)
}

/// Routes with request tracing and correlation ids, bound to `app`.
pub fn router(app: Arc<App>) -> Router {
    routes()
        .layer(TraceLayer::new_for_http().make_span_with(correlation::request_span::<Body>))
        .layer(middleware::from_fn(correlate))
        .with_state(app)
}

/// Tag the request with a correlation id and echo it on the response.
async fn correlate(mut request: Request, next: Next) -> Response {
    let id = correlation::assign(&mut request);
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(CORRELATION_ID_HEADER, id.header_value());
    response
}

async fn health() -> &'static str {
    "OK"
}

async fn create(
    State(app): State<Arc<App>>,
    ValidatedJson(body): ValidatedJson<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<PokemonResponse>), ApiError> {
    let pokemon = NewPokemon::try_from(body)?;
    let created = app.use_cases.pokemon.create(pokemon).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn find_all(
    State(app): State<Arc<App>>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> Result<Json<Vec<PokemonResponse>>, ApiError> {
    let pokemon = app
        .use_cases
        .pokemon
        .find_all(query.limit, query.offset)
        .await?;
    Ok(Json(pokemon.into_iter().map(PokemonResponse::from).collect()))
}

async fn find_one(
    State(app): State<Arc<App>>,
    Path(term): Path<String>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let pokemon = app.use_cases.pokemon.find_one(&term).await?;
    Ok(Json(pokemon.into()))
}

async fn update(
    State(app): State<Arc<App>>,
    Path(term): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdatePokemonRequest>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let patch = PokemonPatch::try_from(body)?;
    let merged = app.use_cases.pokemon.update(&term, patch).await?;
    Ok(Json(merged.into()))
}

async fn remove(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PokemonId::parse(&id)?;
    app.use_cases.pokemon.remove(&id).await?;
    Ok(StatusCode::OK)
}

async fn seed(State(app): State<Arc<App>>) -> Result<&'static str, ApiError> {
    app.use_cases.seed.execute().await?;
    Ok("Seed Executed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::memory::InMemoryPokemonRepo;
    use crate::infrastructure::ports::{MockPokeApiPort, PokeApiEntry};
    use axum::http::Request as HttpRequest;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(pokeapi: MockPokeApiPort) -> Router {
        let config = AppConfig::default();
        let app = App::new(
            Arc::new(InMemoryPokemonRepo::new()),
            Arc::new(pokeapi),
            &config,
        );
        router(Arc::new(app))
    }

    fn app() -> Router {
        app_with(MockPokeApiPort::new())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = HttpRequest::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    async fn create(app: &Router, no: u32, name: &str) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/api/v2/pokemon",
            Some(json!({"no": no, "name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        parse(&body)
    }

    #[tokio::test]
    async fn health_check() {
        let app = app();
        assert_eq!(send(&app, "GET", "/", None).await, (StatusCode::OK, "OK".into()));
        assert_eq!(
            send(&app, "GET", "/api/health", None).await,
            (StatusCode::OK, "OK".into())
        );
    }

    #[tokio::test]
    async fn responses_carry_correlation_id() {
        let request = HttpRequest::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let header = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("correlation header");
        assert_eq!(header.len(), 36);
    }

    #[tokio::test]
    async fn create_returns_201_with_lower_cased_name() {
        let app = app();
        let created = create(&app, 25, "Pikachu").await;

        assert_eq!(created["no"], 25);
        assert_eq!(created["name"], "pikachu");
        assert!(PokemonId::is_valid(created["_id"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn create_duplicate_is_400_with_error_body() {
        let app = app();
        create(&app, 25, "pikachu").await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v2/pokemon",
            Some(json!({"no": 25, "name": "raichu"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = parse(&body);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "Pokemon exists in db { no: 25 }");
    }

    #[tokio::test]
    async fn create_rejects_invalid_bodies() {
        let app = app();
        for body in [
            json!({"no": 0, "name": "pikachu"}),
            json!({"no": 25, "name": ""}),
            json!({"no": 25}),
            json!({"no": 25, "name": "pikachu", "type": "electric"}),
        ] {
            let (status, _) = send(&app, "POST", "/api/v2/pokemon", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn list_is_sorted_and_paged() {
        let app = app();
        for (no, name) in [(3, "venusaur"), (1, "bulbasaur"), (2, "ivysaur")] {
            create(&app, no, name).await;
        }

        let (status, body) = send(&app, "GET", "/api/v2/pokemon", None).await;
        assert_eq!(status, StatusCode::OK);
        let nos: Vec<u64> = parse(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["no"].as_u64().unwrap())
            .collect();
        assert_eq!(nos, vec![1, 2, 3]);

        let (_, body) = send(&app, "GET", "/api/v2/pokemon?limit=1&offset=1", None).await;
        let page = parse(&body);
        assert_eq!(page.as_array().unwrap().len(), 1);
        assert_eq!(page[0]["name"], "ivysaur");

        let (status, _) = send(&app, "GET", "/api/v2/pokemon?limit=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn find_one_by_no_and_by_id() {
        let app = app();
        let created = create(&app, 7, "squirtle").await;
        let id = created["_id"].as_str().unwrap();

        let (status, body) = send(&app, "GET", "/api/v2/pokemon/7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body), created);

        let (status, body) = send(&app, "GET", &format!("/api/v2/pokemon/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body), created);
    }

    #[tokio::test]
    async fn find_one_unknown_is_404() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/v2/pokemon/mew", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            parse(&body)["message"],
            "Pokemon with id, name or no mew not found"
        );
    }

    #[tokio::test]
    async fn patch_returns_merged_record() {
        let app = app();
        let created = create(&app, 3, "venusaur").await;

        let (status, body) = send(
            &app,
            "PATCH",
            "/api/v2/pokemon/3",
            Some(json!({"name": "PIKACHU"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let merged = parse(&body);
        assert_eq!(merged["_id"], created["_id"]);
        assert_eq!(merged["no"], 3);
        assert_eq!(merged["name"], "pikachu");

        let (status, _) = send(
            &app,
            "PATCH",
            "/api/v2/pokemon/99",
            Some(json!({"name": "mew"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_validates_and_reports_missing_records() {
        let app = app();
        let created = create(&app, 25, "pikachu").await;
        let id = created["_id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "DELETE", "/api/v2/pokemon/pikachu", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse(&body)["message"], "pikachu is not a valid MongoID");

        let (status, body) = send(&app, "DELETE", &format!("/api/v2/pokemon/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = send(&app, "DELETE", &format!("/api/v2/pokemon/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", &format!("/api/v2/pokemon/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn seed_replaces_collection() {
        let mut pokeapi = MockPokeApiPort::new();
        pokeapi.expect_list_pokemon().returning(|_| {
            Ok(vec![
                PokeApiEntry {
                    name: "bulbasaur".into(),
                    url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
                },
                PokeApiEntry {
                    name: "ivysaur".into(),
                    url: "https://pokeapi.co/api/v2/pokemon/2/".into(),
                },
            ])
        });
        let app = app_with(pokeapi);
        create(&app, 150, "mewtwo").await;

        let (status, body) = send(&app, "GET", "/api/v2/seed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Seed Executed");

        let (_, body) = send(&app, "GET", "/api/v2/pokemon", None).await;
        let names: Vec<String> = parse(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }
}
