#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogClient` over the reqwest transport, using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dexly_api::{CatalogClient, Error, HttpTransport};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CatalogClient::with_transport(
        base_url,
        HttpTransport::with_client(reqwest::Client::new()),
    );
    (server, client)
}

fn pikachu() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://img.example/25.png",
            "back_default": null
        },
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed" } }
        ]
    })
}

// ── URL construction ────────────────────────────────────────────────

#[test]
fn test_urls_are_built_from_base() {
    let client = CatalogClient::with_transport(
        Url::parse("https://pokeapi.co/api/v2/").unwrap(),
        HttpTransport::with_client(reqwest::Client::new()),
    );

    assert_eq!(
        client.listing_url(20).unwrap().as_str(),
        "https://pokeapi.co/api/v2/pokemon/?limit=20"
    );
    assert_eq!(
        client.pokemon_url("Pikachu").unwrap().as_str(),
        "https://pokeapi.co/api/v2/pokemon/Pikachu"
    );
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_page(2).await.unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    assert_eq!(page.count, Some(1302));
}

// ── Detail ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_pokemon() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .mount(&server)
        .await;

    let url = client.pokemon_url("pikachu").unwrap();
    let pokemon = client.fetch_pokemon(url).await.unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.weight, 60);
    assert_eq!(
        pokemon.sprites.front_default.as_deref(),
        Some("https://img.example/25.png")
    );
    assert!(pokemon.sprites.back_default.is_none());
    assert_eq!(pokemon.types[0].kind.name, "electric");
    assert_eq!(pokemon.stats[1].stat.name, "speed");
    assert_eq!(pokemon.stats[1].base_stat, 90);
}

#[tokio::test]
async fn test_fetch_summary_ignores_missing_scalars() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/25/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sprites": { "front_default": null, "back_default": null },
            "types": []
        })))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/pokemon/25/", server.uri())).unwrap();
    let summary = client.fetch_pokemon_summary(url).await.unwrap();

    assert!(summary.types.is_empty());
    assert!(summary.sprites.front_default.is_none());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let url = client.pokemon_url("missingno").unwrap();
    let result = client.get(url).await;

    match result {
        Err(ref err @ Error::HttpStatus { status, ref url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/pokemon/missingno"), "unexpected url: {url}");
            assert!(err.is_not_found());
        }
        other => panic!("expected HttpStatus error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let url = client.pokemon_url("pikachu").unwrap();
    let result = client.get(url).await;

    match result {
        Err(Error::Decode { ref body, .. }) => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_fields_is_shape_error() {
    let (server, client) = setup().await;

    let mut body = pikachu();
    body.as_object_mut().unwrap().remove("stats");

    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let url = client.pokemon_url("pikachu").unwrap();
    let result = client.fetch_pokemon(url).await;

    match result {
        Err(Error::Shape { ref resource, ref message }) => {
            assert_eq!(resource, "pokemon");
            assert!(message.contains("stats"), "expected 'stats' in message, got: {message}");
        }
        other => panic!("expected Shape error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop a server so the port is closed.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = CatalogClient::with_transport(
        Url::parse(&uri).unwrap(),
        HttpTransport::with_client(reqwest::Client::new()),
    );
    let result = client.list_page(20).await;

    assert!(
        matches!(result, Err(ref e) if e.is_network()),
        "expected Network error, got: {result:?}"
    );
}
