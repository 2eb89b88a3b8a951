use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fyyur::web::{self, AppState};
use fyyur::{Catalog, Config};
use tower::ServiceExt;

async fn app() -> (Router, AppState) {
    let catalog = Catalog::try_new(&Config::in_memory()).await.unwrap();
    catalog.seed_if_empty().await.unwrap();
    let state = AppState::new(catalog);
    (web::router(state.clone()), state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn set_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn pages_render() {
    let (app, _) = app().await;
    for uri in ["/", "/venues", "/artists", "/shows", "/venues/create", "/artists/create", "/shows/create"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn venue_detail_shows_upcoming_shows() {
    let (app, _) = app().await;
    let response = app.oneshot(get("/venues/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
}

#[tokio::test]
async fn unknown_ids_and_routes_are_not_found() {
    let (app, _) = app().await;
    for uri in ["/venues/99", "/artists/99", "/venues/abc", "/artists/99/edit", "/nowhere"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
async fn artist_search() {
    let (app, _) = app().await;
    let response = app
        .oneshot(post("/artists/search", "search_term=band"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(!body.contains("Matt Quevedo"));
}

#[tokio::test]
async fn creating_a_venue_flashes_on_the_home_page() {
    let (app, state) = app().await;
    let form = "name=The+Blue+Room&city=Kansas+City&state=MO&address=18th+Street\
                &phone=816-474-2929&genres=Jazz&genres=Blues&seeking_talent=y";
    let response = app.oneshot(post("/venues/create", form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Blue Room was successfully listed!"));

    let results = state
        .catalog
        .search_venues("blue room", fyyur::schedule::now())
        .await
        .unwrap();
    assert_eq!(results.count, 1);
    let id = results.data[0].id;
    assert_eq!(state.catalog.venue_genres(id).await.unwrap(), vec!["Jazz", "Blues"]);
}

#[tokio::test]
async fn invalid_venue_is_rendered_back() {
    let (app, state) = app().await;
    let response = app
        .oneshot(post("/venues/create", "city=Kansas+City&state=MO&genres=Jazz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("could not be listed"));
    assert!(body.contains("Kansas City"));

    let areas = state.catalog.venue_areas(fyyur::schedule::now()).await.unwrap();
    assert!(areas.iter().all(|area| area.city != "Kansas City"));
}

#[tokio::test]
async fn deleting_a_venue_redirects_home_with_a_flash() {
    let (app, state) = app().await;
    let response = app.clone().oneshot(get("/venues/1/delete")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert!(set_cookie(&response).starts_with("fyyur_flash="));
    assert!(state.catalog.venue(1).await.unwrap_err().is_not_found());

    let response = app.oneshot(get("/venues/1/delete")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(set_cookie(&response).contains("error"));
}

#[tokio::test]
async fn flash_cookie_is_shown_once_and_cleared() {
    let (app, _) = app().await;
    let response = app.clone().oneshot(get("/venues/2/delete")).await.unwrap();
    let cookie = set_cookie(&response);
    let pair = cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(set_cookie(&response).contains("Max-Age=0"));
    let body = body_text(response).await;
    assert!(body.contains("Venue The Dueling Pianos Bar was successfully deleted!"));
}

#[tokio::test]
async fn editing_an_artist_redirects_to_the_artist() {
    let (app, state) = app().await;
    let form = "name=Matt+Quevedo&city=New+York&state=NY&genres=Jazz";
    let response = app.oneshot(post("/artists/2/edit", form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/artists/2");

    let artist = state.catalog.artist(2).await.unwrap();
    assert_eq!(artist.phone, None);
    assert!(!artist.seeking_venue);
}

#[tokio::test]
async fn show_with_unknown_venue_is_not_added() {
    let (app, state) = app().await;
    let response = app
        .oneshot(post("/shows/create", "artist_id=1&venue_id=99&start_time=2035-01-01+20%3A00%3A00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Show was not successfully added."));
    assert_eq!(state.catalog.shows().await.unwrap().len(), 5);
}

#[tokio::test]
async fn show_is_listed() {
    let (app, state) = app().await;
    let response = app
        .oneshot(post("/shows/create", "artist_id=1&venue_id=2&start_time=2035-01-01+20%3A00%3A00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Show was successfully listed!"));
    assert_eq!(state.catalog.shows().await.unwrap().len(), 6);
}

#[tokio::test]
async fn editing_a_missing_record_is_not_found() {
    let (app, _) = app().await;
    for uri in ["/venues/99/edit", "/artists/99/edit"] {
        let response = app.clone().oneshot(post(uri, "city=x")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "POST {uri}");
    }
}

#[tokio::test]
async fn venue_edit_round_trip() {
    let (app, state) = app().await;
    let response = app.clone().oneshot(get("/venues/2/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Edit venue The Dueling Pianos Bar"));
    assert!(body.contains("value=\"335 Delancey Street\""));

    let form = "name=The+Dueling+Pianos+Bar&city=New+York&state=NY\
                &address=336+Delancey+Street&genres=Classical&genres=Jazz";
    let response = app.clone().oneshot(post("/venues/2/edit", form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/venues/2");
    assert!(set_cookie(&response).starts_with("fyyur_flash="));

    let venue = state.catalog.venue(2).await.unwrap();
    assert_eq!(venue.address, "336 Delancey Street");
    assert_eq!(venue.phone, None);
    assert!(!venue.seeking_talent);
    assert_eq!(
        state.catalog.venue_genres(2).await.unwrap(),
        vec!["Classical", "Jazz"]
    );

    let response = app
        .oneshot(post("/venues/2/edit", "name=&city=New+York&state=NY"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.catalog.venue(2).await.unwrap().address, "336 Delancey Street");
}
