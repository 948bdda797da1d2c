use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineDetail {
    pub id: i64,
    pub name: String,
    pub stations: Vec<Station>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<Station>,
    pub distance: i64,
    pub duration: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
    pub source_name: String,
    pub target_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub password_check: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub source_id: Option<i64>,
    pub target_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct PathParams {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub path_type: String,
}

/// Per-hop weights used for every seeded line.
const HOP_DISTANCE: i64 = 2;
const HOP_DURATION: i64 = 3;

struct Member {
    id: i64,
    email: String,
    name: String,
    password: String,
}

struct Favorite {
    id: i64,
    member_id: i64,
    source_id: i64,
    target_id: i64,
}

pub struct Store {
    lines: Vec<LineDetail>,
    members: HashMap<i64, Member>,
    tokens: HashMap<String, i64>,
    favorites: Vec<Favorite>,
    next_member_id: i64,
    next_favorite_id: i64,
}

impl Store {
    fn seeded() -> Self {
        let station = |id: i64, name: &str| Station {
            id,
            name: name.to_string(),
        };
        let lines = vec![
            LineDetail {
                id: 1,
                name: "2호선".to_string(),
                stations: vec![
                    station(1, "잠실역"),
                    station(2, "삼성역"),
                    station(3, "선릉역"),
                    station(4, "강남역"),
                ],
            },
            LineDetail {
                id: 2,
                name: "신분당선".to_string(),
                stations: vec![
                    station(4, "강남역"),
                    station(5, "양재역"),
                    station(6, "판교역"),
                ],
            },
        ];
        Self {
            lines,
            members: HashMap::new(),
            tokens: HashMap::new(),
            favorites: Vec::new(),
            next_member_id: 1,
            next_favorite_id: 1,
        }
    }

    fn station(&self, id: i64) -> Option<&Station> {
        self.lines
            .iter()
            .flat_map(|line| line.stations.iter())
            .find(|station| station.id == id)
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<i64, StatusCode> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let member_id = *self.tokens.get(token).ok_or(StatusCode::UNAUTHORIZED)?;
        if !self.members.contains_key(&member_id) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(member_id)
    }

    fn favorite_response(&self, favorite: &Favorite) -> Option<FavoriteResponse> {
        Some(FavoriteResponse {
            id: favorite.id,
            source_id: favorite.source_id,
            target_id: favorite.target_id,
            source_name: self.station(favorite.source_id)?.name.clone(),
            target_name: self.station(favorite.target_id)?.name.clone(),
        })
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/lines/detail", get(list_lines))
        .route("/paths", get(find_path))
        .route("/members", post(join))
        .route("/oauth/token", post(login))
        .route("/me", get(get_me).patch(update_me).delete(delete_me))
        .route("/me/favorites", get(list_favorites).post(create_favorite))
        .route("/me/favorites/from/{source_id}/to/{target_id}", get(has_favorite))
        .route("/me/favorites/{id}", delete(delete_favorite))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Non-empty with no whitespace anywhere.
fn is_valid_token_text(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

async fn list_lines(State(db): State<Db>) -> Json<Vec<LineDetail>> {
    Json(db.read().await.lines.clone())
}

async fn find_path(
    State(db): State<Db>,
    Query(params): Query<PathParams>,
) -> Result<Json<PathResponse>, StatusCode> {
    if !matches!(params.path_type.as_str(), "DISTANCE" | "DURATION") {
        return Err(StatusCode::BAD_REQUEST);
    }
    if params.source == params.target {
        return Err(StatusCode::BAD_REQUEST);
    }

    let store = db.read().await;
    for line in &store.lines {
        let position = |name: &str| line.stations.iter().position(|s| s.name == name);
        let (Some(from), Some(to)) = (
            position(params.source.as_str()),
            position(params.target.as_str()),
        ) else {
            continue;
        };
        let mut stations = line.stations[from.min(to)..=from.max(to)].to_vec();
        if from > to {
            stations.reverse();
        }
        let hops = stations.len() as i64 - 1;
        debug!(line = %line.name, hops, "path found");
        return Ok(Json(PathResponse {
            stations,
            distance: hops * HOP_DISTANCE,
            duration: hops * HOP_DURATION,
        }));
    }
    Err(StatusCode::NOT_FOUND)
}

async fn join(State(db): State<Db>, Json(input): Json<JoinRequest>) -> impl IntoResponse {
    if !is_valid_email(&input.email)
        || input.name.trim().is_empty()
        || !is_valid_token_text(&input.password)
        || input.password != input.password_check
    {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    if store.members.values().any(|m| m.email == input.email) {
        return Err(StatusCode::CONFLICT);
    }
    let id = store.next_member_id;
    store.next_member_id += 1;
    store.members.insert(
        id,
        Member {
            id,
            email: input.email,
            name: input.name,
            password: input.password,
        },
    );
    debug!(member_id = id, "member joined");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/members/{id}"))]))
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, StatusCode> {
    if !is_valid_email(&input.email) || !is_valid_token_text(&input.password) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    let member_id = store
        .members
        .values()
        .find(|m| m.email == input.email && m.password == input.password)
        .map(|m| m.id)
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let token = Uuid::new_v4().to_string();
    store.tokens.insert(token.clone(), member_id);
    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

async fn get_me(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<MemberResponse>, StatusCode> {
    let store = db.read().await;
    let member_id = store.authenticate(&headers)?;
    let member = store.members.get(&member_id).ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(MemberResponse {
        id: member.id,
        email: member.email.clone(),
        name: member.name.clone(),
    }))
}

async fn update_me(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<UpdateMemberRequest>,
) -> Result<StatusCode, StatusCode> {
    if input.name.trim().is_empty() || !is_valid_token_text(&input.password) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let member_id = store.authenticate(&headers)?;
    let member = store.members.get_mut(&member_id).ok_or(StatusCode::UNAUTHORIZED)?;
    member.name = input.name;
    member.password = input.password;
    Ok(StatusCode::OK)
}

async fn delete_me(State(db): State<Db>, headers: HeaderMap) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let member_id = store.authenticate(&headers)?;
    store.members.remove(&member_id);
    store.tokens.retain(|_, id| *id != member_id);
    store.favorites.retain(|f| f.member_id != member_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn create_favorite(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<FavoriteRequest>,
) -> Result<StatusCode, StatusCode> {
    let (Some(source_id), Some(target_id)) = (input.source_id, input.target_id) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let mut store = db.write().await;
    let member_id = store.authenticate(&headers)?;
    if store.station(source_id).is_none() || store.station(target_id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let id = store.next_favorite_id;
    store.next_favorite_id += 1;
    store.favorites.push(Favorite {
        id,
        member_id,
        source_id,
        target_id,
    });
    Ok(StatusCode::OK)
}

async fn list_favorites(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<FavoriteResponse>>, StatusCode> {
    let store = db.read().await;
    let member_id = store.authenticate(&headers)?;
    let favorites = store
        .favorites
        .iter()
        .filter(|f| f.member_id == member_id)
        .filter_map(|f| store.favorite_response(f))
        .collect();
    Ok(Json(favorites))
}

async fn has_favorite(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((source_id, target_id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let store = db.read().await;
    let member_id = store.authenticate(&headers)?;
    let exist = store
        .favorites
        .iter()
        .any(|f| f.member_id == member_id && f.source_id == source_id && f.target_id == target_id);
    Ok(Json(serde_json::json!({ "exist": exist })))
}

async fn delete_favorite(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let member_id = store.authenticate(&headers)?;
    let index = store
        .favorites
        .iter()
        .position(|f| f.id == id && f.member_id == member_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.favorites.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
