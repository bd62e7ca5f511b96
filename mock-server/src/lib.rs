use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(rename = "type")]
    pub card_type: String,
    pub set: String,
    pub set_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardList {
    pub cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
pub struct CardSearch {
    pub name: Option<String>,
    pub set: Option<String>,
}

pub type Db = Arc<Vec<Card>>;

fn card(
    name: &str,
    mana_cost: Option<&str>,
    card_type: &str,
    set: &str,
    set_name: &str,
    text: Option<&str>,
) -> Card {
    Card {
        name: name.to_string(),
        mana_cost: mana_cost.map(str::to_string),
        card_type: card_type.to_string(),
        set: set.to_string(),
        set_name: set_name.to_string(),
        text: text.map(str::to_string),
    }
}

/// Fixture set served by `app()`.
pub fn seed_cards() -> Vec<Card> {
    vec![
        card(
            "Opt",
            Some("{U}"),
            "Instant",
            "MMQ",
            "Mercadian Masques",
            Some("Draw two cards."),
        ),
        card(
            "Opt",
            Some("{U}"),
            "Instant",
            "XLN",
            "Ixalan",
            Some("Scry 1.\nDraw a card."),
        ),
        card(
            "Black Lotus",
            Some("{0}"),
            "Artifact",
            "LEA",
            "Limited Edition Alpha",
            Some("{T}, Sacrifice Black Lotus: Add three mana of any one color."),
        ),
        card("Island", None, "Basic Land — Island", "LEA", "Limited Edition Alpha", None),
    ]
}

pub fn app() -> Router {
    app_with(seed_cards())
}

pub fn app_with(cards: Vec<Card>) -> Router {
    let db: Db = Arc::new(cards);
    Router::new()
        .route("/v1/cards", get(search_cards))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn search_cards(State(db): State<Db>, Query(search): Query<CardSearch>) -> Response {
    if search.name.as_deref().is_some_and(|n| n.is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name must not be empty" })),
        )
            .into_response();
    }
    Json(CardList {
        cards: db.iter().filter(|c| matches(c, &search)).cloned().collect(),
    })
    .into_response()
}

fn matches(card: &Card, search: &CardSearch) -> bool {
    let name_ok = search
        .name
        .as_ref()
        .map_or(true, |n| card.name.to_lowercase().contains(&n.to_lowercase()));
    let set_ok = search
        .set
        .as_ref()
        .map_or(true, |s| card.set.eq_ignore_ascii_case(s));
    name_ok && set_ok
}
