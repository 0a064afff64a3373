mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{create_game, delete, file_app, get, post, test_app, toggle};

// ── Game catalog ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_games_are_listed_by_name_with_cursor() {
    let app = test_app().await;
    for name in ["Wingspan", "azul", "Catan"] {
        create_game(&app, name).await;
    }

    let (status, page) = get(&app, "/api/v1/games?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = page["data"]["games"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["azul", "Catan"]);
    assert_eq!(page["meta"]["total"], 3);
    assert_eq!(page["meta"]["nextCursor"], "2");

    let (_, last) = get(&app, "/api/v1/games?limit=2&cursor=2").await;
    assert_eq!(last["data"]["games"][0]["name"], "Wingspan");
    assert!(last["meta"].get("nextCursor").is_none());
}

#[tokio::test]
async fn test_get_and_delete_game() {
    let app = test_app().await;
    let id = create_game(&app, "Root").await;

    let (status, json) = get(&app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Root");

    let (status, json) = delete(&app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deleted"], true);

    let (status, json) = get(&app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");

    let (status, _) = delete(&app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_game_rejects_blank_name() {
    let app = test_app().await;
    let (status, json) = post(&app, "/api/v1/games", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "invalid_request");
}

// ── Collection toggles ────────────────────────────────────────────────────

#[tokio::test]
async fn test_owning_a_wishlisted_game_clears_wishlist() {
    let app = test_app().await;
    let game = create_game(&app, "Spirit Island").await;

    let wished = toggle(&app, "alice", &game, "wishlist").await;
    assert_eq!(wished["changed"], true);
    assert_eq!(wished["entry"]["isWishlist"], true);

    let owned = toggle(&app, "alice", &game, "owned").await;
    assert_eq!(owned["changed"], true);
    assert_eq!(owned["entry"]["isOwned"], true);
    assert_eq!(owned["entry"]["isWishlist"], false);

    let noop = toggle(&app, "alice", &game, "wishlist").await;
    assert_eq!(noop["changed"], false);
    assert_eq!(noop["entry"]["isWishlist"], false);
    assert_eq!(noop["entry"]["isOwned"], true);
}

#[tokio::test]
async fn test_favorite_and_owned_coexist() {
    let app = test_app().await;
    let game = create_game(&app, "Brass").await;

    toggle(&app, "alice", &game, "owned").await;
    let fav = toggle(&app, "alice", &game, "favorite").await;
    assert_eq!(fav["entry"]["isFavorite"], true);
    assert_eq!(fav["entry"]["isOwned"], true);

    let unfav = toggle(&app, "alice", &game, "favorite").await;
    assert_eq!(unfav["entry"]["isFavorite"], false);
    assert_eq!(unfav["entry"]["isOwned"], true);
}

#[tokio::test]
async fn test_collection_counts_per_category() {
    let app = test_app().await;
    let a = create_game(&app, "A").await;
    let b = create_game(&app, "B").await;
    let c = create_game(&app, "C").await;

    toggle(&app, "alice", &a, "favorite").await;
    toggle(&app, "alice", &a, "owned").await;
    toggle(&app, "alice", &b, "wishlist").await;
    // Flag on then off: entry stays but carries no flag.
    toggle(&app, "alice", &c, "favorite").await;
    toggle(&app, "alice", &c, "favorite").await;

    let (status, json) = get(&app, "/api/v1/users/alice/collection").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["userId"], "alice");
    assert_eq!(json["data"]["entries"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["data"]["counts"],
        json!({ "favorite": 1, "wishlist": 1, "owned": 1, "any": 2 })
    );
}

#[tokio::test]
async fn test_toggle_rejects_unknown_flag() {
    let app = test_app().await;
    let game = create_game(&app, "Hive").await;

    let (status, json) = post(
        &app,
        "/api/v1/users/alice/collection:toggle",
        json!({ "gameId": game, "flag": "played" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn test_deleting_game_removes_collection_entries() {
    let app = test_app().await;
    let keep = create_game(&app, "Keep").await;
    let gone = create_game(&app, "Gone").await;

    toggle(&app, "alice", &keep, "owned").await;
    toggle(&app, "alice", &gone, "owned").await;
    delete(&app, &format!("/api/v1/games/{gone}")).await;

    let (_, json) = get(&app, "/api/v1/users/alice/collection").await;
    let entries = json["data"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["gameId"], keep.as_str());
}

// ── Compatibility ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_compatibility_overlapping_owned_sets() {
    let app = test_app().await;
    let g1 = create_game(&app, "G1").await;
    let g2 = create_game(&app, "G2").await;
    let g3 = create_game(&app, "G3").await;
    let g4 = create_game(&app, "G4").await;

    for g in [&g1, &g2, &g3] {
        toggle(&app, "owner", g, "owned").await;
    }
    for g in [&g2, &g3, &g4] {
        toggle(&app, "viewer", g, "owned").await;
    }

    let (status, json) = get(&app, "/api/v1/users/owner/compatibility?viewerId=viewer").await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["available"], true);

    assert_eq!(data["owned"]["shared"], 2);
    assert_eq!(data["owned"]["union"], 4);
    assert_eq!(data["owned"]["percent"], 50);
    let mut shared: Vec<String> = data["owned"]["sharedGameIds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    shared.sort();
    let mut expected = vec![g2.clone(), g3.clone()];
    expected.sort();
    assert_eq!(shared, expected);

    assert_eq!(data["favorite"]["bothSidesEmpty"], true);
    assert_eq!(data["favorite"]["percent"], 0);
    assert_eq!(data["favorite"]["displayPercent"], 100);

    assert_eq!(data["overall"]["percent"], 50);
    assert_eq!(data["overall"]["tier"], "compatible");
    assert_eq!(data["overall"]["label"], "Compatible");
}

#[tokio::test]
async fn test_compatibility_is_symmetric_in_overlap() {
    let app = test_app().await;
    let g1 = create_game(&app, "G1").await;
    let g2 = create_game(&app, "G2").await;

    toggle(&app, "a", &g1, "favorite").await;
    toggle(&app, "b", &g1, "wishlist").await;
    toggle(&app, "b", &g2, "owned").await;

    let (_, ab) = get(&app, "/api/v1/users/a/compatibility?viewerId=b").await;
    let (_, ba) = get(&app, "/api/v1/users/b/compatibility?viewerId=a").await;
    assert_eq!(ab["data"]["overall"], ba["data"]["overall"]);
    assert_eq!(ab["data"]["overall"]["shared"], 1);
    assert_eq!(ab["data"]["overall"]["union"], 2);
    assert_eq!(ab["data"]["overall"]["percent"], 50);
}

#[tokio::test]
async fn test_compatibility_with_self_is_best_match() {
    let app = test_app().await;
    let g1 = create_game(&app, "G1").await;
    toggle(&app, "alice", &g1, "owned").await;

    let (_, json) = get(&app, "/api/v1/users/alice/compatibility?viewerId=alice").await;
    assert_eq!(json["data"]["overall"]["percent"], 100);
    assert_eq!(json["data"]["overall"]["tier"], "best_match");
}

#[tokio::test]
async fn test_compatibility_unavailable_when_viewer_flags_cleared() {
    let app = test_app().await;
    let g1 = create_game(&app, "G1").await;
    toggle(&app, "owner", &g1, "owned").await;
    toggle(&app, "viewer", &g1, "favorite").await;
    toggle(&app, "viewer", &g1, "favorite").await;

    let (_, json) = get(&app, "/api/v1/users/owner/compatibility?viewerId=viewer").await;
    assert_eq!(json["data"]["available"], false);
}

#[tokio::test]
async fn test_empty_owner_is_still_scored() {
    let app = test_app().await;
    let g1 = create_game(&app, "G1").await;
    toggle(&app, "viewer", &g1, "owned").await;

    let (_, json) = get(&app, "/api/v1/users/nobody/compatibility?viewerId=viewer").await;
    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["overall"]["percent"], 0);
    assert_eq!(json["data"]["overall"]["tier"], "incompatible");
}

// ── Persistence ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_collections_survive_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("file:{}", dir.path().join("meeple.db").display());

    let game = {
        let app = file_app(&url).await;
        let game = create_game(&app, "Terraforming Mars").await;
        toggle(&app, "alice", &game, "owned").await;
        game
    };

    let app = file_app(&url).await;
    let (_, json) = get(&app, "/api/v1/users/alice/collection").await;
    assert_eq!(json["data"]["entries"][0]["gameId"], game.as_str());
    assert_eq!(json["data"]["entries"][0]["isOwned"], true);
}
