use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trello_sweep_lib::api::TrelloClient;
use trello_sweep_lib::config::Credentials;
use trello_sweep_lib::errors::SweepError;
use trello_sweep_lib::filter::DeletionTarget;

fn test_creds() -> Credentials {
    Credentials {
        key: "testkey".to_string(),
        token: "testtoken".to_string(),
        card_id: "card1".to_string(),
    }
}

#[tokio::test]
async fn test_rejected_fetch_is_a_server_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/card1/checklists"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let client = TrelloClient::new(test_creds()).with_base_url(server.uri());

    let err = client.get_checklists().await.unwrap_err();
    assert!(matches!(err, SweepError::ServerStatus(401, ref card) if card == "card1"));
}

#[tokio::test]
async fn test_non_list_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/card1/checklists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let client = TrelloClient::new(test_creds()).with_base_url(server.uri());

    let err = client.get_checklists().await.unwrap_err();
    assert!(matches!(err, SweepError::Decode(_)));
}

#[tokio::test]
async fn test_rejected_delete_does_not_abort_the_sweep() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/checklists/cl9/checkItems/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/checklists/cl9/checkItems/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = TrelloClient::new(test_creds()).with_base_url(server.uri());

    // The 404 on the first target is logged, not fatal; the second still runs
    let targets = vec![
        DeletionTarget {
            checklist_id: "cl9".to_string(),
            check_item_id: "gone".to_string(),
        },
        DeletionTarget {
            checklist_id: "cl9".to_string(),
            check_item_id: "a".to_string(),
        },
    ];
    client.clean_checklists(&targets).await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on this port
    let client =
        TrelloClient::new(test_creds()).with_base_url("http://127.0.0.1:9".to_string());

    let err = client.get_checklists().await.unwrap_err();
    assert!(matches!(err, SweepError::Transport("GET", _)));
}
