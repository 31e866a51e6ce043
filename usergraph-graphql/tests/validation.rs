mod common;

use async_graphql::Request;
use usergraph_graphql::{ConnectionProvider, Dispatcher, build_schema, export_schema_sdl};

use common::{CountingStore, USERS, error_codes, execute};

fn counting_dispatcher(store: &CountingStore) -> Dispatcher {
    Dispatcher::new(build_schema(USERS), ConnectionProvider::new(store.clone()))
}

#[tokio::test]
async fn unknown_field_is_rejected_before_resolution() {
    let store = CountingStore::default();
    let dispatcher = counting_dispatcher(&store);

    let response = execute(&dispatcher, "{ users { id email } }").await;

    assert_eq!(response["data"], serde_json::Value::Null);
    assert_eq!(error_codes(&response), vec!["SCHEMA_VALIDATION"]);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn identifier_cannot_be_supplied_on_create() {
    let store = CountingStore::default();
    let dispatcher = counting_dispatcher(&store);

    let response = execute(
        &dispatcher,
        r#"mutation { userCreate(input: { id: "65a1f0c2e4b0a1b2c3d4e5f6", name: "A" }) { id } }"#,
    )
    .await;

    assert_eq!(error_codes(&response), vec!["SCHEMA_VALIDATION"]);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn wrong_argument_type_is_rejected() {
    let store = CountingStore::default();
    let dispatcher = counting_dispatcher(&store);

    let response = execute(&dispatcher, r#"{ users(limit: "ten") { id } }"#).await;

    assert_eq!(error_codes(&response), vec!["SCHEMA_VALIDATION"]);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn syntax_errors_are_schema_validation_errors() {
    let store = CountingStore::default();
    let dispatcher = counting_dispatcher(&store);

    let response = execute(&dispatcher, "{ users { id ").await;

    assert_eq!(error_codes(&response), vec!["SCHEMA_VALIDATION"]);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn valid_operation_makes_one_store_call() {
    let store = CountingStore::default();
    let dispatcher = counting_dispatcher(&store);

    let response = dispatcher.dispatch(Request::new("{ users { id } }")).await;

    assert!(response.errors.is_empty());
    assert_eq!(store.calls(), 1);
}

#[test]
fn sdl_declares_the_operations() {
    let sdl = export_schema_sdl();

    for field in [
        "users(limit: Int, skip: Int): [User]\n",
        "user(id: ID!): User\n",
        "userCreate(input: UserInput!): User\n",
        "userUpdate(id: ID!, input: UserInput!): User\n",
        "userDelete(id: ID!): Boolean\n",
    ] {
        assert!(sdl.contains(field), "missing {field} in\n{sdl}");
    }
}
