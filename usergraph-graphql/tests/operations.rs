mod common;

use bson::{doc, oid::ObjectId};
use serde_json::json;
use usergraph_core::{backend::StoreBackend, query::Query};
use usergraph_graphql::{ConnectionProvider, Dispatcher, build_schema};
use usergraph_memory::InMemoryStore;

use common::{BrokenListingStore, USERS, dispatcher, error_codes, execute, seed};

#[tokio::test]
async fn create_then_read_back() {
    let store = InMemoryStore::new();
    let dispatcher = dispatcher(&store);

    let created = execute(
        &dispatcher,
        r#"mutation { userCreate(input: { name: "Ada", bio: "analyst" }) { id name bio } }"#,
    )
    .await;
    let id = created["data"]["userCreate"]["id"].as_str().unwrap().to_string();

    assert_eq!(id.len(), 24);
    assert_eq!(created["data"]["userCreate"]["name"], "Ada");

    let read = execute(&dispatcher, format!(r#"{{ user(id: "{id}") {{ id name bio }} }}"#)).await;

    assert_eq!(
        read,
        json!({ "data": { "user": { "id": id, "name": "Ada", "bio": "analyst" } } })
    );
}

#[tokio::test]
async fn create_stores_supplied_fields_only() {
    let store = InMemoryStore::new();
    let dispatcher = dispatcher(&store);

    let created = execute(&dispatcher, r#"mutation { userCreate(input: { name: "Ada" }) { id bio } }"#).await;
    let id = ObjectId::parse_str(created["data"]["userCreate"]["id"].as_str().unwrap()).unwrap();

    assert_eq!(created["data"]["userCreate"]["bio"], json!(null));
    assert_eq!(
        store.find_document(id, USERS).await.unwrap(),
        Some(doc! { "_id": id, "name": "Ada" })
    );
}

#[tokio::test]
async fn create_without_name_is_an_operation_error() {
    let store = InMemoryStore::new();
    let dispatcher = dispatcher(&store);

    let response = execute(&dispatcher, r#"mutation { userCreate(input: { bio: "nameless" }) { id } }"#).await;

    assert_eq!(error_codes(&response), vec!["OPERATION_ERROR"]);
    assert_eq!(response["errors"][0]["message"], "Operation failed");
    assert!(store.find_documents(Query::new(), USERS).await.unwrap().is_empty());
}

#[tokio::test]
async fn users_pages_in_insertion_order() {
    let store = InMemoryStore::new();
    for i in 0..10 {
        seed(&store, doc! { "name": format!("user-{i}") }).await;
    }
    let dispatcher = dispatcher(&store);

    let page = execute(&dispatcher, "{ users(skip: 2, limit: 3) { name } }").await;

    assert_eq!(
        page,
        json!({ "data": { "users": [{ "name": "user-2" }, { "name": "user-3" }, { "name": "user-4" }] } })
    );
}

#[tokio::test]
async fn zero_limit_returns_everything() {
    let store = InMemoryStore::new();
    for i in 0..10 {
        seed(&store, doc! { "name": format!("user-{i}") }).await;
    }
    let dispatcher = dispatcher(&store);

    let all = execute(&dispatcher, "{ users(limit: 0) { name } }").await;
    let unbounded = execute(&dispatcher, "{ users { name } }").await;
    let clamped = execute(&dispatcher, "{ users(skip: -4) { name } }").await;

    assert_eq!(all["data"]["users"].as_array().unwrap().len(), 10);
    assert_eq!(unbounded, all);
    assert_eq!(clamped, all);
}

#[tokio::test]
async fn users_never_expose_the_internal_identifier() {
    let store = InMemoryStore::new();
    let id = seed(&store, doc! { "name": "Ada", "nickname": "a" }).await;
    let dispatcher = dispatcher(&store);

    let response = execute(&dispatcher, "{ users { id name bio } }").await;

    assert_eq!(
        response,
        json!({ "data": { "users": [{ "id": id.to_hex(), "name": "Ada", "bio": null }] } })
    );
}

#[tokio::test]
async fn missing_user_reads_as_null() {
    let dispatcher = dispatcher(&InMemoryStore::new());
    let id = ObjectId::new().to_hex();

    let response = execute(&dispatcher, format!(r#"{{ user(id: "{id}") {{ id }} }}"#)).await;

    assert_eq!(response, json!({ "data": { "user": null } }));
}

#[tokio::test]
async fn invalid_identifier_is_reported_on_the_field() {
    let dispatcher = dispatcher(&InMemoryStore::new());

    let response = execute(&dispatcher, r#"{ user(id: "not-a-valid-id") { id name } }"#).await;

    assert_eq!(response["data"], json!({ "user": null }));
    assert_eq!(error_codes(&response), vec!["INVALID_IDENTIFIER"]);
    assert_eq!(response["errors"][0]["path"], json!(["user"]));
}

#[tokio::test]
async fn failed_field_does_not_block_siblings() {
    let store = InMemoryStore::new();
    seed(&store, doc! { "name": "Ada" }).await;
    let dispatcher = dispatcher(&store);

    let response = execute(
        &dispatcher,
        r#"{ broken: user(id: "65A1F0C2E4B0A1B2C3D4E5F6") { id } users { name } }"#,
    )
    .await;

    assert_eq!(response["data"], json!({ "broken": null, "users": [{ "name": "Ada" }] }));
    assert_eq!(error_codes(&response), vec!["INVALID_IDENTIFIER"]);
    assert_eq!(response["errors"][0]["path"], json!(["broken"]));
}

#[tokio::test]
async fn malformed_stored_user_only_fails_its_own_entry() {
    let store = InMemoryStore::new();
    seed(&store, doc! { "name": "Ada" }).await;
    seed(&store, doc! { "bio": "no name" }).await;
    let bob = seed(&store, doc! { "name": "Bob" }).await;
    let dispatcher = dispatcher(&store);

    let response = execute(
        &dispatcher,
        format!(r#"{{ users {{ name }} user(id: "{}") {{ name }} }}"#, bob.to_hex()),
    )
    .await;

    assert_eq!(
        response["data"],
        json!({ "users": [{ "name": "Ada" }, null, { "name": "Bob" }], "user": { "name": "Bob" } })
    );
    assert_eq!(error_codes(&response), vec!["OPERATION_ERROR"]);
    assert_eq!(response["errors"][0]["path"], json!(["users", 1]));
}

#[tokio::test]
async fn failed_mutation_does_not_stop_later_mutations() {
    let store = InMemoryStore::new();
    let dispatcher = dispatcher(&store);
    let missing = ObjectId::new().to_hex();

    let response = execute(
        &dispatcher,
        format!(
            r#"mutation {{
                a: userUpdate(id: "{missing}", input: {{ name: "B" }}) {{ id }}
                b: userCreate(input: {{ name: "C" }}) {{ name }}
            }}"#
        ),
    )
    .await;

    assert_eq!(response["data"], json!({ "a": null, "b": { "name": "C" } }));
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["path"], json!(["a"]));
    assert_eq!(store.find_documents(Query::new(), USERS).await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_create_keeps_earlier_and_later_results() {
    let store = InMemoryStore::new();
    let id = seed(&store, doc! { "name": "A" }).await.to_hex();
    let dispatcher = dispatcher(&store);

    let response = execute(
        &dispatcher,
        format!(
            r#"mutation {{
                renamed: userUpdate(id: "{id}", input: {{ name: "A2" }}) {{ name }}
                nameless: userCreate(input: {{ bio: "x" }}) {{ id }}
                removed: userDelete(id: "{id}")
            }}"#
        ),
    )
    .await;

    assert_eq!(
        response["data"],
        json!({ "renamed": { "name": "A2" }, "nameless": null, "removed": true })
    );
    assert_eq!(error_codes(&response), vec!["OPERATION_ERROR"]);
    assert_eq!(response["errors"][0]["path"], json!(["nameless"]));
    assert!(store.find_documents(Query::new(), USERS).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_listing_does_not_block_siblings() {
    let store = BrokenListingStore::default();
    let id = seed(&store.inner, doc! { "name": "Ada" }).await;
    let dispatcher = Dispatcher::new(build_schema(USERS), ConnectionProvider::new(store));

    let response = execute(
        &dispatcher,
        format!(r#"{{ users {{ name }} user(id: "{}") {{ name }} }}"#, id.to_hex()),
    )
    .await;

    assert_eq!(response["data"], json!({ "users": null, "user": { "name": "Ada" } }));
    assert_eq!(error_codes(&response), vec!["OPERATION_ERROR"]);
    assert_eq!(response["errors"][0]["message"], "Operation failed");
    assert_eq!(response["errors"][0]["path"], json!(["users"]));
}

#[tokio::test]
async fn update_merges_over_existing_fields() {
    let store = InMemoryStore::new();
    let id = seed(&store, doc! { "name": "A", "bio": "old", "joined": 2021 }).await;
    let dispatcher = dispatcher(&store);

    let response = execute(
        &dispatcher,
        format!(r#"mutation {{ userUpdate(id: "{}", input: {{ bio: "new" }}) {{ id name bio }} }}"#, id.to_hex()),
    )
    .await;

    assert_eq!(
        response,
        json!({ "data": { "userUpdate": { "id": id.to_hex(), "name": "A", "bio": "new" } } })
    );
    assert_eq!(
        store.find_document(id, USERS).await.unwrap(),
        Some(doc! { "_id": id, "name": "A", "bio": "new", "joined": 2021 })
    );
}

#[tokio::test]
async fn empty_update_returns_the_stored_user() {
    let store = InMemoryStore::new();
    let id = seed(&store, doc! { "name": "A", "bio": "old" }).await;
    let dispatcher = dispatcher(&store);

    let response = execute(
        &dispatcher,
        format!(r#"mutation {{ userUpdate(id: "{}", input: {{}}) {{ name bio }} }}"#, id.to_hex()),
    )
    .await;

    assert_eq!(response, json!({ "data": { "userUpdate": { "name": "A", "bio": "old" } } }));
}

#[tokio::test]
async fn update_of_missing_user_is_not_found() {
    let store = InMemoryStore::new();
    let dispatcher = dispatcher(&store);
    let id = ObjectId::new();

    let response = execute(
        &dispatcher,
        format!(r#"mutation {{ userUpdate(id: "{}", input: {{ name: "B" }}) {{ id }} }}"#, id.to_hex()),
    )
    .await;

    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response["errors"][0]["path"], json!(["userUpdate"]));
    assert_eq!(store.find_document(id, USERS).await.unwrap(), None);
}

#[tokio::test]
async fn update_with_invalid_identifier() {
    let dispatcher = dispatcher(&InMemoryStore::new());

    let response = execute(
        &dispatcher,
        r#"mutation { userUpdate(id: "123", input: { name: "B" }) { id } }"#,
    )
    .await;

    assert_eq!(error_codes(&response), vec!["INVALID_IDENTIFIER"]);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = InMemoryStore::new();
    let id = seed(&store, doc! { "name": "A" }).await.to_hex();
    let dispatcher = dispatcher(&store);
    let mutation = format!(r#"mutation {{ userDelete(id: "{id}") }}"#);

    let first = execute(&dispatcher, mutation.as_str()).await;
    let second = execute(&dispatcher, mutation.as_str()).await;

    assert_eq!(first, json!({ "data": { "userDelete": true } }));
    assert_eq!(second, json!({ "data": { "userDelete": true } }));
    assert!(store.find_documents(Query::new(), USERS).await.unwrap().is_empty());
}
