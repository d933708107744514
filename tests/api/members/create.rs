use crate::helpers::{
    add_campaign, add_foreign_member, get_json_response_body,
    get_random_email, TestApp,
};
use campaign_members::ErrorResponse;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_and_store_member_for_campaign_owner(
    app: &mut TestApp,
) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "campaign_id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "name": { "type": "string", "minLength": 1, "maxLength": 255 },
        "email": { "type": "string", "minLength": 1 }
      },
      "required": ["id", "campaign_id", "name", "email"]
    });

    for name in ["Ted", "Dougal"] {
        let email = get_random_email();
        let response = app
            .post_member(&json!({
                "name": name,
                "email": email,
                "campaign_id": campaign_id
            }))
            .await;

        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Failed to create member: {name}"
        );

        let body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&schema, &body),
            "response does not match schema: {body}"
        );
        assert_eq!(body["name"], name);
        assert_eq!(body["email"], email.as_str());
        assert_eq!(body["campaign_id"], campaign_id.as_str());

        let member_id = body["id"].as_str().unwrap();
        let stored = app
            .stored_member(member_id)
            .await
            .expect("Member should be stored");
        assert_eq!(stored.campaign_id.as_ref().to_string(), campaign_id);
        assert_eq!(stored.member_name.as_ref(), name);
        assert_eq!(stored.email.as_ref().expose_secret(), &email);
    }

    assert_eq!(app.stored_member_count(&campaign_id).await, 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_when_member_already_added(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;
    let attributes = json!({
        "name": "Mrs Doyle",
        "email": get_random_email(),
        "campaign_id": campaign_id
    });

    let first = app.post_member(&attributes).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post_member(&attributes).await;
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        second
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .message,
        "Member already added"
    );

    assert_eq!(app.stored_member_count(&campaign_id).await, 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_403_when_actor_does_not_own_campaign(
    app: &mut TestApp,
) {
    let (campaign_id, _member_id) = add_foreign_member(app).await;

    let response = app
        .post_member(&json!({
            "name": "Jack",
            "email": get_random_email(),
            "campaign_id": campaign_id
        }))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        app.stored_member_count(&campaign_id).await,
        1,
        "No member should have been added to the foreign campaign"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_campaign(app: &mut TestApp) {
    app.sign_in();

    let response = app
        .post_member(&json!({
            "name": "Jack",
            "email": get_random_email(),
            "campaign_id": uuid::Uuid::new_v4().to_string()
        }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;

    let test_cases = [
        (
            json!({
                "name": "",
                "email": get_random_email(),
                "campaign_id": campaign_id
            }),
            "Validation error: Member name cannot be empty",
        ),
        (
            json!({
                "name": "a".repeat(256),
                "email": get_random_email(),
                "campaign_id": campaign_id
            }),
            "Validation error: Max name length is 255 characters",
        ),
        (
            json!({
                "name": "Jack",
                "email": "jack.craggy.ie",
                "campaign_id": campaign_id
            }),
            "Validation error: Invalid email address",
        ),
        (
            json!({
                "name": "Jack",
                "email": get_random_email(),
                "campaign_id": "ge9915f0-a4c2-48fb-977b-9f4f959c5729"
            }),
            "Validation error: Invalid campaign ID: failed to parse a UUID",
        ),
    ];

    for (body, expected_error) in test_cases.iter() {
        let response = app.post_member(body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Should fail with HTTP400 for input: {body}"
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .message,
            expected_error.to_string()
        );
    }

    assert_eq!(app.stored_member_count(&campaign_id).await, 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;

    let test_cases = [
        json!({ "campaign_id": campaign_id, "email": get_random_email() }),
        json!({ "name": "Jack", "email": get_random_email() }),
        json!({ "name": "Jack", "campaign_id": campaign_id }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_member(test_case).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Failed for input: {test_case}"
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_not_authenticated(app: &mut TestApp) {
    let response = app
        .post_member(&json!({
            "name": "Jack",
            "email": get_random_email(),
            "campaign_id": "be9915f0-a4c2-48fb-977b-9f4f959c5729"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
