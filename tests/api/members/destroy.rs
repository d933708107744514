use crate::helpers::{
    add_campaign, add_foreign_member, add_member, get_json_response_body,
    get_random_email, TestApp,
};
use reqwest::StatusCode;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_remove_member_for_campaign_owner(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;
    let member_id =
        add_member(app, &campaign_id, "Ted", &get_random_email()).await;

    let response = app.delete_member(&member_id).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.stored_member(&member_id).await.is_none());
    assert_eq!(app.stored_member_count(&campaign_id).await, 0);

    let response = app.get_campaign_members(&campaign_id).await;
    let body = get_json_response_body(response).await;
    assert_eq!(body["members"].as_array().unwrap().len(), 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_leave_other_members_untouched(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;
    let other_campaign_id = add_campaign(app, "Inis Mor").await;
    let ted_id =
        add_member(app, &campaign_id, "Ted", &get_random_email()).await;
    let dougal_id =
        add_member(app, &campaign_id, "Dougal", &get_random_email()).await;
    let jack_id =
        add_member(app, &other_campaign_id, "Jack", &get_random_email())
            .await;

    let response = app.delete_member(&ted_id).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.stored_member(&dougal_id).await.is_some());
    assert!(app.stored_member(&jack_id).await.is_some());
    assert_eq!(app.stored_member_count(&campaign_id).await, 1);
    assert_eq!(app.stored_member_count(&other_campaign_id).await, 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_403_when_actor_does_not_own_campaign(
    app: &mut TestApp,
) {
    app.sign_in();
    add_campaign(app, "Craggy Island").await;
    let (_campaign_id, member_id) = add_foreign_member(app).await;
    let before = app.stored_member(&member_id).await.unwrap();

    let response = app.delete_member(&member_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.stored_member(&member_id).await, Some(before));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_member(app: &mut TestApp) {
    app.sign_in();
    let campaign_id = add_campaign(app, "Craggy Island").await;
    let member_id =
        add_member(app, &campaign_id, "Ted", &get_random_email()).await;

    assert_eq!(
        app.delete_member(&member_id).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.delete_member(&member_id).await.status(),
        StatusCode::NOT_FOUND,
        "Member should already have been removed"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_not_authenticated(app: &mut TestApp) {
    let response = app
        .delete_member(&uuid::Uuid::new_v4().to_string())
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
