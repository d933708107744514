use crate::helpers::{
    add_campaign, add_foreign_member, add_member, get_random_email, TestApp,
};
use campaign_members::routes::campaigns::MemberListResponse;
use reqwest::StatusCode;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_only_members_of_requested_campaign(app: &mut TestApp) {
    app.sign_in();
    let craggy_id = add_campaign(app, "Craggy Island").await;
    let inis_mor_id = add_campaign(app, "Inis Mor").await;
    let ted_id =
        add_member(app, &craggy_id, "Ted", &get_random_email()).await;
    let dougal_id =
        add_member(app, &craggy_id, "Dougal", &get_random_email()).await;
    add_member(app, &inis_mor_id, "Jack", &get_random_email()).await;

    let response = app.get_campaign_members(&craggy_id).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<MemberListResponse>()
        .await
        .expect("Could not deserialise response body to MemberListResponse");
    assert_eq!(body.campaign_id.to_string(), craggy_id);

    let mut ids: Vec<String> =
        body.members.iter().map(|m| m.id.to_string()).collect();
    ids.sort_unstable();
    let mut expected = vec![ted_id, dougal_id];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_403_for_foreign_campaign(app: &mut TestApp) {
    let (campaign_id, _member_id) = add_foreign_member(app).await;

    let response = app.get_campaign_members(&campaign_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_campaign(app: &mut TestApp) {
    app.sign_in();

    let response = app
        .get_campaign_members(&uuid::Uuid::new_v4().to_string())
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
